//! # Money Watcher
//!
//! An interactive budgeting session: the user sets a cycle length and a
//! salary, records daily expenses by category and essentiality, and gets an
//! end-of-cycle report. Any positive balance left at the end goes into a
//! "piggy bank" that is added to the next cycle's salary.
//!
//! ## Design Principles
//!
//! - **Fixed-point arithmetic**: Uses 2 decimal places via `rust_decimal`
//! - **Validated input**: Nothing reaches the model without passing a validator
//! - **Strict invariants**: `balance == salary - total_expenses` always holds
//! - **Injectable console**: The session runs over any `BufRead`/`Write` pair
//!
//! ## Example
//!
//! ```
//! use money_watcher::{App, Config, Prompter};
//! use std::io::Cursor;
//!
//! // Start a 1-day cycle with salary 100, end the day, then exit.
//! let script = "1\n1\n100\n3\n3\n";
//! let mut prompter = Prompter::new(Cursor::new(script), Vec::new());
//! let mut app = App::new(Config::default());
//! app.run(&mut prompter).unwrap();
//!
//! let output = String::from_utf8(prompter.into_output()).unwrap();
//! assert!(output.contains("No expenses recorded."));
//! ```

pub mod account;
pub mod app;
pub mod config;
pub mod cycle;
pub mod decimal;
pub mod error;
pub mod expense;
pub mod input;
pub mod organizer;
pub mod report;

pub use account::UserAccount;
pub use app::{App, CycleSettings, Stage};
pub use config::{Config, USAGE};
pub use cycle::Cycle;
pub use decimal::{Money, Percent};
pub use error::{BudgetError, InputError, Result};
pub use expense::{Category, Essentiality, Expense};
pub use input::Prompter;
pub use organizer::Organizer;
pub use report::{CategoryBreakdown, CycleReport, ReportDetail};
