//! Per-day control loop for one cycle attempt.
//!
//! The organizer borrows the session's account and the current cycle, runs
//! the day menu until the cycle is finished, prints the final report and
//! settles any positive balance into leftover savings.

use crate::account::UserAccount;
use crate::cycle::Cycle;
use crate::decimal::Money;
use crate::error::Result;
use crate::expense::{Category, Essentiality, Expense};
use crate::input::Prompter;
use crate::report::{CycleReport, ReportDetail};
use log::{debug, info, warn};
use std::io::{BufRead, Write};

/// Options of the day menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayAction {
    AddExpense,
    ViewBalance,
    EndDay,
}

impl DayAction {
    /// Menu keys paired with their action.
    pub const OPTIONS: [(&'static str, DayAction); 3] = [
        ("1", DayAction::AddExpense),
        ("2", DayAction::ViewBalance),
        ("3", DayAction::EndDay),
    ];
}

const ESSENTIALITY_OPTIONS: [(&str, Essentiality); 2] = [
    ("e", Essentiality::Essential),
    ("n", Essentiality::NonEssential),
];

/// Coordinates the user account and the cycle for a single attempt.
pub struct Organizer<'a> {
    account: &'a mut UserAccount,
    cycle: &'a mut Cycle,
    detail: ReportDetail,
}

impl<'a> Organizer<'a> {
    pub fn new(account: &'a mut UserAccount, cycle: &'a mut Cycle, detail: ReportDetail) -> Self {
        Organizer {
            account,
            cycle,
            detail,
        }
    }

    /// Runs the day menu until the cycle is finished, then reports.
    ///
    /// Returns the computed report after the savings have been settled.
    pub fn run<R: BufRead, W: Write>(
        &mut self,
        prompter: &mut Prompter<R, W>,
    ) -> Result<CycleReport> {
        while !self.cycle.is_finished() {
            prompter.blank()?;
            prompter.say(format!("Day {}", self.cycle.current_day()))?;
            prompter.say("1 - Add expense")?;
            prompter.say("2 - View balance")?;
            prompter.say("3 - End day")?;

            match prompter.read_option("Option: ", &DayAction::OPTIONS)? {
                DayAction::AddExpense => self.add_expense(prompter)?,
                DayAction::ViewBalance => {
                    prompter.say(format!("Current balance: $ {}", self.account.balance()))?;
                }
                DayAction::EndDay => {
                    self.cycle.advance_day();
                    debug!("Advanced to day {}", self.cycle.current_day());
                }
            }
        }

        self.final_report(prompter)
    }

    /// Asks for category, essentiality and amount, then records the expense
    /// on the current day.
    fn add_expense<R: BufRead, W: Write>(&mut self, prompter: &mut Prompter<R, W>) -> Result<()> {
        prompter.blank()?;
        prompter.say("Category:")?;
        for (number, category) in Category::ALL.iter().enumerate() {
            prompter.say(format!("{} - {}", number + 1, category))?;
        }

        let category = prompter.read_category("Choose: ")?;
        let essentiality =
            prompter.read_option("Essential (e) or non-essential (n): ", &ESSENTIALITY_OPTIONS)?;

        let amount = prompter.read_decimal("Expense amount: $ ", Money::from_cents(1))?;

        let balance = self.account.balance();
        if amount > balance {
            let shortfall = amount - balance;
            warn!(
                "Expense of {} exceeds balance {}, debt {}",
                amount, balance, shortfall
            );
            prompter.say(format!("WARNING: this expense creates a debt of $ {}", shortfall))?;
        }

        let day = self.cycle.current_day();
        let expense = match essentiality {
            Essentiality::Essential => Expense::essential(amount, day, category),
            Essentiality::NonEssential => Expense::non_essential(amount, day, category),
        };
        info!(
            "Day {}: recorded {} expense of {} in {}",
            expense.day(),
            essentiality.label(),
            amount,
            category
        );
        self.account.add_expense(expense);
        Ok(())
    }

    /// Prints the report and moves a positive balance into savings.
    fn final_report<R: BufRead, W: Write>(
        &mut self,
        prompter: &mut Prompter<R, W>,
    ) -> Result<CycleReport> {
        let report = CycleReport::from_account(&*self.account);
        report.render(prompter.output(), self.detail)?;

        if report.is_empty() {
            debug!("Cycle ended without expenses, savings untouched");
            return Ok(report);
        }

        if report.final_balance.is_positive() {
            let savings = self.account.save_leftover(report.final_balance);
            info!("Saved {} to leftover savings, now {}", report.final_balance, savings);
            prompter.say(format!("Saved to piggy bank: $ {}", savings))?;
        } else {
            debug!(
                "Final balance {} is not positive, savings untouched",
                report.final_balance
            );
        }

        Ok(report)
    }
}
