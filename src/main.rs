//! Money Watcher CLI
//!
//! Interactive budgeting session on the terminal.
//!
//! # Usage
//!
//! ```bash
//! cargo run -- --detailed
//! ```
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: Set to `debug` or `info` to log session events to stderr

use money_watcher::{App, Config, Prompter, Result, USAGE};
use std::env;
use std::io;
use std::process;

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let config = Config::from_args(env::args().skip(1))?;
    if config.show_help {
        println!("{}", USAGE);
        return Ok(());
    }

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut prompter = Prompter::new(stdin.lock(), stdout.lock());

    let mut app = App::new(config);
    app.run(&mut prompter)?;

    Ok(())
}
