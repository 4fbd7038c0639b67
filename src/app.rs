//! Top-level session loop.
//!
//! The session is an explicit state machine over [`Stage`]: the main menu,
//! cycle configuration, a cycle attempt, and the post-cycle menu. The single
//! [`UserAccount`] lives here for the whole session and is lent to one
//! [`Organizer`] per attempt.

use crate::account::UserAccount;
use crate::config::Config;
use crate::cycle::Cycle;
use crate::decimal::Money;
use crate::error::Result;
use crate::input::Prompter;
use crate::organizer::Organizer;
use log::info;
use std::io::{BufRead, Write};

/// Parameters entered when a cycle is configured.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CycleSettings {
    /// Length of the cycle in days.
    pub duration: u32,

    /// Salary as entered, before leftover savings are folded in.
    pub salary: Money,
}

/// Where the session currently is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Stage {
    MainMenu,
    Configure,
    Attempt { settings: CycleSettings, cycle: Cycle },
    PostCycle { settings: CycleSettings, cycle: Cycle },
    Exit,
}

/// Options of the top-level menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MainChoice {
    StartCycle,
    Exit,
}

const MAIN_OPTIONS: [(&str, MainChoice); 2] =
    [("1", MainChoice::StartCycle), ("2", MainChoice::Exit)];

/// Options shown after a cycle's report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PostCycleChoice {
    Reconfigure,
    Restart,
    Exit,
}

const POST_CYCLE_OPTIONS: [(&str, PostCycleChoice); 3] = [
    ("1", PostCycleChoice::Reconfigure),
    ("2", PostCycleChoice::Restart),
    ("3", PostCycleChoice::Exit),
];

/// The budgeting session.
pub struct App {
    account: UserAccount,
    config: Config,
    attempts: usize,
}

impl App {
    pub fn new(config: Config) -> Self {
        App {
            account: UserAccount::new(),
            config,
            attempts: 0,
        }
    }

    pub fn account(&self) -> &UserAccount {
        &self.account
    }

    /// Number of cycle attempts run so far, restarts included.
    pub fn attempts(&self) -> usize {
        self.attempts
    }

    /// Runs the session until the user chooses to exit.
    pub fn run<R: BufRead, W: Write>(&mut self, prompter: &mut Prompter<R, W>) -> Result<()> {
        let mut stage = Stage::MainMenu;
        while stage != Stage::Exit {
            stage = self.step(stage, prompter)?;
        }
        info!("Session ended after {} cycle attempt(s)", self.attempts);
        Ok(())
    }

    /// Performs one stage and returns the next.
    pub fn step<R: BufRead, W: Write>(
        &mut self,
        stage: Stage,
        prompter: &mut Prompter<R, W>,
    ) -> Result<Stage> {
        match stage {
            Stage::MainMenu => {
                prompter.blank()?;
                prompter.say("===== MONEY WATCHER =====")?;
                prompter.say("1 - Start cycle")?;
                prompter.say("2 - Exit")?;
                match prompter.read_option("Option: ", &MAIN_OPTIONS)? {
                    MainChoice::StartCycle => Ok(Stage::Configure),
                    MainChoice::Exit => Ok(Stage::Exit),
                }
            }
            Stage::Configure => {
                let duration = prompter.read_day_count("Cycle length (days): ")?;
                let salary = prompter.read_decimal("Salary: $ ", Money::ZERO)?;
                let settings = CycleSettings { duration, salary };
                info!(
                    "Configured a {}-day cycle with salary {}",
                    settings.duration, settings.salary
                );
                Ok(Stage::Attempt {
                    settings,
                    cycle: Cycle::new(settings.duration),
                })
            }
            Stage::Attempt {
                settings,
                mut cycle,
            } => {
                self.account.clear_expenses();
                cycle.reset();
                self.account.set_salary(settings.salary);
                self.attempts += 1;
                info!(
                    "Starting attempt {} with salary {} (savings folded in)",
                    self.attempts,
                    self.account.salary()
                );

                Organizer::new(&mut self.account, &mut cycle, self.config.detail).run(prompter)?;
                Ok(Stage::PostCycle { settings, cycle })
            }
            Stage::PostCycle { settings, cycle } => {
                prompter.blank()?;
                prompter.say("1 - Change cycle settings (back to menu)")?;
                prompter.say("2 - Restart cycle (keep piggy bank, clear expenses)")?;
                prompter.say("3 - Exit")?;
                match prompter.read_option("Option: ", &POST_CYCLE_OPTIONS)? {
                    PostCycleChoice::Reconfigure => Ok(Stage::MainMenu),
                    PostCycleChoice::Restart => Ok(Stage::Attempt { settings, cycle }),
                    PostCycleChoice::Exit => Ok(Stage::Exit),
                }
            }
            Stage::Exit => Ok(Stage::Exit),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::ReportDetail;
    use std::io::Cursor;
    use std::str::FromStr;

    fn money(s: &str) -> Money {
        Money::from_str(s).unwrap()
    }

    fn prompter(script: &str) -> Prompter<Cursor<&[u8]>, Vec<u8>> {
        Prompter::new(Cursor::new(script.as_bytes()), Vec::new())
    }

    fn settings(duration: u32, salary: &str) -> CycleSettings {
        CycleSettings {
            duration,
            salary: money(salary),
        }
    }

    #[test]
    fn test_main_menu_transitions() {
        let mut app = App::new(Config::default());

        let mut p = prompter("1\n");
        assert_eq!(app.step(Stage::MainMenu, &mut p).unwrap(), Stage::Configure);

        let mut p = prompter("3\n2\n");
        assert_eq!(app.step(Stage::MainMenu, &mut p).unwrap(), Stage::Exit);
    }

    #[test]
    fn test_configure_reads_duration_and_salary() {
        let mut app = App::new(Config::default());
        let mut p = prompter("0\n5\n-1\n1200.50\n");

        let next = app.step(Stage::Configure, &mut p).unwrap();
        assert_eq!(
            next,
            Stage::Attempt {
                settings: settings(5, "1200.50"),
                cycle: Cycle::new(5),
            }
        );
    }

    #[test]
    fn test_attempt_resets_cycle_and_clears_expenses() {
        let mut app = App::new(Config::default());
        let mut finished = Cycle::new(1);
        finished.advance_day();

        // Day 1: add 10 Food essential, end day.
        let mut p = prompter("1\n1\ne\n10\n3\n");
        let next = app
            .step(
                Stage::Attempt {
                    settings: settings(1, "100"),
                    cycle: finished,
                },
                &mut p,
            )
            .unwrap();

        assert!(matches!(next, Stage::PostCycle { .. }));
        assert_eq!(app.account().expenses().len(), 1);
        assert_eq!(app.account().leftover_savings().to_string(), "90.00");
        assert_eq!(app.attempts(), 1);
    }

    #[test]
    fn test_post_cycle_menu_transitions() {
        let mut app = App::new(Config::default());
        let post = Stage::PostCycle {
            settings: settings(2, "10"),
            cycle: Cycle::new(2),
        };

        let mut p = prompter("1\n");
        assert_eq!(app.step(post.clone(), &mut p).unwrap(), Stage::MainMenu);

        let mut p = prompter("2\n");
        assert!(matches!(
            app.step(post.clone(), &mut p).unwrap(),
            Stage::Attempt { .. }
        ));

        let mut p = prompter("3\n");
        assert_eq!(app.step(post, &mut p).unwrap(), Stage::Exit);
    }

    #[test]
    fn test_restart_folds_savings_into_salary() {
        let mut app = App::new(Config {
            detail: ReportDetail::Detailed,
            show_help: false,
        });

        // Start, 1 day, salary 100; spend 40; restart; spend nothing; exit.
        let script = "1\n1\n100\n1\n2\ne\n40\n3\n2\n3\n3\n";
        let mut p = prompter(script);
        app.run(&mut p).unwrap();

        assert_eq!(app.attempts(), 2);
        assert!(app.account().expenses().is_empty());
        // Second attempt: salary 100 + 60 saved, no expenses, nothing saved back.
        assert_eq!(app.account().salary().to_string(), "160.00");
        assert!(app.account().leftover_savings().is_zero());
    }

    #[test]
    fn test_huge_salary_is_reprompted() {
        let mut app = App::new(Config::default());
        let mut p = prompter("3\n79228162514264337593543950335\n1000000000000\n");

        let next = app.step(Stage::Configure, &mut p).unwrap();
        assert_eq!(
            next,
            Stage::Attempt {
                settings: settings(3, "1000000000000"),
                cycle: Cycle::new(3),
            }
        );
    }

    #[test]
    fn test_post_cycle_menu_rejects_unlisted_option() {
        let mut app = App::new(Config::default());
        let post = Stage::PostCycle {
            settings: settings(1, "10"),
            cycle: Cycle::new(1),
        };

        let mut p = prompter("4\n0\n1\n");
        assert_eq!(app.step(post, &mut p).unwrap(), Stage::MainMenu);

        let out = String::from_utf8(p.into_output()).unwrap();
        assert_eq!(out.matches("Invalid option.").count(), 2);
    }
}
