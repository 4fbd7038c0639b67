//! Console prompting with re-prompting validators.
//!
//! Every value that reaches the budget model passes through one of the
//! `read_*` methods, which keep asking until the line is acceptable. Only a
//! closed input or an I/O failure escapes as an error.

use crate::decimal::Money;
use crate::error::{BudgetError, InputError, Result};
use crate::expense::Category;
use log::debug;
use std::io::{BufRead, Write};
use std::ops::RangeInclusive;
use std::str::FromStr;

const INTEGER_DIAGNOSTIC: &str = "ERROR: enter a valid integer.";
const DECIMAL_DIAGNOSTIC: &str = "ERROR: enter a valid number.";
const CHOICE_DIAGNOSTIC: &str = "Invalid option.";

/// Parses an integer no smaller than `minimum`.
pub fn parse_integer(raw: &str, minimum: i64) -> std::result::Result<i64, InputError> {
    parse_integer_in(raw, minimum..=i64::MAX)
}

/// Parses an integer inside `range`.
pub fn parse_integer_in(
    raw: &str,
    range: RangeInclusive<i64>,
) -> std::result::Result<i64, InputError> {
    let trimmed = raw.trim();
    let value = i64::from_str(trimmed).map_err(|_| InputError::NotAnInteger(trimmed.to_string()))?;

    if value < *range.start() {
        return Err(InputError::BelowMinimum {
            value: value.to_string(),
            minimum: range.start().to_string(),
        });
    }
    if value > *range.end() {
        return Err(InputError::AboveMaximum {
            value: value.to_string(),
            maximum: range.end().to_string(),
        });
    }
    Ok(value)
}

/// Parses a cycle length in days: at least 1, at most `u32::MAX`.
pub fn parse_day_count(raw: &str) -> std::result::Result<u32, InputError> {
    let value = parse_integer(raw, 1)?;
    u32::try_from(value).map_err(|_| InputError::AboveMaximum {
        value: value.to_string(),
        maximum: u32::MAX.to_string(),
    })
}

/// Parses a 1-based category menu number.
pub fn parse_category(raw: &str) -> std::result::Result<Category, InputError> {
    let number = parse_integer(raw, 1)?;
    Category::from_menu_number(number).ok_or_else(|| InputError::AboveMaximum {
        value: number.to_string(),
        maximum: Category::ALL.len().to_string(),
    })
}

/// Parses a monetary amount between `minimum` and [`Money::MAX`].
///
/// The amount is normalized to two decimal places before the check, so
/// `"0.001"` is rejected against a minimum of `0.01`.
pub fn parse_decimal(raw: &str, minimum: Money) -> std::result::Result<Money, InputError> {
    let trimmed = raw.trim();
    let value = Money::from_str(trimmed).map_err(|_| InputError::NotANumber(trimmed.to_string()))?;

    if value < minimum {
        return Err(InputError::BelowMinimum {
            value: value.to_string(),
            minimum: minimum.to_string(),
        });
    }
    if value > Money::MAX {
        return Err(InputError::AboveMaximum {
            value: value.to_string(),
            maximum: Money::MAX.to_string(),
        });
    }
    Ok(value)
}

/// Matches `raw` exactly against the keys of `options` and returns the
/// paired value.
pub fn parse_option<T: Copy>(
    raw: &str,
    options: &[(&str, T)],
) -> std::result::Result<T, InputError> {
    options
        .iter()
        .find(|(key, _)| *key == raw)
        .map(|&(_, value)| value)
        .ok_or_else(|| InputError::NotAnOption(raw.to_string()))
}

/// Matches `raw` exactly against the allowed options.
pub fn parse_choice<'a>(
    raw: &str,
    allowed: &[&'a str],
) -> std::result::Result<&'a str, InputError> {
    let options: Vec<(&str, &'a str)> = allowed.iter().map(|&a| (a, a)).collect();
    parse_option(raw, &options)
}

/// Reads validated values from `input` and writes prompts and messages to
/// `output`.
///
/// Generic over the streams so that a session can be driven by a scripted
/// `Cursor` in tests and by the locked stdin/stdout in the binary.
pub struct Prompter<R, W> {
    input: R,
    output: W,
    line: String,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Prompter {
            input,
            output,
            line: String::new(),
        }
    }

    /// Writes one line of text.
    pub fn say(&mut self, text: impl AsRef<str>) -> Result<()> {
        writeln!(self.output, "{}", text.as_ref())?;
        Ok(())
    }

    /// Writes an empty line.
    pub fn blank(&mut self) -> Result<()> {
        writeln!(self.output)?;
        Ok(())
    }

    /// Direct access to the output stream, for multi-line renderers.
    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    /// Consumes the prompter, returning the output stream.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Re-prompts until the line is an integer `>= minimum`.
    pub fn read_integer(&mut self, prompt: &str, minimum: i64) -> Result<i64> {
        self.read_validated(prompt, INTEGER_DIAGNOSTIC, |raw| parse_integer(raw, minimum))
    }

    /// Re-prompts until the line is a valid cycle length.
    pub fn read_day_count(&mut self, prompt: &str) -> Result<u32> {
        self.read_validated(prompt, INTEGER_DIAGNOSTIC, parse_day_count)
    }

    /// Re-prompts until the line is a category menu number.
    pub fn read_category(&mut self, prompt: &str) -> Result<Category> {
        self.read_validated(prompt, INTEGER_DIAGNOSTIC, parse_category)
    }

    /// Re-prompts until the line is an amount `>= minimum`.
    pub fn read_decimal(&mut self, prompt: &str, minimum: Money) -> Result<Money> {
        self.read_validated(prompt, DECIMAL_DIAGNOSTIC, |raw| parse_decimal(raw, minimum))
    }

    /// Re-prompts until the line exactly matches one of `allowed`.
    pub fn read_choice<'a>(&mut self, prompt: &str, allowed: &[&'a str]) -> Result<&'a str> {
        self.read_validated(prompt, CHOICE_DIAGNOSTIC, |raw| parse_choice(raw, allowed))
    }

    /// Re-prompts until the line matches a key of `options`, returning its
    /// value.
    pub fn read_option<T: Copy>(&mut self, prompt: &str, options: &[(&str, T)]) -> Result<T> {
        self.read_validated(prompt, CHOICE_DIAGNOSTIC, |raw| parse_option(raw, options))
    }

    fn read_validated<T, F>(&mut self, prompt: &str, diagnostic: &str, mut parse: F) -> Result<T>
    where
        F: FnMut(&str) -> std::result::Result<T, InputError>,
    {
        loop {
            let raw = self.read_line(prompt)?;
            match parse(&raw) {
                Ok(value) => return Ok(value),
                Err(e) => {
                    debug!("Rejected input for '{}': {}", prompt.trim_end(), e);
                    self.say(diagnostic)?;
                }
            }
        }
    }

    /// Writes the prompt and reads one line without its terminator.
    fn read_line(&mut self, prompt: &str) -> Result<String> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        self.line.clear();
        if self.input.read_line(&mut self.line)? == 0 {
            return Err(BudgetError::InputClosed {
                prompt: prompt.trim_end().to_string(),
            });
        }

        let content = self.line.trim_end_matches(['\n', '\r']);
        Ok(content.to_string())
    }
}
