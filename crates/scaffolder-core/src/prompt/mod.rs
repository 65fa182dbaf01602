//! Numbered-menu prompts read from a line-oriented input stream
//!
//! A menu is printed as its title followed by `N. label` lines. The user
//! answers with the option number; anything else prints an error and the
//! same menu is shown again until a valid number arrives.

pub mod choices;

use crate::error::{Result, ScaffoldError};
use std::io::{BufRead, Write};

pub use choices::{BackendFramework, FrontendFramework, ProjectType};

/// Message printed for input that does not name a listed option
pub const INVALID_OPTION: &str = "Invalid option. Please select a valid number.";

/// A value selectable from a numbered menu
pub trait Choice: Copy + 'static {
    /// Menu title
    const PROMPT: &'static str;

    /// Options in display order
    fn options() -> &'static [Self];

    /// Label shown next to the option number
    fn label(&self) -> &'static str;
}

/// Reads menu selections from `input`, writing menus to `output`
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Show the menu for `T` until a valid option number is entered
    pub fn choose<T: Choice>(&mut self) -> Result<T> {
        let options = T::options();
        let labels: Vec<&str> = options.iter().map(|o| o.label()).collect();
        let index = self.select_index(T::PROMPT, &labels)?;
        Ok(options[index])
    }

    /// Show `title` and `labels` until a valid 1-based number is entered;
    /// returns the 0-based index
    pub fn select_index(&mut self, title: &str, labels: &[&str]) -> Result<usize> {
        loop {
            self.render(title, labels)?;

            let Some(answer) = self.next_answer()? else {
                return Err(ScaffoldError::InputClosed);
            };

            match parse_selection(&answer, labels.len()) {
                Some(index) => return Ok(index),
                None => {
                    writeln!(self.output, "{}", INVALID_OPTION)?;
                }
            }
        }
    }

    fn render(&mut self, title: &str, labels: &[&str]) -> Result<()> {
        writeln!(self.output, "{}", title)?;
        for (i, label) in labels.iter().enumerate() {
            writeln!(self.output, "{}. {}", i + 1, label)?;
        }
        self.output.flush()?;
        Ok(())
    }

    /// Next non-blank line, or `None` at end of input
    fn next_answer(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        loop {
            line.clear();
            if self.input.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            let trimmed = line.trim();
            if !trimmed.is_empty() {
                return Ok(Some(trimmed.to_string()));
            }
        }
    }

    /// Give back the underlying streams
    pub fn into_inner(self) -> (R, W) {
        (self.input, self.output)
    }
}

/// Map a typed answer to a 0-based option index
fn parse_selection(answer: &str, option_count: usize) -> Option<usize> {
    let number: i64 = answer.parse().ok()?;
    if number >= 1 && (number as u64) <= option_count as u64 {
        Some(number as usize - 1)
    } else {
        None
    }
}
