use std::io::{BufRead, Write};

use crate::formats::{BookPlan, Destination};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum InvalidInputPolicy {
    /// Stop with an error naming the field.
    #[default]
    Fail,
    /// Print a diagnostic and ask again.
    Reprompt,
}

#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("invalid input for {field}: {input:?} is not a non-negative integer")]
    InvalidNumber { field: String, input: String },

    #[error("input ended before {field} was entered")]
    UnexpectedEof { field: String },

    #[error("read {field}")]
    Io {
        field: String,
        #[source]
        source: std::io::Error,
    },
}

pub struct Prompter<R, W> {
    input: R,
    output: W,
    policy: InvalidInputPolicy,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W, policy: InvalidInputPolicy) -> Self {
        Self {
            input,
            output,
            policy,
        }
    }

    pub fn read_book_plan(&mut self) -> Result<BookPlan, InputError> {
        let title = self.ask_text("book title", "Enter book title: ")?;
        let chapters = self.ask_count("chapter count", "Enter chapter count: ")?;

        let mut section_counts = Vec::new();
        for chapter in 1..=chapters {
            let count = self.ask_count(
                &format!("section count for chapter {chapter}"),
                &format!("Enter chapter {chapter}'s section count: "),
            )?;
            section_counts.push(count);
        }

        tracing::debug!(%title, chapters, ?section_counts, "collected book plan");
        Ok(BookPlan::new(title, section_counts))
    }

    pub fn read_destination(&mut self) -> Result<Destination, InputError> {
        let project_id = self.ask_text("project id", "Enter Todoist project id: ")?;
        let section_id = self.ask_text("section id", "Enter Todoist section id: ")?;
        Ok(Destination {
            project_id,
            section_id,
        })
    }

    fn ask_text(&mut self, field: &str, prompt: &str) -> Result<String, InputError> {
        self.write_prompt(field, prompt)?;
        self.read_line(field)
    }

    fn ask_count(&mut self, field: &str, prompt: &str) -> Result<u32, InputError> {
        loop {
            let line = self.ask_text(field, prompt)?;
            match line.trim().parse::<u32>() {
                Ok(count) => return Ok(count),
                Err(_) if self.policy == InvalidInputPolicy::Reprompt => {
                    tracing::debug!(field, input = %line, "invalid count; asking again");
                    writeln!(
                        self.output,
                        "{field} must be a non-negative integer (got {line:?})"
                    )
                    .map_err(|source| io_error(field, source))?;
                }
                Err(_) => {
                    return Err(InputError::InvalidNumber {
                        field: field.to_owned(),
                        input: line,
                    });
                }
            }
        }
    }

    fn write_prompt(&mut self, field: &str, prompt: &str) -> Result<(), InputError> {
        self.output
            .write_all(prompt.as_bytes())
            .and_then(|()| self.output.flush())
            .map_err(|source| io_error(field, source))
    }

    fn read_line(&mut self, field: &str) -> Result<String, InputError> {
        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .map_err(|source| io_error(field, source))?;
        if read == 0 {
            return Err(InputError::UnexpectedEof {
                field: field.to_owned(),
            });
        }
        let trimmed = line.trim_end_matches(['\n', '\r']);
        Ok(trimmed.to_owned())
    }
}

fn io_error(field: &str, source: std::io::Error) -> InputError {
    InputError::Io {
        field: field.to_owned(),
        source,
    }
}
