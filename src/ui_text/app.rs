//! Command loop for the text front end.

use anyhow::{Context, Result};
use std::io::{BufRead, Write};

use super::commands::{Command, HELP};
use super::month_view::MonthView;
use super::snapshot::MonthSnapshot;
use crate::services::clock::Clock;
use crate::services::session::CalendarSession;

/// What the loop should do after a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Print the text and keep reading
    Continue(String),
    Quit,
}

pub struct TextApp<C: Clock> {
    session: CalendarSession<C>,
    show_week_numbers: bool,
}

impl<C: Clock> TextApp<C> {
    pub fn new(session: CalendarSession<C>, show_week_numbers: bool) -> Self {
        Self {
            session,
            show_week_numbers,
        }
    }

    pub fn session(&self) -> &CalendarSession<C> {
        &self.session
    }

    fn render(&self) -> String {
        MonthView::render(&self.session, self.show_week_numbers)
    }

    /// Apply one command and produce the text to show for it.
    pub fn handle(&mut self, command: Command) -> Outcome {
        log::debug!("Handling {:?}", command);
        let session = &mut self.session;

        let message = match command {
            Command::Quit => return Outcome::Quit,
            Command::Help => return Outcome::Continue(HELP.to_string()),
            Command::Next => {
                session.next_month();
                None
            }
            Command::Previous => {
                session.previous_month();
                None
            }
            Command::Today => {
                session.jump_to_today();
                None
            }
            Command::GoTo(date) => {
                session.go_to(date);
                None
            }
            Command::Add(date) => match session.begin_new_event(date) {
                Ok(()) => {
                    session.go_to(date);
                    Some(format!("New event on {}; set a title with 'title <text>'", date))
                }
                Err(err) => Some(format!("Error: {}", err)),
            },
            Command::Title(title) => match session.set_draft_title(title) {
                Ok(()) => None,
                Err(err) => Some(format!("Error: {}", err)),
            },
            Command::Save => match session.commit_draft() {
                Ok(event) => Some(format!("Added #{} \"{}\" on {}", event.id, event.title, event.date)),
                Err(err) => Some(format!("Error: {}", err)),
            },
            Command::Cancel => {
                session.cancel_draft();
                session.cancel_edit();
                None
            }
            Command::Edit(id) => match session.begin_edit(id) {
                Ok(()) => Some(format!("Editing #{}; finish with 'rename <text>'", id)),
                Err(err) => Some(format!("Error: {}", err)),
            },
            Command::Rename(title) => match session.commit_edit(&title) {
                Ok(true) => None,
                Ok(false) => Some("Title unchanged".to_string()),
                Err(err) => Some(format!("Error: {}", err)),
            },
            Command::Delete(id) => match session.delete_event(id) {
                Some(event) => Some(format!("Deleted #{} \"{}\"", event.id, event.title)),
                None => Some(format!("No event #{}", id)),
            },
            Command::List(date) => {
                return Outcome::Continue(MonthView::render_day(session, date));
            }
            Command::Json => {
                let text = MonthSnapshot::capture(session)
                    .to_json()
                    .unwrap_or_else(|err| format!("Error: {}", err));
                return Outcome::Continue(text);
            }
        };

        let mut text = self.render();
        if let Some(message) = message {
            text.push_str(&message);
            text.push('\n');
        }
        Outcome::Continue(text)
    }

    /// Read commands line by line until `quit` or end of input.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut output: W) -> Result<()> {
        writeln!(output, "{}", self.render()).context("Failed to write output")?;
        write!(output, "> ")?;
        output.flush()?;

        for line in input.lines() {
            let line = line.context("Failed to read input")?;
            if line.trim().is_empty() {
                write!(output, "> ")?;
                output.flush()?;
                continue;
            }

            let text = match line.parse::<Command>() {
                Ok(command) => match self.handle(command) {
                    Outcome::Continue(text) => text,
                    Outcome::Quit => break,
                },
                Err(err) => format!("{} (type 'help' for commands)", err),
            };

            writeln!(output, "{}", text.trim_end()).context("Failed to write output")?;
            write!(output, "> ")?;
            output.flush()?;
        }

        log::info!("Session ended with {} events", self.session.store().len());
        Ok(())
    }
}
