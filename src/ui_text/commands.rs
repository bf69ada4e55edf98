//! Line commands accepted by the text front end.

use chrono::NaiveDate;
use std::str::FromStr;
use thiserror::Error;

use crate::models::event::EventId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Next,
    Previous,
    Today,
    GoTo(NaiveDate),
    /// Open a draft for a new event on the date
    Add(NaiveDate),
    /// Set the draft's title
    Title(String),
    Save,
    Cancel,
    Edit(EventId),
    Rename(String),
    Delete(EventId),
    List(NaiveDate),
    Json,
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandParseError {
    #[error("Empty command")]
    Empty,
    #[error("Unknown command '{0}'")]
    Unknown(String),
    #[error("'{0}' needs an argument")]
    MissingArgument(&'static str),
    #[error("Invalid date '{0}' (expected YYYY-MM-DD)")]
    InvalidDate(String),
    #[error("Invalid event id '{0}'")]
    InvalidId(String),
}

pub const HELP: &str = "\
Commands:
  next | prev | today       move between months
  goto YYYY-MM-DD           show the month containing a date
  add YYYY-MM-DD            start a new event (today or later)
  title <text>              set the new event's title
  save | cancel             create or discard the new event
  edit <id>                 start renaming an event
  rename <text>             finish renaming
  delete <id>               remove an event
  list YYYY-MM-DD           events on one day
  json                      dump the visible month as JSON
  help | quit";

impl FromStr for Command {
    type Err = CommandParseError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        if line.is_empty() {
            return Err(CommandParseError::Empty);
        }

        let (name, rest) = match line.split_once(char::is_whitespace) {
            Some((name, rest)) => (name, rest.trim()),
            None => (line, ""),
        };

        match name.to_ascii_lowercase().as_str() {
            "next" | "n" => Ok(Self::Next),
            "prev" | "p" => Ok(Self::Previous),
            "today" | "t" => Ok(Self::Today),
            "goto" => parse_date("goto", rest).map(Self::GoTo),
            "add" => parse_date("add", rest).map(Self::Add),
            "title" => Ok(Self::Title(rest.to_string())),
            "save" => Ok(Self::Save),
            "cancel" => Ok(Self::Cancel),
            "edit" => parse_id("edit", rest).map(Self::Edit),
            "rename" => Ok(Self::Rename(rest.to_string())),
            "delete" | "rm" => parse_id("delete", rest).map(Self::Delete),
            "list" => parse_date("list", rest).map(Self::List),
            "json" => Ok(Self::Json),
            "help" | "?" => Ok(Self::Help),
            "quit" | "exit" | "q" => Ok(Self::Quit),
            other => Err(CommandParseError::Unknown(other.to_string())),
        }
    }
}

fn parse_date(command: &'static str, arg: &str) -> Result<NaiveDate, CommandParseError> {
    if arg.is_empty() {
        return Err(CommandParseError::MissingArgument(command));
    }
    NaiveDate::parse_from_str(arg, "%Y-%m-%d")
        .map_err(|_| CommandParseError::InvalidDate(arg.to_string()))
}

fn parse_id(command: &'static str, arg: &str) -> Result<EventId, CommandParseError> {
    if arg.is_empty() {
        return Err(CommandParseError::MissingArgument(command));
    }
    arg.trim_start_matches('#')
        .parse()
        .map_err(|_| CommandParseError::InvalidId(arg.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test_case("next", Command::Next ; "next")]
    #[test_case("  PREV ", Command::Previous ; "prev uppercase with padding")]
    #[test_case("t", Command::Today ; "today shorthand")]
    #[test_case("goto 2024-03-15", Command::GoTo(date(2024, 3, 15)) ; "goto")]
    #[test_case("add 2024-03-20", Command::Add(date(2024, 3, 20)) ; "add")]
    #[test_case("title   Team  sync ", Command::Title("Team  sync".to_string()) ; "title keeps inner spacing")]
    #[test_case("title", Command::Title(String::new()) ; "title without text")]
    #[test_case("edit #3", Command::Edit(3) ; "edit with hash")]
    #[test_case("rm 12", Command::Delete(12) ; "delete shorthand")]
    #[test_case("list 2024-02-29", Command::List(date(2024, 2, 29)) ; "list leap day")]
    #[test_case("quit", Command::Quit ; "quit")]
    fn test_parse(input: &str, expected: Command) {
        assert_eq!(input.parse::<Command>(), Ok(expected));
    }

    #[test_case("", CommandParseError::Empty ; "empty line")]
    #[test_case("fly", CommandParseError::Unknown("fly".to_string()) ; "unknown command")]
    #[test_case("add", CommandParseError::MissingArgument("add") ; "add without date")]
    #[test_case("goto 2023-02-29", CommandParseError::InvalidDate("2023-02-29".to_string()) ; "nonexistent date")]
    #[test_case("delete abc", CommandParseError::InvalidId("abc".to_string()) ; "non numeric id")]
    fn test_parse_errors(input: &str, expected: CommandParseError) {
        assert_eq!(input.parse::<Command>(), Err(expected));
    }
}
