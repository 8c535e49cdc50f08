//! Front-end message types for Chaos Kit.
//!
//! Every line typed into the terminal front-end becomes a [`Message`].

use std::str::FromStr;

use thiserror::Error;

use crate::dice::DieType;
use crate::model::ItemId;

/// Messages that can be sent to update application state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    // Chaos Wheel
    /// Add a wheel option from raw text
    AddOption(String),
    /// Delete a wheel option by id
    RemoveOption(ItemId),
    /// Print the wheel options
    ListOptions,
    /// Spin the wheel
    Spin,

    // Dice
    /// Select a die
    SelectDie(DieType),
    /// Roll the selected die
    Roll,

    // Magic ball
    /// Shake the ball for an answer
    Ask,

    /// Print the command summary
    Help,
    /// Leave the application
    Quit,
}

/// Errors from parsing a command line.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("Unknown command '{0}' (try 'help')")]
    UnknownCommand(String),

    #[error("'{command}' needs {expected}")]
    MissingArgument {
        command: &'static str,
        expected: &'static str,
    },

    #[error("'{0}' is not a valid option id")]
    InvalidId(String),

    #[error("No d{0} available, pick 4, 6, 8 or 10")]
    UnsupportedDie(String),
}

pub const HELP: &str = "\
commands:
  add <text>    add a wheel option
  rm <id>       delete a wheel option
  list          show wheel options
  spin          spin the wheel
  die <sides>   select d4, d6, d8 or d10
  roll          roll the selected die
  ask           ask the magic ball
  help          show this text
  quit          exit";

impl FromStr for Message {
    type Err = ParseError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (command, rest) = match line.split_once(char::is_whitespace) {
            Some((command, rest)) => (command, rest.trim()),
            None => (line, ""),
        };

        match command.to_ascii_lowercase().as_str() {
            "add" => {
                if rest.is_empty() {
                    return Err(ParseError::MissingArgument {
                        command: "add",
                        expected: "option text",
                    });
                }
                Ok(Message::AddOption(rest.to_string()))
            }
            "rm" | "remove" | "del" => {
                if rest.is_empty() {
                    return Err(ParseError::MissingArgument {
                        command: "rm",
                        expected: "an option id",
                    });
                }
                rest.parse::<ItemId>()
                    .map(Message::RemoveOption)
                    .map_err(|_| ParseError::InvalidId(rest.to_string()))
            }
            "list" | "ls" => Ok(Message::ListOptions),
            "spin" => Ok(Message::Spin),
            "die" => {
                let sides = rest.trim_start_matches(['d', 'D']);
                sides
                    .parse::<u32>()
                    .ok()
                    .and_then(DieType::from_sides)
                    .map(Message::SelectDie)
                    .ok_or_else(|| ParseError::UnsupportedDie(sides.to_string()))
            }
            "roll" => Ok(Message::Roll),
            "ask" | "shake" => Ok(Message::Ask),
            "help" | "?" => Ok(Message::Help),
            "quit" | "exit" | "q" => Ok(Message::Quit),
            other => Err(ParseError::UnknownCommand(other.to_string())),
        }
    }
}
