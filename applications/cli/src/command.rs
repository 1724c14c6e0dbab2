//! Typed commands for the interactive prompt

use std::fmt;
use std::str::FromStr;

/// One line of user input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Load playlists, replacing the current pool
    Load(Vec<String>),
    /// Draw a random unused track
    Draw,
    /// Show the current track's details
    Reveal,
    /// Mark the current track used and clear it
    Next,
    /// Print pool statistics
    Stats,
    /// Start over with the same pool
    Reset,
    /// Drop the pool and go back to playlist entry
    Back,
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseCommandError {
    Empty,
    Unknown(String),
    MissingArgument(&'static str),
}

impl fmt::Display for ParseCommandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => f.write_str("Type a command (help for a list)"),
            Self::Unknown(word) => write!(f, "Unknown command '{}' (help for a list)", word),
            Self::MissingArgument(command) => {
                write!(f, "'{}' needs at least one playlist URL or ID", command)
            }
        }
    }
}

impl std::error::Error for ParseCommandError {}

impl FromStr for Command {
    type Err = ParseCommandError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let mut words = input.split_whitespace();
        let Some(head) = words.next() else {
            return Err(ParseCommandError::Empty);
        };

        let command = match head.to_ascii_lowercase().as_str() {
            "load" | "l" => {
                let locators: Vec<String> = words.map(str::to_string).collect();
                if locators.is_empty() {
                    return Err(ParseCommandError::MissingArgument("load"));
                }
                return Ok(Self::Load(locators));
            }
            "draw" | "play" | "d" | "p" => Self::Draw,
            "reveal" | "r" => Self::Reveal,
            "next" | "n" => Self::Next,
            "stats" | "s" => Self::Stats,
            "reset" => Self::Reset,
            "back" | "b" => Self::Back,
            "help" | "h" | "?" => Self::Help,
            "quit" | "exit" | "q" => Self::Quit,
            other => return Err(ParseCommandError::Unknown(other.to_string())),
        };

        Ok(command)
    }
}

/// Prompt help text
pub const HELP: &str = "\
Commands:
  load <playlist>...   load playlists (URL, spotify:playlist: URI or ID)
  draw | play          draw a random track
  reveal               show title, artist and year
  next                 mark the track used and move on
  stats                show pool statistics
  reset                start over with the same playlists
  back                 drop the playlists and enter new ones
  quit                 leave the game";
