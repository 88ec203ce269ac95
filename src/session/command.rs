use std::fmt;
use std::str::FromStr;

use crate::ai::Difficulty;
use crate::error::SetupError;

/// Who plays a side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerKind {
    Human,
    Computer(Difficulty),
}

impl FromStr for PlayerKind {
    type Err = SetupError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "user" => Ok(PlayerKind::Human),
            other => other.parse().map(PlayerKind::Computer),
        }
    }
}

impl fmt::Display for PlayerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlayerKind::Human => f.pad("user"),
            PlayerKind::Computer(difficulty) => fmt::Display::fmt(difficulty, f),
        }
    }
}

/// A line typed at the `Input command:` prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Start { x: PlayerKind, o: PlayerKind },
    Exit,
}

impl FromStr for Command {
    type Err = SetupError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tokens: Vec<&str> = s.split_whitespace().collect();
        match tokens.as_slice() {
            ["exit", ..] => Ok(Command::Exit),
            ["start", x, o] => Ok(Command::Start {
                x: x.parse()?,
                o: o.parse()?,
            }),
            _ => Err(SetupError::BadParameters(format!(
                "expected 'start <x> <o>' or 'exit', got '{}'",
                s.trim()
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_start() {
        assert_eq!(
            "start user hard".parse::<Command>(),
            Ok(Command::Start {
                x: PlayerKind::Human,
                o: PlayerKind::Computer(Difficulty::Hard),
            })
        );
        assert_eq!(
            "  start   easy medium \n".parse::<Command>(),
            Ok(Command::Start {
                x: PlayerKind::Computer(Difficulty::Easy),
                o: PlayerKind::Computer(Difficulty::Medium),
            })
        );
    }

    #[test]
    fn test_parse_exit() {
        assert_eq!("exit".parse::<Command>(), Ok(Command::Exit));
        assert_eq!("exit now".parse::<Command>(), Ok(Command::Exit));
    }

    #[test]
    fn test_wrong_arity_is_bad_parameters() {
        for line in ["start", "start easy", "start easy easy easy", "", "play easy easy"] {
            assert!(
                matches!(line.parse::<Command>(), Err(SetupError::BadParameters(_))),
                "'{line}' should be rejected"
            );
        }
    }

    #[test]
    fn test_unknown_player_token() {
        assert_eq!(
            "start user godlike".parse::<Command>(),
            Err(SetupError::UnknownDifficulty("godlike".to_string()))
        );
    }

    #[test]
    fn test_player_kind_display() {
        assert_eq!(PlayerKind::Human.to_string(), "user");
        assert_eq!(PlayerKind::Computer(Difficulty::Medium).to_string(), "medium");
    }
}
