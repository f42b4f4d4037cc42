//! Terminal command parsing.
//!
//! Plain lines are chat input; lines starting with `/` are commands.

use crate::error::AppError;

/// Breathing cycles run by `/breathe` without an argument
const DEFAULT_BREATHING_CYCLES: u32 = 1;

pub const HELP_TEXT: &str = "Commands:
  /mood <1-10> [tag,tag,...] [| notes]   log how you feel
  /moods                                 show your mood trends
  /activities                            activities recommended for you
  /start <activity-id>                   start an activity
  /breathe [cycles]                      4-7-8 breathing exercise
  /help                                  show this help
  /quit                                  leave
Anything else is sent to MindBot.";

/// A parsed input line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Chat(String),
    LogMood {
        mood: u8,
        tags: Vec<String>,
        notes: Option<String>,
    },
    MoodSummary,
    Activities,
    StartActivity(String),
    Breathe {
        cycles: u32,
    },
    Help,
    Quit,
}

impl Command {
    pub fn parse(line: &str) -> Result<Self, AppError> {
        let line = line.trim();

        let Some(rest) = line.strip_prefix('/') else {
            return Ok(Command::Chat(line.to_string()));
        };

        let (name, args) = match rest.split_once(char::is_whitespace) {
            Some((name, args)) => (name, args.trim()),
            None => (rest, ""),
        };

        match name.to_ascii_lowercase().as_str() {
            "mood" => parse_mood(args),
            "moods" => Ok(Command::MoodSummary),
            "activities" => Ok(Command::Activities),
            "start" if !args.is_empty() => Ok(Command::StartActivity(args.to_string())),
            "start" => Err(AppError::Validation("Usage: /start <activity-id>".to_string())),
            "breathe" => {
                let cycles = if args.is_empty() {
                    DEFAULT_BREATHING_CYCLES
                } else {
                    args.parse::<u32>()
                        .ok()
                        .filter(|c| *c > 0)
                        .ok_or_else(|| {
                            AppError::Validation("Usage: /breathe [cycles]".to_string())
                        })?
                };
                Ok(Command::Breathe { cycles })
            }
            "help" => Ok(Command::Help),
            "quit" | "exit" => Ok(Command::Quit),
            other => Err(AppError::Validation(format!(
                "Unknown command: /{} (try /help)",
                other
            ))),
        }
    }
}

/// `<mood> [tag,tag] [| notes]`
fn parse_mood(args: &str) -> Result<Command, AppError> {
    let (head, notes) = match args.split_once('|') {
        Some((head, notes)) => (head.trim(), Some(notes.trim().to_string())),
        None => (args, None),
    };

    let mut parts = head.splitn(2, char::is_whitespace);
    let mood = parts
        .next()
        .and_then(|m| m.parse::<u8>().ok())
        .ok_or_else(|| {
            AppError::Validation("Usage: /mood <1-10> [tag,tag,...] [| notes]".to_string())
        })?;

    let tags = parts
        .next()
        .map(|t| {
            t.split(',')
                .map(|tag| tag.trim().to_string())
                .filter(|tag| !tag.is_empty())
                .collect()
        })
        .unwrap_or_default();

    Ok(Command::LogMood {
        mood,
        tags,
        notes: notes.filter(|n| !n.is_empty()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_is_chat() {
        assert_eq!(
            Command::parse("  I feel tired  ").unwrap(),
            Command::Chat("I feel tired".to_string())
        );
    }

    #[test]
    fn test_mood_command() {
        assert_eq!(
            Command::parse("/mood 7 happy, calm | long walk").unwrap(),
            Command::LogMood {
                mood: 7,
                tags: vec!["happy".to_string(), "calm".to_string()],
                notes: Some("long walk".to_string()),
            }
        );
        assert_eq!(
            Command::parse("/mood 3").unwrap(),
            Command::LogMood {
                mood: 3,
                tags: vec![],
                notes: None,
            }
        );
        assert!(Command::parse("/mood great").is_err());
    }

    #[test]
    fn test_other_commands() {
        assert_eq!(Command::parse("/moods").unwrap(), Command::MoodSummary);
        assert_eq!(Command::parse("/activities").unwrap(), Command::Activities);
        assert_eq!(
            Command::parse("/start body-scan").unwrap(),
            Command::StartActivity("body-scan".to_string())
        );
        assert_eq!(Command::parse("/breathe").unwrap(), Command::Breathe { cycles: 1 });
        assert_eq!(Command::parse("/breathe 3").unwrap(), Command::Breathe { cycles: 3 });
        assert_eq!(Command::parse("/QUIT").unwrap(), Command::Quit);
    }

    #[test]
    fn test_invalid_commands() {
        assert!(Command::parse("/start").is_err());
        assert!(Command::parse("/breathe 0").is_err());
        assert!(Command::parse("/dance").is_err());
    }
}
