use crate::domain::{Color, UnknownColor};

/// One command of a lot script
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `park <registration|-> <color>`
    Park {
        registration: Option<String>,
        color: Color,
    },
    /// `unpark <ticket-id>`
    Unpark { ticket: u64 },
    /// `parked <registration|->`
    Parked { registration: Option<String> },
    /// `count <color>`
    Count { color: Color },
    Full,
    Occupancy,
    Status,
}

/// A parsed command with the 1-based line it came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptLine {
    pub line: usize,
    pub command: Command,
}

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ScriptError {
    #[error("line {line}: unknown command '{command}'")]
    UnknownCommand { line: usize, command: String },

    #[error("line {line}: '{command}' expects {expected}")]
    WrongArguments {
        line: usize,
        command: String,
        expected: &'static str,
    },

    #[error("line {line}: {source}")]
    InvalidColor {
        line: usize,
        #[source]
        source: UnknownColor,
    },

    #[error("line {line}: invalid ticket id '{value}'")]
    InvalidTicketId { line: usize, value: String },
}

/// Parse a whole script, skipping blank lines and `#` comments
///
/// Stops at the first malformed line so nothing runs from a broken script.
pub fn parse_script(source: &str) -> Result<Vec<ScriptLine>, ScriptError> {
    let mut commands = Vec::new();

    for (i, raw) in source.lines().enumerate() {
        let line = i + 1;
        let text = raw.trim();
        if text.is_empty() || text.starts_with('#') {
            continue;
        }
        let command = parse_command(line, text)?;
        commands.push(ScriptLine { line, command });
    }

    Ok(commands)
}

fn parse_command(line: usize, text: &str) -> Result<Command, ScriptError> {
    let mut words = text.split_whitespace();
    let keyword = words.next().unwrap_or_default().to_ascii_lowercase();
    let args: Vec<&str> = words.collect();

    let wrong = |expected: &'static str| ScriptError::WrongArguments {
        line,
        command: keyword.clone(),
        expected,
    };

    match keyword.as_str() {
        "park" => match args.as_slice() {
            [registration, color] => Ok(Command::Park {
                registration: parse_registration(registration),
                color: parse_color(line, color)?,
            }),
            _ => Err(wrong("<registration|-> <color>")),
        },
        "unpark" => match args.as_slice() {
            [ticket] => {
                let ticket = ticket
                    .parse()
                    .map_err(|_| ScriptError::InvalidTicketId {
                        line,
                        value: ticket.to_string(),
                    })?;
                Ok(Command::Unpark { ticket })
            }
            _ => Err(wrong("<ticket-id>")),
        },
        "parked" => match args.as_slice() {
            [registration] => Ok(Command::Parked {
                registration: parse_registration(registration),
            }),
            _ => Err(wrong("<registration|->")),
        },
        "count" => match args.as_slice() {
            [color] => Ok(Command::Count {
                color: parse_color(line, color)?,
            }),
            _ => Err(wrong("<color>")),
        },
        "full" | "occupancy" | "status" if !args.is_empty() => Err(wrong("no arguments")),
        "full" => Ok(Command::Full),
        "occupancy" => Ok(Command::Occupancy),
        "status" => Ok(Command::Status),
        _ => Err(ScriptError::UnknownCommand {
            line,
            command: keyword.clone(),
        }),
    }
}

/// `-` stands for a car with no registration number
fn parse_registration(value: &str) -> Option<String> {
    (value != "-").then(|| value.to_string())
}

fn parse_color(line: usize, value: &str) -> Result<Color, ScriptError> {
    value
        .parse()
        .map_err(|source| ScriptError::InvalidColor { line, source })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_script() {
        let script = "\
# morning arrivals
park AP-1234 red

PARK - Blue
unpark 7
parked AP-1234
count green
full
occupancy
status
";
        let parsed = parse_script(script).unwrap();
        let commands: Vec<Command> = parsed.iter().map(|l| l.command.clone()).collect();

        assert_eq!(
            commands,
            vec![
                Command::Park {
                    registration: Some("AP-1234".to_string()),
                    color: Color::Red
                },
                Command::Park {
                    registration: None,
                    color: Color::Blue
                },
                Command::Unpark { ticket: 7 },
                Command::Parked {
                    registration: Some("AP-1234".to_string())
                },
                Command::Count {
                    color: Color::Green
                },
                Command::Full,
                Command::Occupancy,
                Command::Status,
            ]
        );
        assert_eq!(parsed[0].line, 2);
        assert_eq!(parsed[1].line, 4);
    }

    #[test]
    fn test_unknown_command() {
        assert_eq!(
            parse_script("park A1 red\nreserve A1").unwrap_err(),
            ScriptError::UnknownCommand {
                line: 2,
                command: "reserve".to_string()
            }
        );
    }

    #[test]
    fn test_wrong_arguments() {
        let err = parse_script("park A1").unwrap_err();
        assert_eq!(
            err.to_string(),
            "line 1: 'park' expects <registration|-> <color>"
        );
        assert!(parse_script("full now").is_err());
    }

    #[test]
    fn test_invalid_color() {
        let err = parse_script("count purple").unwrap_err();
        assert_eq!(err.to_string(), "line 1: Unknown color: purple");
    }

    #[test]
    fn test_invalid_ticket_id() {
        assert_eq!(
            parse_script("unpark abc").unwrap_err(),
            ScriptError::InvalidTicketId {
                line: 1,
                value: "abc".to_string()
            }
        );
    }
}
