//! Shell command parsing.

use std::fmt;

use super::form::Field;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    List,
    Show { id: i64 },
    Refresh,
    Add { assignments: Vec<(Field, String)> },
    Edit { id: i64, assignments: Vec<(Field, String)> },
    Delete { id: i64 },
    Clear,
    Help,
    Quit,
    /// Blank input line.
    Empty,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    UnknownCommand(String),
    MissingId { command: &'static str },
    InvalidId(String),
    MissingAssignments { command: &'static str },
    BadAssignment(String),
    UnknownField(String),
    UnterminatedQuote,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::UnknownCommand(cmd) => write!(f, "Unknown command: {}", cmd),
            ParseError::MissingId { command } => write!(f, "Usage: {} <id>", command),
            ParseError::InvalidId(raw) => write!(f, "Invalid id '{}'", raw),
            ParseError::MissingAssignments { command } => {
                write!(f, "Usage: {} field=value ...", command)
            }
            ParseError::BadAssignment(raw) => {
                write!(f, "Expected field=value, got '{}'", raw)
            }
            ParseError::UnknownField(name) => write!(f, "Unknown field '{}'", name),
            ParseError::UnterminatedQuote => write!(f, "Unterminated quote"),
        }
    }
}

impl std::error::Error for ParseError {}

pub const HELP: &str = "\
Commands:
  list                              Show all users
  show <id>                         Show one user in detail
  refresh                           Fetch users from the remote endpoint
  add name=.. username=.. email=.. [phone=..] [website=..] [company=..]
  edit <id> field=value ...         Update fields of a user
  delete <id>                       Delete a user (asks for confirmation)
  clear                             Empty the local directory
  help                              Show this help
  quit                              Exit
Values containing spaces can be quoted: name=\"Ann Lee\"";

/// Parse a single input line.
pub fn parse(line: &str) -> Result<Command, ParseError> {
    let tokens = tokenize(line)?;
    let Some((head, rest)) = tokens.split_first() else {
        return Ok(Command::Empty);
    };

    match head.to_lowercase().as_str() {
        "list" | "ls" => Ok(Command::List),
        "show" => Ok(Command::Show {
            id: parse_id(rest, "show")?,
        }),
        "refresh" | "reload" => Ok(Command::Refresh),
        "add" => {
            if rest.is_empty() {
                return Err(ParseError::MissingAssignments { command: "add" });
            }
            Ok(Command::Add {
                assignments: parse_assignments(rest)?,
            })
        }
        "edit" | "update" => {
            let id = parse_id(rest, "edit")?;
            if rest.len() < 2 {
                return Err(ParseError::MissingAssignments { command: "edit <id>" });
            }
            Ok(Command::Edit {
                id,
                assignments: parse_assignments(&rest[1..])?,
            })
        }
        "delete" | "rm" => Ok(Command::Delete {
            id: parse_id(rest, "delete")?,
        }),
        "clear" => Ok(Command::Clear),
        "help" | "?" => Ok(Command::Help),
        "quit" | "exit" | "q" => Ok(Command::Quit),
        _ => Err(ParseError::UnknownCommand(head.clone())),
    }
}

fn parse_id(rest: &[String], command: &'static str) -> Result<i64, ParseError> {
    let raw = rest.first().ok_or(ParseError::MissingId { command })?;
    raw.parse()
        .map_err(|_| ParseError::InvalidId(raw.clone()))
}

fn parse_assignments(tokens: &[String]) -> Result<Vec<(Field, String)>, ParseError> {
    tokens
        .iter()
        .map(|token| {
            let (name, value) = token
                .split_once('=')
                .ok_or_else(|| ParseError::BadAssignment(token.clone()))?;
            let field = name.parse().map_err(ParseError::UnknownField)?;
            Ok((field, value.to_string()))
        })
        .collect()
}

/// Split on whitespace, keeping double-quoted runs together.
///
/// Quotes may start mid-token (`name="Ann Lee"`) and are removed.
/// `\"` inside quotes yields a literal quote.
fn tokenize(line: &str) -> Result<Vec<String>, ParseError> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut in_token = false;
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '"' => {
                in_quotes = !in_quotes;
                in_token = true;
            }
            '\\' if in_quotes && chars.peek() == Some(&'"') => {
                current.push('"');
                chars.next();
            }
            c if c.is_whitespace() && !in_quotes => {
                if in_token {
                    tokens.push(std::mem::take(&mut current));
                    in_token = false;
                }
            }
            c => {
                current.push(c);
                in_token = true;
            }
        }
    }

    if in_quotes {
        return Err(ParseError::UnterminatedQuote);
    }
    if in_token {
        tokens.push(current);
    }
    Ok(tokens)
}
