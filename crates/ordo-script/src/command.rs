//! Script command parsing.

use std::str::FromStr;

use ordo_core::{Color, Move, Snapshot};

use crate::error::ScriptError;

/// Arguments of the `update` command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateParams {
    /// The move that resolved the node.
    pub best: Move,
    /// Moves tried at the node, in search order.
    pub searched: Vec<Move>,
    /// Remaining depth of the node.
    pub depth: u8,
    /// Distance of the node from the root.
    pub height: usize,
}

/// Arguments of the `note` command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteParams {
    /// Distance of the node from the root. Defaults to 0.
    pub height: usize,
    /// Transposition table move, or empty.
    pub trans: Move,
    /// Candidate moves to score.
    pub moves: Vec<Move>,
}

/// A session option set with `set <name> <value>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionOption {
    /// Check every printed ordering with `is_sorted`.
    Verify(bool),
}

/// A parsed script command.
#[derive(Debug, PartialEq, Eq)]
pub enum Command {
    /// `clear` -- forget everything the table learned.
    Clear,
    /// `position` -- replace the current position.
    Position(Snapshot),
    /// `reset` -- empty the killer slots at a height.
    Reset(usize),
    /// `update` -- report a resolved node.
    Update(UpdateParams),
    /// `note` -- score and sort moves for the main search.
    Note(NoteParams),
    /// `noteqs` -- score and sort moves for quiescence.
    NoteQs(Vec<Move>),
    /// `killers` -- print the killer slots at a height.
    Killers(usize),
    /// `history` -- print the history value of a move for the side to move.
    History(Move),
    /// `counter` -- print the counter-move for the current position.
    Counter,
    /// `set` -- change a session option.
    Set(SessionOption),
    /// `quit` -- end the session.
    Quit,
    /// Unrecognized command (ignored).
    Unknown(String),
}

/// Parse a single script line into a [`Command`].
pub fn parse_command(line: &str) -> Result<Command, ScriptError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let Some((&name, args)) = tokens.split_first() else {
        return Ok(Command::Unknown(String::new()));
    };

    match name {
        "clear" => Ok(Command::Clear),
        "counter" => Ok(Command::Counter),
        "quit" => Ok(Command::Quit),
        "position" => parse_position(args),
        "reset" => Ok(Command::Reset(parse_number(args.first(), "reset", "height")?)),
        "killers" => Ok(Command::Killers(parse_number(args.first(), "killers", "height")?)),
        "history" => {
            let text = args.first().ok_or(ScriptError::MissingArgument {
                command: "history",
                argument: "move",
            })?;
            Ok(Command::History(text.parse()?))
        }
        "update" => parse_update(args),
        "note" => parse_note(args),
        "noteqs" => parse_noteqs(args),
        "set" => parse_set(args),
        _ => Ok(Command::Unknown(name.to_string())),
    }
}

/// Parse `position <w|b> [last <move>] [losing <move>...]`.
fn parse_position(tokens: &[&str]) -> Result<Command, ScriptError> {
    let side: Color = tokens
        .first()
        .ok_or(ScriptError::MissingArgument {
            command: "position",
            argument: "side",
        })?
        .parse()?;
    let mut pos = Snapshot::new(side);

    let mut i = 1;
    while i < tokens.len() {
        match tokens[i] {
            "last" => {
                let text = tokens.get(i + 1).ok_or(ScriptError::MissingArgument {
                    command: "position",
                    argument: "last move",
                })?;
                pos = pos.with_last_move(text.parse()?);
                i += 2;
            }
            "losing" => {
                i += 1;
                while i < tokens.len() && tokens[i] != "last" {
                    pos = pos.with_losing(tokens[i].parse()?);
                    i += 1;
                }
            }
            _ => {
                // Unknown token -- skip
                i += 1;
            }
        }
    }

    Ok(Command::Position(pos))
}

/// Parse `update <best> depth <d> height <h> searched <move>...`.
///
/// Keywords may come in any order after the best move; `searched`
/// consumes the rest of the line.
fn parse_update(tokens: &[&str]) -> Result<Command, ScriptError> {
    let best: Move = tokens
        .first()
        .ok_or(ScriptError::MissingArgument {
            command: "update",
            argument: "best move",
        })?
        .parse()?;

    let mut depth = None;
    let mut height = None;
    let mut searched = Vec::new();

    let mut i = 1;
    while i < tokens.len() {
        match tokens[i] {
            "depth" => {
                depth = Some(parse_number(tokens.get(i + 1), "update", "depth")?);
                i += 2;
            }
            "height" => {
                height = Some(parse_number(tokens.get(i + 1), "update", "height")?);
                i += 2;
            }
            "searched" => {
                searched = parse_moves(&tokens[i + 1..])?;
                break;
            }
            _ => {
                i += 1;
            }
        }
    }

    Ok(Command::Update(UpdateParams {
        best,
        searched,
        depth: depth.ok_or(ScriptError::MissingArgument {
            command: "update",
            argument: "depth",
        })?,
        height: height.ok_or(ScriptError::MissingArgument {
            command: "update",
            argument: "height",
        })?,
    }))
}

/// Parse `note [height <h>] [trans <move>] moves <move>...`.
fn parse_note(tokens: &[&str]) -> Result<Command, ScriptError> {
    let mut params = NoteParams {
        height: 0,
        trans: Move::EMPTY,
        moves: Vec::new(),
    };

    let mut i = 0;
    while i < tokens.len() {
        match tokens[i] {
            "height" => {
                params.height = parse_number(tokens.get(i + 1), "note", "height")?;
                i += 2;
            }
            "trans" => {
                let text = tokens.get(i + 1).ok_or(ScriptError::MissingArgument {
                    command: "note",
                    argument: "trans move",
                })?;
                params.trans = text.parse()?;
                i += 2;
            }
            "moves" => {
                params.moves = parse_moves(&tokens[i + 1..])?;
                break;
            }
            _ => {
                i += 1;
            }
        }
    }

    Ok(Command::Note(params))
}

/// Parse `noteqs moves <move>...`.
fn parse_noteqs(tokens: &[&str]) -> Result<Command, ScriptError> {
    let moves = match tokens.iter().position(|&t| t == "moves") {
        Some(at) => parse_moves(&tokens[at + 1..])?,
        None => Vec::new(),
    };
    Ok(Command::NoteQs(moves))
}

/// Parse `set <name> <value>`.
fn parse_set(tokens: &[&str]) -> Result<Command, ScriptError> {
    let (Some(&name), Some(&value)) = (tokens.first(), tokens.get(1)) else {
        return Err(ScriptError::MissingArgument {
            command: "set",
            argument: "name and value",
        });
    };

    match name.to_ascii_lowercase().as_str() {
        "verify" => {
            let on = value.parse::<bool>().map_err(|_| ScriptError::InvalidOptionValue {
                name: name.to_string(),
                value: value.to_string(),
            })?;
            Ok(Command::Set(SessionOption::Verify(on)))
        }
        _ => Err(ScriptError::UnknownOption {
            name: name.to_string(),
        }),
    }
}

fn parse_moves(tokens: &[&str]) -> Result<Vec<Move>, ScriptError> {
    tokens
        .iter()
        .map(|t| t.parse::<Move>().map_err(ScriptError::from))
        .collect()
}

/// Parse a numeric argument from a token.
fn parse_number<T: FromStr>(
    token: Option<&&str>,
    command: &'static str,
    argument: &'static str,
) -> Result<T, ScriptError> {
    let value = token.ok_or(ScriptError::MissingArgument { command, argument })?;
    value.parse().map_err(|_| ScriptError::InvalidNumber {
        argument,
        value: value.to_string(),
    })
}
