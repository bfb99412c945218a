//! A script session: one sort table driven by text commands.

use std::io::{BufRead, Write};

use tracing::{debug, error, info, warn};

use ordo_core::{Move, Position, Snapshot};
use ordo_engine::{OrderedMove, SortTable, is_sorted, sort_moves};

use crate::command::{Command, NoteParams, SessionOption, UpdateParams, parse_command};
use crate::error::ScriptError;

/// Configuration knobs adjustable via `set`.
#[derive(Debug, Clone, Default)]
pub struct SessionConfig {
    /// Check every printed ordering with `is_sorted`.
    pub verify: bool,
}

/// Owns a [`SortTable`] and the current position, and answers commands
/// the way a search driver would issue them.
pub struct Session {
    table: SortTable,
    position: Snapshot,
    config: SessionConfig,
}

impl Session {
    /// Create a session with an empty table and White to move.
    pub fn new() -> Self {
        Self::with_config(SessionConfig::default())
    }

    /// Create a session with the given configuration.
    pub fn with_config(config: SessionConfig) -> Self {
        Self {
            table: SortTable::new(),
            position: Snapshot::default(),
            config,
        }
    }

    /// Read commands from `input` until `quit` or end of input, writing
    /// results to `out`.
    ///
    /// Malformed commands are reported as `error <message>` lines and do not
    /// end the session. Only I/O failures do.
    pub fn run<R: BufRead, W: Write>(mut self, input: R, mut out: W) -> Result<(), ScriptError> {
        for line in input.lines() {
            let line = line?;
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }
            debug!(cmd = %trimmed, "received script command");

            let keep_going = match parse_command(trimmed) {
                Ok(cmd) => self.execute(cmd, &mut out)?,
                Err(e) => {
                    warn!(error = %e, "script parse error");
                    writeln!(out, "error {e}")?;
                    true
                }
            };
            out.flush()?;
            if !keep_going {
                break;
            }
        }

        info!("script session finished");
        Ok(())
    }

    /// Execute one command. Returns `false` once the session should end.
    pub fn execute<W: Write>(&mut self, cmd: Command, out: &mut W) -> Result<bool, ScriptError> {
        match cmd {
            Command::Clear => self.table.clear(),
            Command::Position(pos) => self.position = pos,
            Command::Reset(height) => self.table.reset_killers(height),
            Command::Update(params) => self.handle_update(params),
            Command::Note(params) => self.handle_note(params, out)?,
            Command::NoteQs(moves) => self.handle_noteqs(moves, out)?,
            Command::Killers(height) => {
                let [first, second] = self.table.killers(height);
                writeln!(out, "killers {first} {second}")?;
            }
            Command::History(mv) => {
                let value = self.table.history(self.position.side_to_move(), mv);
                writeln!(out, "history {value}")?;
            }
            Command::Counter => {
                writeln!(out, "counter {}", self.table.counter_move(&self.position))?;
            }
            Command::Set(option) => self.handle_set(option),
            Command::Quit => return Ok(false),
            Command::Unknown(name) => {
                if !name.is_empty() {
                    debug!(%name, "ignoring unknown command");
                }
            }
        }
        Ok(true)
    }

    fn handle_update(&mut self, params: UpdateParams) {
        self.table.update(
            &self.position,
            params.best,
            &params.searched,
            params.depth,
            params.height,
        );
    }

    fn handle_note<W: Write>(&self, params: NoteParams, out: &mut W) -> Result<(), ScriptError> {
        let mut moves = wrap(&params.moves);
        self.table
            .note(&self.position, &mut moves, params.trans, params.height);
        self.print_order(&mut moves, out)
    }

    fn handle_noteqs<W: Write>(&self, moves: Vec<Move>, out: &mut W) -> Result<(), ScriptError> {
        let mut moves = wrap(&moves);
        self.table.note_qs(&self.position, &mut moves);
        self.print_order(&mut moves, out)
    }

    fn handle_set(&mut self, option: SessionOption) {
        match option {
            SessionOption::Verify(on) => {
                self.config.verify = on;
                debug!(verify = on, "session option changed");
            }
        }
    }

    /// Sort `moves` and print them as `order <move>:<key> ...`.
    fn print_order<W: Write>(&self, moves: &mut [OrderedMove], out: &mut W) -> Result<(), ScriptError> {
        sort_moves(moves);
        if self.config.verify && !is_sorted(moves) {
            error!(len = moves.len(), "move list not sorted after sort_moves");
        }

        write!(out, "order")?;
        for om in moves.iter() {
            write!(out, " {}:{}", om.mv, om.key)?;
        }
        writeln!(out)?;
        Ok(())
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

fn wrap(moves: &[Move]) -> Vec<OrderedMove> {
    moves.iter().copied().map(OrderedMove::new).collect()
}
