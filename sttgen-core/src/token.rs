//! Row tokenizer.
//!
//! A row is `subject, cell*`. Cells after the subject are either one of the
//! reserved [`Marker`]s, an event name, or the target consumed by whatever
//! marker or event is currently open.

use std::fmt;

use crate::error::{MarkerFault, TableError};

/// Reserved structural cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Marker {
    /// `\s`: the subject is a super-state container.
    SuperFlag,
    /// `\DEFAULT`: the next cell is the default target.
    Default,
    /// `\SUPER`: the next cell is the super-state the subject nests under.
    Super,
}

impl Marker {
    pub const SUPER_FLAG: &'static str = "\\s";
    pub const DEFAULT: &'static str = "\\DEFAULT";
    pub const SUPER: &'static str = "\\SUPER";

    /// Classifies a cell, returning `None` for anything that isn't reserved.
    pub fn parse(cell: &str) -> Option<Self> {
        match cell {
            Self::SUPER_FLAG => Some(Self::SuperFlag),
            Self::DEFAULT => Some(Self::Default),
            Self::SUPER => Some(Self::Super),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::SuperFlag => Self::SUPER_FLAG,
            Self::Default => Self::DEFAULT,
            Self::Super => Self::SUPER,
        }
    }
}

impl fmt::Display for Marker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One resolved step of a row, ready for the graph builder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Instruction {
    MarkSuper,
    Default(String),
    Super(String),
    Event { name: String, target: String },
}

/// Tokenizer state while scanning a row.
#[derive(Debug, Clone, PartialEq, Eq)]
enum ParseMode {
    Idle,
    AwaitingDefaultTarget,
    AwaitingSuperTarget,
    AwaitingEventTarget(String),
}

impl ParseMode {
    fn describe(&self) -> String {
        match self {
            Self::Idle => "nothing".to_string(),
            Self::AwaitingDefaultTarget => format!("`{}`", Marker::DEFAULT),
            Self::AwaitingSuperTarget => format!("`{}`", Marker::SUPER),
            Self::AwaitingEventTarget(name) => format!("event `{name}`"),
        }
    }
}

/// Tokenizes one row.
///
/// `is_state` reports whether a cell names a registered state; such a cell
/// can only appear as a target, never as an event name.
pub fn tokenize<S, F>(row: &[S], is_state: F) -> Result<Vec<Instruction>, TableError>
where
    S: AsRef<str>,
    F: Fn(&str) -> bool,
{
    let Some((subject, cells)) = row.split_first() else {
        return Ok(Vec::new());
    };
    let subject = subject.as_ref();
    let malformed = |fault| TableError::MalformedMarkerSequence {
        row: subject.to_string(),
        fault,
    };

    if let Some(marker) = Marker::parse(subject) {
        return Err(malformed(MarkerFault::MarkerAsSubject { marker }));
    }

    let mut instructions = Vec::new();
    let mut mode = ParseMode::Idle;

    for cell in cells {
        let cell = cell.as_ref();
        mode = match (mode, Marker::parse(cell)) {
            (ParseMode::Idle, Some(Marker::SuperFlag)) => {
                instructions.push(Instruction::MarkSuper);
                ParseMode::Idle
            }
            (ParseMode::Idle, Some(Marker::Default)) => ParseMode::AwaitingDefaultTarget,
            (ParseMode::Idle, Some(Marker::Super)) => ParseMode::AwaitingSuperTarget,
            (pending, Some(marker)) => {
                return Err(malformed(MarkerFault::MarkerWhileOpen {
                    marker,
                    pending: pending.describe(),
                }));
            }
            (ParseMode::Idle, None) => {
                if is_state(cell) {
                    return Err(TableError::StateNameUsedAsEvent {
                        row: subject.to_string(),
                        name: cell.to_string(),
                    });
                }
                ParseMode::AwaitingEventTarget(cell.to_string())
            }
            (ParseMode::AwaitingDefaultTarget, None) => {
                instructions.push(Instruction::Default(cell.to_string()));
                ParseMode::Idle
            }
            (ParseMode::AwaitingSuperTarget, None) => {
                instructions.push(Instruction::Super(cell.to_string()));
                ParseMode::Idle
            }
            (ParseMode::AwaitingEventTarget(name), None) => {
                instructions.push(Instruction::Event {
                    name,
                    target: cell.to_string(),
                });
                ParseMode::Idle
            }
        };
    }

    if mode != ParseMode::Idle {
        return Err(malformed(MarkerFault::MissingTarget {
            pending: mode.describe(),
        }));
    }

    Ok(instructions)
}
