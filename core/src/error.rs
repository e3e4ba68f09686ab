use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Which part of a seed description failed validation.
#[derive(Error, Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Malformation {
    #[error("missing-or-non-numeric-header")]
    Header,
    #[error("bad-dimensions")]
    Dimensions,
    #[error("bad-mine-count")]
    MineCount,
    #[error("mine-out-of-bounds")]
    MineOutOfBounds,
    #[error("malformed-mine-coordinate")]
    MineCoordinate,
}

/// Fatal problems with the seed, the game never starts after one of these.
#[derive(Error, Debug)]
pub enum SeedError {
    #[error("Seed File Not Found Error: {} was not found", .0.display())]
    NotFound(PathBuf),
    #[error("Seed File Malformed Error: could not read {}: {source}", .path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Seed File Malformed Error: the seed file is empty")]
    Empty,
    #[error("Seed File Malformed Error: {0}")]
    Malformed(Malformation),
}

/// Per-command problems, reported to the player without ending the game.
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error("Invalid Command Error: Your command does not have the correct arguments")]
    WrongArity,
    #[error("Invalid Command Error: Your command is out of bounds")]
    OutOfBounds,
    #[error("Invalid Command: Please enter a valid command (type h/help for a list of commands)")]
    Invalid,
}

/// Failures that end a running session without a game result.
#[derive(Error, Debug)]
pub enum SessionError {
    #[error("Input ended before the game was over")]
    EndOfInput,
    #[error("Could not talk to the player: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T, E = CommandError> = core::result::Result<T, E>;
