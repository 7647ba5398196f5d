//! Common error types shared by the engine, the players and the console.

use alloc::string::String;
use thiserror::Error;

use crate::core::grid::Vector;

/// Invalid game setup. Fatal at startup.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Width or height of the grid is zero.
    #[error("grid must be at least 1x1, got {width}x{height}")]
    EmptyGrid { width: usize, height: usize },
    /// More columns than there are letters to name them.
    #[error("grid is {width} columns wide, at most {max} are supported")]
    TooWide { width: usize, max: usize },
    /// A manifest with no ships, so nobody could ever lose.
    #[error("at least one ship is required")]
    NoShips,
    /// A ship with no parts.
    #[error("ship length must be at least 1")]
    ZeroLengthShip,
    /// A ship that fits along neither axis of the grid.
    #[error("ship of length {length} does not fit a {width}x{height} grid")]
    ShipTooLong {
        length: usize,
        width: usize,
        height: usize,
    },
    /// Text that is not a ship spec (`3`, `3:one`, `3:full`).
    #[error("invalid ship spec '{0}', expected <length>[:one|:full]")]
    InvalidShipSpec(String),
    /// Fewer than two players.
    #[error("a game needs at least 2 players, got {0}")]
    TooFewPlayers(usize),
    /// Turn limit of zero.
    #[error("turns per player must be at least 1")]
    ZeroTurns,
}

/// Random placement could not find a legal position for a ship.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PlacementError {
    /// Every cell is already taken, there is nowhere to put a ship head.
    #[error("failed to create ship - no space")]
    NoSpace,
    /// The attempt budget ran out without finding a body that fits.
    #[error("failed to create ship - no room")]
    NoRoom,
    /// A hand-placed ship leaves the grid.
    #[error("ship part {0} is out of bounds")]
    OutOfBounds(Vector),
    /// A hand-placed ship overlaps an existing one.
    #[error("ship part {0} overlaps another ship")]
    Overlap(Vector),
}

/// The AI has no coordinate left to fire at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TargetingError {
    #[error("every coordinate on the grid has already been fired at")]
    Exhausted,
}

/// Text could not be decoded into a coordinate.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoordinateError {
    #[error("Invalid input")]
    Malformed(String),
    #[error("Out of bounds!")]
    OutOfBounds(Vector),
    #[error("Already shot there!")]
    AlreadyShot(Vector),
}

/// Errors raised while sequencing a game.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    /// A player returned a coordinate the target battlefield cannot accept.
    #[error("player {player} chose invalid target {coordinate}")]
    InvalidTarget { player: String, coordinate: Vector },
    /// A turn was requested while no round is being played.
    #[error("no round in progress")]
    NotPlaying,
    /// A round was started before the previous one was finished.
    #[error("previous round has not been finished")]
    RoundNotFinished,
    #[error(transparent)]
    Placement(#[from] PlacementError),
    #[error(transparent)]
    Targeting(#[from] TargetingError),
}
