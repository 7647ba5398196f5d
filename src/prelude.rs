//! Commonly used types and utilities for ease of import.

pub use crate::{
    AiPlayer, Battlefield, Battleships, GameConfig, GameState, Outcome, Player, PlayerManager,
    ShipSpec, ShootResponse, Vector,
};

#[cfg(feature = "std")]
pub use crate::{
    ui::{Console, ConsoleDisplay},
    Delay, HumanPlayer, NoDelay, Session,
};
