//! Battleships game engine (no_std compatible)
//!
//! Grid geometry, ships, battlefields, shot resolution and the AI hunt
//! heuristic. Only needs `alloc`, so it builds without the `std` feature.

pub mod ai;
pub mod battlefield;
pub mod common;
pub mod config;
pub mod grid;
pub mod launcher;
pub mod ship;

pub use ai::{HuntState, Shot, Targeting};
pub use battlefield::Battlefield;
pub use common::{ConfigError, CoordinateError, GameError, PlacementError, TargetingError};
pub use config::*;
pub use grid::{Direction, NeighborRun, Shape, Vector};
pub use launcher::{MissileLauncher, ShootMessage, ShootResponse, StandardMissileLauncher};
pub use ship::{Ship, ShipPart, ShipSpec};
