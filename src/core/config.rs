use alloc::{
    string::{String, ToString},
    vec,
    vec::Vec,
};
use core::str::FromStr;

use crate::core::{battlefield::Battlefield, common::ConfigError, grid::Shape, ship::ShipSpec};

/// Column letters, in order. Limits how wide a grid can be.
pub const ALPHABET: &str = "abcdefghijklmnopqrstuvwxyz";

pub const DEFAULT_WIDTH: usize = 5;
pub const DEFAULT_HEIGHT: usize = 5;
pub const DEFAULT_SHIPS: [ShipSpec; 2] = [ShipSpec::new(2, true), ShipSpec::new(2, true)];
pub const DEFAULT_TURNS_PER_PLAYER: usize = 20;

/// Pause before the AI fires, in milliseconds.
pub const DEFAULT_AI_DELAY_MS: u64 = 500;

/// Everything needed to set up a game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub width: usize,
    pub height: usize,
    pub ships: Vec<ShipSpec>,
    pub max_turns_per_player: usize,
    pub ai_delay_ms: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            ships: DEFAULT_SHIPS.to_vec(),
            max_turns_per_player: DEFAULT_TURNS_PER_PLAYER,
            ai_delay_ms: DEFAULT_AI_DELAY_MS,
        }
    }
}

impl GameConfig {
    /// Check the configuration and build the grid shape from it.
    pub fn shape(&self) -> Result<Shape, ConfigError> {
        let shape = Shape::new(self.width, self.height)?;
        if self.width > ALPHABET.len() {
            return Err(ConfigError::TooWide {
                width: self.width,
                max: ALPHABET.len(),
            });
        }
        if self.ships.is_empty() {
            return Err(ConfigError::NoShips);
        }
        for spec in &self.ships {
            if spec.length == 0 {
                return Err(ConfigError::ZeroLengthShip);
            }
            if spec.length > self.width && spec.length > self.height {
                return Err(ConfigError::ShipTooLong {
                    length: spec.length,
                    width: self.width,
                    height: self.height,
                });
            }
        }
        if self.max_turns_per_player == 0 {
            return Err(ConfigError::ZeroTurns);
        }
        Ok(shape)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.shape().map(|_| ())
    }

    /// An empty battlefield for player `id` with this grid and manifest.
    pub fn battlefield(&self, id: impl Into<String>) -> Result<Battlefield, ConfigError> {
        Ok(Battlefield::new(id, self.shape()?, self.ships.clone()))
    }

    /// Replace the manifest with `count` identical ships.
    pub fn with_uniform_ships(mut self, count: usize, spec: ShipSpec) -> Self {
        self.ships = vec![spec; count];
        self
    }
}

impl FromStr for ShipSpec {
    type Err = ConfigError;

    /// `3` or `3:one` is a sink-in-one ship of length 3, `3:full` has to be
    /// hit on every part.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ConfigError::InvalidShipSpec(s.to_string());
        let (length, mode) = match s.trim().split_once(':') {
            Some((length, mode)) => (length, Some(mode)),
            None => (s.trim(), None),
        };
        let length: usize = length.parse().map_err(|_| invalid())?;
        if length == 0 {
            return Err(ConfigError::ZeroLengthShip);
        }
        let sink_in_one_hit = match mode.map(str::to_ascii_lowercase).as_deref() {
            None | Some("one") => true,
            Some("full") => false,
            Some(_) => return Err(invalid()),
        };
        Ok(ShipSpec::new(length, sink_in_one_hit))
    }
}
