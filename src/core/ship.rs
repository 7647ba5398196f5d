//! Ships and the parts they are made of.

use alloc::vec::Vec;

use crate::core::{common::ConfigError, grid::Vector};

/// Manifest entry describing a ship to be placed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct ShipSpec {
    pub length: usize,
    /// Any single hit sinks the ship, whatever its length.
    pub sink_in_one_hit: bool,
}

impl ShipSpec {
    pub const fn new(length: usize, sink_in_one_hit: bool) -> Self {
        Self {
            length,
            sink_in_one_hit,
        }
    }
}

/// One cell of a ship.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShipPart {
    position: Vector,
    hit: bool,
}

impl ShipPart {
    pub fn position(&self) -> Vector {
        self.position
    }

    pub fn hit(&self) -> bool {
        self.hit
    }
}

/// A ship placed on a battlefield.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ship {
    parts: Vec<ShipPart>,
    sink_in_one_hit: bool,
    sunk: bool,
}

impl Ship {
    /// Build a ship from its cells. Fails if `positions` is empty.
    pub fn new(
        positions: impl IntoIterator<Item = Vector>,
        sink_in_one_hit: bool,
    ) -> Result<Self, ConfigError> {
        let parts: Vec<ShipPart> = positions
            .into_iter()
            .map(|position| ShipPart {
                position,
                hit: false,
            })
            .collect();
        if parts.is_empty() {
            return Err(ConfigError::ZeroLengthShip);
        }
        Ok(Self {
            parts,
            sink_in_one_hit,
            sunk: false,
        })
    }

    pub fn parts(&self) -> &[ShipPart] {
        &self.parts
    }

    pub fn positions(&self) -> impl Iterator<Item = Vector> + '_ {
        self.parts.iter().map(|part| part.position)
    }

    pub fn len(&self) -> usize {
        self.parts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    pub fn sink_in_one_hit(&self) -> bool {
        self.sink_in_one_hit
    }

    /// Once sunk a ship stays sunk.
    pub fn sunk(&self) -> bool {
        self.sunk
    }

    pub fn hit_count(&self) -> usize {
        self.parts.iter().filter(|part| part.hit).count()
    }

    pub fn occupies(&self, coord: &Vector) -> bool {
        self.parts.iter().any(|part| &part.position == coord)
    }

    /// Smallest Manhattan distance from `target` to any part. Does not mark
    /// anything as hit.
    pub fn distance_to(&self, target: &Vector) -> usize {
        self.parts
            .iter()
            .map(|part| part.position.manhattan(target))
            .min()
            .unwrap_or(usize::MAX)
    }

    /// Resolve a shot against this ship and return the distance to its
    /// nearest part. A distance of 0 marks that part hit and may sink the
    /// ship; firing at an already hit part again still reports 0.
    pub fn check_hit(&mut self, target: &Vector) -> usize {
        let Some(index) = self.parts.iter().position(|part| &part.position == target) else {
            return self.distance_to(target);
        };
        self.parts[index].hit = true;
        if self.sink_in_one_hit || self.parts.iter().all(|part| part.hit) {
            self.sunk = true;
        }
        0
    }
}
