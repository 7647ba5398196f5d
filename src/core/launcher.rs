//! Shot resolution against a battlefield.

use core::fmt;

use crate::core::{battlefield::Battlefield, grid::Vector};

/// Human-facing proximity label for a shot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum ShootMessage {
    Hit,
    Hot,
    Warm,
    Cold,
}

impl ShootMessage {
    /// 0 is a hit, 1-2 hot, 3-4 warm, anything further cold.
    pub fn from_distance(distance: usize) -> Self {
        match distance {
            0 => ShootMessage::Hit,
            1..=2 => ShootMessage::Hot,
            3..=4 => ShootMessage::Warm,
            _ => ShootMessage::Cold,
        }
    }
}

impl fmt::Display for ShootMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(match self {
            ShootMessage::Hit => "Hit!",
            ShootMessage::Hot => "Hot",
            ShootMessage::Warm => "Warm",
            ShootMessage::Cold => "Cold",
        })
    }
}

/// Outcome of one shot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShootResponse {
    coordinate: Vector,
    distance: usize,
    sunk: bool,
    ship: Option<usize>,
}

impl ShootResponse {
    /// `ship` is the index, in the target battlefield, of the ship that was
    /// hit or came closest.
    pub fn new(coordinate: Vector, distance: usize, sunk: bool, ship: Option<usize>) -> Self {
        Self {
            coordinate,
            distance,
            sunk,
            ship,
        }
    }

    /// Where the shot landed.
    pub fn coordinate(&self) -> Vector {
        self.coordinate
    }

    /// Distance to the nearest surviving ship part at the time of the shot.
    pub fn distance(&self) -> usize {
        self.distance
    }

    /// Whether this shot sank a ship.
    pub fn sunk(&self) -> bool {
        self.sunk
    }

    pub fn is_hit(&self) -> bool {
        self.distance == 0
    }

    pub fn ship(&self) -> Option<usize> {
        self.ship
    }

    pub fn message(&self) -> ShootMessage {
        ShootMessage::from_distance(self.distance)
    }
}

/// Resolves shots against a battlefield.
pub trait MissileLauncher {
    /// Fire at `target`, which the caller has already checked is on the grid
    /// and has not been fired at before.
    fn shoot_at(&self, battlefield: &mut Battlefield, target: Vector) -> ShootResponse;
}

/// Reports the Manhattan distance to the nearest surviving ship.
#[derive(Debug, Default, Clone, Copy)]
pub struct StandardMissileLauncher;

impl MissileLauncher for StandardMissileLauncher {
    /// Logs the shot, then checks surviving ships in order. The first ship
    /// with a part on `target` is hit and the search stops; otherwise the
    /// closest ship (first one on ties) is reported.
    ///
    /// Panics if the battlefield has no surviving ships, since a defeated
    /// player is never targeted.
    fn shoot_at(&self, battlefield: &mut Battlefield, target: Vector) -> ShootResponse {
        battlefield.record_shot(target);
        assert!(
            !battlefield.all_sunk(),
            "battlefield {} has no surviving ships to shoot at",
            battlefield.id()
        );

        let mut closest: Option<(usize, usize)> = None;
        for (index, ship) in battlefield.ships_mut().iter_mut().enumerate() {
            if ship.sunk() {
                continue;
            }
            let distance = ship.check_hit(&target);
            if distance == 0 {
                log::debug!("shot at {} hit ship {}, sunk: {}", target, index, ship.sunk());
                return ShootResponse::new(target, 0, ship.sunk(), Some(index));
            }
            if closest.map_or(true, |(_, best)| distance < best) {
                closest = Some((index, distance));
            }
        }

        let (index, distance) = closest.unwrap_or((0, usize::MAX));
        log::debug!("shot at {} missed, nearest ship {} is {} away", target, index, distance);
        ShootResponse::new(target, distance, false, Some(index))
    }
}
