//! A player's battlefield: grid shape, placed ships, and the shots fired at it.

use alloc::{collections::BTreeSet, string::String, vec::Vec};
use rand::{seq::IndexedRandom, Rng};

use crate::core::{
    common::{CoordinateError, PlacementError},
    grid::{Shape, Vector},
    ship::{Ship, ShipSpec},
};

pub struct Battlefield {
    id: String,
    shape: Shape,
    manifest: Vec<ShipSpec>,
    ships: Vec<Ship>,
    enemy_coordinates: Vec<Vector>,
}

impl Battlefield {
    /// Create an empty battlefield. Ships from `manifest` are placed by
    /// [`Battlefield::create_ships`].
    pub fn new(id: impl Into<String>, shape: Shape, manifest: Vec<ShipSpec>) -> Self {
        Self {
            id: id.into(),
            shape,
            manifest,
            ships: Vec::new(),
            enemy_coordinates: Vec::new(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    pub fn manifest(&self) -> &[ShipSpec] {
        &self.manifest
    }

    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    pub fn ships_mut(&mut self) -> &mut [Ship] {
        &mut self.ships
    }

    /// Every coordinate the opponent has fired at, oldest first.
    pub fn enemy_coordinates(&self) -> &[Vector] {
        &self.enemy_coordinates
    }

    pub fn has_been_shot(&self, coord: &Vector) -> bool {
        self.enemy_coordinates.contains(coord)
    }

    /// Append a coordinate to the log of opponent shots.
    pub fn record_shot(&mut self, coord: Vector) {
        self.enemy_coordinates.push(coord);
    }

    /// Check that `coord` is on the grid and has not been fired at yet.
    pub fn check_target(&self, coord: &Vector) -> Result<(), CoordinateError> {
        if self.shape.is_out_of_bounds(coord) {
            return Err(CoordinateError::OutOfBounds(*coord));
        }
        if self.has_been_shot(coord) {
            return Err(CoordinateError::AlreadyShot(*coord));
        }
        Ok(())
    }

    /// Ships that are still afloat.
    pub fn remaining_ships(&self) -> impl Iterator<Item = &Ship> {
        self.ships.iter().filter(|ship| !ship.sunk())
    }

    pub fn all_sunk(&self) -> bool {
        self.remaining_ships().next().is_none()
    }

    /// The ship occupying `coord`, if any.
    pub fn ship_at(&self, coord: &Vector) -> Option<&Ship> {
        self.ships.iter().find(|ship| ship.occupies(coord))
    }

    /// All cells taken by placed ships.
    pub fn occupied(&self) -> BTreeSet<Vector> {
        self.ships.iter().flat_map(|ship| ship.positions()).collect()
    }

    /// Remove every ship and forget the opponent's shots.
    pub fn reset(&mut self) {
        self.ships.clear();
        self.enemy_coordinates.clear();
    }

    /// Discard any existing ships and place every ship of the manifest,
    /// one after another.
    pub fn create_ships<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<(), PlacementError> {
        self.ships.clear();
        let manifest = self.manifest.clone();
        for spec in manifest {
            self.place_ship(rng, spec)?;
        }
        log::debug!("battlefield {}: placed {} ships", self.id, self.ships.len());
        Ok(())
    }

    /// Place a single ship at a random free position.
    ///
    /// A head cell is drawn from the free cells; the body is one of the
    /// top/bottom/left/right runs of `length - 1` cells from the head that
    /// fit on the grid and touch no other ship. Gives up after as many
    /// attempts as there are free cells.
    pub fn place_ship<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        spec: ShipSpec,
    ) -> Result<&Ship, PlacementError> {
        let taken = self.occupied();
        let available: Vec<Vector> = self
            .shape
            .all_positions()
            .into_iter()
            .filter(|coord| !taken.contains(coord))
            .collect();
        if available.is_empty() {
            return Err(PlacementError::NoSpace);
        }

        let mut tries = 0;
        while tries < available.len() {
            let head = *available.choose(rng).ok_or(PlacementError::NoSpace)?;
            let body = if spec.length <= 1 {
                Some(Vec::new())
            } else {
                let runs: Vec<_> = self
                    .shape
                    .neighbor_runs(head, spec.length - 1)
                    .into_iter()
                    .filter(|run| run.cells.iter().all(|cell| !taken.contains(cell)))
                    .collect();
                runs.choose(rng).map(|run| run.cells.clone())
            };
            if let Some(body) = body {
                let ship = Ship::new(core::iter::once(head).chain(body), spec.sink_in_one_hit)
                    .map_err(|_| PlacementError::NoRoom)?;
                log::trace!("battlefield {}: ship at {} after {} tries", self.id, head, tries);
                self.ships.push(ship);
                let placed = self.ships.len() - 1;
                return Ok(&self.ships[placed]);
            }
            tries += 1;
        }
        log::debug!(
            "battlefield {}: no room for ship of length {} after {} tries",
            self.id,
            spec.length,
            tries
        );
        Err(PlacementError::NoRoom)
    }

    /// Place a hand-built ship, checking it stays on the grid and clear of
    /// the ships already placed.
    pub fn add_ship(&mut self, ship: Ship) -> Result<(), PlacementError> {
        let taken = self.occupied();
        for coord in ship.positions() {
            if self.shape.is_out_of_bounds(&coord) {
                return Err(PlacementError::OutOfBounds(coord));
            }
            if taken.contains(&coord) {
                return Err(PlacementError::Overlap(coord));
            }
        }
        self.ships.push(ship);
        Ok(())
    }
}
