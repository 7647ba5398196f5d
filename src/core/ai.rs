//! Shot selection for the computer opponent.
//!
//! The AI only learns the distance from each shot to the nearest surviving
//! ship. It remembers those answers until it sinks a ship and uses them to
//! close in on the next one.

use alloc::{collections::BTreeSet, vec::Vec};
use rand::{seq::IndexedRandom, Rng};

use crate::core::{
    common::TargetingError,
    grid::{NeighborRun, Shape, Vector},
    launcher::ShootResponse,
};

/// A coordinate the AI fired at and the distance it was told.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shot {
    pub coordinate: Vector,
    pub distance: usize,
}

/// What the AI is doing this turn. Derived from the shot memory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HuntState {
    /// Nothing remembered: fire anywhere not fired at yet.
    Search,
    /// Two or more hits: extend the line they form.
    FollowUp,
    /// Radiate out from the closest shot by its distance.
    Probe,
}

impl HuntState {
    pub fn from_shots(shots: &[Shot]) -> Self {
        if shots.is_empty() {
            HuntState::Search
        } else if shots.iter().filter(|shot| shot.distance == 0).count() >= 2 {
            HuntState::FollowUp
        } else {
            HuntState::Probe
        }
    }
}

/// Shot memory and fired history of one AI player.
#[derive(Debug, Default, Clone)]
pub struct Targeting {
    shots: Vec<Shot>,
    fired: Vec<Vector>,
}

impl Targeting {
    pub fn new() -> Self {
        Self::default()
    }

    /// Shots remembered since the last ship was sunk.
    pub fn shots(&self) -> &[Shot] {
        &self.shots
    }

    /// Every coordinate chosen this game, oldest first.
    pub fn fired(&self) -> &[Vector] {
        &self.fired
    }

    pub fn has_fired(&self, coord: &Vector) -> bool {
        self.fired.contains(coord)
    }

    pub fn state(&self) -> HuntState {
        HuntState::from_shots(&self.shots)
    }

    /// Coordinates `state` would choose from, none of them fired at before.
    pub fn candidates(&self, shape: &Shape, state: HuntState) -> Vec<Vector> {
        match state {
            HuntState::Search => self.search_candidates(shape),
            HuntState::FollowUp => self.line_candidates(shape),
            HuntState::Probe => self.probe_candidates(shape),
        }
    }

    /// Pick the next coordinate to fire at and remember it as fired.
    ///
    /// When the current state has no candidates it falls back from
    /// follow-up to probe, and from probe to search.
    pub fn next_target<R: Rng + ?Sized>(
        &mut self,
        shape: &Shape,
        rng: &mut R,
    ) -> Result<Vector, TargetingError> {
        let mut state = self.state();
        loop {
            let candidates = self.candidates(shape, state);
            if let Some(&coord) = candidates.choose(rng) {
                log::debug!("ai {:?}: {} of {} candidates", state, coord, candidates.len());
                self.fired.push(coord);
                return Ok(coord);
            }
            state = match state {
                HuntState::FollowUp => HuntState::Probe,
                HuntState::Probe => HuntState::Search,
                HuntState::Search => return Err(TargetingError::Exhausted),
            };
        }
    }

    /// Learn from the answer to our own shot. Sinking a ship wipes the
    /// memory so the next turn searches afresh.
    pub fn record(&mut self, response: &ShootResponse) {
        if response.sunk() {
            self.shots.clear();
        } else {
            self.shots.push(Shot {
                coordinate: response.coordinate(),
                distance: response.distance(),
            });
        }
    }

    /// Forget everything, for a new round.
    pub fn reset(&mut self) {
        self.shots.clear();
        self.fired.clear();
    }

    fn search_candidates(&self, shape: &Shape) -> Vec<Vector> {
        shape
            .all_positions()
            .into_iter()
            .filter(|coord| !self.has_fired(coord))
            .collect()
    }

    // The two most recent hits give the axis. On that axis, the cells just
    // beyond both ends of the run of hits through the latest hit.
    fn line_candidates(&self, shape: &Shape) -> Vec<Vector> {
        let hits: Vec<Vector> = self
            .shots
            .iter()
            .filter(|shot| shot.distance == 0)
            .map(|shot| shot.coordinate)
            .collect();
        let [.., previous, latest] = hits.as_slice() else {
            return Vec::new();
        };

        let mut candidates = Vec::with_capacity(2);
        if previous.row == latest.row {
            let row = latest.row;
            let cols: BTreeSet<usize> = hits.iter().filter(|h| h.row == row).map(|h| h.col).collect();
            let (low, high) = contiguous_span(&cols, latest.col);
            if let Some(left) = low.checked_sub(1) {
                candidates.push(Vector::new(left, row));
            }
            if high + 1 < shape.width() {
                candidates.push(Vector::new(high + 1, row));
            }
        } else if previous.col == latest.col {
            let col = latest.col;
            let rows: BTreeSet<usize> = hits.iter().filter(|h| h.col == col).map(|h| h.row).collect();
            let (low, high) = contiguous_span(&rows, latest.row);
            if let Some(top) = low.checked_sub(1) {
                candidates.push(Vector::new(col, top));
            }
            if high + 1 < shape.height() {
                candidates.push(Vector::new(col, high + 1));
            }
        }
        candidates.retain(|coord| !self.has_fired(coord));
        candidates
    }

    // Farthest cell of each run from the closest shot, run length being that
    // shot's distance (1 for a hit).
    fn probe_candidates(&self, shape: &Shape) -> Vec<Vector> {
        let Some(closest) = self.shots.iter().min_by_key(|shot| shot.distance) else {
            return Vec::new();
        };
        shape
            .neighbor_runs(closest.coordinate, closest.distance.max(1))
            .iter()
            .filter_map(NeighborRun::farthest)
            .filter(|coord| !self.has_fired(coord))
            .collect()
    }
}

/// Lowest and highest values of the unbroken sequence in `values` through `start`.
fn contiguous_span(values: &BTreeSet<usize>, start: usize) -> (usize, usize) {
    let mut low = start;
    while low > 0 && values.contains(&(low - 1)) {
        low -= 1;
    }
    let mut high = start;
    while values.contains(&(high + 1)) {
        high += 1;
    }
    (low, high)
}
