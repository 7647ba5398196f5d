#![cfg(feature = "std")]

use std::time::Duration;
use std::vec::Vec;

use async_trait::async_trait;
use rand::rngs::SmallRng;

use crate::{
    game::Battleships,
    manager::{GameState, Outcome},
};

/// Pause taken before an automated player fires.
#[async_trait]
pub trait Pacer {
    async fn pause(&self);
}

/// Sleeps for a fixed time so a human can follow the AI.
#[derive(Debug, Clone, Copy)]
pub struct Delay(pub Duration);

impl Delay {
    pub fn from_millis(millis: u64) -> Self {
        Self(Duration::from_millis(millis))
    }
}

#[async_trait]
impl Pacer for Delay {
    async fn pause(&self) {
        tokio::time::sleep(self.0).await;
    }
}

/// No pause at all.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoDelay;

#[async_trait]
impl Pacer for NoDelay {
    async fn pause(&self) {}
}

/// Runs rounds until the players stop, pacing automated shooters.
pub struct Session<P: Pacer = Delay> {
    game: Battleships,
    rng: SmallRng,
    pacer: P,
    max_rounds: Option<usize>,
}

impl<P: Pacer> Session<P> {
    pub fn new(game: Battleships, rng: SmallRng, pacer: P) -> Self {
        Self {
            game,
            rng,
            pacer,
            max_rounds: None,
        }
    }

    /// Stop after `rounds` rounds even if everyone wants to go on.
    pub fn with_max_rounds(mut self, rounds: usize) -> Self {
        self.max_rounds = Some(rounds);
        self
    }

    pub fn game(&self) -> &Battleships {
        &self.game
    }

    pub async fn play_round(&mut self) -> anyhow::Result<Outcome> {
        self.game.begin_round(&mut self.rng)?;
        while self.game.state() == GameState::Playing {
            if self.game.shooter_is_automated(&mut self.rng) {
                self.pacer.pause().await;
            }
            let report = self.game.take_turn(&mut self.rng)?;
            log::info!(
                "{} fired at {} on {}: {}",
                report.shooter,
                report.response.coordinate(),
                report.target,
                report.response.message()
            );
        }
        self.game
            .outcome()
            .cloned()
            .ok_or_else(|| anyhow::anyhow!("round ended without an outcome"))
    }

    /// Play rounds until someone declines another or the round limit is hit.
    /// Returns the outcome of every round played.
    pub async fn run(&mut self) -> anyhow::Result<Vec<Outcome>> {
        let mut outcomes = Vec::new();
        loop {
            let outcome = self.play_round().await?;
            log::info!("round {} finished: {:?}", outcomes.len() + 1, outcome);
            outcomes.push(outcome);
            if self.max_rounds.is_some_and(|max| outcomes.len() >= max) {
                self.game.finish_round(false);
                break;
            }
            let again = self.game.prompt_play_again()?;
            if self.game.finish_round(again) == GameState::Exit {
                break;
            }
        }
        Ok(outcomes)
    }
}
