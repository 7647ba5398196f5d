use alloc::{
    format,
    string::{String, ToString},
};
use rand::rngs::SmallRng;

use crate::core::{
    common::GameError,
    launcher::{MissileLauncher, ShootResponse, StandardMissileLauncher},
};
use crate::manager::{GameState, Outcome, PlayerManager};

/// What happened during one turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnReport {
    pub shooter: String,
    pub target: String,
    pub response: ShootResponse,
    pub state: GameState,
}

/// Sequences rounds and turns over a [`PlayerManager`].
pub struct Battleships<L: MissileLauncher = StandardMissileLauncher> {
    manager: PlayerManager,
    launcher: L,
    state: GameState,
}

impl Battleships {
    pub fn new(manager: PlayerManager) -> Self {
        Self::with_launcher(manager, StandardMissileLauncher)
    }
}

impl<L: MissileLauncher> Battleships<L> {
    pub fn with_launcher(manager: PlayerManager, launcher: L) -> Self {
        Self {
            manager,
            launcher,
            state: GameState::Idle,
        }
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn manager(&self) -> &PlayerManager {
        &self.manager
    }

    pub fn manager_mut(&mut self) -> &mut PlayerManager {
        &mut self.manager
    }

    pub fn outcome(&self) -> Option<&Outcome> {
        self.manager.outcome()
    }

    /// Place all ships and move to `Playing`. Only allowed from `Idle`, so a
    /// finished round has to go through [`Battleships::finish_round`] first.
    pub fn begin_round(&mut self, rng: &mut SmallRng) -> Result<(), GameError> {
        if self.state != GameState::Idle {
            return Err(GameError::RoundNotFinished);
        }
        self.manager.init(rng)?;
        self.state = GameState::Playing;
        Ok(())
    }

    /// Whether the player about to shoot is a computer.
    pub fn shooter_is_automated(&mut self, rng: &mut SmallRng) -> bool {
        self.manager.shooter(rng).is_automated()
    }

    /// Play one turn: show the shooter the board, take its coordinate, fire
    /// and let the manager settle the result.
    pub fn take_turn(&mut self, rng: &mut SmallRng) -> anyhow::Result<TurnReport> {
        if self.state != GameState::Playing {
            return Err(GameError::NotPlaying.into());
        }
        let player_count = self.manager.players().len();
        let turns_taken = self.manager.turns() / player_count;
        let turns_allowed = self.manager.max_turns_per_player();

        let (shooter, target) = self.manager.combatants_mut(rng);
        shooter.display_message("Your turn!")?;
        target.display_message(&format!("{}'s turn", shooter.id()))?;
        shooter.display_battlefields(target.battlefield(), false)?;
        shooter.display_status(target.battlefield(), turns_taken, turns_allowed)?;

        let coordinate = shooter.select_target(rng, target.battlefield())?;
        if let Err(e) = target.battlefield().check_target(&coordinate) {
            log::warn!("{} chose {}: {}", shooter.id(), coordinate, e);
            return Err(GameError::InvalidTarget {
                player: shooter.id().to_string(),
                coordinate,
            }
            .into());
        }
        let response = self.launcher.shoot_at(target.battlefield_mut(), coordinate);
        let shooter = shooter.id().to_string();
        let target = target.id().to_string();

        self.state = self.manager.end_turn(&response)?;
        Ok(TurnReport {
            shooter,
            target,
            response,
            state: self.state,
        })
    }

    /// Play turns until the round is over, without any pacing.
    pub fn play_round(&mut self, rng: &mut SmallRng) -> anyhow::Result<Outcome> {
        self.begin_round(rng)?;
        while self.state == GameState::Playing {
            self.take_turn(rng)?;
        }
        self.outcome()
            .cloned()
            .ok_or_else(|| GameError::NotPlaying.into())
    }

    pub fn prompt_play_again(&mut self) -> anyhow::Result<bool> {
        self.manager.prompt_play_again()
    }

    /// After a round: reset for the next one, or exit.
    pub fn finish_round(&mut self, play_again: bool) -> GameState {
        self.state = if play_again {
            self.manager.reset();
            GameState::Idle
        } else {
            GameState::Exit
        };
        self.state
    }
}
