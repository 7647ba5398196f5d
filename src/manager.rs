//! Turn rotation and round bookkeeping.

use alloc::{boxed::Box, string::String, vec::Vec};
use rand::Rng;

use crate::core::{
    common::{ConfigError, GameError, PlacementError},
    launcher::ShootResponse,
};
use crate::player::Player;

/// Where a game is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    Idle,
    Playing,
    GameOver,
    /// Players declined another round.
    Exit,
}

/// How a round ended.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Outcome {
    /// Id of the player that sank the last ship.
    Winner(String),
    /// The turn limit ran out.
    Draw,
}

/// Owns the players and decides who shoots at whom.
pub struct PlayerManager {
    players: Vec<Box<dyn Player>>,
    shooter: Option<usize>,
    target: Option<usize>,
    turns: usize,
    max_turns_per_player: usize,
    outcome: Option<Outcome>,
}

impl PlayerManager {
    pub fn new(
        players: Vec<Box<dyn Player>>,
        max_turns_per_player: usize,
    ) -> Result<Self, ConfigError> {
        if players.len() < 2 {
            return Err(ConfigError::TooFewPlayers(players.len()));
        }
        if max_turns_per_player == 0 {
            return Err(ConfigError::ZeroTurns);
        }
        Ok(Self {
            players,
            shooter: None,
            target: None,
            turns: 0,
            max_turns_per_player,
            outcome: None,
        })
    }

    pub fn players(&self) -> &[Box<dyn Player>] {
        &self.players
    }

    pub fn player(&self, index: usize) -> Option<&dyn Player> {
        self.players.get(index).map(|p| &**p)
    }

    /// Turns taken this round, counting every player.
    pub fn turns(&self) -> usize {
        self.turns
    }

    pub fn max_turns_per_player(&self) -> usize {
        self.max_turns_per_player
    }

    /// Turns after which the round is a draw.
    pub fn turns_allowed(&self) -> usize {
        self.max_turns_per_player * self.players.len()
    }

    /// Set once the round is over.
    pub fn outcome(&self) -> Option<&Outcome> {
        self.outcome.as_ref()
    }

    /// Start a round: zero the turn counter and place every player's ships.
    pub fn init<R: Rng>(&mut self, rng: &mut R) -> Result<(), PlacementError> {
        self.turns = 0;
        self.outcome = None;
        for player in self.players.iter_mut() {
            player.battlefield_mut().create_ships(rng)?;
        }
        log::info!("round started with {} players", self.players.len());
        Ok(())
    }

    /// Current shooter and target indices. On first use the shooter is
    /// drawn at random and the target is the player after it.
    pub fn select_roles<R: Rng>(&mut self, rng: &mut R) -> (usize, usize) {
        if let (Some(shooter), Some(target)) = (self.shooter, self.target) {
            return (shooter, target);
        }
        let shooter = rng.random_range(0..self.players.len());
        let target = (shooter + 1) % self.players.len();
        log::debug!("{} shoots first", self.players[shooter].id());
        self.shooter = Some(shooter);
        self.target = Some(target);
        (shooter, target)
    }

    pub fn shooter<R: Rng>(&mut self, rng: &mut R) -> &dyn Player {
        let (shooter, _) = self.select_roles(rng);
        &*self.players[shooter]
    }

    pub fn target<R: Rng>(&mut self, rng: &mut R) -> &dyn Player {
        let (_, target) = self.select_roles(rng);
        &*self.players[target]
    }

    /// Shooter and target, both mutable.
    pub fn combatants_mut<R: Rng>(
        &mut self,
        rng: &mut R,
    ) -> (&mut dyn Player, &mut dyn Player) {
        let (shooter, target) = self.select_roles(rng);
        self.pair_mut(shooter, target)
    }

    /// Hand the response to both combatants and move the turn on.
    ///
    /// Returns `GameOver` when the target has no ships left or the turn
    /// limit is reached; both battlefields are then revealed to everyone.
    pub fn end_turn(&mut self, response: &ShootResponse) -> anyhow::Result<GameState> {
        let (Some(shooter), Some(target)) = (self.shooter, self.target) else {
            return Err(GameError::NotPlaying.into());
        };
        self.turns += 1;
        self.players[shooter].handle_shooter_response(response)?;
        self.players[target].handle_targeted_response(response)?;

        if self.players[target].is_dead() {
            let winner = String::from(self.players[shooter].id());
            log::info!("{} wins after {} turns", winner, self.turns);
            self.outcome = Some(Outcome::Winner(winner));
            self.announce(shooter, target)?;
            return Ok(GameState::GameOver);
        }
        if self.turns >= self.turns_allowed() {
            log::info!("turn limit of {} reached", self.turns_allowed());
            self.outcome = Some(Outcome::Draw);
            self.announce(shooter, target)?;
            return Ok(GameState::GameOver);
        }

        let count = self.players.len();
        self.shooter = Some((shooter + 1) % count);
        self.target = Some((target + 1) % count);
        Ok(GameState::Playing)
    }

    /// Ask every player for another round. Everyone has to agree.
    pub fn prompt_play_again(&mut self) -> anyhow::Result<bool> {
        let mut again = true;
        for player in self.players.iter_mut() {
            again &= player.prompt_play_again()?;
        }
        Ok(again)
    }

    /// Send `message` to every player.
    pub fn display_message(&mut self, message: &str) -> anyhow::Result<()> {
        for player in self.players.iter_mut() {
            player.display_message(message)?;
        }
        Ok(())
    }

    /// Back to the state before [`PlayerManager::init`].
    pub fn reset(&mut self) {
        for player in self.players.iter_mut() {
            player.reset();
        }
        self.shooter = None;
        self.target = None;
        self.turns = 0;
        self.outcome = None;
    }

    fn pair_mut(&mut self, first: usize, second: usize) -> (&mut dyn Player, &mut dyn Player) {
        debug_assert_ne!(first, second);
        if first < second {
            let (low, high) = self.players.split_at_mut(second);
            (&mut *low[first], &mut *high[0])
        } else {
            let (low, high) = self.players.split_at_mut(first);
            (&mut *high[0], &mut *low[second])
        }
    }

    // Reveal the next player's battlefield to each player, then tell them
    // how it ended.
    fn announce(&mut self, shooter: usize, target: usize) -> anyhow::Result<()> {
        let count = self.players.len();
        for index in 0..count {
            let (player, opponent) = self.pair_mut(index, (index + 1) % count);
            player.display_battlefields(opponent.battlefield(), true)?;
        }
        if matches!(self.outcome, Some(Outcome::Winner(_))) {
            self.players[shooter].display_message("You Win!")?;
            self.players[target].display_message("You Lose!")?;
        } else {
            self.display_message("No winners!")?;
        }
        Ok(())
    }
}
