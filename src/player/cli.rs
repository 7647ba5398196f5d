#![cfg(feature = "std")]

use std::boxed::Box;
use std::string::ToString;
use std::vec::Vec;

use rand::rngs::SmallRng;

use crate::core::{battlefield::Battlefield, grid::Vector, launcher::ShootResponse};
use crate::player::Player;
use crate::ui::Console;

/// A person at the console.
pub struct HumanPlayer {
    battlefield: Battlefield,
    console: Box<dyn Console>,
    fired: Vec<Vector>,
    dead: bool,
}

impl HumanPlayer {
    pub fn new(battlefield: Battlefield, console: Box<dyn Console>) -> Self {
        Self {
            battlefield,
            console,
            fired: Vec::new(),
            dead: false,
        }
    }

    /// Coordinates this player fired at this round, oldest first.
    pub fn fired(&self) -> &[Vector] {
        &self.fired
    }
}

impl Player for HumanPlayer {
    fn battlefield(&self) -> &Battlefield {
        &self.battlefield
    }

    fn battlefield_mut(&mut self) -> &mut Battlefield {
        &mut self.battlefield
    }

    fn is_dead(&self) -> bool {
        self.dead
    }

    fn select_target(&mut self, _rng: &mut SmallRng, target: &Battlefield) -> anyhow::Result<Vector> {
        let coord = self.console.prompt_coordinates(target)?;
        self.fired.push(coord);
        Ok(coord)
    }

    fn handle_shooter_response(&mut self, response: &ShootResponse) -> anyhow::Result<()> {
        let mut message = response.message().to_string();
        if response.sunk() {
            message.push_str(" Ship sunk!");
        }
        self.console.display_message(&message)?;
        Ok(())
    }

    fn handle_targeted_response(&mut self, response: &ShootResponse) -> anyhow::Result<()> {
        let message = if response.is_hit() {
            self.dead = self.battlefield.all_sunk();
            "You were hit!"
        } else {
            "They missed!"
        };
        self.console.display_message(message)?;
        Ok(())
    }

    fn reset(&mut self) {
        self.fired.clear();
        self.battlefield.reset();
        self.dead = false;
    }

    fn display_message(&mut self, message: &str) -> anyhow::Result<()> {
        self.console.display_message(message)?;
        Ok(())
    }

    fn display_battlefields(&mut self, targeted: &Battlefield, reveal: bool) -> anyhow::Result<()> {
        self.console
            .display_battlefields(targeted, &self.battlefield, reveal)?;
        Ok(())
    }

    fn display_status(
        &mut self,
        targeted: &Battlefield,
        turns_taken: usize,
        turns_allowed: usize,
    ) -> anyhow::Result<()> {
        self.console.display_remaining(
            targeted.remaining_ships().count(),
            targeted.ships().len(),
            turns_allowed.saturating_sub(turns_taken),
        )?;
        Ok(())
    }

    fn prompt_play_again(&mut self) -> anyhow::Result<bool> {
        Ok(self.console.prompt_bool("Play again?")?)
    }
}
