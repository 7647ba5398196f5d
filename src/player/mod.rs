//! Player trait and implementations
//!
//! - AiPlayer: distance-driven hunt heuristic
//! - HumanPlayer: console prompt (std only)

use rand::rngs::SmallRng;

use crate::core::{battlefield::Battlefield, grid::Vector, launcher::ShootResponse};

/// Interface implemented by different player types.
///
/// The display hooks do nothing by default; only players with a screen
/// override them.
pub trait Player {
    /// Name shown to the other players. Same as the battlefield id.
    fn id(&self) -> &str {
        self.battlefield().id()
    }

    fn battlefield(&self) -> &Battlefield;

    fn battlefield_mut(&mut self) -> &mut Battlefield;

    /// True once every ship on the player's own battlefield is sunk.
    fn is_dead(&self) -> bool;

    /// Automated players are paced by the session before they fire.
    fn is_automated(&self) -> bool {
        false
    }

    /// Choose the next coordinate to fire at on `target`.
    fn select_target(&mut self, rng: &mut SmallRng, target: &Battlefield) -> anyhow::Result<Vector>;

    /// Feedback for the shot this player just fired.
    fn handle_shooter_response(&mut self, response: &ShootResponse) -> anyhow::Result<()>;

    /// Feedback for a shot fired at this player's battlefield.
    fn handle_targeted_response(&mut self, response: &ShootResponse) -> anyhow::Result<()>;

    /// Clear history, the dead flag and the battlefield for a new round.
    fn reset(&mut self);

    fn display_message(&mut self, _message: &str) -> anyhow::Result<()> {
        Ok(())
    }

    /// Show `targeted` next to the player's own battlefield. With `reveal`
    /// the opponent's ships are drawn too.
    fn display_battlefields(&mut self, _targeted: &Battlefield, _reveal: bool) -> anyhow::Result<()> {
        Ok(())
    }

    /// Ships left on `targeted` and turns left for this player.
    fn display_status(
        &mut self,
        _targeted: &Battlefield,
        _turns_taken: usize,
        _turns_allowed: usize,
    ) -> anyhow::Result<()> {
        Ok(())
    }

    fn prompt_play_again(&mut self) -> anyhow::Result<bool> {
        Ok(true)
    }
}

mod ai;
pub use ai::AiPlayer;

#[cfg(feature = "std")]
mod cli;
#[cfg(feature = "std")]
pub use cli::HumanPlayer;
