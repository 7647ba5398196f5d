use rand::rngs::SmallRng;

use crate::core::{
    ai::Targeting, battlefield::Battlefield, grid::Vector, launcher::ShootResponse,
};

use super::Player;

/// Computer opponent driven by [`Targeting`].
pub struct AiPlayer {
    battlefield: Battlefield,
    targeting: Targeting,
    dead: bool,
}

impl AiPlayer {
    pub fn new(battlefield: Battlefield) -> Self {
        Self {
            battlefield,
            targeting: Targeting::new(),
            dead: false,
        }
    }

    pub fn targeting(&self) -> &Targeting {
        &self.targeting
    }
}

impl Player for AiPlayer {
    fn battlefield(&self) -> &Battlefield {
        &self.battlefield
    }

    fn battlefield_mut(&mut self) -> &mut Battlefield {
        &mut self.battlefield
    }

    fn is_dead(&self) -> bool {
        self.dead
    }

    fn is_automated(&self) -> bool {
        true
    }

    fn select_target(&mut self, rng: &mut SmallRng, target: &Battlefield) -> anyhow::Result<Vector> {
        Ok(self.targeting.next_target(target.shape(), rng)?)
    }

    fn handle_shooter_response(&mut self, response: &ShootResponse) -> anyhow::Result<()> {
        self.targeting.record(response);
        Ok(())
    }

    fn handle_targeted_response(&mut self, response: &ShootResponse) -> anyhow::Result<()> {
        if response.is_hit() {
            self.dead = self.battlefield.all_sunk();
        }
        Ok(())
    }

    fn reset(&mut self) {
        self.targeting.reset();
        self.battlefield.reset();
        self.dead = false;
    }
}
