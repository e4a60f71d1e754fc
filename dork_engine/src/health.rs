//! Health Module
//!
//! Shared life/death bookkeeping for the player and NPCs. Health is a signed
//! value: a heavy blow can push it below zero, and anything at or below zero
//! counts as dead.

/// Whether an entity is still standing.
#[derive(Copy, Clone, Debug, PartialEq, Eq, variantly::Variantly)]
pub enum LifeState {
    Alive,
    Dead,
}

/// Anything with health that can be hurt in a fight.
pub trait LivingEntity {
    fn health(&self) -> i32;
    fn set_health(&mut self, health: i32);

    /// Subtract `amount` from health. Does not clamp at zero.
    fn take_damage(&mut self, amount: i32) {
        self.set_health(self.health().saturating_sub(amount));
    }

    /// Return whether this entity is alive or dead.
    fn life_state(&self) -> LifeState {
        if self.health() > 0 {
            LifeState::Alive
        } else {
            LifeState::Dead
        }
    }
}
