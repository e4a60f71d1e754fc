//! NPC Module

use crate::Id;
use crate::health::LivingEntity;

/// A hostile character bound to a room's encounter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Npc {
    pub id: Id,
    pub health: i32,
    pub attack: i32,
    /// Points awarded to the player for defeating this NPC.
    pub points: u32,
}
impl LivingEntity for Npc {
    fn health(&self) -> i32 {
        self.health
    }

    fn set_health(&mut self, health: i32) {
        self.health = health;
    }
}
