//! Combat Module
//!
//! Resolves the scripted encounter in the player's current room. An encounter
//! is entered whenever the room's fight is active: the player picks an attack
//! once, then blows are exchanged with that same damage until one side drops.

use anyhow::{Context, Result, bail};
use log::info;

use crate::health::{LifeState, LivingEntity};
use crate::item::ItemHolder;
use crate::repl::input::{PromptPolicy, Prompter, prompt_with_policy};
use crate::{GameState, View, ViewItem};

/// How the player chose to attack.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Attack {
    Punch,
    Swing,
}
impl Attack {
    /// Accepts any answer mentioning "punch" or "swing".
    pub fn from_answer(answer: &str) -> Option<Attack> {
        let answer = answer.to_lowercase();
        if answer.contains("punch") {
            Some(Attack::Punch)
        } else if answer.contains("swing") {
            Some(Attack::Swing)
        } else {
            None
        }
    }
}

/// How an encounter ended.
#[derive(Copy, Clone, Debug, PartialEq, Eq, variantly::Variantly)]
pub enum CombatOutcome {
    Victory { rounds: u32, points: u32 },
    Death { rounds: u32 },
}

/// Run the current room's encounter, if one is active.
///
/// Returns `None` when there is nothing to fight.
///
/// # Errors
/// - if the room or its enemy is missing, or input closes mid-fight
pub fn fight_check(world: &mut GameState, view: &mut View, prompter: &mut dyn Prompter) -> Result<Option<CombatOutcome>> {
    let room = world.player_room_ref()?;
    if !room.fight.active {
        return Ok(None);
    }
    let enemy = room
        .fight
        .enemy
        .clone()
        .with_context(|| format!("room '{}' has an active fight with no enemy", room.id))?;
    info!("encounter with '{enemy}' in {}", room.id);
    view.push(ViewItem::Encounter(enemy));

    let damage = choose_damage(world, view, prompter)?;
    resolve_fight(world, view, damage).map(Some)
}

/// Ask the player how to attack and work out the damage per round.
///
/// # Errors
/// - if input closes, or a chosen weapon is missing from the item catalog
pub fn choose_damage(world: &GameState, view: &mut View, prompter: &mut dyn Prompter) -> Result<i32> {
    let attack = prompt_with_policy(
        view,
        prompter,
        PromptPolicy::RetryUntilValid,
        "Do you want to punch or swing? ",
        |_| "invalid command\nDo you want to punch or swing? ".to_string(),
        Attack::from_answer,
    )?
    .context("retrying prompt returned no attack")?;

    let player = &world.player;
    match attack {
        Attack::Punch => Ok(player.stats.attack),
        Attack::Swing if player.inventory.is_empty() => {
            view.push(ViewItem::CombatNote("You have nothing so fight like a man".into()));
            Ok(player.stats.attack)
        },
        Attack::Swing => {
            view.push(ViewItem::CombatNote("What item do you want to use?".into()));
            view.push(ViewItem::Inventory(player.inventory.clone()));
            let weapon = prompt_with_policy(
                view,
                prompter,
                PromptPolicy::RetryUntilValid,
                "> ",
                |bad| format!("Dont you wish you had {bad}\nTry again: "),
                |answer| player.contains_item(answer).then(|| answer.to_string()),
            )?
            .context("retrying prompt returned no weapon")?;
            let damage = world.item_ref(&weapon)?.damage;
            info!("player swings the {weapon} for {damage}");
            Ok(damage)
        },
    }
}

/// Exchange blows with the room's enemy until one side is dead.
///
/// The player strikes first each round. An enemy brought to zero or below
/// ends the fight immediately: the room's fight is cleared and its points are
/// awarded. Otherwise it strikes back, and a player at zero or below ends the
/// fight in death with nothing else changed.
///
/// # Errors
/// - if the room or enemy is missing, or neither side can ever hurt the other
pub fn resolve_fight(world: &mut GameState, view: &mut View, damage: i32) -> Result<CombatOutcome> {
    let room_id = world.player.position.location.clone();
    let enemy_id = world
        .player_room_ref()?
        .fight
        .enemy
        .clone()
        .with_context(|| format!("room '{room_id}' has no enemy to fight"))?;
    let mut enemy = world
        .npcs
        .get(&enemy_id)
        .cloned()
        .with_context(|| format!("enemy '{enemy_id}' not found in NPC catalog"))?;

    if damage <= 0 && enemy.attack <= 0 {
        bail!("fight with '{enemy_id}' can never end: neither side deals damage");
    }

    let mut rounds = 0;
    loop {
        rounds += 1;
        view.push(ViewItem::CombatStatus {
            health: world.player.stats.health,
        });

        enemy.take_damage(damage);
        world.npcs.insert(enemy_id.clone(), enemy.clone());
        view.push(ViewItem::CombatHit {
            enemy: enemy_id.clone(),
            damage,
        });
        info!("round {rounds}: player hits {enemy_id} for {damage}, {} left", enemy.health);

        if enemy.life_state() == LifeState::Dead {
            world.room_mut(&room_id)?.fight.active = false;
            world.player.award_points(enemy.points);
            view.push(ViewItem::EnemyDefeated {
                enemy: enemy_id.clone(),
                points: enemy.points,
            });
            info!("player defeated {enemy_id} in {rounds} rounds (+{} points)", enemy.points);
            return Ok(CombatOutcome::Victory {
                rounds,
                points: enemy.points,
            });
        }

        world.player.take_damage(enemy.attack);
        view.push(ViewItem::CombatHurt { damage: enemy.attack });
        info!(
            "round {rounds}: {enemy_id} hits player for {}, {} left",
            enemy.attack, world.player.stats.health
        );

        if world.player.life_state() == LifeState::Dead {
            view.push(ViewItem::PlayerDied);
            info!("player killed by {enemy_id} after {rounds} rounds");
            return Ok(CombatOutcome::Death { rounds });
        }
    }
}
