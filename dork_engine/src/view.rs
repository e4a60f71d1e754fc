//! View module.
//! Handlers don't print. They push [`ViewItem`]s describing what happened, and the
//! REPL renders them in order with [`View::flush`] at the end of each turn (or
//! just before a sub-prompt, so questions appear after their context).
use std::path::PathBuf;

use colored::Colorize;
use textwrap::{fill, termwidth};
use variantly::Variantly;

use crate::style::GameStyle;

const ICON_FAILURE: &str = "\u{274C}"; // ✖
const ICON_ERROR: &str = "⚠︎"; // U+26A0 U+FE0E
const ICON_CELEBRATE: &str = "🎉"; // U+1F389
const ICON_DEATH: &str = "☠";

pub const HELP_TEXT: &str = "\
Movement: To move use simple commands you can say walk or move and a
direction. i.e. 'move north' or 'go south'.

Examine: To examine the area around you use the keyword examine or inspect
and whatever you want to inspect. i.e. to look at the room use 'inspect room'.

Items: Some rooms will have items that you can pick up. Use the keyword
'pick' or 'take' to put an item into your inventory. i.e. 'pick up sword'.
Use 'drop' to leave something behind.

Doors: Some doors are locked. 'use <item>' and pick a direction to try it on
the door that way. Unlocking a door does not walk you through it.

Menu: 'user inventory' shows what you carry, 'user score' shows your points.

Game: 'save <name>' saves your progress, 'quit' ends the game, and 'help'
shows this message again.";

/// One thing to show the player.
#[derive(Debug, Clone, PartialEq, Eq, Variantly)]
pub enum ViewItem {
    RoomDescription(String),
    MovedTo(String),
    /// Wall, locked door, wrong key: the action was refused and nothing changed.
    Blocked(String),
    /// Input that didn't make sense.
    Error(String),
    RoomInspection { inspect: String, items: Vec<String> },
    NothingUseful,
    ItemDescription { item: String, description: String },
    Inventory(Vec<String>),
    Score(u32),
    DoorUnlocked(String),
    TookItem(String),
    DroppedItem(String),
    Encounter(String),
    CombatNote(String),
    CombatStatus { health: i32 },
    CombatHit { enemy: String, damage: i32 },
    CombatHurt { damage: i32 },
    EnemyDefeated { enemy: String, points: u32 },
    PlayerDied,
    ReachedEnd,
    GameSaved { name: String, path: PathBuf },
    EngineMessage(String),
    Help,
    Farewell,
}

/// View aggregates what should be displayed on each pass through the REPL.
#[derive(Debug, Clone)]
pub struct View {
    pub width: usize,
    pub items: Vec<ViewItem>,
}
impl Default for View {
    fn default() -> Self {
        Self::new()
    }
}

impl View {
    pub fn new() -> Self {
        Self {
            width: termwidth(),
            items: Vec::new(),
        }
    }

    pub fn push(&mut self, item: ViewItem) {
        self.items.push(item);
    }

    /// Render and clear everything queued so far.
    pub fn flush(&mut self) {
        // re-check terminal width in case it's been resized
        self.width = termwidth();
        for item in std::mem::take(&mut self.items) {
            println!("{}", self.render(&item));
        }
    }

    fn render(&self, item: &ViewItem) -> String {
        match item {
            ViewItem::RoomDescription(text) => fill(text, self.width).description_style().to_string(),
            ViewItem::MovedTo(room) => format!("You have moved to {}\n", room.room_style()),
            ViewItem::Blocked(msg) => format!("{ICON_FAILURE} {}", msg.denied_style()),
            ViewItem::Error(msg) => format!("{} {}", ICON_ERROR.error_style(), msg.error_style()),
            ViewItem::RoomInspection { inspect, items } => format!(
                "{}\n{}\n{}",
                fill(inspect, self.width).description_style(),
                "This room contains:".subheading_style(),
                style_list(items)
            ),
            ViewItem::NothingUseful => "There is nothing useful here.".italic().to_string(),
            ViewItem::ItemDescription { item, description } => {
                format!("{}: {}", item.item_style(), fill(description, self.width).description_style())
            },
            ViewItem::Inventory(items) => {
                if items.is_empty() {
                    "You are carrying nothing.".italic().dimmed().to_string()
                } else {
                    format!("{}\n{}", "Inventory:".subheading_style(), style_list(items))
                }
            },
            ViewItem::Score(score) => format!("Your current score is: {}", score.to_string().bold()),
            ViewItem::DoorUnlocked(msg) => fill(msg, self.width).unlocked_style().to_string(),
            ViewItem::TookItem(item) => format!("You have picked up the {}", item.item_style()),
            ViewItem::DroppedItem(item) => format!("You dropped the {}", item.item_style()),
            ViewItem::Encounter(enemy) => format!("You have encountered a {}", enemy.npc_style()),
            ViewItem::CombatNote(msg) => msg.italic().to_string(),
            ViewItem::CombatStatus { health } => format!("Your health is {health}"),
            ViewItem::CombatHit { enemy, damage } => format!(
                "You have damaged the {} for {}",
                enemy.npc_style(),
                damage.to_string().combat_style()
            ),
            ViewItem::CombatHurt { damage } => format!("You take {}", damage.to_string().combat_style()),
            ViewItem::EnemyDefeated { enemy, points } => format!(
                "You have killed the {}\n{ICON_CELEBRATE} You have gained {points} points",
                enemy.npc_style()
            ),
            ViewItem::PlayerDied => format!("{ICON_DEATH} {}", "You have died".combat_style()),
            ViewItem::ReachedEnd => "You have reached the end of the maze.".bold().to_string(),
            ViewItem::GameSaved { name, path } => {
                format!("Game saved as {} ({})", name.underline(), path.display())
            },
            ViewItem::EngineMessage(msg) => msg.dimmed().to_string(),
            ViewItem::Help => format!("{}\n\n{HELP_TEXT}", "Help Menu".subheading_style()),
            ViewItem::Farewell => "Thank you for playing".to_string(),
        }
    }
}

fn style_list(items: &[String]) -> String {
    items
        .iter()
        .map(|item| format!("\t{}", item.item_style()))
        .collect::<Vec<_>>()
        .join("\n")
}
