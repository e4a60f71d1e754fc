//! Styling helpers for terminal output.
//!
//! [`GameStyle`] applies the game's ANSI palette (via `colored`) to anything
//! string-like, so literals, `String`s and `&String`s can all be styled in place.

use colored::{Color, ColoredString, Colorize};

const GOLD: Color = Color::TrueColor { r: 220, g: 180, b: 40 };
const MOSS: Color = Color::TrueColor { r: 13, g: 130, b: 60 };
const TORCH: Color = Color::TrueColor { r: 223, g: 77, b: 10 };
const MIST: Color = Color::TrueColor { r: 102, g: 208, b: 250 };
const LEAF: Color = Color::TrueColor { r: 110, g: 220, b: 110 };
const BLOOD: Color = Color::TrueColor { r: 230, g: 50, b: 50 };
const STONE: Color = Color::TrueColor { r: 180, g: 180, b: 180 };

/// Convenience trait for applying color and style to text output.
pub trait GameStyle {
    fn item_style(&self) -> ColoredString;
    fn npc_style(&self) -> ColoredString;
    fn room_style(&self) -> ColoredString;
    fn description_style(&self) -> ColoredString;
    fn unlocked_style(&self) -> ColoredString;
    fn combat_style(&self) -> ColoredString;
    fn error_style(&self) -> ColoredString;
    /// Refusals: walls, locked doors, wrong keys.
    fn denied_style(&self) -> ColoredString;
    fn subheading_style(&self) -> ColoredString;
    fn prompt_style(&self) -> ColoredString;
}

impl<T: AsRef<str> + ?Sized> GameStyle for T {
    fn item_style(&self) -> ColoredString {
        self.as_ref().color(GOLD)
    }
    fn npc_style(&self) -> ColoredString {
        self.as_ref().color(MOSS).underline()
    }
    fn room_style(&self) -> ColoredString {
        self.as_ref().color(TORCH).bold()
    }
    fn description_style(&self) -> ColoredString {
        self.as_ref().color(MIST).italic()
    }
    fn unlocked_style(&self) -> ColoredString {
        self.as_ref().color(LEAF).italic()
    }
    fn combat_style(&self) -> ColoredString {
        self.as_ref().color(BLOOD).bold()
    }
    fn error_style(&self) -> ColoredString {
        self.as_ref().color(BLOOD)
    }
    fn denied_style(&self) -> ColoredString {
        self.as_ref().color(BLOOD).italic()
    }
    fn subheading_style(&self) -> ColoredString {
        self.as_ref().underline()
    }
    fn prompt_style(&self) -> ColoredString {
        self.as_ref().color(STONE).bold()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn styles_work_on_any_string() {
        assert_eq!("key".item_style().fgcolor, Some(GOLD));
        assert_eq!(String::from("troll").combat_style().fgcolor, Some(BLOOD));
        assert_eq!(String::from("hall").room_style().input, "hall");
    }
}
