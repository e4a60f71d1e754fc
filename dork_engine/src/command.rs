//! Command module
//!
//! The single vocabulary shared by every handler: one tokenizer, one verb
//! table, one direction table. Handlers never match raw words themselves.

use crate::room::Direction;

/// Commands that can be executed by the player.
///
/// Each variant carries the full lowercase token list of the input line, since
/// handlers scan it for item and direction words anywhere in the sentence.
#[derive(Debug, Clone, PartialEq, Eq, variantly::Variantly)]
pub enum Command {
    Drop,
    Examine(Vec<String>),
    Help,
    MoveTo(Vec<String>),
    Quit,
    Save(Vec<String>),
    Take(Vec<String>),
    Unknown,
    UseItem(Vec<String>),
    UserMenu(Vec<String>),
}

/// Verb families recognized by the dispatcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verb {
    Drop,
    Examine,
    Help,
    Move,
    Quit,
    Save,
    Take,
    Use,
    User,
}

const VERB_WORDS: &[(&str, Verb)] = &[
    ("move", Verb::Move),
    ("go", Verb::Move),
    ("walk", Verb::Move),
    ("examine", Verb::Examine),
    ("inspect", Verb::Examine),
    ("pick", Verb::Take),
    ("take", Verb::Take),
    ("use", Verb::Use),
    ("drop", Verb::Drop),
    ("user", Verb::User),
    ("help", Verb::Help),
    ("save", Verb::Save),
    ("quit", Verb::Quit),
];

const DIRECTION_WORDS: &[(&str, Direction)] = &[
    ("north", Direction::Up),
    ("up", Direction::Up),
    ("south", Direction::Down),
    ("down", Direction::Down),
    ("east", Direction::Right),
    ("right", Direction::Right),
    ("west", Direction::Left),
    ("left", Direction::Left),
];

/// Every verb and direction word, for tab completion.
pub fn vocabulary() -> impl Iterator<Item = &'static str> {
    VERB_WORDS
        .iter()
        .map(|(word, _)| *word)
        .chain(DIRECTION_WORDS.iter().map(|(word, _)| *word))
        .chain(["room", "inventory", "score"])
}

/// Split an input line into lowercase whitespace-separated tokens.
pub fn tokenize(input: &str) -> Vec<String> {
    input.split_whitespace().map(str::to_lowercase).collect()
}

/// Look up the verb family for a single word.
pub fn lookup_verb(word: &str) -> Option<Verb> {
    VERB_WORDS.iter().find(|(w, _)| *w == word).map(|(_, verb)| *verb)
}

/// Map any of the eight direction words to a canonical [`Direction`].
pub fn resolve_direction(token: &str) -> Option<Direction> {
    let token = token.trim().to_lowercase();
    DIRECTION_WORDS
        .iter()
        .find(|(w, _)| *w == token)
        .map(|(_, dir)| *dir)
}

/// First direction word anywhere in `tokens`.
pub fn find_direction(tokens: &[String]) -> Option<Direction> {
    tokens.iter().find_map(|token| resolve_direction(token))
}

/// Parses an input string and returns a corresponding `Command`.
///
/// The first word in the line that is a known verb decides the command, so
/// "please go north" and "go north" are the same.
pub fn parse_command(input: &str) -> Command {
    let tokens = tokenize(input);
    let Some(verb) = tokens.iter().find_map(|word| lookup_verb(word)) else {
        return Command::Unknown;
    };
    match verb {
        Verb::Drop => Command::Drop,
        Verb::Examine => Command::Examine(tokens),
        Verb::Help => Command::Help,
        Verb::Move => Command::MoveTo(tokens),
        Verb::Quit => Command::Quit,
        Verb::Save => Command::Save(tokens),
        Verb::Take => Command::Take(tokens),
        Verb::Use => Command::UseItem(tokens),
        Verb::User => Command::UserMenu(tokens),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokenize_lowercases_and_splits() {
        assert_eq!(tokenize("  Go   NORTH\n"), vec!["go", "north"]);
    }

    #[test]
    fn all_eight_direction_words_resolve() {
        let cases = [
            ("north", Direction::Up),
            ("up", Direction::Up),
            ("south", Direction::Down),
            ("down", Direction::Down),
            ("east", Direction::Right),
            ("right", Direction::Right),
            ("west", Direction::Left),
            ("left", Direction::Left),
        ];
        for (word, dir) in cases {
            assert_eq!(resolve_direction(word), Some(dir), "{word}");
        }
        assert_eq!(resolve_direction("NORTH"), Some(Direction::Up));
        assert_eq!(resolve_direction("northeast"), None);
        assert_eq!(resolve_direction(""), None);
    }

    #[test]
    fn first_verb_anywhere_wins() {
        assert!(parse_command("please walk west").is_move_to());
        assert!(parse_command("pick up the key").is_take());
        assert!(parse_command("drop it").is_drop());
        assert!(parse_command("use key then move").is_use_item());
    }

    #[test]
    fn user_and_use_are_distinct() {
        assert!(parse_command("user score").is_user_menu());
        assert!(parse_command("use lamp").is_use_item());
    }

    #[test]
    fn unknown_without_verb() {
        assert_eq!(parse_command("dance wildly"), Command::Unknown);
        assert_eq!(parse_command(""), Command::Unknown);
    }

    #[test]
    fn commands_keep_every_token() {
        let Command::Examine(tokens) = parse_command("Inspect the ROOM") else {
            panic!("expected examine");
        };
        assert_eq!(tokens, vec!["inspect", "the", "room"]);
    }

    #[test]
    fn find_direction_scans_whole_line() {
        let tokens = tokenize("walk quickly east");
        assert_eq!(find_direction(&tokens), Some(Direction::Right));
        assert_eq!(find_direction(&tokenize("walk quickly")), None);
    }
}
