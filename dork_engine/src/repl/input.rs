//! Terminal input handling for the Dork REPL.
//!
//! Wraps rustyline configuration and completion, and defines the [`Prompter`]
//! seam used by handlers that need to ask the player a follow-up question in
//! the middle of a command (which direction, which weapon, which item).

use std::collections::VecDeque;
use std::fs;
use std::io::{self, IsTerminal, Write};
use std::path::{Path, PathBuf};

use anyhow::{Result, bail};
use log::{info, warn};
use rustyline::completion::{Completer, Pair};
use rustyline::error::ReadlineError;
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::history::DefaultHistory;
use rustyline::validate::Validator;
use rustyline::{Context, Helper};

use crate::command::vocabulary;
use crate::view::View;

/// Outcome of reading a line from the REPL input.
pub enum InputEvent {
    Line(String),
    Eof,
    Interrupted,
}

/// How a sub-prompt treats an answer it can't use.
///
/// Both behaviors are part of the game's contract: choosing a direction for a
/// key or a weapon for a fight keeps asking, while naming an item to drop gets
/// exactly one chance.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PromptPolicy {
    RetryUntilValid,
    FailFast,
}

/// Source of answers for follow-up questions asked mid-command.
pub trait Prompter {
    /// Ask `question` and return the raw answer.
    ///
    /// # Errors
    /// Fails if input is closed; the session cannot continue without an answer.
    fn ask(&mut self, question: &str) -> Result<String>;
}

/// Ask a question under `policy` until `accept` returns a value.
///
/// Pending view output is flushed first so the question follows its context.
/// Under `RetryUntilValid` each rejected answer is passed to `reprompt` to
/// build the next question, and `Ok(None)` is never returned. Under `FailFast`
/// a rejected answer returns `Ok(None)`.
///
/// # Errors
/// Propagates prompter failures (closed input).
pub fn prompt_with_policy<T>(
    view: &mut View,
    prompter: &mut dyn Prompter,
    policy: PromptPolicy,
    question: &str,
    reprompt: impl Fn(&str) -> String,
    mut accept: impl FnMut(&str) -> Option<T>,
) -> Result<Option<T>> {
    view.flush();
    let mut answer = prompter.ask(question)?;
    loop {
        if let Some(value) = accept(answer.trim()) {
            return Ok(Some(value));
        }
        match policy {
            PromptPolicy::FailFast => {
                info!("prompt \"{question}\" rejected \"{answer}\" (fail fast)");
                return Ok(None);
            },
            PromptPolicy::RetryUntilValid => {
                info!("prompt \"{question}\" rejected \"{answer}\", asking again");
                answer = prompter.ask(&reprompt(answer.trim()))?;
            },
        }
    }
}

/// Canned answers, consumed in order. Used by tests and scripted sessions.
#[derive(Debug, Default)]
pub struct ScriptedInput {
    answers: VecDeque<String>,
    /// Every question asked so far, in order.
    pub asked: Vec<String>,
}
impl ScriptedInput {
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: answers.into_iter().map(Into::into).collect(),
            asked: Vec::new(),
        }
    }

    /// Number of answers not yet consumed.
    pub fn remaining(&self) -> usize {
        self.answers.len()
    }
}
impl Prompter for ScriptedInput {
    fn ask(&mut self, question: &str) -> Result<String> {
        self.asked.push(question.to_string());
        match self.answers.pop_front() {
            Some(answer) => Ok(answer),
            None => bail!("scripted input exhausted at \"{question}\""),
        }
    }
}

type ReplEditor = rustyline::Editor<DorkHelper, DefaultHistory>;

#[derive(Default)]
struct DorkHelper;

impl Helper for DorkHelper {}

impl Completer for DorkHelper {
    type Candidate = Pair;

    fn complete(&self, line: &str, pos: usize, _ctx: &Context<'_>) -> rustyline::Result<(usize, Vec<Self::Candidate>)> {
        let (start, prefix) = current_word(line, pos);
        if prefix.is_empty() {
            return Ok((start, Vec::new()));
        }
        let lower = prefix.to_lowercase();
        let mut terms: Vec<&str> = vocabulary().filter(|term| term.starts_with(&lower)).collect();
        terms.sort_unstable();
        terms.dedup();
        let pairs = terms
            .into_iter()
            .map(|term| Pair {
                display: term.to_string(),
                replacement: term.to_string(),
            })
            .collect();
        Ok((start, pairs))
    }
}

impl Hinter for DorkHelper {
    type Hint = String;
}

impl Highlighter for DorkHelper {}

impl Validator for DorkHelper {}

/// Start offset and text of the word under the cursor.
fn current_word(line: &str, pos: usize) -> (usize, String) {
    let slice = &line[..pos];
    let start = slice.rfind(char::is_whitespace).map_or(0, |idx| idx + 1);
    (start, slice[start..].to_string())
}

/// Helper responsible for managing the interactive input backend.
///
/// Prefers `rustyline` when an interactive terminal is available, falling back to
/// a basic stdin reader otherwise.
pub struct InputManager {
    backend: Backend,
}

impl Default for InputManager {
    fn default() -> Self {
        Self::new()
    }
}

impl InputManager {
    pub fn new() -> Self {
        let backend = if io::stdin().is_terminal() {
            match RustylineInput::new() {
                Ok(editor) => {
                    info!("using rustyline-backed REPL input");
                    Backend::Rustyline(editor)
                },
                Err(err) => {
                    warn!("failed to initialize rustyline ({err}), falling back to basic stdin");
                    Backend::plain()
                },
            }
        } else {
            info!("stdin is not a TTY; using basic input mode");
            Backend::plain()
        };

        Self { backend }
    }

    /// Read a line from the current backend. If the interactive backend reports an
    /// unrecoverable error, switch to the plain stdin backend and retry once.
    ///
    /// # Errors
    /// Returns an error if both backends fail to read.
    pub fn read_line(&mut self, prompt: &str) -> io::Result<InputEvent> {
        match self.backend.read_line(prompt) {
            Ok(event) => Ok(event),
            Err(err) => {
                if self.backend.is_rustyline() {
                    warn!("rustyline input failed: {err} -- switching to basic stdin");
                    self.backend = Backend::plain();
                    self.backend.read_line(prompt)
                } else {
                    Err(err)
                }
            },
        }
    }
}

impl Prompter for InputManager {
    fn ask(&mut self, question: &str) -> Result<String> {
        loop {
            match self.read_line(question)? {
                InputEvent::Line(line) => return Ok(line),
                InputEvent::Eof => bail!("input closed while waiting for an answer to \"{question}\""),
                // no cancelling mid-prompt: ask again
                InputEvent::Interrupted => {},
            }
        }
    }
}

enum Backend {
    Rustyline(RustylineInput),
    Plain(StdinInput),
}

impl Backend {
    fn plain() -> Self {
        Backend::Plain(StdinInput::default())
    }

    fn is_rustyline(&self) -> bool {
        matches!(self, Backend::Rustyline(_))
    }

    fn read_line(&mut self, prompt: &str) -> io::Result<InputEvent> {
        match self {
            Backend::Rustyline(editor) => editor.read_line(prompt),
            Backend::Plain(stdin) => stdin.read_line(prompt),
        }
    }
}

struct RustylineInput {
    editor: ReplEditor,
    history_path: Option<PathBuf>,
}

impl RustylineInput {
    fn new() -> io::Result<Self> {
        let mut editor = rustyline::Editor::<DorkHelper, _>::new().map_err(map_io_err)?;
        editor.set_helper(Some(DorkHelper));
        let history_path = history_file_path();

        if let Some(path) = history_path.as_ref() {
            if let Some(dir) = path.parent()
                && let Err(err) = fs::create_dir_all(dir)
            {
                warn!("failed to create history directory {}: {err}", dir.display());
            }

            if let Err(err) = editor.load_history(path) {
                match err {
                    ReadlineError::Io(ref io_err) if io_err.kind() == io::ErrorKind::NotFound => {
                        info!("no prior history found at {}, starting fresh", path.display());
                    },
                    other => {
                        warn!("failed to load history from {}: {other}", path.display());
                    },
                }
            }
        }

        Ok(Self { editor, history_path })
    }

    fn read_line(&mut self, prompt: &str) -> io::Result<InputEvent> {
        match self.editor.readline(prompt) {
            Ok(line) => {
                if !line.trim().is_empty() {
                    if let Err(err) = self.editor.add_history_entry(line.as_str()) {
                        warn!("failed to append to history: {err}");
                    }
                    if let Some(path) = self.history_path.as_ref()
                        && let Err(err) = self.editor.save_history(path)
                    {
                        warn!("failed to persist history to {}: {err}", path.display());
                    }
                }
                Ok(InputEvent::Line(line))
            },
            Err(err) => convert_readline_error(err),
        }
    }
}

#[derive(Default)]
struct StdinInput {
    buffer: String,
}

impl StdinInput {
    fn read_line(&mut self, prompt: &str) -> io::Result<InputEvent> {
        print!("{prompt}");
        io::stdout().flush()?;

        self.buffer.clear();
        let bytes = io::stdin().read_line(&mut self.buffer)?;
        if bytes == 0 {
            return Ok(InputEvent::Eof);
        }

        if self.buffer.ends_with('\n') {
            self.buffer.pop();
            if self.buffer.ends_with('\r') {
                self.buffer.pop();
            }
        }

        Ok(InputEvent::Line(self.buffer.clone()))
    }
}

fn convert_readline_error(err: ReadlineError) -> io::Result<InputEvent> {
    match err {
        ReadlineError::Interrupted => Ok(InputEvent::Interrupted),
        ReadlineError::Eof => Ok(InputEvent::Eof),
        ReadlineError::Io(io_err) => Err(io_err),
        other => Err(io::Error::other(other)),
    }
}

fn map_io_err(err: ReadlineError) -> io::Error {
    match err {
        ReadlineError::Io(io_err) => io_err,
        other => io::Error::other(other),
    }
}

fn history_file_path() -> Option<PathBuf> {
    dirs::data_dir()
        .or_else(dirs::data_local_dir)
        .map(|base| build_history_path(&base))
}

fn build_history_path(base: &Path) -> PathBuf {
    let mut path = base.to_path_buf();
    path.push("dork");
    path.push("history.txt");
    path
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_number(answer: &str) -> Option<u32> {
        answer.parse().ok()
    }

    #[test]
    fn converts_readline_ctrl_c_to_interrupt() {
        let result = convert_readline_error(ReadlineError::Interrupted).unwrap();
        assert!(matches!(result, InputEvent::Interrupted));
    }

    #[test]
    fn history_path_appends_components() {
        let base = PathBuf::from("/tmp/dork-test");
        let path = build_history_path(&base);
        assert!(path.ends_with(Path::new("dork/history.txt")));
    }

    #[test]
    fn current_word_finds_last_word() {
        assert_eq!(current_word("go no", 5), (3, "no".to_string()));
        assert_eq!(current_word("dr", 2), (0, "dr".to_string()));
    }

    #[test]
    fn retry_policy_keeps_asking() {
        let mut view = View::new();
        let mut input = ScriptedInput::new(["x", "y", "7"]);
        let got = prompt_with_policy(
            &mut view,
            &mut input,
            PromptPolicy::RetryUntilValid,
            "Number? ",
            |bad| format!("{bad} is not a number. Number? "),
            parse_number,
        )
        .unwrap();
        assert_eq!(got, Some(7));
        assert_eq!(input.asked, vec!["Number? ", "x is not a number. Number? ", "y is not a number. Number? "]);
    }

    #[test]
    fn fail_fast_policy_asks_once() {
        let mut view = View::new();
        let mut input = ScriptedInput::new(["x", "7"]);
        let got = prompt_with_policy(
            &mut view,
            &mut input,
            PromptPolicy::FailFast,
            "Number? ",
            |_| String::new(),
            parse_number,
        )
        .unwrap();
        assert_eq!(got, None);
        assert_eq!(input.remaining(), 1);
    }

    #[test]
    fn exhausted_script_is_an_error() {
        let mut view = View::new();
        let mut input = ScriptedInput::new(Vec::<String>::new());
        let got = prompt_with_policy(
            &mut view,
            &mut input,
            PromptPolicy::RetryUntilValid,
            "Number? ",
            |_| "Again? ".to_string(),
            parse_number,
        );
        assert!(got.is_err());
    }
}
