//! Terminal input handling for the interactive prompts.
//!
//! Wraps rustyline configuration with a plain-stdin fallback, plus the
//! default-on-empty-Enter and retry-until-valid helpers the generator pass
//! is built from.

use std::fs;
use std::io::{self, IsTerminal, Write};
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use anyhow::{Context, Result};
use log::{info, warn};
use regex::Regex;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use thiserror::Error;

/// Outcome of reading a line from the prompt input.
pub enum InputEvent {
    Line(String),
    Eof,
    Interrupted,
}

/// Terminal conditions that end a prompt sequence early.
#[derive(Debug, Error)]
pub enum PromptError {
    #[error("input ended before all prompts were answered")]
    Eof,
    #[error("canceled at prompt")]
    Interrupted,
}

static LEVEL_RANGE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+-\d+$").expect("level range pattern is valid"));

/// Check a level-range answer against the required `XX-YY` shape.
pub fn is_valid_level_range(raw: &str) -> bool {
    LEVEL_RANGE.is_match(raw)
}

/// Compare raw sky-light bounds: true when `max >= min` (equality accepted).
///
/// # Errors
/// A non-numeric bound is an error, not a retry; callers propagate it as
/// fatal.
pub fn sky_light_bounds_ok(min_raw: &str, max_raw: &str) -> Result<bool> {
    let min: i64 = min_raw
        .parse()
        .with_context(|| format!("minSkyLight '{min_raw}' is not a number"))?;
    let max: i64 = max_raw
        .parse()
        .with_context(|| format!("maxSkyLight '{max_raw}' is not a number"))?;
    Ok(max >= min)
}

/// Helper responsible for managing the interactive input backend.
///
/// Prefers `rustyline` when an interactive terminal is available, falling
/// back to a basic stdin reader otherwise.
pub struct InputManager {
    backend: Backend,
}

impl InputManager {
    pub fn new() -> Self {
        let backend = if io::stdin().is_terminal() {
            match RustylineInput::new() {
                Ok(editor) => {
                    info!("using rustyline-backed prompt input");
                    Backend::Rustyline(editor)
                },
                Err(err) => {
                    warn!("failed to initialize rustyline ({}), falling back to basic stdin", err);
                    Backend::plain()
                },
            }
        } else {
            info!("stdin is not a TTY; using basic input mode");
            Backend::plain()
        };

        Self { backend }
    }

    /// Read a line from the current backend. If the interactive backend
    /// reports an unrecoverable error, switch to the plain stdin backend and
    /// retry once.
    pub fn read_line(&mut self, prompt: &str) -> io::Result<InputEvent> {
        match self.backend.read_line(prompt) {
            Ok(event) => Ok(event),
            Err(err) => {
                if self.backend.is_rustyline() {
                    warn!("rustyline input failed: {} -- switching to basic stdin", err);
                    self.backend = Backend::plain();
                    self.backend.read_line(prompt)
                } else {
                    Err(err)
                }
            },
        }
    }

    /// Read one answer exactly as typed, treating EOF and Ctrl-C as errors.
    ///
    /// # Errors
    /// Returns [`PromptError`] when the input stream ends or the user
    /// interrupts, or the underlying IO error.
    pub fn ask_raw(&mut self, prompt: &str) -> Result<String> {
        match self.read_line(prompt).context("reading prompt input")? {
            InputEvent::Line(line) => Ok(line),
            InputEvent::Eof => Err(PromptError::Eof.into()),
            InputEvent::Interrupted => Err(PromptError::Interrupted.into()),
        }
    }

    /// Read one answer with surrounding whitespace stripped.
    pub fn ask(&mut self, prompt: &str) -> Result<String> {
        Ok(self.ask_raw(prompt)?.trim().to_string())
    }

    /// Ask with a default answer used when the user just presses Enter.
    pub fn ask_with_default(&mut self, prompt: &str, default: &str) -> Result<String> {
        let answer = self.ask(&format!("{prompt} (default: {default}): "))?;
        if answer.is_empty() {
            Ok(default.to_string())
        } else {
            Ok(answer)
        }
    }

    /// Ask until the answer is one of `options`.
    pub fn ask_choice(&mut self, prompt: &str, options: &[&str], default: &str) -> Result<String> {
        loop {
            let answer = self.ask_with_default(prompt, default)?;
            if options.contains(&answer.as_str()) {
                return Ok(answer);
            }
            println!("Invalid choice. Please choose from: {}", options.join(", "));
        }
    }

    /// Ask until the answer matches the `XX-YY` level-range shape.
    pub fn ask_level_range(&mut self, prompt: &str, default: &str) -> Result<String> {
        loop {
            let answer = self.ask_with_default(prompt, default)?;
            if is_valid_level_range(&answer) {
                return Ok(answer);
            }
            println!("Invalid format. Please use the format XX-YY (e.g. 30-50)");
        }
    }

    /// Ask for a maximum sky light until it is >= the already-collected
    /// minimum (equality accepted).
    ///
    /// # Errors
    /// A non-numeric minimum or answer is fatal rather than re-prompted,
    /// matching the original tool's behavior.
    pub fn ask_max_sky_light(&mut self, prompt: &str, default: &str, min_raw: &str) -> Result<String> {
        loop {
            let answer = self.ask_with_default(prompt, default)?;
            if sky_light_bounds_ok(min_raw, &answer)? {
                return Ok(answer);
            }
            println!("maxSkyLight must be greater than or equal to minSkyLight ({min_raw})");
        }
    }
}

impl Default for InputManager {
    fn default() -> Self {
        Self::new()
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
    editor: DefaultEditor,
    history_path: Option<PathBuf>,
}

impl RustylineInput {
    fn new() -> io::Result<Self> {
        let mut editor = DefaultEditor::new().map_err(map_io_err)?;
        let history_path = history_file_path();

        if let Some(path) = history_path.as_ref() {
            if let Some(dir) = path.parent() {
                if let Err(err) = fs::create_dir_all(dir) {
                    warn!("failed to create history directory {}: {}", dir.display(), err);
                }
            }

            if let Err(err) = editor.load_history(path) {
                match err {
                    ReadlineError::Io(ref io_err) if io_err.kind() == io::ErrorKind::NotFound => {
                        info!("no prior history found at {}, starting fresh", path.display());
                    },
                    other => {
                        warn!("failed to load history from {}: {}", path.display(), other);
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
                        warn!("failed to append to history: {}", err);
                    }
                    if let Some(path) = self.history_path.as_ref() {
                        if let Err(err) = self.editor.save_history(path) {
                            warn!("failed to persist history to {}: {}", path.display(), err);
                        }
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
        print!("{}", prompt);
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
    path.push("variantsmith");
    path.push("history.txt");
    path
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converts_readline_ctrl_c_to_interrupt() {
        let result = convert_readline_error(ReadlineError::Interrupted).unwrap();
        assert!(matches!(result, InputEvent::Interrupted));
    }

    #[test]
    fn history_path_appends_components() {
        let base = PathBuf::from("/tmp/variantsmith-test");
        let path = build_history_path(&base);
        assert!(path.ends_with(Path::new("variantsmith/history.txt")));
    }

    #[test]
    fn level_range_requires_two_bounds() {
        assert!(!is_valid_level_range("30"));
        assert!(!is_valid_level_range("30-"));
        assert!(!is_valid_level_range("-50"));
        assert!(!is_valid_level_range("30 - 50"));
        assert!(is_valid_level_range("30-50"));
        assert!(is_valid_level_range("5-31"));
    }

    #[test]
    fn level_range_accepts_equal_bounds() {
        assert!(is_valid_level_range("10-10"));
    }

    #[test]
    fn sky_light_accepts_equal_and_rejects_inverted_bounds() {
        assert!(sky_light_bounds_ok("8", "15").unwrap());
        assert!(sky_light_bounds_ok("8", "8").unwrap());
        assert!(!sky_light_bounds_ok("8", "7").unwrap());
    }

    #[test]
    fn sky_light_non_numeric_bounds_are_errors() {
        assert!(sky_light_bounds_ok("dusk", "15").is_err());
        assert!(sky_light_bounds_ok("8", "bright").is_err());
    }
}
