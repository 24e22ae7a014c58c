//! Line-oriented text I/O used by the console front end.

use crate::input::InputError;
use crossterm::style::Stylize;
use std::collections::VecDeque;
use std::io::{self, BufRead, IsTerminal, Write};
use tracing::warn;

/// How a line should be emphasised. Plain consoles ignore it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Tone {
    Plain,
    Banner,
    Hidden,
    Reveal,
    Good,
    Danger,
    Warning,
    Winner,
}

pub trait Console {
    /// Write one line of output.
    fn say(&mut self, tone: Tone, text: &str);

    /// Show `text` and block for one line of input. `Ok(None)` means input closed.
    fn prompt(&mut self, text: &str) -> Result<Option<String>, InputError>;
}

/// Console over the process's stdin and stdout.
#[derive(Debug)]
pub struct StdConsole {
    styled: bool,
}

impl StdConsole {
    /// Styling is enabled only when stdout is a terminal.
    pub fn new() -> Self {
        Self { styled: io::stdout().is_terminal() }
    }

    pub fn plain() -> Self {
        Self { styled: false }
    }

    fn render(&self, tone: Tone, text: &str) -> String {
        if !self.styled {
            return text.to_string();
        }
        match tone {
            Tone::Plain => text.to_string(),
            Tone::Banner => text.cyan().bold().to_string(),
            Tone::Hidden => text.dark_grey().to_string(),
            Tone::Reveal => text.white().bold().to_string(),
            Tone::Good => text.green().to_string(),
            Tone::Danger => text.red().bold().to_string(),
            Tone::Warning => text.yellow().to_string(),
            Tone::Winner => text.magenta().bold().to_string(),
        }
    }
}

impl Default for StdConsole {
    fn default() -> Self {
        Self::new()
    }
}

/// Write one line; a failed write is logged and the line dropped.
fn write_line<W: Write>(out: &mut W, line: &str) -> bool {
    match writeln!(out, "{line}") {
        Ok(()) => true,
        Err(e) => {
            warn!(error = %e, "could not write to console");
            false
        }
    }
}

impl Console for StdConsole {
    fn say(&mut self, tone: Tone, text: &str) {
        let line = self.render(tone, text);
        write_line(&mut io::stdout().lock(), &line);
    }

    fn prompt(&mut self, text: &str) -> Result<Option<String>, InputError> {
        {
            let mut out = io::stdout().lock();
            write!(out, "{text}").map_err(|e| InputError::Io(e.to_string()))?;
            out.flush().map_err(|e| InputError::Io(e.to_string()))?;
        }
        let mut line = String::new();
        let read =
            io::stdin().lock().read_line(&mut line).map_err(|e| InputError::Io(e.to_string()))?;
        if read == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }
}

/// Console fed from a fixed list of input lines; records everything shown.
#[derive(Debug, Default, Clone)]
pub struct ScriptedConsole {
    inputs: VecDeque<String>,
    transcript: Vec<String>,
}

impl ScriptedConsole {
    pub fn new<I, S>(inputs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self { inputs: inputs.into_iter().map(Into::into).collect(), transcript: Vec::new() }
    }

    /// Every line said and every prompt shown, in order.
    pub fn transcript(&self) -> &[String] {
        &self.transcript
    }

    pub fn remaining_inputs(&self) -> usize {
        self.inputs.len()
    }

    /// Whether any recorded line contains `needle`.
    pub fn saw(&self, needle: &str) -> bool {
        self.transcript.iter().any(|l| l.contains(needle))
    }

    pub fn count(&self, needle: &str) -> usize {
        self.transcript.iter().filter(|l| l.contains(needle)).count()
    }
}

impl Console for ScriptedConsole {
    fn say(&mut self, _tone: Tone, text: &str) {
        self.transcript.extend(text.lines().map(str::to_string));
    }

    fn prompt(&mut self, text: &str) -> Result<Option<String>, InputError> {
        self.transcript.push(text.to_string());
        Ok(self.inputs.pop_front())
    }
}
