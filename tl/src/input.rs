//! Line sources for the dispatcher

use colored::Colorize;
use eyre::Result;
use rustyline::DefaultEditor;
use rustyline::config::Config as EditorConfig;
use rustyline::error::ReadlineError;
use tracing::debug;

/// Blocking source of command lines
pub trait LineSource {
    /// Read one line, `None` at end of input
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>>;
}

/// Interactive source with line editing and history
pub struct ReadlineSource {
    editor: DefaultEditor,
}

impl ReadlineSource {
    pub fn new(history_size: usize) -> Result<Self> {
        let config = EditorConfig::builder()
            .max_history_size(history_size)
            .map_err(|e| eyre::eyre!("Invalid history size: {}", e))?
            .auto_add_history(false)
            .build();
        let editor =
            DefaultEditor::with_config(config).map_err(|e| eyre::eyre!("Failed to initialize readline: {}", e))?;
        Ok(Self { editor })
    }
}

impl LineSource for ReadlineSource {
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>> {
        loop {
            match self.editor.readline(prompt) {
                Ok(line) => {
                    if !line.trim().is_empty() {
                        let _ = self.editor.add_history_entry(line.as_str());
                    }
                    return Ok(Some(line));
                }
                Err(ReadlineError::Interrupted) => {
                    // Ctrl+C - just show new prompt
                    println!("{}", "^C".dimmed());
                    continue;
                }
                Err(ReadlineError::Eof) => {
                    debug!("End of input");
                    return Ok(None);
                }
                Err(err) => {
                    return Err(eyre::eyre!("Readline error: {}", err));
                }
            }
        }
    }
}

/// Pre-recorded lines, for scripted sessions and tests
#[derive(Debug, Default, Clone)]
pub struct ScriptedSource {
    lines: std::collections::VecDeque<String>,
}

impl ScriptedSource {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }

    pub fn remaining(&self) -> usize {
        self.lines.len()
    }
}

impl LineSource for ScriptedSource {
    fn read_line(&mut self, _prompt: &str) -> Result<Option<String>> {
        Ok(self.lines.pop_front())
    }
}
