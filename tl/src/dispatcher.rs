//! Command dispatcher - the read/parse/validate/apply/render loop

use tracing::{debug, info, warn};

use eyre::Result;

use crate::command::{self, Command};
use crate::error::TodoError;
use crate::input::LineSource;
use crate::store::TaskStore;
use crate::view::Presenter;

/// What a successfully applied command asks the view to show
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The task table
    Tasks,
    /// The help view, followed by the task table
    Help,
}

/// Owns the store and drives one command at a time
///
/// Every line is interpreted on its own; there is no mode carried between
/// commands.
pub struct Dispatcher<P: Presenter> {
    store: TaskStore,
    presenter: P,
}

impl<P: Presenter> Dispatcher<P> {
    pub fn new(store: TaskStore, presenter: P) -> Self {
        Self { store, presenter }
    }

    pub fn store(&self) -> &TaskStore {
        &self.store
    }

    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    pub fn into_parts(self) -> (TaskStore, P) {
        (self.store, self.presenter)
    }

    /// Parse and validate a raw line, then apply it
    pub fn interpret(&mut self, line: &str) -> Result<Outcome, TodoError> {
        let tokens = command::parse(line);
        debug!(?tokens, "Parsed line");
        let command = command::validate(&tokens)?;
        self.apply(command)
    }

    /// Apply a validated command to the store
    pub fn apply(&mut self, command: Command) -> Result<Outcome, TodoError> {
        match command {
            Command::Add { description, priority } => {
                self.store.add(description, priority);
            }
            Command::Done { id } => self.store.mark_done(id)?,
            Command::SetPriority { id, priority } => self.store.set_priority(id, priority)?,
            Command::Remove { id } => self.store.remove(id)?,
            Command::RemoveAll => self.store.remove_all(),
            Command::Info => return Ok(Outcome::Help),
        }
        Ok(Outcome::Tasks)
    }

    /// Handle one input line end to end, including rendering
    ///
    /// Command errors are shown and swallowed; only presentation I/O
    /// failures come back as `Err`.
    pub fn handle_line(&mut self, line: &str) -> Result<()> {
        let result = self.interpret(line);
        self.clear();
        match result {
            Ok(Outcome::Tasks) => {}
            Ok(Outcome::Help) => self.presenter.render_help()?,
            Err(err) => {
                info!(%err, line = line.trim(), "Command rejected");
                self.presenter.render_error(&err.to_string())?;
            }
        }
        self.presenter.render(self.store.list())
    }

    /// Show the initial table, then process lines until end of input
    pub fn run<S: LineSource>(&mut self, source: &mut S, prompt: &str) -> Result<()> {
        info!(tasks = self.store.len(), "Session started");
        self.clear();
        self.presenter.render(self.store.list())?;

        let mut handled = 0usize;
        while let Some(line) = source.read_line(prompt)? {
            self.handle_line(&line)?;
            handled += 1;
        }

        info!(handled, "Session ended at end of input");
        Ok(())
    }

    fn clear(&mut self) {
        if let Err(e) = self.presenter.clear_view() {
            warn!("Failed to clear view: {}", e);
        }
    }
}
