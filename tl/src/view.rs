//! Terminal presentation
//!
//! Everything that writes to the screen lives behind [`Presenter`], so the
//! dispatcher can be driven without a terminal.

use std::io::{self, Write};

use colored::{Color, Colorize};
use crossterm::cursor::MoveTo;
use crossterm::queue;
use crossterm::terminal::{Clear, ClearType};
use eyre::Result;

use crate::command::CommandKind;
use crate::config::DisplayConfig;
use crate::domain::Task;

/// Screen output used by the dispatcher
pub trait Presenter {
    /// Draw the task table
    fn render(&mut self, tasks: &[Task]) -> Result<()>;

    /// Show a single error line
    fn render_error(&mut self, message: &str) -> Result<()>;

    /// Show the command reference
    fn render_help(&mut self) -> Result<()>;

    /// Wipe prior output; callers treat failure as non-fatal
    fn clear_view(&mut self) -> Result<()>;
}

/// Line shown under the task table
pub const HINT: &str = "Write 'info' into the terminal for more information.";

/// Example shown under the help table
pub const EXAMPLE: &str = "'a;Finish this app;high'";

/// Commands listed in the help table
const HELP_COMMANDS: [CommandKind; 5] = [
    CommandKind::Add,
    CommandKind::Done,
    CommandKind::Priority,
    CommandKind::Remove,
    CommandKind::RemoveAll,
];

/// A table cell with an optional color
struct Cell {
    text: String,
    color: Option<Color>,
}

impl Cell {
    fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            color: None,
        }
    }

    fn colored(text: impl Into<String>, color: Color) -> Self {
        Self {
            text: text.into(),
            color: Some(color),
        }
    }

    fn width(&self) -> usize {
        self.text.chars().count()
    }
}

/// Presenter writing bordered tables to any writer
pub struct TerminalPresenter<W: Write> {
    out: W,
    display: DisplayConfig,
}

impl TerminalPresenter<io::Stdout> {
    /// Presenter on the process stdout
    pub fn stdout(display: DisplayConfig) -> Self {
        Self::new(io::stdout(), display)
    }
}

impl<W: Write> TerminalPresenter<W> {
    pub fn new(out: W, display: DisplayConfig) -> Self {
        Self { out, display }
    }

    pub fn get_ref(&self) -> &W {
        &self.out
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn paint(&self, text: &str, color: Option<Color>) -> String {
        match color {
            Some(color) if self.display.color => text.color(color).to_string(),
            _ => text.to_string(),
        }
    }

    fn done_cell(done: bool) -> Cell {
        if done {
            Cell::colored("true", Color::Green)
        } else {
            Cell::colored("false", Color::Yellow)
        }
    }

    /// Write a bordered table with centered cells
    fn write_table(&mut self, header: &[&str], rows: &[Vec<Cell>], row_lines: bool) -> Result<()> {
        let mut widths: Vec<usize> = header.iter().map(|h| h.chars().count()).collect();
        for row in rows {
            for (width, cell) in widths.iter_mut().zip(row) {
                *width = (*width).max(cell.width());
            }
        }

        let border = border_line(&widths);
        let header_cells: Vec<Cell> = header.iter().map(|h| Cell::plain(h.to_uppercase())).collect();

        writeln!(self.out, "{}", border)?;
        let line = self.row_line(&header_cells, &widths);
        writeln!(self.out, "{}", line)?;
        writeln!(self.out, "{}", border)?;
        for row in rows {
            let line = self.row_line(row, &widths);
            writeln!(self.out, "{}", line)?;
            if row_lines {
                writeln!(self.out, "{}", border)?;
            }
        }
        if !row_lines && !rows.is_empty() {
            writeln!(self.out, "{}", border)?;
        }
        Ok(())
    }

    fn row_line(&self, cells: &[Cell], widths: &[usize]) -> String {
        let mut line = String::from("|");
        for (cell, width) in cells.iter().zip(widths) {
            let pad = width.saturating_sub(cell.width());
            let left = pad / 2;
            let right = pad - left;
            line.push(' ');
            line.push_str(&" ".repeat(left));
            line.push_str(&self.paint(&cell.text, cell.color));
            line.push_str(&" ".repeat(right));
            line.push_str(" |");
        }
        line
    }
}

fn border_line(widths: &[usize]) -> String {
    let mut line = String::from("+");
    for width in widths {
        line.push_str(&"-".repeat(width + 2));
        line.push('+');
    }
    line
}

impl<W: Write> Presenter for TerminalPresenter<W> {
    fn render(&mut self, tasks: &[Task]) -> Result<()> {
        let rows: Vec<Vec<Cell>> = tasks
            .iter()
            .map(|t| {
                vec![
                    Cell::plain(t.id.to_string()),
                    Cell::plain(t.description.as_str()),
                    Cell::plain(t.priority.as_str()),
                    Self::done_cell(t.done),
                ]
            })
            .collect();

        self.write_table(&["ID", "Task", "Priority", "Done"], &rows, false)?;
        if self.display.show_hint {
            writeln!(self.out, "{}", HINT)?;
        }
        writeln!(self.out)?;
        self.out.flush()?;
        Ok(())
    }

    fn render_error(&mut self, message: &str) -> Result<()> {
        let line = self.paint(&format!("ERROR: {}", message), Some(Color::Red));
        writeln!(self.out, "{}", line)?;
        self.out.flush()?;
        Ok(())
    }

    fn render_help(&mut self) -> Result<()> {
        let rows: Vec<Vec<Cell>> = HELP_COMMANDS
            .iter()
            .map(|kind| {
                vec![
                    Cell::plain(kind.name()),
                    Cell::plain(kind.operation()),
                    Cell::colored(kind.format(), Color::Blue),
                ]
            })
            .collect();

        self.write_table(&["cmd", "Operation", "Format"], &rows, true)?;
        let example = self.paint(EXAMPLE, Some(Color::Blue));
        writeln!(self.out, "Example: {}", example)?;
        writeln!(self.out)?;
        self.out.flush()?;
        Ok(())
    }

    fn clear_view(&mut self) -> Result<()> {
        if !self.display.clear_screen {
            return Ok(());
        }
        queue!(self.out, Clear(ClearType::All), MoveTo(0, 0))?;
        self.out.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain_display() -> DisplayConfig {
        DisplayConfig {
            clear_screen: false,
            color: false,
            show_hint: true,
        }
    }

    fn output(presenter: TerminalPresenter<Vec<u8>>) -> String {
        String::from_utf8(presenter.into_inner()).unwrap()
    }

    #[test]
    fn test_render_table() {
        let mut presenter = TerminalPresenter::new(Vec::new(), plain_display());
        let mut done = Task::new(2, "Buy milk", "low");
        done.mark_done();
        presenter
            .render(&[Task::new(1, "Finish this app", "high"), done])
            .unwrap();

        let out = output(presenter);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "+----+-----------------+----------+-------+");
        assert_eq!(lines[1], "| ID |      TASK       | PRIORITY | DONE  |");
        assert_eq!(lines[3], "| 1  | Finish this app |   high   | false |");
        assert_eq!(lines[4], "| 2  |    Buy milk     |   low    | true  |");
        assert_eq!(lines[5], lines[0]);
        assert_eq!(lines[6], HINT);
    }

    #[test]
    fn test_render_empty_table() {
        let mut presenter = TerminalPresenter::new(Vec::new(), plain_display());
        presenter.render(&[]).unwrap();

        let out = output(presenter);
        assert!(out.contains("PRIORITY"));
        assert_eq!(out.lines().count(), 5);
    }

    #[test]
    fn test_hint_can_be_hidden() {
        let display = DisplayConfig {
            show_hint: false,
            ..plain_display()
        };
        let mut presenter = TerminalPresenter::new(Vec::new(), display);
        presenter.render(&[]).unwrap();
        assert!(!output(presenter).contains(HINT));
    }

    #[test]
    fn test_render_error() {
        let mut presenter = TerminalPresenter::new(Vec::new(), plain_display());
        presenter.render_error("Todo with this ID doesn't exist.").unwrap();
        assert_eq!(output(presenter), "ERROR: Todo with this ID doesn't exist.\n");
    }

    #[test]
    fn test_render_help_lists_commands() {
        let mut presenter = TerminalPresenter::new(Vec::new(), plain_display());
        presenter.render_help().unwrap();

        let out = output(presenter);
        assert!(out.contains("a;yourTodo;priority"));
        assert!(out.contains("p;id;newPriority"));
        assert!(out.contains("removing all your todos"));
        assert!(out.contains("Example: 'a;Finish this app;high'"));
    }

    #[test]
    fn test_clear_disabled_writes_nothing() {
        let mut presenter = TerminalPresenter::new(Vec::new(), plain_display());
        presenter.clear_view().unwrap();
        assert!(presenter.get_ref().is_empty());
    }

    #[test]
    fn test_clear_enabled_writes_escape() {
        let display = DisplayConfig {
            clear_screen: true,
            ..plain_display()
        };
        let mut presenter = TerminalPresenter::new(Vec::new(), display);
        presenter.clear_view().unwrap();
        assert!(presenter.get_ref().starts_with(b"\x1b["));
    }
}
