//! Integration tests for the command loop
//!
//! These drive the public API the way the binary does, with a scripted
//! line source and the terminal presenter writing into a buffer.

use todolist::{
    Config, Dispatcher, DisplayConfig, Outcome, ScriptedSource, Task, TaskStore, TerminalPresenter, TodoError,
};

fn plain_display() -> DisplayConfig {
    DisplayConfig {
        clear_screen: false,
        color: false,
        show_hint: false,
    }
}

fn seeded_dispatcher() -> Dispatcher<TerminalPresenter<Vec<u8>>> {
    let store = Config::default().initial_store();
    Dispatcher::new(store, TerminalPresenter::new(Vec::new(), plain_display()))
}

fn done(mut task: Task) -> Task {
    task.mark_done();
    task
}

// =============================================================================
// Scenario Tests
// =============================================================================

#[test]
fn test_walkthrough_from_seeded_store() {
    let mut d = seeded_dispatcher();
    assert_eq!(d.store().list(), &[Task::new(1, "Finish this app", "high")]);

    assert_eq!(d.interpret("a;Buy milk;low"), Ok(Outcome::Tasks));
    assert_eq!(
        d.store().list(),
        &[Task::new(1, "Finish this app", "high"), Task::new(2, "Buy milk", "low")]
    );

    d.interpret("d;2").unwrap();
    assert!(d.store().get(2).unwrap().done);

    d.interpret("r;1").unwrap();
    assert_eq!(d.store().list(), &[done(Task::new(2, "Buy milk", "low"))]);

    let before = d.store().list().to_vec();
    assert_eq!(d.interpret("p;99;high"), Err(TodoError::TaskNotFound { id: 99 }));
    assert_eq!(d.store().list(), before.as_slice());

    d.interpret("ra").unwrap();
    assert!(d.store().list().is_empty());
}

#[test]
fn test_scripted_session_output() {
    let mut d = seeded_dispatcher();
    let mut source = ScriptedSource::new(["a;Buy milk;low", "p;99;high", "info", "x"]);
    d.run(&mut source, "> ").unwrap();

    let (_, presenter) = d.into_parts();
    let out = String::from_utf8(presenter.into_inner()).unwrap();

    assert!(out.contains("Buy milk"));
    assert!(out.contains("ERROR: Todo with this ID doesn't exist."));
    assert!(out.contains("Example: 'a;Finish this app;high'"));
    assert!(out.contains("ERROR: Oops, something went wrong."));
    // Initial table plus one per line
    assert_eq!(out.matches("| ID |").count(), 5);
}

#[test]
fn test_ids_not_reissued_after_remove_all() {
    let mut d = seeded_dispatcher();
    d.interpret("a;two;low").unwrap();
    d.interpret("ra").unwrap();
    d.interpret("a;three;low").unwrap();

    assert_eq!(d.store().list(), &[Task::new(3, "three", "low")]);
}

#[test]
fn test_arity_errors_report_usage() {
    let mut d = Dispatcher::new(TaskStore::new(), TerminalPresenter::new(Vec::new(), plain_display()));

    let cases = [
        ("a;onlyOneArg", "Invalid input. Command format for add: a;title;priority"),
        ("p;1", "Invalid input. Command format for changing priority: p;id;priority"),
        ("d", "Invalid input. Command format for done: d;id"),
        ("r", "Invalid input. Command format for remove: r;id"),
        ("ra;extra", "Invalid input. Command format for deleting all tasks: ra"),
        ("info;x", "Invalid input. Write 'info' for more information."),
    ];

    for (line, expected) in cases {
        let err = d.interpret(line).unwrap_err();
        assert_eq!(err.to_string(), expected, "line: {}", line);
    }
    assert!(d.store().is_empty());
    assert_eq!(d.store().last_id(), 0);
}

#[test]
fn test_done_is_idempotent_through_commands() {
    let mut d = seeded_dispatcher();
    d.interpret("d;1").unwrap();
    assert_eq!(d.interpret("d;1"), Ok(Outcome::Tasks));
    assert!(d.store().get(1).unwrap().done);
}
