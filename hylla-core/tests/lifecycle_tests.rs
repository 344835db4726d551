//! Lifecycle integration tests: create, open, edit, remove against a temp root.

use std::collections::VecDeque;
use std::fs;
use std::path::{Path, PathBuf};

use assert_fs::prelude::*;
use hylla_core::{
    lifecycle::{self, EditOutcome, NewProject, OpenMode, RemoveOutcome, Source},
    script::ShellRunner,
    Context, EditField, Interaction, RegistryError,
};
use predicates::prelude::predicate;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Answers prompts from queues and records everything it was shown.
#[derive(Default)]
struct Scripted {
    answers: VecDeque<String>,
    confirms: VecDeque<bool>,
    edits: VecDeque<Option<String>>,
    shown: Vec<String>,
}

impl Scripted {
    fn confirming(yes: bool) -> Self {
        Self {
            confirms: VecDeque::from([yes]),
            ..Default::default()
        }
    }
}

impl Interaction for Scripted {
    fn inform(&mut self, message: &str) {
        self.shown.push(message.to_owned());
    }

    fn confirm(&mut self, question: &str) -> Result<bool, RegistryError> {
        self.shown.push(question.to_owned());
        self.confirms
            .pop_front()
            .ok_or_else(|| RegistryError::Interaction("unexpected confirm".into()))
    }

    fn prompt(&mut self, label: &str) -> Result<String, RegistryError> {
        self.shown.push(label.to_owned());
        self.answers
            .pop_front()
            .ok_or_else(|| RegistryError::Interaction("unexpected prompt".into()))
    }

    fn edit_text(&mut self, initial: &str) -> Result<Option<String>, RegistryError> {
        self.shown.push(initial.to_owned());
        self.edits
            .pop_front()
            .ok_or_else(|| RegistryError::Interaction("unexpected edit".into()))
    }
}

#[derive(Default)]
struct Recorder {
    calls: Vec<(String, PathBuf)>,
}

impl ShellRunner for Recorder {
    fn run(&mut self, command: &str, cwd: &Path) -> Result<(), RegistryError> {
        self.calls.push((command.to_owned(), cwd.to_path_buf()));
        if command == "fail" {
            return Err(RegistryError::CommandExecution {
                command: command.to_owned(),
                reason: "exit status: 1".into(),
            });
        }
        Ok(())
    }
}

fn setup() -> (assert_fs::TempDir, Context) {
    let root = assert_fs::TempDir::new().expect("tempdir");
    let ctx = Context::open(root.path()).expect("context");
    (root, ctx)
}

fn new_project(name: &str, tags: &[&str]) -> NewProject {
    NewProject {
        name: name.to_owned(),
        tags: tags.iter().map(|t| t.to_string()).collect(),
        ..Default::default()
    }
}

// ---------------------------------------------------------------------------
// 1. Create
// ---------------------------------------------------------------------------

#[test]
fn create_registers_and_makes_directory() {
    let (root, ctx) = setup();
    let project = lifecycle::create(&ctx, new_project("My Cool Project", &["go", "cli"]))
        .expect("create");

    assert_eq!(project.name.as_str(), "my_cool_project");
    assert_eq!(project.path, root.path().join("my_cool_project"));
    assert_eq!(project.tags, vec!["go", "cli"]);
    root.child("my_cool_project").assert(predicate::path::is_dir());
    assert_eq!(
        lifecycle::fetch(&ctx, "my_cool_project").expect("fetch"),
        project
    );
}

#[test]
fn create_duplicate_name_changes_nothing() {
    let (root, ctx) = setup();
    lifecycle::create(&ctx, new_project("dup", &["a"])).expect("first");
    fs::write(root.path().join("dup").join("file.txt"), "keep").expect("write");

    let err = lifecycle::create(&ctx, new_project("  DUP ", &["b"])).unwrap_err();
    assert!(matches!(err, RegistryError::DuplicateProject { .. }), "got: {err}");

    let all = lifecycle::list(&ctx, None).expect("list");
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].tags, vec!["a"]);
    root.child("dup/file.txt").assert("keep");
}

#[test]
fn create_over_existing_directory_is_duplicate() {
    let (root, ctx) = setup();
    root.child("taken").create_dir_all().expect("mkdir");
    root.child("taken/own.txt").write_str("mine").expect("write");

    let err = lifecycle::create(&ctx, new_project("taken", &[])).unwrap_err();
    assert!(matches!(err, RegistryError::DuplicateProject { .. }));
    assert!(lifecycle::list(&ctx, None).expect("list").is_empty());
    root.child("taken/own.txt").assert("mine");
}

#[test]
fn create_with_migration_copies_source() {
    let (root, ctx) = setup();
    let old = assert_fs::TempDir::new().expect("old project");
    old.child("src/main.rs").write_str("fn main() {}").expect("write");
    old.child("README.md").write_str("# old").expect("write");

    let project = lifecycle::create(
        &ctx,
        NewProject {
            source: Source::Migrate(old.path().to_path_buf()),
            ..new_project("moved", &["rust"])
        },
    )
    .expect("create");

    root.child("moved/src/main.rs").assert("fn main() {}");
    root.child("moved/README.md").assert("# old");
    old.child("src/main.rs").assert(predicate::path::exists());
    assert_eq!(project.path, root.path().join("moved"));
}

// ---------------------------------------------------------------------------
// 2. Open
// ---------------------------------------------------------------------------

#[test]
fn open_runs_non_comment_lines_in_project_dir() {
    let (_root, ctx) = setup();
    let project = lifecycle::create(
        &ctx,
        NewProject {
            launch_script: "# comment\nfirst\nfail\n\n  # another\nlast".into(),
            ..new_project("scripted", &[])
        },
    )
    .expect("create");

    let mut runner = Recorder::default();
    let opened = lifecycle::open(&ctx, "scripted", OpenMode::RunScript, &mut runner).expect("open");

    let commands: Vec<_> = runner.calls.iter().map(|(c, _)| c.as_str()).collect();
    assert_eq!(commands, vec!["first", "fail", "last"]);
    assert!(runner.calls.iter().all(|(_, cwd)| cwd == &project.path));
    assert_eq!(opened.commands.len(), 3);
    assert!(!opened.commands[1].succeeded());
    assert!(!opened.recreated_dir);
}

#[test]
fn safe_open_runs_nothing() {
    let (_root, ctx) = setup();
    lifecycle::create(
        &ctx,
        NewProject {
            launch_script: "rm -rf build".into(),
            ..new_project("careful", &[])
        },
    )
    .expect("create");

    let mut runner = Recorder::default();
    let opened = lifecycle::open(&ctx, "careful", OpenMode::Safe, &mut runner).expect("open");
    assert!(runner.calls.is_empty());
    assert!(opened.commands.is_empty());
}

#[test]
fn open_recreates_missing_directory() {
    let (root, ctx) = setup();
    lifecycle::create(&ctx, new_project("vanished", &[])).expect("create");
    fs::remove_dir(root.path().join("vanished")).expect("rmdir");

    let opened =
        lifecycle::open(&ctx, "vanished", OpenMode::Safe, &mut Recorder::default()).expect("open");
    assert!(opened.recreated_dir);
    root.child("vanished").assert(predicate::path::is_dir());
}

#[test]
fn open_unknown_is_not_found() {
    let (_root, ctx) = setup();
    let err = lifecycle::open(&ctx, "nope", OpenMode::Safe, &mut Recorder::default()).unwrap_err();
    assert!(matches!(err, RegistryError::NotFound { .. }));
}

// ---------------------------------------------------------------------------
// 3. Edit
// ---------------------------------------------------------------------------

#[test]
fn rename_moves_record_and_directory() {
    let (root, ctx) = setup();
    let before = lifecycle::create(
        &ctx,
        NewProject {
            launch_script: "make".into(),
            ..new_project("foo", &["x", "y"])
        },
    )
    .expect("create");
    root.child("foo/data.txt").write_str("payload").expect("write");

    let mut io = Scripted {
        answers: VecDeque::from(["Bar".to_string()]),
        confirms: VecDeque::from([true]),
        ..Default::default()
    };
    let outcome = lifecycle::edit_project(&ctx, "foo", EditField::Name, &mut io).expect("edit");

    let EditOutcome::Applied(after) = outcome else {
        panic!("expected rename to apply");
    };
    assert!(lifecycle::fetch(&ctx, "foo").is_err());
    let stored = lifecycle::fetch(&ctx, "bar").expect("fetch bar");
    assert_eq!(stored, after);
    assert_eq!(stored.id, before.id);
    assert_eq!(stored.tags, before.tags);
    assert_eq!(stored.launch_script, before.launch_script);
    assert_eq!(stored.created, before.created);
    assert_eq!(stored.path, root.path().join("bar"));
    root.child("bar/data.txt").assert("payload");
    root.child("foo").assert(predicate::path::missing());
}

#[test]
fn rename_onto_claimed_name_is_rejected_before_confirming() {
    let (root, ctx) = setup();
    lifecycle::create(&ctx, new_project("foo", &[])).expect("foo");
    lifecycle::create(&ctx, new_project("bar", &[])).expect("bar");

    let mut io = Scripted {
        answers: VecDeque::from(["bar".to_string()]),
        confirms: VecDeque::from([true]),
        ..Default::default()
    };
    let err = lifecycle::edit_project(&ctx, "foo", EditField::Name, &mut io).unwrap_err();
    assert!(matches!(err, RegistryError::DuplicateProject { .. }));
    assert_eq!(io.confirms.len(), 1, "must not ask for confirmation");

    assert!(lifecycle::fetch(&ctx, "foo").is_ok());
    assert!(lifecycle::fetch(&ctx, "bar").is_ok());
    root.child("foo").assert(predicate::path::is_dir());
}

#[test]
fn declined_rename_changes_nothing() {
    let (root, ctx) = setup();
    lifecycle::create(&ctx, new_project("stay", &[])).expect("create");
    let mut io = Scripted {
        answers: VecDeque::from(["moved".to_string()]),
        confirms: VecDeque::from([false]),
        ..Default::default()
    };
    let outcome = lifecycle::edit_project(&ctx, "stay", EditField::Name, &mut io).expect("edit");
    assert_eq!(outcome, EditOutcome::Cancelled);
    root.child("stay").assert(predicate::path::is_dir());
    root.child("moved").assert(predicate::path::missing());
}

#[test]
fn edit_tags_replaces_text_wholesale() {
    let (_root, ctx) = setup();
    lifecycle::create(&ctx, new_project("tagged", &["old"])).expect("create");
    let mut io = Scripted {
        answers: VecDeque::from(["new, shiny,tags".to_string()]),
        confirms: VecDeque::from([true]),
        ..Default::default()
    };
    lifecycle::edit_project(&ctx, "tagged", EditField::Tags, &mut io).expect("edit");

    assert!(io.shown[0].contains("old"));
    let stored = lifecycle::fetch(&ctx, "tagged").expect("fetch");
    assert_eq!(stored.tags, vec!["new", "shiny,tags"]);
    assert_eq!(stored.tags_text(), "new, shiny,tags");
}

#[test]
fn edit_commands_uses_editor_and_confirmation() {
    let (_root, ctx) = setup();
    lifecycle::create(
        &ctx,
        NewProject {
            launch_script: "old".into(),
            ..new_project("cmds", &[])
        },
    )
    .expect("create");

    let mut io = Scripted {
        edits: VecDeque::from([Some("code .\ncargo run".to_string())]),
        confirms: VecDeque::from([true]),
        ..Default::default()
    };
    lifecycle::edit_project(&ctx, "cmds", EditField::Commands, &mut io).expect("edit");
    assert_eq!(io.shown[0], "old", "editor starts from the stored script");
    assert_eq!(
        lifecycle::fetch(&ctx, "cmds").expect("fetch").launch_script,
        "code .\ncargo run"
    );
}

#[test]
fn abandoned_editor_cancels() {
    let (_root, ctx) = setup();
    lifecycle::create(&ctx, new_project("cmds", &[])).expect("create");
    let mut io = Scripted {
        edits: VecDeque::from([None]),
        ..Default::default()
    };
    let outcome = lifecycle::edit_project(&ctx, "cmds", EditField::Commands, &mut io).expect("edit");
    assert_eq!(outcome, EditOutcome::Cancelled);
}

#[test]
fn edit_unknown_is_not_found() {
    let (_root, ctx) = setup();
    let err = lifecycle::edit_project(&ctx, "ghost", EditField::Tags, &mut Scripted::default())
        .unwrap_err();
    assert!(matches!(err, RegistryError::NotFound { .. }));
}

// ---------------------------------------------------------------------------
// 4. Remove
// ---------------------------------------------------------------------------

#[test]
fn remove_keeps_directory() {
    let (root, ctx) = setup();
    lifecycle::create(&ctx, new_project("gone", &[])).expect("create");
    root.child("gone/README.md").write_str("# gone").expect("write");

    let outcome = lifecycle::remove(&ctx, "gone", &mut Scripted::confirming(true)).expect("remove");
    assert!(matches!(outcome, RemoveOutcome::Removed(_)));
    assert!(matches!(
        lifecycle::fetch(&ctx, "gone"),
        Err(RegistryError::NotFound { .. })
    ));
    root.child("gone/README.md").assert("# gone");
}

#[test]
fn declined_remove_keeps_record() {
    let (_root, ctx) = setup();
    lifecycle::create(&ctx, new_project("kept", &[])).expect("create");
    let outcome = lifecycle::remove(&ctx, "kept", &mut Scripted::confirming(false)).expect("remove");
    assert_eq!(outcome, RemoveOutcome::Cancelled);
    assert!(lifecycle::fetch(&ctx, "kept").is_ok());
}
