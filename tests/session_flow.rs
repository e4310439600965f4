//! End-to-end session lifecycle tests
//!
//! These drive the run loop with a scripted Ui implementation instead of a
//! terminal, then reopen the store to verify what was persisted.

use std::collections::VecDeque;

use anyhow::{anyhow, Result};
use chrono::{TimeZone, Utc};
use tempfile::TempDir;

use peertodo::ui::{EntryAction, ListAction, Ui};
use peertodo::{Credential, DataStore, Session, TodoEntry, TodoList, User, UserDirectory};

/// Replays a fixed sequence of screen commands.
struct ScriptedUi {
    list_actions: VecDeque<ListAction>,
    entry_actions: VecDeque<EntryAction>,
    new_lists: VecDeque<&'static str>,
    new_entries: VecDeque<(&'static str, &'static str, i64)>,
    register_as: Option<(&'static str, &'static str, &'static str, &'static str)>,
    edits: usize,
}

impl ScriptedUi {
    fn new() -> Self {
        Self {
            list_actions: VecDeque::new(),
            entry_actions: VecDeque::new(),
            new_lists: VecDeque::new(),
            new_entries: VecDeque::new(),
            register_as: None,
            edits: 0,
        }
    }
}

impl Ui for ScriptedUi {
    fn login(&mut self, users: &mut UserDirectory) -> Result<Option<User>> {
        let Some((name, email, id, password)) = self.register_as.take() else {
            return Ok(None);
        };
        let user = User::new(name, email, id, Credential::new(password));
        let current = user.detached();
        users.add(user);
        Ok(Some(current))
    }

    fn show_all_lists(&mut self, _lists: &[TodoList]) -> Result<ListAction> {
        Ok(self.list_actions.pop_front().unwrap_or(ListAction::Exit))
    }

    fn create_list(&mut self, lists: &mut Vec<TodoList>) -> Result<()> {
        if let Some(title) = self.new_lists.pop_front() {
            lists.push(TodoList::new(title));
        }
        Ok(())
    }

    fn list_entries(&mut self, _list: &TodoList) -> Result<EntryAction> {
        Ok(self.entry_actions.pop_front().unwrap_or(EntryAction::Back))
    }

    fn create_entry(&mut self, list: &mut TodoList) -> Result<()> {
        if let Some((title, description, deadline)) = self.new_entries.pop_front() {
            list.add(title, description, Utc.timestamp_opt(deadline, 0).unwrap());
        }
        Ok(())
    }

    fn edit_entry(&mut self, entry: &mut TodoEntry) -> Result<()> {
        self.edits += 1;
        entry.set_description("edited");
        Ok(())
    }
}

fn store_in(dir: &TempDir) -> DataStore {
    DataStore::at(dir.path().join("p2d"))
}

#[test]
fn full_session_lifecycle_persists_across_runs() {
    let dir = TempDir::new().unwrap();

    // First run: register, build a list, work with its entries, quit.
    {
        let mut ui = ScriptedUi::new();
        ui.register_as = Some(("Alice", "alice@example.com", "alice", "hunter2"));
        ui.new_lists.push_back("Groceries");
        ui.new_entries.push_back(("Milk", "2 liters", 200));
        ui.new_entries.push_back(("Eggs", "", 100));
        ui.list_actions.push_back(ListAction::Add);
        ui.list_actions.push_back(ListAction::Select(0));
        ui.entry_actions.push_back(EntryAction::Add);
        ui.entry_actions.push_back(EntryAction::Add);
        // Eggs sorted first by deadline; check it off
        ui.entry_actions.push_back(EntryAction::Check(0));
        ui.entry_actions.push_back(EntryAction::Back);
        ui.list_actions.push_back(ListAction::Exit);

        let mut session = Session::open(store_in(&dir)).unwrap();
        session.run(&mut ui).unwrap();
        session.save().unwrap();
    }

    // Second run: everything is back, and no login flow runs.
    {
        let mut ui = ScriptedUi::new(); // register_as is None: login would yield no user
        let mut session = Session::open(store_in(&dir)).unwrap();

        assert_eq!(session.current_user().unwrap().id(), "alice");
        assert_eq!(session.users().len(), 1);
        assert!(session.users()["alice"].verify("hunter2"));

        let list = &session.lists()[0];
        assert_eq!(list.title(), "Groceries");
        let titles: Vec<_> = list.entries().iter().map(|e| e.title()).collect();
        assert_eq!(titles, ["Eggs", "Milk"]);
        assert!(list.entries()[0].is_completed());
        assert!(!list.entries()[1].is_completed());

        session.run(&mut ui).unwrap();
        // Still signed in: the login flow never ran
        assert!(session.current_user().is_some());
    }
}

#[test]
fn removing_lists_and_entries_through_the_loop() {
    let dir = TempDir::new().unwrap();

    let mut ui = ScriptedUi::new();
    ui.register_as = Some(("Bob", "bob@example.com", "bob", "pw"));
    ui.new_lists.push_back("Chores");
    ui.new_lists.push_back("Errands");
    ui.new_entries.push_back(("Sweep", "", 100));
    ui.new_entries.push_back(("Dust", "", 200));

    ui.list_actions.push_back(ListAction::Add);
    ui.list_actions.push_back(ListAction::Add);
    ui.list_actions.push_back(ListAction::Select(0));
    ui.entry_actions.push_back(EntryAction::Add);
    ui.entry_actions.push_back(EntryAction::Add);
    ui.entry_actions.push_back(EntryAction::Remove(0)); // drop Sweep
    ui.entry_actions.push_back(EntryAction::Back);
    ui.list_actions.push_back(ListAction::Remove(1)); // drop Errands
    ui.list_actions.push_back(ListAction::Exit);

    let mut session = Session::open(store_in(&dir)).unwrap();
    session.run(&mut ui).unwrap();

    assert_eq!(session.lists().len(), 1);
    assert_eq!(session.lists()[0].title(), "Chores");
    let titles: Vec<_> = session.lists()[0]
        .entries()
        .iter()
        .map(|e| e.title())
        .collect();
    assert_eq!(titles, ["Dust"]);
}

#[test]
fn selecting_an_entry_opens_it_for_editing() {
    let dir = TempDir::new().unwrap();

    let mut ui = ScriptedUi::new();
    ui.register_as = Some(("Cy", "cy@example.com", "cy", "pw"));
    ui.new_lists.push_back("Notes");
    ui.new_entries.push_back(("Idea", "raw", 100));

    ui.list_actions.push_back(ListAction::Add);
    ui.list_actions.push_back(ListAction::Select(0));
    ui.entry_actions.push_back(EntryAction::Add);
    ui.entry_actions.push_back(EntryAction::Select(0));
    ui.entry_actions.push_back(EntryAction::Back);
    ui.list_actions.push_back(ListAction::Exit);

    let mut session = Session::open(store_in(&dir)).unwrap();
    session.run(&mut ui).unwrap();

    assert_eq!(ui.edits, 1);
    assert_eq!(session.lists()[0].entries()[0].description(), "edited");
}

#[test]
fn abandoned_login_leaves_session_without_user() {
    let dir = TempDir::new().unwrap();

    let mut ui = ScriptedUi::new(); // no register_as
    ui.list_actions.push_back(ListAction::Exit);

    let mut session = Session::open(store_in(&dir)).unwrap();
    session.run(&mut ui).unwrap();
    session.save().unwrap();

    assert!(session.current_user().is_none());
    assert!(!store_in(&dir).login_path().exists());
}

/// Adds one list, then fails on the next screen, as if stdin broke away
/// mid-session.
struct BreaksAfterOneAdd {
    added: bool,
}

impl Ui for BreaksAfterOneAdd {
    fn login(&mut self, _users: &mut UserDirectory) -> Result<Option<User>> {
        Ok(None)
    }

    fn show_all_lists(&mut self, _lists: &[TodoList]) -> Result<ListAction> {
        if self.added {
            Err(anyhow!("lost the terminal"))
        } else {
            Ok(ListAction::Add)
        }
    }

    fn create_list(&mut self, lists: &mut Vec<TodoList>) -> Result<()> {
        self.added = true;
        lists.push(TodoList::new("Survivor"));
        Ok(())
    }

    fn list_entries(&mut self, _list: &TodoList) -> Result<EntryAction> {
        Ok(EntryAction::Back)
    }

    fn create_entry(&mut self, _list: &mut TodoList) -> Result<()> {
        Ok(())
    }

    fn edit_entry(&mut self, _entry: &mut TodoEntry) -> Result<()> {
        Ok(())
    }
}

#[test]
fn run_failure_still_persists_the_session() {
    let dir = TempDir::new().unwrap();

    let mut ui = BreaksAfterOneAdd { added: false };
    let mut session = Session::open(store_in(&dir)).unwrap();
    let err = session.run_and_save(&mut ui).unwrap_err();
    assert!(err.to_string().contains("lost the terminal"));

    // The list added before the failure survived the abnormal exit
    let reopened = Session::open(store_in(&dir)).unwrap();
    assert_eq!(reopened.lists().len(), 1);
    assert_eq!(reopened.lists()[0].title(), "Survivor");
}

#[test]
fn out_of_bounds_commands_are_ignored() {
    let dir = TempDir::new().unwrap();

    let mut ui = ScriptedUi::new();
    ui.register_as = Some(("Dee", "dee@example.com", "dee", "pw"));
    ui.new_lists.push_back("Only");

    ui.list_actions.push_back(ListAction::Add);
    ui.list_actions.push_back(ListAction::Remove(7));
    ui.list_actions.push_back(ListAction::Select(0));
    ui.entry_actions.push_back(EntryAction::Remove(0)); // list is empty
    ui.entry_actions.push_back(EntryAction::Check(3));
    ui.entry_actions.push_back(EntryAction::Back);
    ui.list_actions.push_back(ListAction::Exit);

    let mut session = Session::open(store_in(&dir)).unwrap();
    session.run(&mut ui).unwrap();

    assert_eq!(session.lists().len(), 1);
    assert!(session.lists()[0].is_empty());
}
