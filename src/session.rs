//! Session lifecycle
//!
//! A session loads the three persisted aggregates at startup, hands
//! control to the UI collaborator for the run loop, and writes everything
//! back at shutdown. All state is owned exclusively by the session for the
//! lifetime of the process.

use anyhow::{Context, Result};

use crate::domain::{TodoList, User, UserDirectory};
use crate::storage::DataStore;
use crate::ui::{EntryAction, ListAction, Ui};

/// The in-memory world: current user, directory, and lists, bound to a
/// [`DataStore`].
pub struct Session {
    store: DataStore,
    current_user: Option<User>,
    users: UserDirectory,
    lists: Vec<TodoList>,
}

impl Session {
    /// Opens a session against the store.
    ///
    /// On the first run the data directory is created and the session
    /// starts empty. Otherwise each aggregate file is loaded if present; a
    /// missing file leaves its aggregate at the empty default, while a
    /// corrupt one aborts the open before any state could be written back.
    pub fn open(store: DataStore) -> Result<Self> {
        if !store.exists() {
            store.init()?;
            return Ok(Self {
                store,
                current_user: None,
                users: UserDirectory::new(),
                lists: Vec::new(),
            });
        }

        let current_user = store.load_login().context("Failed to load login record")?;
        let users = store.load_users().context("Failed to load user directory")?;
        let lists = store.load_lists().context("Failed to load todo lists")?;

        Ok(Self {
            store,
            current_user,
            users,
            lists,
        })
    }

    /// Drives the command loop until the UI returns the exit command.
    ///
    /// When no user is signed in, the UI's login flow runs first and may
    /// populate the current user and the directory.
    pub fn run(&mut self, ui: &mut dyn Ui) -> Result<()> {
        if self.current_user.is_none() {
            self.current_user = ui.login(&mut self.users)?;
        }

        loop {
            match ui.show_all_lists(&self.lists)? {
                ListAction::Exit => break,
                ListAction::Add => ui.create_list(&mut self.lists)?,
                ListAction::Remove(index) => {
                    if index < self.lists.len() {
                        self.lists.remove(index);
                    }
                }
                ListAction::Select(index) => self.run_list(ui, index)?,
            }
        }

        Ok(())
    }

    /// The inner loop over one selected list's entries.
    fn run_list(&mut self, ui: &mut dyn Ui, index: usize) -> Result<()> {
        loop {
            let Some(list) = self.lists.get_mut(index) else {
                return Ok(());
            };

            match ui.list_entries(list)? {
                EntryAction::Back => return Ok(()),
                EntryAction::Add => ui.create_entry(list)?,
                EntryAction::Remove(i) => {
                    list.remove(i);
                }
                EntryAction::Check(i) => {
                    list.mark_completed(i);
                }
                EntryAction::Uncheck(i) => {
                    list.mark_incomplete(i);
                }
                EntryAction::Select(i) => {
                    if let Some(entry) = list.entry_at_mut(i) {
                        ui.edit_entry(entry)?;
                    }
                }
            }
        }
    }

    /// Drives the command loop, then persists all three aggregates no
    /// matter how the loop ended, so work done before a mid-session UI
    /// failure is not lost. A loop error takes precedence over a save
    /// error in the returned result.
    pub fn run_and_save(&mut self, ui: &mut dyn Ui) -> Result<()> {
        let run = self.run(ui);
        let save = self.save();
        run.and(save)
    }

    /// Persists all three aggregates. The login record is written only
    /// when a user is signed in.
    pub fn save(&self) -> Result<()> {
        if let Some(user) = &self.current_user {
            self.store
                .save_login(user)
                .context("Failed to save login record")?;
        }
        self.store
            .save_users(&self.users)
            .context("Failed to save user directory")?;
        self.store
            .save_lists(&self.lists)
            .context("Failed to save todo lists")?;
        Ok(())
    }

    pub fn current_user(&self) -> Option<&User> {
        self.current_user.as_ref()
    }

    pub fn users(&self) -> &UserDirectory {
        &self.users
    }

    pub fn lists(&self) -> &[TodoList] {
        &self.lists
    }
}
