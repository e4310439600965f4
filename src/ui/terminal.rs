//! Line-oriented interactive terminal UI
//!
//! Prompts on stdout, reads commands from stdin one line at a time. EOF on
//! stdin is treated as "quit"/"back" so the binary stays scriptable.

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use chrono::{DateTime, NaiveDate, TimeZone, Utc};

use crate::domain::{Credential, TodoEntry, TodoList, User, UserDirectory};

use super::{edit_text, EntryAction, ListAction, Ui};

const BOX_UNCHECKED: &str = "☐";
const BOX_CHECKED: &str = "☑";

/// The interactive UI variant.
#[derive(Default)]
pub struct TerminalUi;

impl TerminalUi {
    pub fn new() -> Self {
        Self
    }

    /// Prompts and reads one trimmed line; None on EOF.
    fn prompt(&mut self, message: &str) -> Result<Option<String>> {
        print!("{message}");
        io::stdout().flush().context("Failed to flush stdout")?;

        let mut line = String::new();
        let read = io::stdin()
            .lock()
            .read_line(&mut line)
            .context("Failed to read from stdin")?;
        if read == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn prompt_date(&mut self, message: &str) -> Result<Option<DateTime<Utc>>> {
        loop {
            let Some(input) = self.prompt(message)? else {
                return Ok(None);
            };
            if input.is_empty() {
                return Ok(Some(Utc::now()));
            }
            match parse_date(&input) {
                Some(date) => return Ok(Some(date)),
                None => println!("Could not read that date; use YYYY-MM-DD."),
            }
        }
    }
}

impl Ui for TerminalUi {
    fn login(&mut self, users: &mut UserDirectory) -> Result<Option<User>> {
        println!("Welcome to PeerTodo!");
        println!("No login information found. Please register.");
        println!("====================");

        let id = loop {
            let Some(id) = self.prompt("ID: ")? else {
                return Ok(None);
            };
            if id.is_empty() {
                continue;
            }
            if users.contains(&id) {
                println!("ID already exists. Please try again.");
                continue;
            }
            break id;
        };

        let Some(password) = self.prompt("Password: ")? else {
            return Ok(None);
        };
        let Some(name) = self.prompt("Your name: ")? else {
            return Ok(None);
        };
        let Some(email) = self.prompt("Your email: ")? else {
            return Ok(None);
        };

        let user = User::new(name, email, id, Credential::new(&password));
        // The directory keeps the credential-bearing record; the session
        // holds a detached copy.
        let current = user.detached();
        users.add(user);

        Ok(Some(current))
    }

    fn show_all_lists(&mut self, lists: &[TodoList]) -> Result<ListAction> {
        println!();
        println!("Your todo lists:");
        if lists.is_empty() {
            println!("  (none yet)");
        }
        for (i, list) in lists.iter().enumerate() {
            println!("{:>3}. {} ({} entries)", i + 1, list.title(), list.len());
        }

        loop {
            let Some(input) = self.prompt("[lists] number | add | remove N | quit > ")? else {
                return Ok(ListAction::Exit);
            };
            match parse_command(&input, lists.len()) {
                Some(Command::Quit) => return Ok(ListAction::Exit),
                Some(Command::Add) => return Ok(ListAction::Add),
                Some(Command::Remove(i)) => return Ok(ListAction::Remove(i)),
                Some(Command::Select(i)) => return Ok(ListAction::Select(i)),
                Some(_) | None => println!("Unknown command."),
            }
        }
    }

    fn create_list(&mut self, lists: &mut Vec<TodoList>) -> Result<()> {
        let Some(title) = self.prompt("List title: ")? else {
            return Ok(());
        };
        if !title.is_empty() {
            lists.push(TodoList::new(title));
        }
        Ok(())
    }

    fn list_entries(&mut self, list: &TodoList) -> Result<EntryAction> {
        println!();
        println!("{}", list.title());
        println!("====================");
        if list.is_empty() {
            println!("  (empty)");
        }
        for (i, entry) in list.entries().iter().enumerate() {
            let boxed = if entry.is_completed() {
                BOX_CHECKED
            } else {
                BOX_UNCHECKED
            };
            println!(
                "{:>3}. {} {}  (due {})",
                i + 1,
                boxed,
                entry.title(),
                entry.deadline().format("%Y-%m-%d")
            );
        }

        loop {
            let Some(input) =
                self.prompt("[entries] number | add | remove N | check N | uncheck N | back > ")?
            else {
                return Ok(EntryAction::Back);
            };
            match parse_command(&input, list.len()) {
                Some(Command::Quit) => return Ok(EntryAction::Back),
                Some(Command::Add) => return Ok(EntryAction::Add),
                Some(Command::Remove(i)) => return Ok(EntryAction::Remove(i)),
                Some(Command::Check(i)) => return Ok(EntryAction::Check(i)),
                Some(Command::Uncheck(i)) => return Ok(EntryAction::Uncheck(i)),
                Some(Command::Select(i)) => return Ok(EntryAction::Select(i)),
                None => println!("Unknown command."),
            }
        }
    }

    fn create_entry(&mut self, list: &mut TodoList) -> Result<()> {
        let Some(title) = self.prompt("Entry title: ")? else {
            return Ok(());
        };
        if title.is_empty() {
            return Ok(());
        }
        let Some(description) = self.prompt("Description: ")? else {
            return Ok(());
        };
        let Some(deadline) = self.prompt_date("Deadline (YYYY-MM-DD, blank = today): ")? else {
            return Ok(());
        };

        list.add(title, description, deadline);
        Ok(())
    }

    fn edit_entry(&mut self, entry: &mut TodoEntry) -> Result<()> {
        println!();
        println!("Title: {}", entry.title());
        println!("Description: {}", entry.description());
        println!("Created: {}", entry.created().format("%Y-%m-%d"));
        println!("Deadline: {}", entry.deadline().format("%Y-%m-%d"));
        println!(
            "Completed: {}",
            if entry.is_completed() { "Yes" } else { "No" }
        );

        loop {
            let Some(input) = self.prompt("[edit] title | describe | deadline | back > ")? else {
                return Ok(());
            };
            match input.as_str() {
                "" | "back" | "b" | "done" => return Ok(()),
                "title" | "t" => {
                    if let Some(title) = self.prompt("New title: ")? {
                        if !title.is_empty() {
                            entry.set_title(title);
                        }
                    }
                }
                "describe" | "desc" | "d" => match edit_text(entry.description()) {
                    Ok(text) => entry.set_description(text),
                    // The edit aborts; the entry keeps its description.
                    Err(e) => eprintln!("Error: {e:#}"),
                },
                "deadline" => {
                    if let Some(deadline) =
                        self.prompt_date("New deadline (YYYY-MM-DD, blank = today): ")?
                    {
                        entry.set_deadline(deadline);
                    }
                }
                _ => println!("Unknown command."),
            }
        }
    }
}

enum Command {
    Quit,
    Add,
    Select(usize),
    Remove(usize),
    Check(usize),
    Uncheck(usize),
}

/// Parses a screen command; selection arguments are 1-based on screen and
/// 0-based in the returned command.
fn parse_command(input: &str, len: usize) -> Option<Command> {
    let mut words = input.split_whitespace();
    let head = words.next()?;
    let arg = words.next();

    let index = |arg: Option<&str>| -> Option<usize> {
        let n: usize = arg?.parse().ok()?;
        (1..=len).contains(&n).then(|| n - 1)
    };

    match head {
        "quit" | "exit" | "q" | "back" => Some(Command::Quit),
        "add" | "a" => Some(Command::Add),
        "remove" | "rm" => index(arg).map(Command::Remove),
        "check" => index(arg).map(Command::Check),
        "uncheck" => index(arg).map(Command::Uncheck),
        _ => index(Some(head)).map(Command::Select),
    }
}

fn parse_date(input: &str) -> Option<DateTime<Utc>> {
    let date = NaiveDate::parse_from_str(input, "%Y-%m-%d").ok()?;
    let midnight = date.and_hms_opt(0, 0, 0)?;
    Some(Utc.from_utc_datetime(&midnight))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_selection_is_one_based_and_bounded() {
        assert!(matches!(parse_command("1", 3), Some(Command::Select(0))));
        assert!(matches!(parse_command("3", 3), Some(Command::Select(2))));
        assert!(parse_command("0", 3).is_none());
        assert!(parse_command("4", 3).is_none());
    }

    #[test]
    fn parse_commands_with_arguments() {
        assert!(matches!(
            parse_command("remove 2", 3),
            Some(Command::Remove(1))
        ));
        assert!(matches!(
            parse_command("check 1", 3),
            Some(Command::Check(0))
        ));
        assert!(matches!(
            parse_command("uncheck 3", 3),
            Some(Command::Uncheck(2))
        ));
        assert!(parse_command("remove", 3).is_none());
        assert!(parse_command("remove 9", 3).is_none());
    }

    #[test]
    fn parse_bare_commands() {
        assert!(matches!(parse_command("quit", 0), Some(Command::Quit)));
        assert!(matches!(parse_command("back", 0), Some(Command::Quit)));
        assert!(matches!(parse_command("add", 0), Some(Command::Add)));
        assert!(parse_command("frobnicate", 0).is_none());
    }

    #[test]
    fn parse_date_formats() {
        assert!(parse_date("2025-01-01").is_some());
        assert!(parse_date("not a date").is_none());
        assert!(parse_date("2025-13-01").is_none());
    }
}
