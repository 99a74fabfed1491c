//! Line-oriented terminal frontend
//!
//! Reads one command per line and renders view model output as plain text.

use std::io::{self, BufRead, Write};
use std::str::FromStr;

use notes_core::Theme;

use crate::clipboard;
use crate::frontend::{Frontend, NoteItem, NoteListing};
use crate::state::AppState;
use crate::viewmodel::{auth, notes};

const HELP: &str = "\
Commands:
  register <username> <password> <confirm>
  login <username> <password>
  logout
  whoami
  theme                          toggle light/dark
  new <title> | <description>
  edit <id> <title> | <description>
  delete <id>
  show <id>
  copy <id>                      copy title and description
  list
  search [query]                 empty query shows everything
  sort <updated|created|title>
  help
  quit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Register {
        username: String,
        password: String,
        confirmation: String,
    },
    Login {
        username: String,
        password: String,
    },
    Logout,
    Whoami,
    Theme,
    New {
        title: String,
        description: String,
    },
    Edit {
        id: String,
        title: String,
        description: String,
    },
    Delete(String),
    Show(String),
    Copy(String),
    List,
    Search(String),
    Sort(String),
    Help,
    Quit,
}

impl Command {
    /// Verb only; arguments may hold passwords
    pub fn name(&self) -> &'static str {
        match self {
            Command::Register { .. } => "register",
            Command::Login { .. } => "login",
            Command::Logout => "logout",
            Command::Whoami => "whoami",
            Command::Theme => "theme",
            Command::New { .. } => "new",
            Command::Edit { .. } => "edit",
            Command::Delete(_) => "delete",
            Command::Show(_) => "show",
            Command::Copy(_) => "copy",
            Command::List => "list",
            Command::Search(_) => "search",
            Command::Sort(_) => "sort",
            Command::Help => "help",
            Command::Quit => "quit",
        }
    }
}

/// "title | description"; a missing bar leaves the description empty
fn split_content(rest: &str) -> (String, String) {
    match rest.split_once('|') {
        Some((title, description)) => (title.to_string(), description.to_string()),
        None => (rest.to_string(), String::new()),
    }
}

/// Missing words become empty strings so validation reports them
fn words<const N: usize>(rest: &str) -> [String; N] {
    let mut parts = rest.split_whitespace();
    std::array::from_fn(|_| parts.next().unwrap_or_default().to_string())
}

fn required_id(verb: &str, rest: &str) -> Result<String, String> {
    let id = rest.trim();
    if id.is_empty() {
        Err(format!("Usage: {} <id>", verb))
    } else {
        Ok(id.to_string())
    }
}

impl FromStr for Command {
    type Err = String;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (verb, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
        let rest = rest.trim();

        let command = match verb.to_lowercase().as_str() {
            "register" => {
                let [username, password, confirmation] = words::<3>(rest);
                Command::Register {
                    username,
                    password,
                    confirmation,
                }
            }
            "login" => {
                let [username, password] = words::<2>(rest);
                Command::Login { username, password }
            }
            "logout" => Command::Logout,
            "whoami" => Command::Whoami,
            "theme" => Command::Theme,
            "new" => {
                let (title, description) = split_content(rest);
                Command::New { title, description }
            }
            "edit" => {
                let (id, content) = rest.split_once(char::is_whitespace).unwrap_or((rest, ""));
                let id = required_id("edit", id)?;
                let (title, description) = split_content(content);
                Command::Edit {
                    id,
                    title,
                    description,
                }
            }
            "delete" => Command::Delete(required_id("delete", rest)?),
            "show" => Command::Show(required_id("show", rest)?),
            "copy" => Command::Copy(required_id("copy", rest)?),
            "list" => Command::List,
            "search" => Command::Search(rest.to_string()),
            "sort" => Command::Sort(rest.to_string()),
            "help" | "?" => Command::Help,
            "quit" | "exit" => Command::Quit,
            other => return Err(format!("Unknown command '{}', try 'help'", other)),
        };

        Ok(command)
    }
}

pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    fn line(&mut self, text: &str) {
        if let Err(e) = writeln!(self.output, "{}", text) {
            tracing::warn!(error = %e, "Failed to write to terminal");
        }
    }

    /// Next input line without its newline, `None` at end of input
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut buf = String::new();
        if self.input.read_line(&mut buf)? == 0 {
            return Ok(None);
        }
        Ok(Some(buf.trim_end_matches(['\r', '\n']).to_string()))
    }

    fn prompt(&mut self, text: &str) -> io::Result<()> {
        write!(self.output, "{}", text)?;
        self.output.flush()
    }

    /// Run until `quit` or end of input
    pub fn run(&mut self, state: &mut AppState) -> io::Result<()> {
        self.line("Notes. Type 'help' for commands.");
        auth::show_theme(state, self);
        auth::restore_session(state, self);

        loop {
            self.prompt("> ")?;
            let Some(line) = self.read_line()? else {
                break;
            };
            if line.trim().is_empty() {
                continue;
            }

            match line.parse::<Command>() {
                Ok(Command::Quit) => break,
                Ok(command) => self.execute(state, command),
                Err(message) => self.line(&message),
            }
        }

        Ok(())
    }

    pub fn execute(&mut self, state: &mut AppState, command: Command) {
        tracing::debug!(command = command.name(), "Dispatching command");
        match command {
            Command::Register {
                username,
                password,
                confirmation,
            } => auth::register(state, self, &username, &password, &confirmation),
            Command::Login { username, password } => {
                auth::login(state, self, &username, &password)
            }
            Command::Logout => auth::logout(state, self),
            Command::Whoami => auth::whoami(state, self),
            Command::Theme => auth::toggle_theme(state, self),
            Command::New { title, description } => {
                notes::create(state, self, &title, &description)
            }
            Command::Edit {
                id,
                title,
                description,
            } => notes::edit(state, self, &id, &title, &description),
            Command::Delete(id) => notes::delete(state, self, &id),
            Command::Show(id) => notes::show(state, self, &id),
            Command::Copy(id) => notes::copy(state, self, &id),
            Command::List => notes::refresh(state, self),
            Command::Search(query) => notes::search(state, self, &query),
            Command::Sort(key) => notes::sort(state, self, &key),
            Command::Help => self.line(HELP),
            Command::Quit => {}
        }
    }
}

impl<R: BufRead, W: Write> Frontend for Console<R, W> {
    fn show_auth_error(&mut self, message: &str) {
        self.line(&format!("error: {}", message));
    }

    fn show_auth_success(&mut self, message: &str) {
        self.line(&format!("{}. You can now log in.", message));
    }

    fn show_logged_in(&mut self, username: &str) {
        self.line(&format!("Logged in as {}", username));
    }

    fn show_logged_out(&mut self) {
        self.line("Not logged in. Use 'login' or 'register'.");
    }

    fn show_theme(&mut self, theme: Theme) {
        self.line(&format!("Theme: {}", theme));
    }

    fn show_notes(&mut self, listing: &NoteListing) {
        self.line(&format!(
            "{} (sorted by {})",
            listing.summary(),
            listing.sort
        ));

        if listing.items.is_empty() {
            let (heading, hint) = listing.empty_state();
            self.line(&format!("  {}. {}.", heading, hint));
            return;
        }

        for item in &listing.items {
            let preview = item.description.lines().next().unwrap_or_default();
            self.line(&format!("  [{}] {}  ({})", item.id, item.title, item.updated));
            self.line(&format!("      {}", preview));
        }
    }

    fn show_note(&mut self, note: &NoteItem) {
        self.line(&format!("[{}] {}", note.id, note.title));
        self.line(&format!("Updated {}", note.updated));
        self.line("");
        self.line(&note.description);
    }

    fn show_notes_error(&mut self, message: &str) {
        self.line(&format!("error: {}", message));
    }

    fn show_status(&mut self, message: &str) {
        self.line(message);
    }

    fn confirm(&mut self, question: &str) -> bool {
        if self.prompt(&format!("{} [y/N] ", question)).is_err() {
            return false;
        }
        match self.read_line() {
            Ok(Some(answer)) => matches!(answer.trim().to_lowercase().as_str(), "y" | "yes"),
            _ => false,
        }
    }

    fn copy_to_clipboard(&mut self, text: &str) -> bool {
        clipboard::copy_text(text)
    }
}
