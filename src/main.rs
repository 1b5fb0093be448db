//! Line-oriented shell over a phrase session.
//!
//! Reads one command per line from stdin and prints results to stdout. Logs go
//! to the rotating log file, never to the terminal.
//!
//! # Usage
//!
//! ```text
//! phrasekeeper [config.toml]
//! ```
//!
//! # Commands
//!
//! - `add <text>`: Store a new phrase
//! - `rm <id>`: Delete a phrase by id
//! - `find <term>`: Filter the list (an empty term shows everything)
//! - `list`: Show the current view
//! - `clear`: Delete every phrase
//! - `dismiss`: Clear the last storage error
//! - `help`: Show commands
//! - `quit`: Exit
//!
//! Each `find` line counts as a finished burst of typing: the term is recorded
//! and then settled once the configured delay has elapsed.

#![allow(clippy::multiple_crate_versions)]

use phrasekeeper::app::Session;
use phrasekeeper::domain::phrase::now_millis;
use phrasekeeper::observability::init_tracing;
use phrasekeeper::storage::PhraseStore;
use phrasekeeper::{open_session, Config};
use std::io::{self, BufRead, Write};
use std::path::Path;
use std::process::ExitCode;
use std::time::Instant;

const HELP: &str = "\
commands:
  add <text>    store a new phrase
  rm <id>       delete a phrase
  find <term>   filter phrases (empty term shows all)
  list          show the current view
  clear         delete every phrase
  dismiss       clear the last error
  help          show this help
  quit          exit";

#[derive(Debug, PartialEq, Eq)]
enum Command<'a> {
    Add(&'a str),
    Remove(&'a str),
    Find(&'a str),
    List,
    Clear,
    Dismiss,
    Help,
    Quit,
}

impl<'a> Command<'a> {
    fn parse(line: &'a str) -> Option<Self> {
        let line = line.trim();
        let (word, rest) = line
            .split_once(char::is_whitespace)
            .map_or((line, ""), |(w, r)| (w, r.trim()));

        match word {
            "add" => Some(Self::Add(rest)),
            "rm" | "delete" => Some(Self::Remove(rest)),
            "find" | "search" => Some(Self::Find(rest)),
            "list" | "ls" => Some(Self::List),
            "clear" => Some(Self::Clear),
            "dismiss" => Some(Self::Dismiss),
            "help" | "?" => Some(Self::Help),
            "quit" | "exit" => Some(Self::Quit),
            _ => None,
        }
    }
}

fn load_config() -> Result<Config, phrasekeeper::PhraseError> {
    match std::env::args().nth(1) {
        Some(path) => Config::from_file(Path::new(&path)),
        None => Ok(Config::default()),
    }
}

fn print_view<S: PhraseStore>(session: &mut Session<S>, out: &mut impl Write) -> io::Result<()> {
    let visible = session.visible();
    let now = now_millis();

    if session.has_no_results() {
        writeln!(out, "no phrases match \"{}\"", session.settled_term())?;
    } else if visible.is_empty() {
        writeln!(out, "no phrases yet")?;
    }
    for phrase in visible.iter() {
        writeln!(out, "{}  {:>9}  {}", phrase.id, phrase.age_label(now), phrase.text)?;
    }
    writeln!(out, "({} shown)", visible.len())
}

fn print_error<S: PhraseStore>(session: &Session<S>, out: &mut impl Write) -> io::Result<()> {
    if let Some(message) = session.state().error_message() {
        writeln!(out, "error: {message} (type `dismiss` to clear)")?;
    }
    Ok(())
}

/// Runs one command. Returns `false` when the shell should exit.
fn execute<S: PhraseStore>(
    session: &mut Session<S>,
    command: Command<'_>,
    out: &mut impl Write,
) -> io::Result<bool> {
    match command {
        Command::Add(text) => match session.add_phrase(text) {
            Ok(phrase) => writeln!(out, "added {}", phrase.id)?,
            Err(e) if e.is_validation() => writeln!(out, "rejected: {e}")?,
            Err(_) => print_error(session, out)?,
        },
        Command::Remove(id) => match session.delete_phrase(id) {
            Ok(()) => writeln!(out, "deleted {id}")?,
            Err(e) if e.is_validation() => writeln!(out, "rejected: {e}")?,
            Err(_) => print_error(session, out)?,
        },
        Command::Find(term) => {
            let now = Instant::now();
            session.set_search_term(term, now);
            session.tick(now + session.search_delay());
            print_view(session, out)?;
        }
        Command::List => {
            print_view(session, out)?;
            print_error(session, out)?;
        }
        Command::Clear => match session.clear_all() {
            Ok(()) => writeln!(out, "cleared")?,
            Err(_) => print_error(session, out)?,
        },
        Command::Dismiss => {
            session.clear_error();
        }
        Command::Help => writeln!(out, "{HELP}")?,
        Command::Quit => return Ok(false),
    }
    Ok(true)
}

fn main() -> ExitCode {
    let config = match load_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("phrasekeeper: {e}");
            return ExitCode::FAILURE;
        }
    };

    init_tracing(&config);
    tracing::info!(data_dir = %config.data_dir.display(), "starting phrasekeeper");

    let mut session = match open_session(&config) {
        Ok(session) => session,
        Err(e) => {
            eprintln!("phrasekeeper: {e}");
            return ExitCode::FAILURE;
        }
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let result = (|| -> io::Result<()> {
        print_view(&mut session, &mut out)?;
        print_error(&session, &mut out)?;

        for line in io::stdin().lock().lines() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            let Some(command) = Command::parse(&line) else {
                writeln!(out, "unknown command, type `help`")?;
                continue;
            };
            if !execute(&mut session, command, &mut out)? {
                break;
            }
            out.flush()?;
        }
        Ok(())
    })();

    session.shutdown();
    tracing::info!("phrasekeeper exiting");

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("phrasekeeper: {e}");
            ExitCode::FAILURE
        }
    }
}
