//! Interactive search session
//!
//! Runs the page-load trigger once, then reads lines from the prompt. Plain
//! text is submitted as a search; lines starting with `/` are session
//! commands (case-insensitive):
//!
//! - `/history` lists recent searches
//! - `/N` or `/select N` searches again for history entry N
//! - `/clear` forgets everything and shows the default query
//! - `/help` shows this list
//! - `/quit`, `/exit`, `exit` or `quit` ends the session

use crate::commands::{build_controller, print_view};
use crate::config::Config;
use crate::controller::Trigger;
use crate::error::{Result, RecipefindError};
use crate::render;
use colored::Colorize;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use thiserror::Error;

/// Errors that can occur when parsing session commands
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// Unknown command was entered
    #[error("Unknown command: {0}\n\nType '/help' to see available commands")]
    UnknownCommand(String),

    /// Command was given an unsupported argument
    #[error("Unsupported argument for {command}: {arg}\n\nType '/help' to see valid usage")]
    UnsupportedArgument { command: String, arg: String },

    /// Command requires an argument but none was provided
    #[error("Command {command} requires an argument\n\nUsage: {usage}")]
    MissingArgument { command: String, usage: String },
}

/// What a line typed at the session prompt asks for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionCommand {
    /// Submit the text as a search
    Search(String),
    /// List recent searches
    History,
    /// Search again for the N-th (1-based) history entry
    Select(usize),
    Clear,
    Help,
    Exit,
}

/// Parse one line of session input
///
/// # Examples
///
/// ```
/// use recipefind::commands::session::{parse_session_command, SessionCommand};
///
/// assert_eq!(parse_session_command("/2").unwrap(), SessionCommand::Select(2));
/// assert_eq!(
///     parse_session_command("pad thai").unwrap(),
///     SessionCommand::Search("pad thai".to_string())
/// );
/// ```
pub fn parse_session_command(input: &str) -> std::result::Result<SessionCommand, CommandError> {
    let trimmed = input.trim();
    let lower = trimmed.to_lowercase();

    if !trimmed.starts_with('/') {
        if lower == "exit" || lower == "quit" {
            return Ok(SessionCommand::Exit);
        }
        return Ok(SessionCommand::Search(trimmed.to_string()));
    }

    match lower.as_str() {
        "/history" => Ok(SessionCommand::History),
        "/clear" => Ok(SessionCommand::Clear),
        "/help" | "/?" => Ok(SessionCommand::Help),
        "/quit" | "/exit" => Ok(SessionCommand::Exit),

        "/select" => Err(CommandError::MissingArgument {
            command: "/select".to_string(),
            usage: "/select <N>".to_string(),
        }),
        input if input.starts_with("/select ") => {
            let arg = input[8..].trim();
            arg.parse()
                .map(SessionCommand::Select)
                .map_err(|_| CommandError::UnsupportedArgument {
                    command: "/select".to_string(),
                    arg: arg.to_string(),
                })
        }

        input if input.len() > 1 && input[1..].chars().all(|c| c.is_ascii_digit()) => input[1..]
            .parse()
            .map(SessionCommand::Select)
            .map_err(|_| CommandError::UnsupportedArgument {
                command: "/N".to_string(),
                arg: input[1..].to_string(),
            }),

        _ => Err(CommandError::UnknownCommand(trimmed.to_string())),
    }
}

/// Print session help
pub fn print_help() {
    println!(
        r#"
Type anything to search for recipes. Session commands:

  /history        List recent searches
  /N              Search again for history entry N (e.g. /1)
  /select N       Same as /N
  /clear          Forget the last results and the history
  /help           Show this help
  /quit           End the session
"#
    );
}

fn print_welcome_banner() {
    println!("{}", "recipefind interactive session".bold());
    println!("Type '/help' for commands, '/quit' to leave.");
}

/// `recipefind interactive`
pub async fn run_interactive(config: Config, ephemeral: bool) -> Result<()> {
    tracing::info!("Starting interactive session");

    let controller = build_controller(&config, ephemeral)?;
    let mut rl = DefaultEditor::new()?;

    print_welcome_banner();
    let view = controller.dispatch(Trigger::PageLoad).await?;
    print_view(&view, false)?;

    loop {
        let line = match rl.readline("recipes> ") {
            Ok(line) => line,
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(e) => return Err(RecipefindError::Readline(e).into()),
        };

        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        let trigger = match parse_session_command(trimmed) {
            Ok(SessionCommand::Exit) => break,
            Ok(SessionCommand::Help) => {
                print_help();
                continue;
            }
            Ok(SessionCommand::History) => {
                print!("{}", render::render_history(&controller.history()?));
                continue;
            }
            Ok(SessionCommand::Search(query)) => {
                rl.add_history_entry(trimmed)?;
                Trigger::Submit(query)
            }
            Ok(SessionCommand::Select(index)) => Trigger::SelectHistory(index),
            Ok(SessionCommand::Clear) => Trigger::Clear,
            Err(e) => {
                println!("{}", e.to_string().red());
                continue;
            }
        };

        match controller.dispatch(trigger).await {
            Ok(view) => print_view(&view, false)?,
            Err(e) => match e.downcast_ref::<RecipefindError>() {
                Some(selection @ RecipefindError::HistorySelection { .. }) => {
                    println!("{}", selection.to_string().red());
                }
                _ => return Err(e),
            },
        }
    }

    println!("Goodbye!");
    Ok(())
}
