// ABOUTME: Interactive session for caloriesnap-cli reading commands from stdin
// ABOUTME: Keeps one tracker alive so the undo window of a logged meal can be used
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 CalorieSnap

use anyhow::Result;
use caloriesnap::services::NutritionTracker;
use caloriesnap::undo::UndoOutcome;
use tokio::io::{self, AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing::warn;

use crate::commands::meals::build_request;
use crate::helpers::display::{display_day, display_logged, display_reply};

const HELP: &str = "Commands:
  log <description>   estimate and log a meal
  undo                take back the last logged meal (within the undo window)
  water [ml]          add water (quick-add amount if omitted)
  ask <question>      ask the nutrition coach
  today               show today's log
  help                show this help
  quit                leave the session";

/// One parsed session line
#[derive(Debug, PartialEq)]
enum SessionCommand<'a> {
    Log(&'a str),
    Undo,
    Water(Option<&'a str>),
    Ask(&'a str),
    Today,
    Help,
    Quit,
    Unknown(&'a str),
}

fn parse_line(line: &str) -> Option<SessionCommand<'_>> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }
    let (verb, rest) = line
        .split_once(char::is_whitespace)
        .map_or((line, ""), |(verb, rest)| (verb, rest.trim()));

    Some(match verb.to_lowercase().as_str() {
        "log" => SessionCommand::Log(rest),
        "undo" => SessionCommand::Undo,
        "water" => SessionCommand::Water((!rest.is_empty()).then_some(rest)),
        "ask" => SessionCommand::Ask(rest),
        "today" => SessionCommand::Today,
        "help" | "?" => SessionCommand::Help,
        "quit" | "exit" => SessionCommand::Quit,
        _ => SessionCommand::Unknown(verb),
    })
}

/// Run the read-eval loop until `quit` or end of input
pub async fn run(tracker: &NutritionTracker) -> Result<()> {
    let mut lines = BufReader::new(io::stdin()).lines();
    let mut stdout = io::stdout();

    println!("CalorieSnap session. Type `help` for commands.");
    loop {
        stdout.write_all(b"> ").await?;
        stdout.flush().await?;

        let Some(line) = lines.next_line().await? else {
            break;
        };
        let Some(command) = parse_line(&line) else {
            continue;
        };
        if command == SessionCommand::Quit {
            break;
        }
        if let Err(e) = execute(tracker, command).await {
            warn!(error = %e, "Session command failed");
            println!("Error: {e}");
        }
    }
    Ok(())
}

async fn execute(tracker: &NutritionTracker, command: SessionCommand<'_>) -> Result<()> {
    match command {
        SessionCommand::Log(text) => {
            let request = build_request(text.to_owned(), None, None)?;
            let logged = tracker.snap_meal(request).await?;
            display_logged(&logged, true);
        }
        SessionCommand::Undo => match tracker.undo_last().await? {
            UndoOutcome::Reverted(meal) => {
                println!("Undone: removed {} ({} kcal).", meal.id, meal.total_calories);
            }
            UndoOutcome::AlreadyRemoved => println!("That meal was already removed."),
            UndoOutcome::Expired => println!("Too late to undo; the meal stays logged."),
            UndoOutcome::NothingToUndo => println!("Nothing to undo."),
        },
        SessionCommand::Water(amount) => {
            let log = match amount {
                Some(raw) => tracker.add_water(raw.parse()?).await?,
                None => tracker.add_water_increment().await?,
            };
            println!("Water today: {} ml", log.water_intake);
        }
        SessionCommand::Ask(question) => {
            let reply = tracker.ask(question).await?;
            display_reply(&reply);
        }
        SessionCommand::Today => {
            let log = tracker.today().await;
            let profile = tracker.profile().await;
            let summary = tracker.summary().await.ok();
            display_day(&log, profile.as_ref(), summary.as_ref());
        }
        SessionCommand::Help => println!("{HELP}"),
        SessionCommand::Unknown(verb) => println!("Unknown command `{verb}`. Type `help`."),
        SessionCommand::Quit => {}
    }
    Ok(())
}
