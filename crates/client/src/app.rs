//! Interactive command loop on top of a [`RuntimeHandle`].
use anyhow::{Context, Result};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::broadcast::{self, error::RecvError};
use tokio::task::JoinHandle;

use pet_runtime::{Event, Runtime, RuntimeHandle, Topic};

use crate::command::{Command, HELP};
use crate::view;

/// Topics echoed to the terminal. `State` is too chatty for a human.
const ECHOED_TOPICS: [Topic; 3] = [Topic::Lifecycle, Topic::Fight, Topic::Dialog];

pub struct CliApp {
    runtime: Runtime,
}

impl CliApp {
    pub fn new(runtime: Runtime) -> Self {
        Self { runtime }
    }

    /// Reads commands until `quit` or end of input, then shuts the runtime down.
    pub async fn run(self) -> Result<()> {
        let handle = self.runtime.handle();
        let printers: Vec<JoinHandle<()>> = ECHOED_TOPICS
            .into_iter()
            .map(|topic| tokio::spawn(echo_events(topic, handle.subscribe(topic))))
            .collect();

        println!("Tamagotchi simulation running. Type `help` for commands.");
        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        let result = loop {
            let line = match lines.next_line().await {
                Ok(Some(line)) => line,
                Ok(None) => break Ok(()),
                Err(e) => break Err(anyhow::Error::new(e).context("Failed to read stdin")),
            };
            if line.trim().is_empty() {
                continue;
            }

            match line.parse::<Command>() {
                Ok(Command::Quit) => break Ok(()),
                Ok(command) => {
                    if let Err(e) = execute(&handle, command).await {
                        break Err(e);
                    }
                }
                Err(e) => println!("{e:#}"),
            }
        };

        for printer in printers {
            printer.abort();
        }
        tracing::info!("command loop finished, shutting down");
        self.runtime.shutdown().await?;
        result
    }
}

async fn execute(handle: &RuntimeHandle, command: Command) -> Result<()> {
    let outcome = match command {
        Command::Create(name) => handle.create(name).await?,
        Command::Feed(id) => handle.feed(id).await?,
        Command::Train(id) => handle.train(id).await?,
        Command::Remove(id) => handle.remove(id).await?,
        Command::Fight(fighter1, fighter2) => handle.start_fight(fighter1, fighter2).await?,
        Command::Status => {
            let state = handle.query_state().await?;
            println!("{}", view::status(&state));
            return Ok(());
        }
        Command::Dump => {
            let state = handle.query_state().await?;
            let json = serde_json::to_string_pretty(&state).context("Failed to serialize state")?;
            println!("{json}");
            return Ok(());
        }
        Command::Help => {
            println!("{HELP}");
            return Ok(());
        }
        Command::Quit => return Ok(()),
    };

    if let Some(line) = view::describe_outcome(&outcome) {
        println!("{line}");
    }
    Ok(())
}

async fn echo_events(topic: Topic, mut rx: broadcast::Receiver<Event>) {
    loop {
        match rx.recv().await {
            Ok(event) => {
                if let Some(line) = view::describe_event(&event) {
                    println!("{line}");
                }
            }
            Err(RecvError::Lagged(skipped)) => {
                tracing::warn!(%topic, skipped, "terminal fell behind the event stream");
            }
            Err(RecvError::Closed) => break,
        }
    }
}
