//! Parsing of the line-oriented command language read from stdin.
use std::str::FromStr;

use anyhow::{Context, Result, bail};
use pet_core::{CreatureId, FighterRef};

pub const HELP: &str = "\
commands:
  create <name>                      hatch a tamagotchi
  feed <id>                          hunger -10, happiness +5, health -5
  train <id>                         hunger +5, happiness -10, health +10
  remove <id>                        remove a tamagotchi and its pets
  fight <parent> <pet> <parent> <pet>  put two pets in the arena
  status                             show every creature
  dump                               print the full state as JSON
  help                               show this message
  quit                               stop the simulation";

/// One line of player input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Create(String),
    Feed(CreatureId),
    Train(CreatureId),
    Remove(CreatureId),
    Fight(FighterRef, FighterRef),
    Status,
    Dump,
    Help,
    Quit,
}

impl FromStr for Command {
    type Err = anyhow::Error;

    fn from_str(line: &str) -> Result<Self> {
        let line = line.trim();
        let (verb, rest) = line
            .split_once(char::is_whitespace)
            .map_or((line, ""), |(verb, rest)| (verb, rest.trim()));

        let command = match verb.to_ascii_lowercase().as_str() {
            "create" | "new" => {
                if rest.is_empty() {
                    bail!("usage: create <name>");
                }
                Command::Create(rest.to_string())
            }
            "feed" => Command::Feed(single_id(rest, "feed <id>")?),
            "train" => Command::Train(single_id(rest, "train <id>")?),
            "remove" | "rm" => Command::Remove(single_id(rest, "remove <id>")?),
            "fight" => {
                let usage = "fight <parent> <pet> <parent> <pet>";
                let ids = ids(rest, usage)?;
                let [p1, f1, p2, f2] = ids[..] else {
                    bail!("usage: {usage}");
                };
                Command::Fight(FighterRef::new(p1, f1), FighterRef::new(p2, f2))
            }
            "status" | "ls" => Command::Status,
            "dump" => Command::Dump,
            "help" | "?" => Command::Help,
            "quit" | "exit" | "q" => Command::Quit,
            "" => bail!("empty command"),
            other => bail!("unknown command `{other}`, try `help`"),
        };
        Ok(command)
    }
}

fn ids(rest: &str, usage: &str) -> Result<Vec<CreatureId>> {
    rest.split_whitespace()
        .map(|token| {
            token
                .trim_start_matches('#')
                .parse::<u64>()
                .map(CreatureId)
                .with_context(|| format!("`{token}` is not a creature id (usage: {usage})"))
        })
        .collect()
}

fn single_id(rest: &str, usage: &str) -> Result<CreatureId> {
    match ids(rest, usage)?[..] {
        [id] => Ok(id),
        _ => bail!("usage: {usage}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(line: &str) -> Command {
        line.parse().expect("valid command")
    }

    #[test]
    fn parses_every_verb() {
        assert_eq!(parse("create Nova"), Command::Create("Nova".into()));
        assert_eq!(parse("  create  Mr Bubbles "), Command::Create("Mr Bubbles".into()));
        assert_eq!(parse("feed 3"), Command::Feed(CreatureId(3)));
        assert_eq!(parse("TRAIN #4"), Command::Train(CreatureId(4)));
        assert_eq!(parse("remove 1"), Command::Remove(CreatureId(1)));
        assert_eq!(
            parse("fight 1 3 2 4"),
            Command::Fight(
                FighterRef::new(CreatureId(1), CreatureId(3)),
                FighterRef::new(CreatureId(2), CreatureId(4))
            )
        );
        assert_eq!(parse("status"), Command::Status);
        assert_eq!(parse("dump"), Command::Dump);
        assert_eq!(parse("?"), Command::Help);
        assert_eq!(parse("exit"), Command::Quit);
    }

    #[test]
    fn rejects_malformed_lines() {
        for line in ["", "create", "feed", "feed x", "feed 1 2", "fight 1 2 3", "dance"] {
            assert!(line.parse::<Command>().is_err(), "{line:?} should not parse");
        }
    }

    #[test]
    fn errors_explain_usage() {
        let err = "feed pizza".parse::<Command>().unwrap_err();
        assert!(err.to_string().contains("feed <id>"));

        let err = "dance".parse::<Command>().unwrap_err();
        assert_eq!(err.to_string(), "unknown command `dance`, try `help`");
    }
}
