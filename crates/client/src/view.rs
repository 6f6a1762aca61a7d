//! Plain-text rendering of outcomes, events, and the state tree.
use std::fmt::Write;

use pet_core::{Effect, FightState, GameState, Outcome, Pet, Stats, Tamagotchi};
use pet_runtime::{DialogEvent, Event};

/// One line per notable effect; stat drift is left to `status`.
pub fn describe_effect(effect: &Effect) -> Option<String> {
    let line = match effect {
        Effect::TamagotchiCreated { id } => format!("{id} hatched"),
        Effect::TamagotchiRemoved { id, pets } => format!("{id} was removed along with {pets} pet(s)"),
        Effect::StatsChanged { .. } => return None,
        Effect::PetBorn { parent_id, pet_id } => format!("{parent_id} had a pet: {pet_id}"),
        Effect::Died { id } => format!("{id} died"),
        Effect::Orphaned { parent_id, pet_id } => format!("{pet_id} was orphaned by {parent_id}"),
        Effect::Adopted { pet_id, from, to } => format!("{to} adopted {pet_id} (from {from})"),
        Effect::FightStarted { fighter1, fighter2 } => {
            format!("fight! {fighter1} vs {fighter2}")
        }
        Effect::FightDamage {
            target,
            damage,
            health,
        } => format!("{target} takes {damage} damage ({health} health left)"),
        Effect::FightEnded { winner, loser } => format!("{winner} defeated {loser}"),
        Effect::FightAbandoned => "the fight was called off".to_string(),
        Effect::Evolved {
            pet_id,
            tamagotchi_id,
        } => format!("{pet_id} evolved into tamagotchi {tamagotchi_id}"),
    };
    Some(line)
}

/// Feedback for a player command.
///
/// Applied commands announce themselves through the event stream, so only
/// skips produce a line here.
pub fn describe_outcome(outcome: &Outcome) -> Option<String> {
    outcome
        .skip_reason()
        .map(|reason| format!("skipped: {reason}"))
}

pub fn describe_dialog(event: &DialogEvent) -> String {
    format!("{} ({}): \"{}\"", event.name, event.mood, event.line)
}

/// Events pushed to the terminal while the player is typing.
pub fn describe_event(event: &Event) -> Option<String> {
    match event {
        Event::Effect(event) => describe_effect(&event.effect),
        Event::Dialog(event) => Some(describe_dialog(event)),
        Event::Skipped(_) => None,
    }
}

fn meters(stats: &Stats) -> String {
    format!(
        "hunger {:>3}  happiness {:>3}  health {:>3}",
        stats.hunger, stats.happiness, stats.health
    )
}

fn tamagotchi_line(tamagotchi: &Tamagotchi) -> String {
    let mut line = format!(
        "{} {}  {}",
        tamagotchi.id,
        tamagotchi.full_name(),
        meters(&tamagotchi.stats)
    );
    if tamagotchi.dead {
        line.push_str("  [dead]");
    }
    line
}

fn pet_line(pet: &Pet) -> String {
    let mut line = format!(
        "  └ {} {}  {}  wins {}",
        pet.id,
        pet.first_name,
        meters(&pet.stats),
        pet.maturity
    );
    for (flag, label) in [
        (pet.dead, "dead"),
        (pet.orphan, "orphan"),
        (pet.fighting, "fighting"),
    ] {
        if flag {
            let _ = write!(line, "  [{label}]");
        }
    }
    line
}

/// Multi-line summary of every creature, the arena, and the head counts.
pub fn status(state: &GameState) -> String {
    if state.tamagotchis.is_empty() {
        return format!("no tamagotchis yet (deaths so far: {})", state.dead_count);
    }

    let mut out = String::new();
    for tamagotchi in &state.tamagotchis {
        let _ = writeln!(out, "{}", tamagotchi_line(tamagotchi));
        for pet in &tamagotchi.pets {
            let _ = writeln!(out, "{}", pet_line(pet));
        }
    }
    match state.current_fight {
        FightState::Active { fighter1, fighter2 } => {
            let _ = writeln!(out, "arena: {fighter1} vs {fighter2}");
        }
        FightState::Inactive => {
            let _ = writeln!(out, "arena: empty");
        }
    }
    let _ = write!(
        out,
        "living pets: {}  deaths so far: {}",
        state.living_pet_count(),
        state.dead_count
    );
    out
}
