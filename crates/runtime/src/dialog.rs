//! Picking who speaks and what they say on a dialog tick.

use pet_content::PhraseBook;
use pet_core::{GameState, RngOracle, compute_seed};

use crate::events::DialogEvent;

/// Chooses one living creature at random and a line matching its mood.
///
/// `round` distinguishes successive dialog ticks that see the same state.
/// Returns `None` when nobody is alive or the phrase book is empty.
pub fn speak(
    state: &GameState,
    phrases: &PhraseBook,
    rng: &dyn RngOracle,
    round: u32,
) -> Option<DialogEvent> {
    let mut speakers = Vec::new();
    for tamagotchi in state.living_tamagotchis() {
        speakers.push((tamagotchi.id, tamagotchi.full_name(), tamagotchi.mood()));
    }
    for tamagotchi in &state.tamagotchis {
        for pet in tamagotchi.pets.iter().filter(|pet| !pet.dead) {
            let name = format!("{} {}", pet.first_name, pet.surname);
            speakers.push((pet.id, name.trim().to_string(), pet.mood()));
        }
    }

    // Dialog contexts start high so they never collide with action rolls.
    let context = u32::MAX - round.wrapping_mul(2);
    let who = rng.index(compute_seed(state.seed, state.nonce, context), speakers.len())?;
    let roll = rng.next_u32(compute_seed(state.seed, state.nonce, context.wrapping_sub(1)));

    let (speaker, name, mood) = speakers.swap_remove(who);
    let line = phrases.pick(mood, roll as usize)?.to_string();
    Some(DialogEvent {
        speaker,
        name,
        mood,
        line,
    })
}
