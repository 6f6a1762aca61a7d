//! Stat-only transitions: user feeding and training, hunger decay, and the
//! two periodic pet ticks.

use crate::action::{ActionKind, ActionTransition, living_pet, living_tamagotchi};
use crate::config::{GameConfig, StatDelta};
use crate::engine::{ApplyContext, Effect};
use crate::error::SkipReason;
use crate::state::{CreatureId, DayPhase, GameState};

/// Adjusts a tamagotchi's stats and runs the death rule.
fn adjust_tamagotchi(
    state: &mut GameState,
    ctx: &mut ApplyContext<'_>,
    id: CreatureId,
    delta: StatDelta,
) {
    let Some(tamagotchi) = state.tamagotchi_mut(id) else {
        return;
    };
    tamagotchi.stats.apply(delta);
    let stats = tamagotchi.stats;
    ctx.emit(Effect::StatsChanged { id, stats });
    ctx.settle_tamagotchi(state, id);
}

/// Adjusts a pet's stats and runs the death rule.
fn adjust_pet(
    state: &mut GameState,
    ctx: &mut ApplyContext<'_>,
    parent_id: CreatureId,
    pet_id: CreatureId,
    delta: StatDelta,
) {
    let Some(pet) = state.pet_mut(parent_id, pet_id) else {
        return;
    };
    pet.stats.apply(delta);
    let stats = pet.stats;
    ctx.emit(Effect::StatsChanged { id: pet_id, stats });
    ctx.settle_pet(state, parent_id, pet_id);
}

/// User action: hunger −10, happiness +5, health −5.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FeedAction {
    pub id: CreatureId,
}

impl FeedAction {
    pub fn new(id: CreatureId) -> Self {
        Self { id }
    }
}

impl ActionTransition for FeedAction {
    fn kind(&self) -> ActionKind {
        ActionKind::Feed
    }

    fn pre_validate(&self, state: &GameState) -> Result<(), SkipReason> {
        living_tamagotchi(state, self.id).map(|_| ())
    }

    fn apply(&self, state: &mut GameState, ctx: &mut ApplyContext<'_>) {
        adjust_tamagotchi(state, ctx, self.id, GameConfig::FEED);
    }
}

/// User action: hunger +5, happiness −10, health +10.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TrainAction {
    pub id: CreatureId,
}

impl TrainAction {
    pub fn new(id: CreatureId) -> Self {
        Self { id }
    }
}

impl ActionTransition for TrainAction {
    fn kind(&self) -> ActionKind {
        ActionKind::Train
    }

    fn pre_validate(&self, state: &GameState) -> Result<(), SkipReason> {
        living_tamagotchi(state, self.id).map(|_| ())
    }

    fn apply(&self, state: &mut GameState, ctx: &mut ApplyContext<'_>) {
        adjust_tamagotchi(state, ctx, self.id, GameConfig::TRAIN);
    }
}

/// Slow hunger drift of a tamagotchi. The phase comes from the caller's clock.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DecayHungerAction {
    pub id: CreatureId,
    pub phase: DayPhase,
}

impl DecayHungerAction {
    pub fn new(id: CreatureId, phase: DayPhase) -> Self {
        Self { id, phase }
    }

    pub fn amount(&self) -> i32 {
        match self.phase {
            DayPhase::Day => GameConfig::DAY_HUNGER_DECAY,
            DayPhase::Night => GameConfig::NIGHT_HUNGER_DECAY,
        }
    }
}

impl ActionTransition for DecayHungerAction {
    fn kind(&self) -> ActionKind {
        ActionKind::DecayHunger
    }

    fn pre_validate(&self, state: &GameState) -> Result<(), SkipReason> {
        living_tamagotchi(state, self.id).map(|_| ())
    }

    fn apply(&self, state: &mut GameState, ctx: &mut ApplyContext<'_>) {
        let delta = StatDelta::new(-self.amount(), 0, 0);
        adjust_tamagotchi(state, ctx, self.id, delta);
    }
}

/// Parent looks after one of its pets.
///
/// Feeds the pet when it is hungrier than the threshold, then heals it when
/// its health is below the threshold. Healing costs a little hunger.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CarePetAction {
    pub parent_id: CreatureId,
    pub pet_id: CreatureId,
}

impl CarePetAction {
    pub fn new(parent_id: CreatureId, pet_id: CreatureId) -> Self {
        Self { parent_id, pet_id }
    }
}

impl ActionTransition for CarePetAction {
    fn kind(&self) -> ActionKind {
        ActionKind::CarePet
    }

    fn pre_validate(&self, state: &GameState) -> Result<(), SkipReason> {
        living_tamagotchi(state, self.parent_id)?;
        living_pet(state, self.parent_id, self.pet_id).map(|_| ())
    }

    fn apply(&self, state: &mut GameState, ctx: &mut ApplyContext<'_>) {
        let Some(pet) = state.pet_mut(self.parent_id, self.pet_id) else {
            return;
        };
        if pet.stats.hunger.value() > GameConfig::CARE_HUNGER_THRESHOLD {
            pet.stats.apply(GameConfig::CARE_FEED);
        }
        // Second check sees the stats after feeding.
        if pet.stats.health.value() < GameConfig::CARE_HEALTH_THRESHOLD {
            pet.stats.apply(GameConfig::CARE_HEAL);
        }
        let stats = pet.stats;
        ctx.emit(Effect::StatsChanged {
            id: self.pet_id,
            stats,
        });
        ctx.settle_pet(state, self.parent_id, self.pet_id);
    }
}

/// Periodic pet tick.
///
/// Orphans suffer: hunger +10, happiness −5, health −5. A pet with a living
/// parent only loses a little hunger. A non-orphan whose parent already died
/// but has not been orphaned yet is left alone until the orphan step runs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PetNeglectAction {
    pub parent_id: CreatureId,
    pub pet_id: CreatureId,
}

impl PetNeglectAction {
    pub fn new(parent_id: CreatureId, pet_id: CreatureId) -> Self {
        Self { parent_id, pet_id }
    }
}

impl ActionTransition for PetNeglectAction {
    fn kind(&self) -> ActionKind {
        ActionKind::PetNeglect
    }

    fn pre_validate(&self, state: &GameState) -> Result<(), SkipReason> {
        let pet = living_pet(state, self.parent_id, self.pet_id)?;
        if !pet.orphan {
            living_tamagotchi(state, self.parent_id)?;
        }
        Ok(())
    }

    fn apply(&self, state: &mut GameState, ctx: &mut ApplyContext<'_>) {
        let Some(pet) = state.pet(self.parent_id, self.pet_id) else {
            return;
        };
        let delta = if pet.orphan {
            GameConfig::ORPHAN_SUFFERING
        } else {
            GameConfig::PET_HUNGER_DECAY
        };
        adjust_pet(state, ctx, self.parent_id, self.pet_id, delta);
    }
}

#[cfg(test)]
mod tests {
    use super::super::testing::{pet, run, tamagotchi, world};
    use crate::action::Action;
    use crate::engine::Effect;
    use crate::error::SkipReason;
    use crate::state::{CreatureId, DayPhase, Stats};

    const PARENT: CreatureId = CreatureId(1);
    const PET: CreatureId = CreatureId(2);

    #[test]
    fn feed_saturates_at_the_bounds() {
        let state = world(vec![(tamagotchi(1, Stats::new(50, 95, 100)), vec![])]);
        let next = run(state, Action::feed(PARENT));

        assert!(next.outcome.is_applied());
        let stats = next.state.tamagotchi(PARENT).unwrap().stats;
        assert_eq!(stats.hunger.value(), 40);
        assert_eq!(stats.happiness.value(), 100);
        assert_eq!(stats.health.value(), 95);
    }

    #[test]
    fn feed_at_zero_hunger_stays_zero() {
        let state = world(vec![(tamagotchi(1, Stats::new(5, 50, 50)), vec![])]);
        let next = run(state, Action::feed(PARENT));
        assert_eq!(
            next.state.tamagotchi(PARENT).unwrap().stats.hunger.value(),
            0
        );
    }

    #[test]
    fn training_to_zero_happiness_kills_once() {
        let state = world(vec![(tamagotchi(1, Stats::new(50, 10, 50)), vec![])]);
        let next = run(state, Action::train(PARENT));

        assert!(next.state.tamagotchi(PARENT).unwrap().dead);
        assert_eq!(next.state.dead_count, 1);
        assert!(next.outcome.effects().contains(&Effect::Died { id: PARENT }));

        // Dead creatures no longer respond, so the count cannot grow.
        let again = run(next.state, Action::train(PARENT));
        assert_eq!(again.outcome.skip_reason(), Some(&SkipReason::Dead(PARENT)));
        assert_eq!(again.state.dead_count, 1);
    }

    #[test]
    fn missing_tamagotchi_is_skipped() {
        let state = world(vec![]);
        let next = run(state.clone(), Action::feed(CreatureId(9)));
        assert_eq!(
            next.outcome.skip_reason(),
            Some(&SkipReason::TamagotchiNotFound(CreatureId(9)))
        );
        assert_eq!(next.state, state);
    }

    #[test]
    fn decay_depends_on_phase() {
        let state = world(vec![(tamagotchi(1, Stats::new(50, 50, 50)), vec![])]);
        let day = run(state.clone(), Action::decay_hunger(PARENT, DayPhase::Day));
        let night = run(state, Action::decay_hunger(PARENT, DayPhase::Night));

        assert_eq!(day.state.tamagotchi(PARENT).unwrap().stats.hunger.value(), 45);
        assert_eq!(
            night.state.tamagotchi(PARENT).unwrap().stats.hunger.value(),
            49
        );
    }

    #[test]
    fn care_feeds_then_heals() {
        let state = world(vec![(
            tamagotchi(1, Stats::default()),
            vec![pet(2, 1, Stats::new(40, 50, 60))],
        )]);
        let next = run(state, Action::care_pet(PARENT, PET));

        let stats = next.state.pet(PARENT, PET).unwrap().stats;
        // 40 -> 30 from feeding, then +5 from healing.
        assert_eq!(stats.hunger.value(), 35);
        assert_eq!(stats.happiness.value(), 55);
        assert_eq!(stats.health.value(), 70);
    }

    #[test]
    fn care_leaves_a_content_pet_alone() {
        let state = world(vec![(
            tamagotchi(1, Stats::default()),
            vec![pet(2, 1, Stats::new(30, 50, 70))],
        )]);
        let next = run(state, Action::care_pet(PARENT, PET));
        assert_eq!(next.state.pet(PARENT, PET).unwrap().stats, Stats::new(30, 50, 70));
    }

    #[test]
    fn orphans_suffer_and_others_get_hungry_less() {
        let mut orphan = pet(2, 1, Stats::default());
        orphan.orphan = true;
        let state = world(vec![
            (tamagotchi(1, Stats::default()), vec![orphan]),
            (tamagotchi(3, Stats::default()), vec![pet(4, 3, Stats::default())]),
        ]);

        let next = run(state, Action::pet_neglect(PARENT, PET));
        assert_eq!(next.state.pet(PARENT, PET).unwrap().stats, Stats::new(60, 45, 45));

        let next = run(next.state, Action::pet_neglect(CreatureId(3), CreatureId(4)));
        assert_eq!(
            next.state.pet(CreatureId(3), CreatureId(4)).unwrap().stats,
            Stats::new(45, 50, 50)
        );
    }

    #[test]
    fn neglect_skips_pets_of_a_dead_parent_before_orphaning() {
        let mut parent = tamagotchi(1, Stats::new(50, 50, 0));
        parent.dead = true;
        let state = world(vec![(parent, vec![pet(2, 1, Stats::default())])]);

        let next = run(state, Action::pet_neglect(PARENT, PET));
        assert_eq!(next.outcome.skip_reason(), Some(&SkipReason::Dead(PARENT)));
    }
}
