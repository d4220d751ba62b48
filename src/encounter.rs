//! Pairwise encounters and left-to-right encounter series.

use crate::ecology::Diet;
use crate::genetics::breeding::is_conspecific;
use crate::organism::Organism;
use serde::{Deserialize, Serialize};
use std::fmt;

/// What kind of interaction an encounter turned out to be
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EncounterKind {
    /// One side was already dead
    Inert,
    /// Conspecifics produced an offspring
    Breeding,
    /// At least one side fed or died
    Predation,
    /// Neither side could touch the other
    Standoff,
}

/// Outcome of a single encounter
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Encounter<S> {
    /// First organism after the encounter
    pub first: Organism<S>,
    /// Second organism after the encounter
    pub second: Organism<S>,
    /// Offspring, present only when the pair bred
    pub offspring: Option<Organism<S>>,
    kind: EncounterKind,
}

impl<S> Encounter<S> {
    pub fn kind(&self) -> EncounterKind {
        self.kind
    }

    /// Split into `(first, second, offspring)`
    pub fn into_parts(self) -> (Organism<S>, Organism<S>, Option<Organism<S>>) {
        (self.first, self.second, self.offspring)
    }
}

/// Rejected encounter
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EncounterError {
    /// Neither organism can eat anything
    NoEater { first: Diet, second: Diet },
}

impl fmt::Display for EncounterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoEater { first, second } => write!(
                f,
                "encounter between {} and {} has no organism able to eat",
                first, second
            ),
        }
    }
}

impl std::error::Error for EncounterError {}

/// Check that at least one of the two diets can eat something
pub fn check_pair(first: Diet, second: Diet) -> Result<(), EncounterError> {
    if Diet::any_eater(first, second) {
        Ok(())
    } else {
        Err(EncounterError::NoEater { first, second })
    }
}

/// Resolve an encounter between two organisms.
///
/// Dead organisms do not take part. Conspecifics breed and are returned
/// unchanged next to their offspring. Anything else is mutual predation,
/// where each side eats against the other's state from before the
/// encounter.
///
/// At least one of the two must be able to eat. This is only checked in
/// debug builds; use [`try_encounter`] when diets come from untrusted input.
pub fn encounter<S: Clone + PartialEq>(first: Organism<S>, second: Organism<S>) -> Encounter<S> {
    debug_assert!(
        check_pair(first.diet(), second.diet()).is_ok(),
        "encounter requires at least one organism able to eat"
    );

    if first.is_dead() || second.is_dead() {
        log::debug!("inert encounter: {} vs {}", first.diet(), second.diet());
        return Encounter {
            first,
            second,
            offspring: None,
            kind: EncounterKind::Inert,
        };
    }

    if is_conspecific(&first, &second) {
        let child = first.breed(&second);
        log::debug!(
            "breeding {}: {} + {} -> {}",
            first.diet(),
            first.vitality(),
            second.vitality(),
            child.vitality()
        );
        return Encounter {
            first,
            second,
            offspring: Some(child),
            kind: EncounterKind::Breeding,
        };
    }

    let fed_first = first.eat(&second);
    let fed_second = second.eat(&first);
    let kind = if fed_first == first && fed_second == second {
        EncounterKind::Standoff
    } else {
        EncounterKind::Predation
    };
    log::debug!(
        "{:?} {} vs {}: {} -> {}, {} -> {}",
        kind,
        first.diet(),
        second.diet(),
        first.vitality(),
        fed_first.vitality(),
        second.vitality(),
        fed_second.vitality()
    );

    Encounter {
        first: fed_first,
        second: fed_second,
        offspring: None,
        kind,
    }
}

/// [`encounter`] with the eater precondition checked up front
pub fn try_encounter<S: Clone + PartialEq>(
    first: Organism<S>,
    second: Organism<S>,
) -> Result<Encounter<S>, EncounterError> {
    check_pair(first.diet(), second.diet())?;
    Ok(encounter(first, second))
}

/// Pairwise step of a series: keep only what `a` became
pub fn combine<S: Clone + PartialEq>(a: Organism<S>, b: Organism<S>) -> Organism<S> {
    encounter(a, b).first
}

/// Fold `first` through encounters with each of `rest`, left to right.
///
/// Only the running organism is kept; the other side of each step and any
/// offspring are dropped. With no followers `first` is returned as is.
pub fn encounter_series<S, I>(first: Organism<S>, rest: I) -> Organism<S>
where
    S: Clone + PartialEq,
    I: IntoIterator<Item = Organism<S>>,
{
    rest.into_iter().fold(first, combine)
}

/// [`encounter_series`] that stops at the first degenerate pair
pub fn try_encounter_series<S, I>(first: Organism<S>, rest: I) -> Result<Organism<S>, EncounterError>
where
    S: Clone + PartialEq,
    I: IntoIterator<Item = Organism<S>>,
{
    rest.into_iter().try_fold(first, |acc, next| {
        check_pair(acc.diet(), next.diet())?;
        Ok(combine(acc, next))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dead_organisms_are_inert() {
        let wolf = Organism::carnivore("wolf", 10);
        let carcass = Organism::herbivore("rabbit", 0);

        let result = encounter(wolf.clone(), carcass.clone());
        assert_eq!(result.kind(), EncounterKind::Inert);
        assert_eq!(result.into_parts(), (wolf.clone(), carcass.clone(), None));

        let result = encounter(carcass.clone(), wolf.clone());
        assert_eq!(result.into_parts(), (carcass, wolf, None));
    }

    #[test]
    fn test_conspecifics_breed() {
        let a = Organism::herbivore("deer", 6);
        let b = Organism::herbivore("deer", 3);

        let result = encounter(a.clone(), b.clone());
        assert_eq!(result.kind(), EncounterKind::Breeding);
        assert_eq!(result.first, a);
        assert_eq!(result.second, b);
        assert_eq!(result.offspring, Some(Organism::herbivore("deer", 4)));
    }

    #[test]
    fn test_same_species_different_diet_fight() {
        let a = Organism::omnivore("bear", 6);
        let b = Organism::carnivore("bear", 3);

        let result = encounter(a, b);
        assert_eq!(result.kind(), EncounterKind::Predation);
        assert!(result.offspring.is_none());
        assert_eq!(result.first.vitality(), 7);
        assert!(result.second.is_dead());
    }

    #[test]
    fn test_predation_uses_original_states() {
        let wolf = Organism::carnivore("wolf", 10);
        let rabbit = Organism::herbivore("rabbit", 4);

        let (wolf, rabbit, child) = encounter(wolf, rabbit).into_parts();
        assert_eq!(wolf.vitality(), 12);
        assert!(rabbit.is_dead());
        assert!(child.is_none());
    }

    #[test]
    fn test_mutual_tie_kills_both() {
        let a = Organism::carnivore("wolf", 5);
        let b = Organism::omnivore("bear", 5);

        let result = encounter(a, b);
        assert!(result.first.is_dead());
        assert!(result.second.is_dead());
    }

    #[test]
    fn test_standoff() {
        let a = Organism::herbivore("cow", 5);
        let b = Organism::herbivore("deer", 9);

        let result = encounter(a.clone(), b.clone());
        assert_eq!(result.kind(), EncounterKind::Standoff);
        assert_eq!(result.into_parts(), (a, b, None));
    }

    #[test]
    fn test_try_encounter_rejects_two_plants() {
        let err = try_encounter(Organism::plant("moss", 1), Organism::plant("fern", 2)).unwrap_err();
        assert_eq!(
            err,
            EncounterError::NoEater {
                first: Diet::Plant,
                second: Diet::Plant
            }
        );
        assert!(err.to_string().contains("no organism able to eat"));

        assert!(try_encounter(Organism::plant("moss", 1), Organism::herbivore("snail", 2)).is_ok());
    }

    #[test]
    fn test_series_identity() {
        let fox = Organism::omnivore("fox", 7);
        assert_eq!(encounter_series(fox.clone(), Vec::new()), fox);
    }

    #[test]
    fn test_series_folds_left_to_right() {
        let wolf = Organism::carnivore("wolf", 10);
        let prey = vec![
            Organism::herbivore("rabbit", 4),
            Organism::herbivore("deer", 8),
            Organism::carnivore("bear", 20),
        ];

        // 10 + 2 = 12, 12 + 4 = 16, then loses to the bear
        let result = encounter_series(wolf.clone(), prey.clone());
        assert!(result.is_dead());

        let result = encounter_series(wolf, prey.into_iter().take(2));
        assert_eq!(result.vitality(), 16);
    }

    #[test]
    fn test_series_discards_offspring() {
        let a = Organism::herbivore("deer", 4);
        let result = encounter_series(
            a.clone(),
            [Organism::herbivore("deer", 10), Organism::plant("grass", 3)],
        );
        // Breeding leaves the parent as is, then it grazes
        assert_eq!(result.vitality(), 7);
    }

    #[test]
    fn test_try_series_stops_on_degenerate_pair() {
        let grass = Organism::plant("grass", 3);
        let result = try_encounter_series(grass.clone(), [Organism::plant("moss", 1)]);
        assert!(result.is_err());

        let result = try_encounter_series(grass, [Organism::herbivore("cow", 1)]);
        assert_eq!(result.map(|o| o.is_dead()), Ok(true));
    }
}
