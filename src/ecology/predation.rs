//! Predation rules - what happens when one organism tries to eat another.

use super::diet::Diet;
use serde::{Deserialize, Serialize};

/// Result of a feeding attempt, seen from the eater's side
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Feeding {
    /// Ate a plant and absorbed all of it
    Grazed { gained: u64 },
    /// Beat a weaker animal and absorbed half of it
    Preyed { gained: u64 },
    /// Was eaten by the target
    Eaten,
    /// Nothing happened
    Standoff,
}

impl Feeding {
    /// Vitality of the eater after this outcome
    pub fn apply(self, vitality: u64) -> u64 {
        match self {
            Feeding::Grazed { gained } | Feeding::Preyed { gained } => {
                vitality.saturating_add(gained)
            }
            Feeding::Eaten => 0,
            Feeding::Standoff => vitality,
        }
    }

    pub fn is_fatal(self) -> bool {
        self == Feeding::Eaten
    }
}

/// Resolve one side of an encounter.
///
/// `eater` tries to eat `target`. If that succeeds the eater gains biomass
/// and nothing else is checked. Otherwise, when the target is able to eat
/// the eater, the eater dies if it is a plant, if the target is stronger,
/// or on an exact tie where the eater also had the capability to attack.
pub fn resolve_feeding(
    eater: Diet,
    eater_vitality: u64,
    target: Diet,
    target_vitality: u64,
) -> Feeding {
    let eater_can_eat = eater.can_eat(target);
    let target_can_eat = target.can_eat(eater);

    if eater_can_eat {
        if target.is_plant() {
            return Feeding::Grazed {
                gained: target_vitality,
            };
        }
        if eater_vitality > target_vitality {
            return Feeding::Preyed {
                gained: target_vitality / 2,
            };
        }
    }

    if target_can_eat
        && (eater.is_plant()
            || target_vitality > eater_vitality
            || (eater_can_eat && target_vitality == eater_vitality))
    {
        return Feeding::Eaten;
    }

    Feeding::Standoff
}
