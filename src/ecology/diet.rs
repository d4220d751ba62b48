//! Diet categories.
//!
//! A diet is a pair of capability flags `(can_eat_meat, can_eat_plants)`.
//! The four combinations are closed, so the category is an enum and every
//! rule that depends on it is an exhaustive match.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// What an organism is able to eat
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Diet {
    /// Eats nothing
    Plant,
    /// Eats plants only
    Herbivore,
    /// Eats animals only
    Carnivore,
    /// Eats both
    Omnivore,
}

impl Diet {
    /// All four categories, in capability-flag order
    pub const ALL: [Diet; 4] = [Diet::Plant, Diet::Herbivore, Diet::Carnivore, Diet::Omnivore];

    /// Build a diet from its capability flags
    pub fn from_capabilities(can_eat_meat: bool, can_eat_plants: bool) -> Self {
        match (can_eat_meat, can_eat_plants) {
            (false, false) => Diet::Plant,
            (false, true) => Diet::Herbivore,
            (true, false) => Diet::Carnivore,
            (true, true) => Diet::Omnivore,
        }
    }

    /// Capability flags as `(can_eat_meat, can_eat_plants)`
    pub fn capabilities(self) -> (bool, bool) {
        (self.can_eat_meat(), self.can_eat_plants())
    }

    pub fn can_eat_meat(self) -> bool {
        matches!(self, Diet::Carnivore | Diet::Omnivore)
    }

    pub fn can_eat_plants(self) -> bool {
        matches!(self, Diet::Herbivore | Diet::Omnivore)
    }

    /// True iff neither capability flag is set
    pub fn is_plant(self) -> bool {
        self == Diet::Plant
    }

    /// Whether this diet can eat something of the `target` category.
    ///
    /// Plants are eaten with the plant capability, everything else with
    /// the meat capability.
    pub fn can_eat(self, target: Diet) -> bool {
        if target.is_plant() {
            self.can_eat_plants()
        } else {
            self.can_eat_meat()
        }
    }

    /// True if at least one of the two diets can eat anything at all.
    ///
    /// Encounters between two diets failing this check are degenerate.
    pub fn any_eater(a: Diet, b: Diet) -> bool {
        !(a.is_plant() && b.is_plant())
    }

    pub fn name(self) -> &'static str {
        match self {
            Diet::Plant => "plant",
            Diet::Herbivore => "herbivore",
            Diet::Carnivore => "carnivore",
            Diet::Omnivore => "omnivore",
        }
    }
}

impl fmt::Display for Diet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when parsing an unknown diet name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownDiet(pub String);

impl fmt::Display for UnknownDiet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown diet '{}' (expected plant, herbivore, carnivore or omnivore)",
            self.0
        )
    }
}

impl std::error::Error for UnknownDiet {}

impl FromStr for Diet {
    type Err = UnknownDiet;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Diet::ALL
            .into_iter()
            .find(|d| d.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownDiet(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capability_table() {
        assert_eq!(Diet::from_capabilities(false, false), Diet::Plant);
        assert_eq!(Diet::from_capabilities(false, true), Diet::Herbivore);
        assert_eq!(Diet::from_capabilities(true, false), Diet::Carnivore);
        assert_eq!(Diet::from_capabilities(true, true), Diet::Omnivore);

        for diet in Diet::ALL {
            let (meat, plants) = diet.capabilities();
            assert_eq!(Diet::from_capabilities(meat, plants), diet);
        }
    }

    #[test]
    fn test_is_plant() {
        assert!(Diet::Plant.is_plant());
        assert!(!Diet::Herbivore.is_plant());
        assert!(!Diet::Carnivore.is_plant());
        assert!(!Diet::Omnivore.is_plant());
    }

    #[test]
    fn test_can_eat() {
        assert!(Diet::Herbivore.can_eat(Diet::Plant));
        assert!(!Diet::Herbivore.can_eat(Diet::Herbivore));
        assert!(Diet::Carnivore.can_eat(Diet::Omnivore));
        assert!(!Diet::Carnivore.can_eat(Diet::Plant));
        assert!(Diet::Omnivore.can_eat(Diet::Plant));
        assert!(Diet::Omnivore.can_eat(Diet::Carnivore));

        // Plants never eat
        for target in Diet::ALL {
            assert!(!Diet::Plant.can_eat(target));
        }
    }

    #[test]
    fn test_any_eater() {
        assert!(!Diet::any_eater(Diet::Plant, Diet::Plant));
        assert!(Diet::any_eater(Diet::Plant, Diet::Herbivore));
        assert!(Diet::any_eater(Diet::Carnivore, Diet::Plant));
    }

    #[test]
    fn test_parse() {
        assert_eq!("Carnivore".parse::<Diet>(), Ok(Diet::Carnivore));
        assert_eq!(" plant ".parse::<Diet>(), Ok(Diet::Plant));
        assert!("fungus".parse::<Diet>().is_err());
        assert_eq!(Diet::Omnivore.to_string(), "omnivore");
    }
}
