//! Organism value type.
//!
//! An organism is an immutable snapshot. Feeding and breeding never touch
//! their inputs; they return a fresh organism describing the result.

use crate::ecology::predation::{resolve_feeding, Feeding};
use crate::ecology::Diet;
use crate::genetics::breeding::midpoint_vitality;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Life force / biomass. Zero means dead.
pub type Vitality = u64;

/// An organism of species `S`
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Organism<S> {
    // Private so diet can never change after construction
    species: S,
    diet: Diet,
    vitality: Vitality,
}

impl<S> Organism<S> {
    /// Create an organism with an explicit diet
    pub fn new(species: S, diet: Diet, vitality: Vitality) -> Self {
        Self {
            species,
            diet,
            vitality,
        }
    }

    /// Eats nothing
    pub fn plant(species: S, vitality: Vitality) -> Self {
        Self::new(species, Diet::Plant, vitality)
    }

    /// Eats plants
    pub fn herbivore(species: S, vitality: Vitality) -> Self {
        Self::new(species, Diet::Herbivore, vitality)
    }

    /// Eats animals
    pub fn carnivore(species: S, vitality: Vitality) -> Self {
        Self::new(species, Diet::Carnivore, vitality)
    }

    /// Eats plants and animals
    pub fn omnivore(species: S, vitality: Vitality) -> Self {
        Self::new(species, Diet::Omnivore, vitality)
    }

    pub fn vitality(&self) -> Vitality {
        self.vitality
    }

    pub fn species(&self) -> &S {
        &self.species
    }

    pub fn diet(&self) -> Diet {
        self.diet
    }

    pub fn is_dead(&self) -> bool {
        self.vitality == 0
    }

    /// Depends only on the diet, never on the instance state
    pub fn is_plant(&self) -> bool {
        self.diet.is_plant()
    }

    /// What happens to `self` when it tries to eat `other`
    pub fn feeding(&self, other: &Organism<S>) -> Feeding {
        resolve_feeding(self.diet, self.vitality, other.diet, other.vitality)
    }
}

impl<S: Clone> Organism<S> {
    /// Same organism with a different vitality
    fn with_vitality(&self, vitality: Vitality) -> Self {
        Self {
            species: self.species.clone(),
            diet: self.diet,
            vitality,
        }
    }

    /// Result of `self` trying to eat `other`.
    ///
    /// Returns what `self` becomes: fed, dead, or unchanged.
    pub fn eat(&self, other: &Organism<S>) -> Organism<S> {
        let outcome = self.feeding(other);
        log::trace!(
            "{} ({}) eats {} ({}): {:?}",
            self.diet,
            self.vitality,
            other.diet,
            other.vitality,
            outcome
        );
        self.with_vitality(outcome.apply(self.vitality))
    }

    /// Offspring of `self` and `other`.
    ///
    /// Only meaningful for conspecifics; callers should go through
    /// [`crate::encounter::encounter`]. The offspring carries `self`'s
    /// species and diet and the floor midpoint of both vitalities.
    pub fn breed(&self, other: &Organism<S>) -> Organism<S> {
        self.with_vitality(midpoint_vitality(self.vitality, other.vitality))
    }
}

impl<S: fmt::Display> fmt::Display for Organism<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}] vitality={}", self.species, self.diet, self.vitality)?;
        if self.is_dead() {
            write!(f, " (dead)")?;
        }
        Ok(())
    }
}
