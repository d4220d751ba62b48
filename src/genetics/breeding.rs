//! Breeding between conspecifics.

use crate::organism::Organism;

/// Two organisms are conspecific when they share both diet and species
pub fn is_conspecific<S: PartialEq>(a: &Organism<S>, b: &Organism<S>) -> bool {
    a.diet() == b.diet() && a.species() == b.species()
}

/// Floor of the midpoint between two vitalities, without overflow
pub fn midpoint_vitality(a: u64, b: u64) -> u64 {
    let (low, high) = if a <= b { (a, b) } else { (b, a) };
    low + (high - low) / 2
}
