//! # FOODWEB
//!
//! Deterministic encounter rules for simple organisms.
//!
//! ## Features
//!
//! - **Four diets**: plant, herbivore, carnivore, omnivore
//! - **Pure**: every operation returns new organisms, nothing is mutated
//! - **Deterministic**: no randomness, no hidden state
//! - **Generic species**: any type with equality works as a species id
//!
//! ## Quick Start
//!
//! ```rust
//! use foodweb::{encounter, Organism};
//!
//! let wolf = Organism::carnivore("wolf", 10);
//! let rabbit = Organism::herbivore("rabbit", 4);
//!
//! let (wolf, rabbit, offspring) = encounter(wolf, rabbit).into_parts();
//! assert_eq!(wolf.vitality(), 12);
//! assert!(rabbit.is_dead());
//! assert!(offspring.is_none());
//! ```
//!
//! ## Series
//!
//! ```rust
//! use foodweb::{encounter_series, Organism};
//!
//! let deer = Organism::herbivore("deer", 3);
//! let meal = [Organism::plant("clover", 2), Organism::plant("grass", 5)];
//!
//! assert_eq!(encounter_series(deer, meal).vitality(), 10);
//! ```

pub mod config;
pub mod ecology;
pub mod encounter;
pub mod genetics;
pub mod organism;
pub mod stats;

// Re-export main types
pub use config::Config;
pub use ecology::{Diet, Feeding};
pub use encounter::{
    combine, encounter, encounter_series, try_encounter, try_encounter_series, Encounter,
    EncounterError, EncounterKind,
};
pub use organism::{Organism, Vitality};
pub use stats::EncounterStats;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
