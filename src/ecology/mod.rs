//! Ecological rules.
//!
//! This module contains:
//! - Diet categories and their eating capabilities
//! - Predation (who eats whom, and what it yields)

pub mod diet;
pub mod predation;

pub use diet::{Diet, UnknownDiet};
pub use predation::{resolve_feeding, Feeding};
