//! Genetics module - breeding between conspecifics.

pub mod breeding;

pub use breeding::{is_conspecific, midpoint_vitality};
