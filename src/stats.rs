//! Encounter tallies.

use crate::encounter::{Encounter, EncounterKind};
use serde::{Deserialize, Serialize};

/// Running counts over a batch of encounters
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncounterStats {
    /// Encounters recorded
    pub encounters: u64,
    /// Encounters that produced offspring
    pub breedings: u64,
    /// Encounters where at least one side fed or died
    pub predations: u64,
    /// Encounters where neither side could eat the other
    pub standoffs: u64,
    /// Encounters skipped because one side was already dead
    pub inert: u64,
    /// Organisms killed across all encounters
    pub kills: u64,
}

impl EncounterStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one encounter
    pub fn record<S>(&mut self, encounter: &Encounter<S>) {
        self.encounters += 1;
        match encounter.kind() {
            EncounterKind::Inert => self.inert += 1,
            EncounterKind::Breeding => self.breedings += 1,
            EncounterKind::Standoff => self.standoffs += 1,
            EncounterKind::Predation => {
                self.predations += 1;
                self.kills += u64::from(encounter.first.is_dead());
                self.kills += u64::from(encounter.second.is_dead());
            }
        }
    }

    /// One-line summary
    pub fn summary(&self) -> String {
        format!(
            "Encounters: {} | Breedings: {} | Predations: {} | Kills: {} | Standoffs: {} | Inert: {}",
            self.encounters, self.breedings, self.predations, self.kills, self.standoffs, self.inert
        )
    }
}
