//! Scenario configuration.
//!
//! A scenario names a set of organisms and lists the encounters and series
//! to resolve between them. Scenarios are YAML files with sensible defaults.

use crate::ecology::Diet;
use crate::encounter::check_pair;
use crate::organism::{Organism, Vitality};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::path::Path;

/// Main scenario structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Log level (error, warn, info, debug, trace)
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// Organisms available to the scenario
    pub organisms: Vec<OrganismConfig>,
    /// Pairwise encounters, by organism name
    #[serde(default)]
    pub encounters: Vec<[String; 2]>,
    /// Encounter series, by organism name; the first entry is folded through the rest
    #[serde(default)]
    pub series: Vec<Vec<String>>,
}

/// One organism in a scenario
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrganismConfig {
    /// Name the organism is referred to by
    pub name: String,
    /// Species identifier; conspecifics share it
    pub species: String,
    pub diet: Diet,
    pub vitality: Vitality,
}

impl OrganismConfig {
    fn new(name: &str, species: &str, diet: Diet, vitality: Vitality) -> Self {
        Self {
            name: name.to_string(),
            species: species.to_string(),
            diet,
            vitality,
        }
    }

    /// Build the organism this entry describes
    pub fn build(&self) -> Organism<String> {
        Organism::new(self.species.clone(), self.diet, self.vitality)
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            organisms: vec![
                OrganismConfig::new("wolf", "wolf", Diet::Carnivore, 10),
                OrganismConfig::new("rabbit", "rabbit", Diet::Herbivore, 4),
                OrganismConfig::new("doe", "rabbit", Diet::Herbivore, 6),
                OrganismConfig::new("grass", "grass", Diet::Plant, 3),
                OrganismConfig::new("bear", "bear", Diet::Omnivore, 15),
            ],
            encounters: vec![
                pair("wolf", "rabbit"),
                pair("rabbit", "doe"),
                pair("rabbit", "grass"),
                pair("bear", "wolf"),
            ],
            series: vec![vec![
                "rabbit".to_string(),
                "grass".to_string(),
                "doe".to_string(),
                "wolf".to_string(),
            ]],
        }
    }
}

fn pair(a: &str, b: &str) -> [String; 2] {
    [a.to_string(), b.to_string()]
}

/// Errors that can occur while loading a scenario
#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Yaml(serde_yaml::Error),
    Invalid(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "IO error: {}", e),
            Self::Yaml(e) => write!(f, "YAML error: {}", e),
            Self::Invalid(msg) => write!(f, "Invalid scenario: {}", msg),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<serde_yaml::Error> for ConfigError {
    fn from(e: serde_yaml::Error) -> Self {
        Self::Yaml(e)
    }
}

impl Config {
    /// Load a scenario from a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml(&contents)
    }

    /// Parse and validate a scenario from YAML text
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        let config: Config = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Save the scenario to a YAML file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let yaml = serde_yaml::to_string(self)?;
        std::fs::write(path, yaml)?;
        Ok(())
    }

    fn index(&self) -> HashMap<&str, &OrganismConfig> {
        self.organisms.iter().map(|o| (o.name.as_str(), o)).collect()
    }

    /// Look up an organism by name
    pub fn resolve(&self, name: &str) -> Result<Organism<String>, ConfigError> {
        self.organisms
            .iter()
            .find(|o| o.name == name)
            .map(OrganismConfig::build)
            .ok_or_else(|| ConfigError::Invalid(format!("unknown organism '{}'", name)))
    }

    /// Validate scenario values
    pub fn validate(&self) -> Result<(), ConfigError> {
        let index = self.index();
        if index.len() != self.organisms.len() {
            return Err(ConfigError::Invalid("organism names must be unique".to_string()));
        }

        let lookup = |name: &String| {
            index
                .get(name.as_str())
                .copied()
                .ok_or_else(|| ConfigError::Invalid(format!("unknown organism '{}'", name)))
        };
        let check = |a: &OrganismConfig, b: &OrganismConfig| {
            check_pair(a.diet, b.diet)
                .map_err(|e| ConfigError::Invalid(format!("{} vs {}: {}", a.name, b.name, e)))
        };

        for [a, b] in &self.encounters {
            check(lookup(a)?, lookup(b)?)?;
        }

        for (i, chain) in self.series.iter().enumerate() {
            let mut members = chain.iter();
            let first = members
                .next()
                .ok_or_else(|| ConfigError::Invalid(format!("series {} is empty", i)))?;
            // A plant head stays a plant for the whole fold
            let head = lookup(first)?;
            for name in members {
                check(head, lookup(name)?)?;
            }
        }

        Ok(())
    }
}
