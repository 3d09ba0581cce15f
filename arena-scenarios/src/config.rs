/*
 *  SPDX-License-Identifier: Apache-2.0 OR MIT
 *  © 2020-2022 ETH Zurich and other contributors, see AUTHORS.txt for details
 */

use std::{fs, io};

use arena_core::Wall;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// Errors raised while loading a configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot open config file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },
    #[error("invalid config: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid 'set' override {0:?}, should be \"some.path=value\"")]
    InvalidOverride(String),
}

/// Parameters of the predator-prey scenario.
///
/// The default agent counts are those trained models rely upon, they must not change.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PredatorPreyConfig {
    pub n_preds: usize,
    pub n_preys: usize,
    pub n_landmarks: usize,
    pub walls: Vec<Wall>,
    /// force limit of the scripted policies
    pub max_force: f32,
    /// draws allowed to find a non-overlapping initial state
    pub max_attempts: u32,
    /// whether predators are driven by the rusher policy instead of a learned one
    pub scripted_predators: bool,
}

impl Default for PredatorPreyConfig {
    fn default() -> Self {
        PredatorPreyConfig {
            n_preds: 2,
            n_preys: 1,
            n_landmarks: 0,
            walls: Vec::new(),
            max_force: 1.,
            max_attempts: 10_000,
            scripted_predators: false,
        }
    }
}

/// Parameters of the navigation scenario.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavigationConfig {
    pub n_agents: usize,
    pub n_landmarks: usize,
}

impl Default for NavigationConfig {
    fn default() -> Self {
        NavigationConfig {
            n_agents: 5,
            n_landmarks: 1,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ScenarioConfig {
    PredatorPrey(PredatorPreyConfig),
    Navigation(NavigationConfig),
}

impl Default for ScenarioConfig {
    fn default() -> Self {
        ScenarioConfig::PredatorPrey(Default::default())
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Config {
    #[serde(default)]
    pub seed: Option<u64>,
    #[serde(default = "Default::default")]
    pub scenario: ScenarioConfig,
}

impl Config {
    /// Loads a config from a file, or from stdin if `path` is `-`, and applies `overrides` to it.
    pub fn load<'a>(
        path: &str,
        overrides: impl IntoIterator<Item = &'a str>,
    ) -> Result<Self, ConfigError> {
        let mut json: Value = match path {
            "-" => {
                let stdin = io::stdin();
                serde_json::from_reader(stdin.lock())?
            }
            path => {
                let file = fs::File::open(path).map_err(|source| ConfigError::Io {
                    path: path.to_owned(),
                    source,
                })?;
                serde_json::from_reader(io::BufReader::new(file))?
            }
        };
        for assignment in overrides {
            set_value(&mut json, assignment)?;
        }
        Ok(serde_json::from_value(json)?)
    }
}

/// Applies an override of the form `some.path=value` to a JSON document.
///
/// Missing intermediate objects are created, and `value` is parsed as JSON.
pub fn set_value(json: &mut Value, assignment: &str) -> Result<(), ConfigError> {
    let invalid = || ConfigError::InvalidOverride(assignment.to_owned());
    let (path, value) = assignment.split_once('=').ok_or_else(invalid)?;
    let value: Value = serde_json::from_str(value)?;

    let mut keys = path.split('.').peekable();
    let mut object = json;
    while let Some(key) = keys.next() {
        if key.is_empty() {
            return Err(invalid());
        }
        let map = object.as_object_mut().ok_or_else(invalid)?;
        if keys.peek().is_none() {
            map.insert(key.to_owned(), value);
            return Ok(());
        }
        // Key is not present or not an object
        if !map.get(key).map_or(false, Value::is_object) {
            map.insert(key.to_owned(), Value::Object(Default::default()));
        }
        object = map.get_mut(key).ok_or_else(invalid)?;
    }
    Err(invalid())
}
