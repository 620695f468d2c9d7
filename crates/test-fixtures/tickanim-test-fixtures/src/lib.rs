//! Named JSON fixtures shared by the tickanim test suites.
//!
//! Fixtures live under the workspace `fixtures/` directory and are looked up
//! by name through `fixtures/manifest.json`.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use once_cell::sync::Lazy;
use serde::de::DeserializeOwned;
use serde::Deserialize;

static MANIFEST: Lazy<Manifest> = Lazy::new(|| {
    let raw = include_str!("../../../../fixtures/manifest.json");
    serde_json::from_str(raw).expect("fixtures manifest should parse")
});

#[derive(Debug, Deserialize)]
struct Manifest {
    scenarios: HashMap<String, ScenarioEntry>,
    #[serde(default)]
    configs: HashMap<String, String>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ScenarioEntry {
    Path(String),
    Detailed {
        path: String,
        #[serde(default)]
        config: Option<String>,
    },
}

impl ScenarioEntry {
    fn as_path(&self) -> &str {
        match self {
            ScenarioEntry::Path(path) => path,
            ScenarioEntry::Detailed { path, .. } => path,
        }
    }

    fn config(&self) -> Option<&str> {
        match self {
            ScenarioEntry::Path(_) => None,
            ScenarioEntry::Detailed { config, .. } => config.as_deref(),
        }
    }
}

fn fixtures_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("../../../fixtures")
}

fn resolve_path(rel: &str) -> PathBuf {
    fixtures_root().join(rel)
}

fn read_to_string(rel: &str) -> Result<String> {
    let path = resolve_path(rel);
    fs::read_to_string(&path)
        .with_context(|| format!("failed to read fixture at {}", path.display()))
}

fn load_json<T: DeserializeOwned>(rel: &str) -> Result<T> {
    let text = read_to_string(rel)?;
    serde_json::from_str(&text).with_context(|| format!("failed to parse JSON fixture {rel}"))
}

fn lookup<'a, T>(map: &'a HashMap<String, T>, kind: &str, name: &str) -> Result<&'a T> {
    map.get(name)
        .ok_or_else(|| anyhow!("unknown {kind} fixture '{name}'"))
}

/// Tick-by-tick animation scenarios.
pub mod scenarios {
    use super::*;

    /// Scenario names, sorted.
    pub fn keys() -> Vec<String> {
        let mut keys: Vec<String> = MANIFEST.scenarios.keys().cloned().collect();
        keys.sort();
        keys
    }

    pub fn json(name: &str) -> Result<String> {
        let entry = lookup(&MANIFEST.scenarios, "scenario", name)?;
        read_to_string(entry.as_path())
    }

    pub fn load<T: DeserializeOwned>(name: &str) -> Result<T> {
        let entry = lookup(&MANIFEST.scenarios, "scenario", name)?;
        super::load_json(entry.as_path())
    }

    pub fn path(name: &str) -> Result<PathBuf> {
        let entry = lookup(&MANIFEST.scenarios, "scenario", name)?;
        Ok(resolve_path(entry.as_path()))
    }

    /// Engine config the scenario runs under, if it names one.
    pub fn config<T: DeserializeOwned>(name: &str) -> Result<Option<T>> {
        let entry = lookup(&MANIFEST.scenarios, "scenario", name)?;
        match entry.config() {
            Some(config) => super::configs::load(config).map(Some),
            None => Ok(None),
        }
    }
}

/// Engine configurations.
pub mod configs {
    use super::*;

    pub fn keys() -> Vec<String> {
        MANIFEST.configs.keys().cloned().collect()
    }

    pub fn json(name: &str) -> Result<String> {
        let rel = lookup(&MANIFEST.configs, "config", name)?;
        read_to_string(rel)
    }

    pub fn load<T: DeserializeOwned>(name: &str) -> Result<T> {
        let rel = lookup(&MANIFEST.configs, "config", name)?;
        super::load_json(rel)
    }
}
