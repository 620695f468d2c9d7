//! Path table: named interpolation curves.
//!
//! Two curves are built in (`linear`, `step`). Hosts can register their own,
//! typically a [`TablePath`] sampled from a design tool.

pub mod functions;

use std::fmt;
use std::rc::Rc;
use std::str::FromStr;

use hashbrown::HashMap;
use serde::{Deserialize, Serialize};

use crate::error::AnimError;

pub use functions::{Linear, PathFunction, Step, TablePath, PATH_MAX, PROGRESS_MAX};

/// Shared, read-only handle to a curve. Records hold clones; they never own the curve.
pub type PathRef = Rc<dyn PathFunction>;

/// Names of the built-in curves.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PathName {
    #[default]
    Linear,
    Step,
}

impl PathName {
    pub const ALL: [PathName; 2] = [PathName::Linear, PathName::Step];

    #[inline]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Linear => "linear",
            Self::Step => "step",
        }
    }
}

impl fmt::Display for PathName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PathName {
    type Err = AnimError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "linear" => Ok(Self::Linear),
            "step" => Ok(Self::Step),
            _ => Err(AnimError::InvalidPathName { name: s.to_string() }),
        }
    }
}

/// Handle to a built-in curve.
pub fn get_path(name: PathName) -> PathRef {
    match name {
        PathName::Linear => Rc::new(Linear),
        PathName::Step => Rc::new(Step),
    }
}

/// Curves addressable by name. Lookups are case-insensitive.
#[derive(Debug, Clone)]
pub struct PathTable {
    paths: HashMap<String, PathRef>,
}

impl PathTable {
    /// Table preloaded with the built-in curves.
    pub fn new() -> Self {
        let mut table = Self {
            paths: HashMap::new(),
        };
        for name in PathName::ALL {
            table.paths.insert(name.as_str().to_string(), get_path(name));
        }
        table
    }

    /// Register (or replace) a curve under `name`.
    pub fn register(&mut self, name: &str, path: PathRef) -> Option<PathRef> {
        self.paths.insert(name.to_ascii_lowercase(), path)
    }

    /// Look a curve up, failing with `InvalidPathName` if it is unknown.
    pub fn get(&self, name: &str) -> Result<PathRef, AnimError> {
        self.paths
            .get(&name.to_ascii_lowercase())
            .cloned()
            .ok_or_else(|| AnimError::InvalidPathName {
                name: name.to_string(),
            })
    }

    /// Look a curve up, substituting `linear` for unknown names.
    pub fn get_or_linear(&self, name: &str) -> PathRef {
        match self.get(name) {
            Ok(path) => path,
            Err(_) => {
                log::warn!("unknown path '{name}', falling back to linear");
                self.builtin(PathName::Linear)
            }
        }
    }

    /// Shared handle to a built-in curve held by this table.
    pub fn builtin(&self, name: PathName) -> PathRef {
        self.paths
            .get(name.as_str())
            .cloned()
            .unwrap_or_else(|| get_path(name))
    }

    #[inline]
    pub fn contains(&self, name: &str) -> bool {
        self.paths.contains_key(&name.to_ascii_lowercase())
    }

    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.paths.keys().map(|k| k.as_str()).collect();
        names.sort_unstable();
        names
    }
}

impl Default for PathTable {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtins_resolve_by_enum_and_name() {
        let table = PathTable::new();
        assert_eq!(get_path(PathName::Step).name(), "step");
        assert_eq!(table.get("LINEAR").unwrap().name(), "linear");
        assert_eq!(table.names(), vec!["linear", "step"]);
    }

    #[test]
    fn unknown_name_is_an_error() {
        let table = PathTable::new();
        let err = table.get("bounce").unwrap_err();
        assert_eq!(
            err,
            AnimError::InvalidPathName {
                name: "bounce".into()
            }
        );
        assert!("bounce".parse::<PathName>().is_err());
    }

    #[test]
    fn get_or_linear_falls_back() {
        let table = PathTable::new();
        assert_eq!(table.get_or_linear("bounce").name(), "linear");
        assert_eq!(table.get_or_linear("step").name(), "step");
    }

    #[test]
    fn registered_paths_are_shared() {
        let mut table = PathTable::new();
        let ease: PathRef = Rc::new(TablePath::new("ease", vec![0, 256, 1024]).unwrap());
        assert!(table.register("Ease", ease.clone()).is_none());
        assert!(table.contains("ease"));
        let got = table.get("ease").unwrap();
        assert!(Rc::ptr_eq(&got, &ease));
    }

    #[test]
    fn path_name_round_trips_through_str() {
        for name in PathName::ALL {
            assert_eq!(name.as_str().parse::<PathName>().unwrap(), name);
            assert_eq!(name.to_string(), name.as_str());
        }
    }
}
