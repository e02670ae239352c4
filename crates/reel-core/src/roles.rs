//! Role name to actor name resolution.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Resolves a cast role (as written in a scene's `cast_needed`) to an actor name.
///
/// Returning `None` is not an error: the role simply has no linked actor.
pub trait RoleResolver: Send + Sync {
    fn actor_name(&self, role: &str) -> Option<&str>;
}

/// Exact-match lookup table, serialized as a plain map.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoleTable {
    map: BTreeMap<String, String>,
}

impl RoleTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, role: impl Into<String>, actor: impl Into<String>) -> Self {
        self.insert(role, actor);
        self
    }

    pub fn insert(&mut self, role: impl Into<String>, actor: impl Into<String>) {
        self.map.insert(role.into(), actor.into());
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

impl RoleResolver for RoleTable {
    fn actor_name(&self, role: &str) -> Option<&str> {
        self.map.get(role).map(String::as_str)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for RoleTable {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut table = RoleTable::new();
        for (role, actor) in iter {
            table.insert(role, actor);
        }
        table
    }
}
