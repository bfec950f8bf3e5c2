use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::model::Player;

/// A division as served by the backend directory. Read-only on this side.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Division {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// A group inside a division. Read-only on this side.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DivisionGroup {
    pub id: String,
    pub name: String,
    pub division_id: String,
}

/// The subset of `groups` owned by `division_id`, in listing order.
pub fn groups_for_division<'a>(
    groups: &'a [DivisionGroup],
    division_id: &str,
) -> Vec<&'a DivisionGroup> {
    groups
        .iter()
        .filter(|group| group.division_id == division_id)
        .collect()
}

/// Id-keyed directory lookups, built once per fetch rather than per row.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RosterLookups {
    divisions: HashMap<String, Division>,
    groups: HashMap<String, DivisionGroup>,
}

impl RosterLookups {
    pub fn new(divisions: &[Division], groups: &[DivisionGroup]) -> Self {
        RosterLookups {
            divisions: divisions
                .iter()
                .map(|division| (division.id.clone(), division.clone()))
                .collect(),
            groups: groups
                .iter()
                .map(|group| (group.id.clone(), group.clone()))
                .collect(),
        }
    }

    pub fn division(&self, id: &str) -> Option<&Division> {
        self.divisions.get(id)
    }

    pub fn group(&self, id: &str) -> Option<&DivisionGroup> {
        self.groups.get(id)
    }

    /// Division name, or the raw id when the directory misses so a dangling
    /// reference still renders.
    pub fn division_label(&self, player: &Player) -> String {
        match self.divisions.get(&player.division_id) {
            Some(division) => division.name.clone(),
            None => player.division_id.clone(),
        }
    }

    /// Group name, or `"No group"` when the player has none or the lookup
    /// misses.
    pub fn group_label(&self, player: &Player) -> String {
        player
            .group_id
            .as_deref()
            .and_then(|id| self.groups.get(id))
            .map(|group| group.name.clone())
            .unwrap_or_else(|| "No group".to_string())
    }
}
