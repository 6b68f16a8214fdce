//! Process-wide mutable bot state.

use tokio::sync::RwLock;

use crate::bot::model::route::RouteFlag;

/// Jump counts from the entrance to one home system.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HomeDistance {
    /// Home system name as configured.
    pub system: String,
    /// Jump count per routing mode, in configured flag order, at most one per mode.
    pub jumps: Vec<(RouteFlag, u32)>,
}

impl HomeDistance {
    /// Jump count under `flag`, if that mode was computed.
    pub fn jumps_for(&self, flag: RouteFlag) -> Option<u32> {
        self.jumps
            .iter()
            .find(|(mode, _)| *mode == flag)
            .map(|(_, count)| *count)
    }
}

/// Current entrance and the distances computed against it.
///
/// Distances are only valid for the entrance they were computed with, which is why both are
/// stored and replaced together.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entrance {
    /// Entrance system name as spelled by ESI.
    pub system: String,
    /// Distances to each home system, in configuration order.
    pub distances: Vec<HomeDistance>,
}

/// State shared by every command handler.
///
/// Held in memory only, a restart forgets the entrance.
#[derive(Debug, Default)]
pub struct BotState {
    entrance: RwLock<Option<Entrance>>,
}

impl BotState {
    /// Creates an empty state with no entrance set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of the current entrance, if one has been set.
    pub async fn entrance(&self) -> Option<Entrance> {
        self.entrance.read().await.clone()
    }

    /// Replaces the entrance and its distances in a single write.
    pub async fn replace_entrance(&self, entrance: Entrance) {
        *self.entrance.write().await = Some(entrance);
    }
}
