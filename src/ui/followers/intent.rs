use crate::github::FollowerSummary;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum FollowerGridIntent {
    /// Mount or re-key the grid on a followers collection URL.
    Load { url: String },
    /// The fetch issued for `key` resolved. Discarded if the grid has
    /// since been re-keyed.
    Resolved {
        key: String,
        result: Result<Vec<FollowerSummary>, String>,
    },
    /// Unmount: back to idle, stale resolutions dropped.
    Reset,
}

impl Intent for FollowerGridIntent {}
