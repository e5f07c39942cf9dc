//! Aggregate statistics over the study sessions of one task.
//!
//! The aggregator is a single fold over `{duration_min, breaks_taken,
//! completed}` records. An empty input yields all-zero statistics; the average
//! is only computed when there is at least one session.

use serde::{Deserialize, Serialize};

/// The per-session fields the aggregator reads.
///
/// Deserializes from a full session record too; unknown fields are ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionTally {
    pub duration_min: u32,
    #[serde(default)]
    pub breaks_taken: u32,
    #[serde(default)]
    pub completed: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionStats {
    pub total_sessions: u64,
    pub completed_sessions: u64,
    pub total_minutes: u64,
    pub total_breaks: u64,
    pub average_minutes_per_session: f64,
}

/// Fold session tallies into [`SessionStats`].
pub fn aggregate<I>(sessions: I) -> SessionStats
where
    I: IntoIterator<Item = SessionTally>,
{
    let mut stats = sessions
        .into_iter()
        .fold(SessionStats::default(), |mut acc, s| {
            acc.total_sessions += 1;
            acc.completed_sessions += u64::from(s.completed);
            acc.total_minutes += u64::from(s.duration_min);
            acc.total_breaks += u64::from(s.breaks_taken);
            acc
        });

    if stats.total_sessions > 0 {
        stats.average_minutes_per_session =
            stats.total_minutes as f64 / stats.total_sessions as f64;
    }

    stats
}
