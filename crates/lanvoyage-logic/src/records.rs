//! Study log — per-session records and aggregate statistics.
//!
//! The host app persists records however it likes (the original store is a
//! device-local database); this module only defines the record shape and
//! pure query/aggregation functions over slices. Timestamps are unix
//! seconds supplied by the caller, and "recent" filters take `now`
//! explicitly so everything stays deterministic.

use serde::{Deserialize, Serialize};

const SECONDS_PER_DAY: u64 = 86_400;

/// Which practice mode produced a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[repr(u8)]
pub enum StudyMode {
    /// Situation-based translation challenge.
    Translation = 1,
    /// Timed quick-response drill.
    QuickResponse = 2,
    /// Free-form AI tutor conversation.
    AiConversation = 3,
}

impl StudyMode {
    pub const ALL: [StudyMode; 3] = [
        StudyMode::Translation,
        StudyMode::QuickResponse,
        StudyMode::AiConversation,
    ];

    pub fn from_u8(val: u8) -> Option<Self> {
        match val {
            1 => Some(Self::Translation),
            2 => Some(Self::QuickResponse),
            3 => Some(Self::AiConversation),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Translation => "Translation Challenge",
            Self::QuickResponse => "Quick Response",
            Self::AiConversation => "AI Conversation",
        }
    }
}

/// One completed practice session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudyRecord {
    pub mode: StudyMode,
    /// Unix timestamp (seconds) of completion.
    pub created_at: u64,
    /// Grading score, 0–100.
    pub score: u32,
    pub duration_seconds: u32,
    /// Points awarded for the session.
    pub points: u32,
}

impl StudyRecord {
    /// Build a record, clamping the score into its valid range.
    pub fn new(
        mode: StudyMode,
        created_at: u64,
        score: u32,
        duration_seconds: u32,
        points: u32,
    ) -> Self {
        Self {
            mode,
            created_at,
            score: score.min(100),
            duration_seconds,
            points,
        }
    }
}

/// Records sorted newest first.
pub fn sorted_desc(records: &[StudyRecord]) -> Vec<StudyRecord> {
    let mut out = records.to_vec();
    out.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    out
}

/// Records from the last `days` days, newest first.
pub fn records_since(records: &[StudyRecord], now: u64, days: u64) -> Vec<StudyRecord> {
    let from = now.saturating_sub(days.saturating_mul(SECONDS_PER_DAY));
    let mut out: Vec<StudyRecord> = records
        .iter()
        .filter(|r| r.created_at >= from)
        .cloned()
        .collect();
    out.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    out
}

/// Records for one mode, optionally restricted to the last `days` days,
/// newest first.
pub fn records_by_mode(
    records: &[StudyRecord],
    mode: StudyMode,
    since: Option<(u64, u64)>,
) -> Vec<StudyRecord> {
    let from = match since {
        Some((now, days)) => now.saturating_sub(days.saturating_mul(SECONDS_PER_DAY)),
        None => 0,
    };
    let mut out: Vec<StudyRecord> = records
        .iter()
        .filter(|r| r.mode == mode && r.created_at >= from)
        .cloned()
        .collect();
    out.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    out
}

/// Aggregate statistics over a set of records.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StudyStats {
    pub count: usize,
    pub total_seconds: u64,
    pub total_points: u64,
    pub average_score: f64,
    pub average_duration_seconds: f64,
}

impl StudyStats {
    pub const EMPTY: StudyStats = StudyStats {
        count: 0,
        total_seconds: 0,
        total_points: 0,
        average_score: 0.0,
        average_duration_seconds: 0.0,
    };
}

/// Compute stats over records. Empty input yields [`StudyStats::EMPTY`].
pub fn stats(records: &[StudyRecord]) -> StudyStats {
    if records.is_empty() {
        return StudyStats::EMPTY;
    }
    let count = records.len();
    let total_seconds: u64 = records.iter().map(|r| u64::from(r.duration_seconds)).sum();
    let total_points: u64 = records.iter().map(|r| u64::from(r.points)).sum();
    let score_sum: u64 = records.iter().map(|r| u64::from(r.score)).sum();
    StudyStats {
        count,
        total_seconds,
        total_points,
        average_score: score_sum as f64 / count as f64,
        average_duration_seconds: total_seconds as f64 / count as f64,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DAY: u64 = 86_400;
    const NOW: u64 = 1_760_000_000;

    fn sample_records() -> Vec<StudyRecord> {
        vec![
            StudyRecord::new(StudyMode::Translation, NOW - 10 * DAY, 70, 300, 7),
            StudyRecord::new(StudyMode::AiConversation, NOW - 2 * DAY, 90, 1800, 10),
            StudyRecord::new(StudyMode::Translation, NOW - DAY, 80, 240, 8),
            StudyRecord::new(StudyMode::QuickResponse, NOW - 3 * DAY, 60, 120, 0),
        ]
    }

    #[test]
    fn new_clamps_score() {
        let r = StudyRecord::new(StudyMode::Translation, NOW, 150, 60, 3);
        assert_eq!(r.score, 100);
    }

    #[test]
    fn sorted_newest_first() {
        let sorted = sorted_desc(&sample_records());
        for w in sorted.windows(2) {
            assert!(w[0].created_at >= w[1].created_at);
        }
        assert_eq!(sorted[0].created_at, NOW - DAY);
    }

    #[test]
    fn since_filters_by_window() {
        let recent = records_since(&sample_records(), NOW, 7);
        assert_eq!(recent.len(), 3);
        assert!(recent.iter().all(|r| r.created_at >= NOW - 7 * DAY));
    }

    #[test]
    fn since_with_huge_window_keeps_all() {
        let all = records_since(&sample_records(), NOW, u64::MAX / DAY + 1);
        assert_eq!(all.len(), 4);
    }

    #[test]
    fn by_mode_without_window() {
        let translations = records_by_mode(&sample_records(), StudyMode::Translation, None);
        assert_eq!(translations.len(), 2);
        assert!(translations.iter().all(|r| r.mode == StudyMode::Translation));
        // Newest first
        assert_eq!(translations[0].created_at, NOW - DAY);
    }

    #[test]
    fn by_mode_with_window() {
        let recent =
            records_by_mode(&sample_records(), StudyMode::Translation, Some((NOW, 5)));
        assert_eq!(recent.len(), 1);
        assert_eq!(recent[0].created_at, NOW - DAY);
    }

    #[test]
    fn stats_empty() {
        assert_eq!(stats(&[]), StudyStats::EMPTY);
    }

    #[test]
    fn stats_aggregation() {
        let s = stats(&sample_records());
        assert_eq!(s.count, 4);
        assert_eq!(s.total_seconds, 300 + 1800 + 240 + 120);
        assert_eq!(s.total_points, 7 + 10 + 8);
        assert!((s.average_score - 75.0).abs() < 1e-9);
        assert!((s.average_duration_seconds - 615.0).abs() < 1e-9);
    }

    #[test]
    fn mode_roundtrip() {
        for mode in StudyMode::ALL {
            assert_eq!(StudyMode::from_u8(mode as u8), Some(mode));
        }
        assert_eq!(StudyMode::from_u8(0), None);
        assert_eq!(StudyMode::from_u8(4), None);
    }

    #[test]
    fn mode_labels_nonempty() {
        for mode in StudyMode::ALL {
            assert!(!mode.label().is_empty());
        }
    }
}
