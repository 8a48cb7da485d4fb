//! Point awards for graded practice sessions.
//!
//! Grading (done by an external tutor model) produces scores in 0–100;
//! these functions turn scores into wallet points. Awards are deliberately
//! small relative to the 10,000-point ceiling: a perfect translation
//! attempt is worth 11 points, a perfect half-hour conversation 11 as well.

use serde::{Deserialize, Serialize};

/// Highest score a graded session can receive.
pub const MAX_SCORE: u32 = 100;

/// Award-formula constants.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AwardConfig {
    /// Combined translation + pronunciation score is divided by this.
    pub translation_divisor: u32,
    /// Conversation score is divided by this.
    pub conversation_score_divisor: u32,
    /// One bonus point per this many seconds of conversation.
    pub conversation_bonus_interval_secs: u32,
}

impl Default for AwardConfig {
    fn default() -> Self {
        Self {
            translation_divisor: 18,
            conversation_score_divisor: 10,
            conversation_bonus_interval_secs: 1800,
        }
    }
}

/// Clamp a raw grading score into the valid `[0, 100]` range. Grading
/// feedback arrives from outside the process, so out-of-range values
/// (including negatives used as failure sentinels upstream) are squashed
/// here rather than trusted.
pub fn clamp_score(raw: i64) -> u32 {
    raw.clamp(0, MAX_SCORE as i64) as u32
}

/// Points for a translation challenge attempt: written translation score
/// plus pronunciation score, divided down.
pub fn translation_award(
    translation_score: u32,
    pronunciation_score: u32,
    config: &AwardConfig,
) -> u32 {
    let combined =
        translation_score.min(MAX_SCORE) + pronunciation_score.min(MAX_SCORE);
    combined / config.translation_divisor.max(1)
}

/// Points for a free-form tutor conversation: score component plus a bonus
/// per half hour of session time.
pub fn conversation_award(score: u32, duration_seconds: u32, config: &AwardConfig) -> u32 {
    score.min(MAX_SCORE) / config.conversation_score_divisor.max(1)
        + duration_seconds / config.conversation_bonus_interval_secs.max(1)
}
