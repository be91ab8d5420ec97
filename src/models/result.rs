use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Outcome of one test attempt
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestResult {
    pub id: String,
    pub user_id: String,
    pub test_id: String,
    /// Total scaled score
    pub score: u32,
    #[serde(default)]
    pub listening_score: Option<u32>,
    #[serde(default)]
    pub reading_score: Option<u32>,
    #[serde(default)]
    pub correct_count: u32,
    #[serde(default)]
    pub total_questions: u32,
    #[serde(default)]
    pub duration_seconds: Option<u32>,
    #[serde(default)]
    pub completed_at: Option<DateTime<Utc>>,
}

impl TestResult {
    /// Share of correct answers in 0.0..=1.0
    ///
    /// Server counts are not cross-checked, so a `correct_count` above
    /// `total_questions` is capped at 1.0.
    pub fn accuracy(&self) -> f64 {
        if self.total_questions == 0 {
            return 0.0;
        }
        (f64::from(self.correct_count) / f64::from(self.total_questions)).min(1.0)
    }
}

/// Public view of a user, as listed by the user endpoints
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSummary {
    pub id: String,
    pub email: String,
    #[serde(default)]
    pub avatar: Option<String>,
    pub role: String,
    #[serde(default)]
    pub target: u32,
}
