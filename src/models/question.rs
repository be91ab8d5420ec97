use serde::{Deserialize, Serialize};

/// Difficulty level of a question or test
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

/// Standalone item or a group (shared audio/passage) with sub-items
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum QuestionType {
    #[default]
    Single,
    Group,
}

/// A TOEIC question as served by the API
///
/// Group questions carry their items in `sub_questions`. Nesting is one level
/// deep: a [`SubQuestion`] has no children of its own. Items sent without a
/// `questionType` are standalone.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub id: String,
    #[serde(default)]
    pub test_id: Option<String>,
    /// TOEIC part, 1-7
    #[serde(default)]
    pub part_num: Option<u8>,
    #[serde(default)]
    pub question_type: QuestionType,
    #[serde(default)]
    pub difficulty: Option<Difficulty>,
    #[serde(default)]
    pub topic: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub audio_url: Option<String>,
    #[serde(default)]
    pub transcript: Option<String>,
    #[serde(default)]
    pub answers: Vec<String>,
    #[serde(default)]
    pub correct_answer: Option<String>,
    #[serde(default)]
    pub explanation: Option<String>,
    #[serde(default)]
    pub sub_questions: Vec<SubQuestion>,
}

impl Question {
    pub fn is_group(&self) -> bool {
        self.question_type == QuestionType::Group
    }

    /// Number of answerable items: the sub-items of a group, otherwise one
    pub fn item_count(&self) -> usize {
        if self.is_group() {
            self.sub_questions.len()
        } else {
            1
        }
    }
}

/// Item inside a group question
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubQuestion {
    pub id: String,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub answers: Vec<String>,
    #[serde(default)]
    pub correct_answer: Option<String>,
    #[serde(default)]
    pub explanation: Option<String>,
}
