use serde::Deserialize;

/// `/search/advanced` response envelope. A missing or empty `items` array is
/// a valid "no results" outcome, not an error.
#[derive(Debug, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub items: Vec<SearchItem>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SearchItem {
    pub title: String,
    pub body: String,
    pub link: String,
    pub score: i64,
    pub answer_count: u32,
    #[serde(default)]
    pub comment_count: u32,
    pub creation_date: i64,
    pub last_edit_date: Option<i64>,
    pub question_id: u64,
}

/// `/questions/{id}/answers` response envelope, same `items` tolerance.
#[derive(Debug, Deserialize)]
pub struct AnswersResponse {
    #[serde(default)]
    pub items: Vec<Answer>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Answer {
    pub body: String,
    pub score: i64,
    pub owner: AnswerOwner,
    pub is_accepted: bool,
    pub answer_id: u64,
    pub creation_date: i64,
}

/// Deleted users have no reputation field.
#[derive(Debug, Clone, Deserialize)]
pub struct AnswerOwner {
    #[serde(default)]
    pub reputation: i64,
}
