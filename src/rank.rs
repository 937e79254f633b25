use crate::stackexchange::types::SearchItem;

/// Number of ranked questions kept for rendering.
pub const TOP_QUESTIONS: usize = 3;

/// A search result reduced to the fields the widget renders.
#[derive(Debug, Clone)]
pub struct Question {
    pub id: u64,
    pub title: String,
    pub body: String,
    pub link: String,
    pub upvotes: i64,
    pub answer_count: u32,
    pub comment_count: u32,
    pub created: i64,
    pub last_edited: Option<i64>,
}

impl From<SearchItem> for Question {
    fn from(item: SearchItem) -> Self {
        Self {
            id: item.question_id,
            title: item.title,
            body: item.body,
            link: item.link,
            upvotes: item.score,
            answer_count: item.answer_count,
            comment_count: item.comment_count,
            created: item.creation_date,
            last_edited: item.last_edit_date,
        }
    }
}

/// Rank search results by engagement and keep the top three.
///
/// Upvotes dominate, then answer count, then comment count. The sort is
/// stable, so full ties keep the API's relevance order.
pub fn select_top(items: Vec<SearchItem>) -> Vec<Question> {
    let mut questions: Vec<Question> = items.into_iter().map(Question::from).collect();
    questions.sort_by(|a, b| {
        b.upvotes
            .cmp(&a.upvotes)
            .then(b.answer_count.cmp(&a.answer_count))
            .then(b.comment_count.cmp(&a.comment_count))
    });
    questions.truncate(TOP_QUESTIONS);
    questions
}
