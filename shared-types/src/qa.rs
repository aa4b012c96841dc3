use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// A curated question/answer pair.
///
/// `keywords` are author-curated and already normalized; they are not derived
/// from `question`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct QaRecord {
    pub id: i64,
    pub question: String,
    pub answer: String,
    pub keywords: Vec<String>,
    pub date: NaiveDate,
}

/// A record that matched a query, with its overlap statistics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct MatchResult {
    #[serde(flatten)]
    pub record: QaRecord,
    pub match_count: usize,
    pub matched_keywords: Vec<String>,
    /// Percentage of query keywords present in the record, two decimals.
    pub relevance_score: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct MatchRequest {
    pub question: String,
    /// Overrides the server's minimum keyword overlap for this request.
    #[serde(default)]
    pub threshold: Option<usize>,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct MatchResponse {
    pub question: String,
    pub keywords: Vec<String>,
    pub matches: Vec<MatchResult>,
}

/// Query string for `GET /api/questions`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct QuestionsQuery {
    /// Case-insensitive substring matched against question, answer and keywords.
    #[serde(default)]
    pub search: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct QuestionsResponse {
    pub questions: Vec<QaRecord>,
}
