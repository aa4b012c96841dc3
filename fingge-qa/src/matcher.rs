use shared_types::{MatchResult, QaRecord};

/// Minimum keyword overlap a record needs to count as a match.
pub const DEFAULT_THRESHOLD: usize = 2;

/// Score every record against the query keywords and return the matches,
/// best first.
///
/// A record matches when at least `threshold` query keywords appear in its
/// curated keyword list. Its relevance is the share of query keywords it
/// covers, as a percentage rounded to two decimals. Records with equal scores
/// keep their collection order. An empty keyword list matches nothing.
pub fn find_matches(records: &[QaRecord], keywords: &[String], threshold: usize) -> Vec<MatchResult> {
    if keywords.is_empty() {
        return Vec::new();
    }

    let mut matches: Vec<MatchResult> = records
        .iter()
        .filter_map(|record| score_record(record, keywords, threshold))
        .collect();

    // sort_by is stable
    matches.sort_by(|a, b| b.relevance_score.total_cmp(&a.relevance_score));
    matches
}

fn score_record(record: &QaRecord, keywords: &[String], threshold: usize) -> Option<MatchResult> {
    let matched_keywords: Vec<String> = keywords
        .iter()
        .filter(|k| record.keywords.contains(*k))
        .cloned()
        .collect();

    let match_count = matched_keywords.len();
    if match_count < threshold {
        return None;
    }

    Some(MatchResult {
        record: record.clone(),
        match_count,
        matched_keywords,
        relevance_score: relevance_score(match_count, keywords.len()),
    })
}

/// `100 * matched / total`, rounded to two decimals. Zero when `total` is zero.
pub fn relevance_score(matched: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    let score = matched as f64 / total as f64 * 100.0;
    (score * 100.0).round() / 100.0
}
