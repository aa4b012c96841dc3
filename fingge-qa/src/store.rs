use crate::error::QaError;
use crate::keywords::{extract_keywords, normalize_keywords};
use crate::matcher::find_matches;
use chrono::NaiveDate;
use shared_types::{MatchResult, QaRecord};
use std::collections::HashSet;
use std::path::Path;
use tracing::{debug, info};

/// Read-only snapshot of the Q&A collection.
///
/// Built once at startup and shared between request handlers; there is no
/// mutation path, so no locking is needed.
#[derive(Debug, Clone)]
pub struct QaStore {
    records: Vec<QaRecord>,
}

impl QaStore {
    /// Validate and normalize records. Ids must be unique and every record
    /// needs at least one keyword.
    pub fn from_records(records: Vec<QaRecord>) -> Result<Self, QaError> {
        let mut ids = HashSet::new();
        let mut normalized = Vec::with_capacity(records.len());

        for mut record in records {
            if !ids.insert(record.id) {
                return Err(QaError::DuplicateId(record.id));
            }
            record.keywords = normalize_keywords(&record.keywords);
            if record.keywords.is_empty() {
                return Err(QaError::NoKeywords(record.id));
            }
            normalized.push(record);
        }

        Ok(Self {
            records: normalized,
        })
    }

    /// Load records from a JSON array of question objects.
    pub fn load_from_file(path: &Path) -> Result<Self, QaError> {
        let data = std::fs::read_to_string(path).map_err(|source| QaError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let records: Vec<QaRecord> = serde_json::from_str(&data)?;
        let store = Self::from_records(records)?;
        info!(path = %path.display(), count = store.len(), "Loaded Q&A seed file");
        Ok(store)
    }

    /// The built-in collection used when no seed file is configured.
    pub fn seed() -> Self {
        Self {
            records: vec![
                QaRecord {
                    id: 1,
                    question: "How to fix 'list index out of range' error in Python?".to_string(),
                    answer: "This error occurs when you try to access an index that doesn't exist in the list. Always check the length of the list before accessing elements: if index < len(my_list): value = my_list[index]".to_string(),
                    keywords: to_strings(&["list", "index", "range", "error", "python", "fix"]),
                    date: seed_date(2023, 10, 15),
                },
                QaRecord {
                    id: 2,
                    question: "What's the difference between lists and tuples?".to_string(),
                    answer: "Lists are mutable (can be changed) while tuples are immutable (cannot be changed). Lists use square brackets [], tuples use parentheses (). Use tuples for fixed data and lists for data that needs to be modified.".to_string(),
                    keywords: to_strings(&["list", "tuple", "difference", "python", "mutable", "immutable"]),
                    date: seed_date(2023, 10, 10),
                },
            ],
        }
    }

    pub fn records(&self) -> &[QaRecord] {
        &self.records
    }

    pub fn get(&self, id: i64) -> Option<&QaRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records whose question, answer or keywords contain `term`, ignoring
    /// case. A blank term matches everything.
    pub fn search(&self, term: &str) -> Vec<&QaRecord> {
        let term = term.trim().to_lowercase();
        if term.is_empty() {
            return self.records.iter().collect();
        }
        self.records
            .iter()
            .filter(|r| {
                r.question.to_lowercase().contains(&term)
                    || r.answer.to_lowercase().contains(&term)
                    || r.keywords.iter().any(|k| k.contains(&term))
            })
            .collect()
    }

    /// Extract keywords from `question` and match them against the collection.
    pub fn match_question(&self, question: &str, threshold: usize) -> (Vec<String>, Vec<MatchResult>) {
        let keywords = extract_keywords(question);
        if keywords.is_empty() {
            debug!("No keywords extracted, skipping match");
            return (keywords, Vec::new());
        }
        let matches = find_matches(&self.records, &keywords, threshold);
        debug!(
            keywords = ?keywords,
            threshold,
            matches = matches.len(),
            "Matched question against collection"
        );
        (keywords, matches)
    }
}

fn to_strings(words: &[&str]) -> Vec<String> {
    words.iter().map(|w| w.to_string()).collect()
}

fn seed_date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn record(id: i64, keywords: &[&str]) -> QaRecord {
        QaRecord {
            id,
            question: format!("question {id}"),
            answer: format!("answer {id}"),
            keywords: to_strings(keywords),
            date: NaiveDate::from_ymd_opt(2023, 10, 1).unwrap(),
        }
    }

    #[test]
    fn test_seed_contents() {
        let store = QaStore::seed();
        assert_eq!(store.len(), 2);
        assert_eq!(store.get(1).unwrap().keywords.len(), 6);
        assert_eq!(
            store.get(2).unwrap().date,
            NaiveDate::from_ymd_opt(2023, 10, 10).unwrap()
        );
        assert!(store.get(3).is_none());
    }

    #[test]
    fn test_search_filters_by_substring() {
        let store = QaStore::seed();

        let ids = |term: &str| store.search(term).iter().map(|r| r.id).collect::<Vec<_>>();

        assert_eq!(ids("tuple"), vec![2]);
        assert_eq!(ids("TUPLE"), vec![2]);
        // "len(my_list)" only appears in the answer of record 1.
        assert_eq!(ids("len(my"), vec![1]);
        assert_eq!(ids("immut"), vec![2]);
        assert_eq!(ids("python"), vec![1, 2]);
        assert_eq!(ids("  "), vec![1, 2]);
        assert!(ids("javascript").is_empty());
    }

    #[test]
    fn test_search_matches_keywords() {
        let store = QaStore::from_records(vec![
            record(1, &["borrow", "checker"]),
            record(2, &["async", "tokio"]),
        ])
        .unwrap();

        let hits = store.search("Tok");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, 2);
    }

    #[test]
    fn test_from_records_rejects_duplicate_ids() {
        let result = QaStore::from_records(vec![record(1, &["alpha"]), record(1, &["beta"])]);
        assert!(matches!(result, Err(QaError::DuplicateId(1))));
    }

    #[test]
    fn test_from_records_rejects_empty_keywords() {
        let result = QaStore::from_records(vec![record(4, &["  ", ""])]);
        assert!(matches!(result, Err(QaError::NoKeywords(4))));
    }

    #[test]
    fn test_from_records_normalizes_keywords() {
        let store = QaStore::from_records(vec![record(1, &["Python", " python", "LIST"])]).unwrap();
        assert_eq!(store.get(1).unwrap().keywords, vec!["python", "list"]);
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[
                {{"id": 3, "question": "How to read a file in Python?", "answer": "Use open().",
                  "keywords": ["file", "read", "python", "open", "function"], "date": "2023-10-05"}},
                {{"id": 5, "question": "What is a lambda function in Python?", "answer": "lambda x: x",
                  "keywords": ["lambda", "function", "anonymous", "python"], "date": "2023-10-01"}}
            ]"#
        )
        .unwrap();

        let store = QaStore::load_from_file(file.path()).unwrap();
        assert_eq!(store.len(), 2);
        assert_eq!(store.get(5).unwrap().keywords[0], "lambda");

        let (keywords, matches) = store.match_question("How do I read a file with Python?", 2);
        assert_eq!(keywords, vec!["read", "file", "python"]);
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].record.id, 3);
        assert_eq!(matches[0].relevance_score, 100.0);
    }

    #[test]
    fn test_load_from_missing_file() {
        let result = QaStore::load_from_file(Path::new("/nonexistent/fingge/seed.json"));
        assert!(matches!(result, Err(QaError::Io { .. })));
    }

    #[test]
    fn test_load_from_malformed_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"[{{"id": 1, "question": "missing fields"}}]"#).unwrap();
        let result = QaStore::load_from_file(file.path());
        assert!(matches!(result, Err(QaError::Parse(_))));
    }

    #[test]
    fn test_match_question_without_keywords() {
        let store = QaStore::seed();
        let (keywords, matches) = store.match_question("a an the", 2);
        assert!(keywords.is_empty());
        assert!(matches.is_empty());
    }
}
