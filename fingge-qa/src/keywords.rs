use std::collections::HashSet;

/// Upper bound on the number of keywords taken from one piece of text.
pub const MAX_KEYWORDS: usize = 8;

/// Tokens shorter than this are dropped.
pub const MIN_KEYWORD_LEN: usize = 3;

pub const STOP_WORDS: &[&str] = &[
    "how", "what", "why", "when", "where", "which", "the", "a", "an", "in", "on", "at", "to",
    "for", "of", "with", "by", "is", "are", "am", "do", "does", "can", "and", "or", "but", "not",
    "this", "that",
];

pub fn is_stop_word(token: &str) -> bool {
    STOP_WORDS.contains(&token)
}

/// Extract up to [`MAX_KEYWORDS`] distinct keywords from free text.
///
/// The text is lowercased and every character that is neither a word
/// character (alphanumeric or `_`) nor whitespace becomes a separator. A token
/// survives when it is not a stop word, has at least [`MIN_KEYWORD_LEN`]
/// characters and is not purely numeric.
///
/// Keywords come back in first-seen order, so the same text always yields the
/// same list.
pub fn extract_keywords(text: &str) -> Vec<String> {
    let normalized: String = text
        .to_lowercase()
        .chars()
        .map(|c| if is_word_char(c) || c.is_whitespace() { c } else { ' ' })
        .collect();

    let mut seen = HashSet::new();
    let mut keywords = Vec::new();

    for token in normalized.split_whitespace() {
        if keywords.len() == MAX_KEYWORDS {
            break;
        }
        if !is_keyword(token) {
            continue;
        }
        if seen.insert(token) {
            keywords.push(token.to_string());
        }
    }

    keywords
}

/// Lowercase, trim and deduplicate curated keywords, keeping their order.
pub fn normalize_keywords(keywords: &[String]) -> Vec<String> {
    let mut seen = HashSet::new();
    keywords
        .iter()
        .map(|k| k.trim().to_lowercase())
        .filter(|k| !k.is_empty())
        .filter(|k| seen.insert(k.clone()))
        .collect()
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

fn is_keyword(token: &str) -> bool {
    token.chars().count() >= MIN_KEYWORD_LEN
        && !is_stop_word(token)
        // Any Unicode number (digits, fractions, roman numerals) counts.
        && !token.chars().all(char::is_numeric)
}
