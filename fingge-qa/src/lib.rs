pub mod error;
pub mod keywords;
pub mod matcher;
pub mod store;

pub use error::QaError;
pub use keywords::{extract_keywords, MAX_KEYWORDS};
pub use matcher::{find_matches, DEFAULT_THRESHOLD};
pub use store::QaStore;
