pub mod domain;
pub mod error;
pub mod knowledge;
pub mod phone;

pub use domain::*;
pub use error::{CoreError, NormalizeError};
pub use knowledge::{builtin, KnowledgeBase, KnowledgeBaseBuilder};
pub use phone::{
    extract_digits, format_e164, normalize_domestic, normalize_to_e164, parse_international,
    try_normalize_to_e164, Normalizer, LOCAL_NUMBER_MAX_LEN,
};
