pub mod classifier;

pub use classifier::{classify, NEWS_KEYWORDS, PERSONAL_KEYWORDS};
