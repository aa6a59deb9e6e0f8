//! Built-in transformers

mod cleaner;
mod links;
mod threads;

pub use cleaner::ContentCleaner;
pub use links::LinkExtractor;
pub use threads::ThreadTransformer;
