pub mod analytics;
pub mod extractor;
pub mod lexicon;
pub mod pipeline;
pub mod translator;
