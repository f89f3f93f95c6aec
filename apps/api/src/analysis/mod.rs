pub mod classifier;
pub mod handlers;
pub mod matching;
pub mod recommendations;
mod stop_words;
pub mod tfidf;
