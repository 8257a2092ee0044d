pub mod clients;
pub mod config;
pub mod error;
pub mod fetch;
pub mod output;
pub mod scoring;

pub use error::ScoreError;
