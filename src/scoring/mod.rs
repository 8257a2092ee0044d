pub mod config;
pub mod engine;
pub mod factors;
pub mod validation;

pub use config::LoanTerms;
pub use engine::{calculate_score, derive_inputs, score_client, ScoreInputs, ScoreResult};
pub use validation::validate_terms;
