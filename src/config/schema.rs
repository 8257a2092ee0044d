use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::scoring::LoanTerms;

#[derive(Debug, Deserialize, Serialize)]
pub struct Config {
    /// The loan every client is scored against.
    pub loan: LoanTerms,

    /// Where the client book lives. Defaults to clients.yaml next to the
    /// config file.
    #[serde(default)]
    pub clients_file: Option<PathBuf>,
}
