use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Who authored a message. Anything that is not the client (broker, agent,
/// automated reply) collapses to `Other` and is ignored by scoring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Client,
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub role: Role,
    pub sent_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Debt {
    pub amount: f64,
    pub due_date: DateTime<Utc>,
}

/// A sales lead with their communication and debt history.
/// Messages and debts belong to the client record; there is no
/// ordering guarantee on either collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Client {
    pub id: u64,
    pub name: String,
    pub salary: f64,
    pub savings: f64,
    #[serde(default)]
    pub messages: Vec<Message>,
    #[serde(default)]
    pub debts: Vec<Debt>,
}

impl Client {
    /// Count of client-authored messages (the buyer-interest signal).
    pub fn client_message_count(&self) -> u64 {
        self.messages
            .iter()
            .filter(|m| m.role == Role::Client)
            .count() as u64
    }

    /// Sum of all debt amounts.
    pub fn total_debt(&self) -> f64 {
        self.debts.iter().map(|d| d.amount).sum()
    }

    /// Earliest due date across all debts, i.e. the "oldest debt".
    pub fn oldest_debt_due(&self) -> Option<DateTime<Utc>> {
        self.debts.iter().map(|d| d.due_date).min()
    }

    /// Timestamp of the most recent client-authored message.
    pub fn latest_client_message(&self) -> Option<DateTime<Utc>> {
        self.messages
            .iter()
            .filter(|m| m.role == Role::Client)
            .map(|m| m.sent_at)
            .max()
    }
}
