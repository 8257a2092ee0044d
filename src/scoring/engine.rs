use chrono::{DateTime, Utc};

use super::config::LoanTerms;
use super::factors::{
    days_between, debt_day_score, debt_score, message_day_score, message_quantity_score,
    salary_120_score, salary_240_score, upfront_score,
};
use super::validation::validate_client;
use crate::clients::Client;
use crate::error::ScoreError;

/// Everything the aggregator needs, derived once from a client snapshot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreInputs {
    pub message_count: u64,
    pub total_debt: f64,
    pub days_since_oldest_debt: u64,
    pub days_since_latest_message: u64,
    pub salary: f64,
    pub savings: f64,
}

#[derive(Debug, Clone)]
pub struct FactorContribution {
    pub label: &'static str,  // e.g. "Debt age", "Upfront"
    pub description: String,  // e.g. "730 days since oldest due debt"
    pub points: f64,          // Contribution in [0, cap]
    pub cap: f64,
}

#[derive(Debug, Clone)]
pub struct ScoreBreakdown {
    pub factors: Vec<FactorContribution>,
    /// Unrounded sum of the seven contributions.
    pub total: f64,
}

#[derive(Debug, Clone)]
pub struct ScoreResult {
    /// Final integer score in [0, 100].
    pub score: u32,
    pub breakdown: ScoreBreakdown,
}

/// Derive scoring inputs from a client snapshot against an explicit `now`.
///
/// Fails fast before any sub-score runs: negative or non-finite amounts are
/// `InvalidInput`, and a client with no debts or no client-authored messages
/// is `InsufficientData` (the day counts would be undefined).
pub fn derive_inputs(client: &Client, now: DateTime<Utc>) -> Result<ScoreInputs, ScoreError> {
    validate_client(client)?;

    let oldest_due = client
        .oldest_debt_due()
        .ok_or(ScoreError::InsufficientData("client has no debts"))?;
    let latest_message = client
        .latest_client_message()
        .ok_or(ScoreError::InsufficientData(
            "client has no client-authored messages",
        ))?;

    Ok(ScoreInputs {
        message_count: client.client_message_count(),
        total_debt: client.total_debt(),
        days_since_oldest_debt: days_between(now, oldest_due),
        days_since_latest_message: days_between(now, latest_message),
        salary: client.salary,
        savings: client.savings,
    })
}

/// Sum the seven sub-scores and round half away from zero (`f64::round`).
///
/// All contributions are non-negative and the caps sum to 100, so the result
/// is always in [0, 100]. Pure: the same inputs and terms always produce the
/// same integer.
pub fn calculate_score(inputs: &ScoreInputs, terms: &LoanTerms) -> ScoreResult {
    let credit = terms.credit_amount();

    let factors = vec![
        FactorContribution {
            label: "Debt age",
            description: format!("{} days since oldest due debt", inputs.days_since_oldest_debt),
            points: debt_day_score(inputs.days_since_oldest_debt),
            cap: 10.0,
        },
        FactorContribution {
            label: "Last message",
            description: format!(
                "{} days since last client message",
                inputs.days_since_latest_message
            ),
            points: message_day_score(inputs.days_since_latest_message),
            cap: 10.0,
        },
        FactorContribution {
            label: "Messages",
            description: format!("{} client messages", inputs.message_count),
            points: message_quantity_score(inputs.message_count),
            cap: 10.0,
        },
        FactorContribution {
            label: "Upfront",
            description: format!(
                "savings {:.0} vs required {:.0}",
                inputs.savings,
                1.2 * terms.upfront * terms.ufvalue
            ),
            points: upfront_score(inputs.savings, terms.upfront, terms.ufvalue),
            cap: 20.0,
        },
        FactorContribution {
            label: "Debt load",
            description: format!(
                "debt {:.0} vs salary {:.0}",
                inputs.total_debt, inputs.salary
            ),
            points: debt_score(inputs.salary, inputs.total_debt),
            cap: 10.0,
        },
        FactorContribution {
            label: "120 installments",
            description: format!("credit {:.0} over 10 years", credit),
            points: salary_120_score(inputs.salary, credit),
            cap: 25.0,
        },
        FactorContribution {
            label: "240 installments",
            description: format!("credit {:.0} over 20 years", credit),
            points: salary_240_score(inputs.salary, credit),
            cap: 15.0,
        },
    ];

    let total: f64 = factors.iter().map(|f| f.points).sum();

    ScoreResult {
        score: total.round() as u32,
        breakdown: ScoreBreakdown { factors, total },
    }
}

/// Derive and aggregate in one step.
pub fn score_client(
    client: &Client,
    terms: &LoanTerms,
    now: DateTime<Utc>,
) -> Result<ScoreResult, ScoreError> {
    let inputs = derive_inputs(client, now)?;
    Ok(calculate_score(&inputs, terms))
}
