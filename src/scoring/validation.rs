use super::config::LoanTerms;
use crate::clients::Client;
use crate::error::ScoreError;

/// Validate loan terms at startup.
/// Returns all validation errors at once (not just the first).
///
/// These checks guarantee every division the sub-scores perform is
/// well-defined: `upfront` and `ufvalue` must be positive and the credit
/// amount must come out positive.
pub fn validate_terms(terms: &LoanTerms) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    if !terms.price.is_finite() || terms.price <= 0.0 {
        errors.push("loan.price: must be a positive number".to_string());
    }
    if !terms.upfront.is_finite() || terms.upfront <= 0.0 {
        errors.push("loan.upfront: must be a positive number".to_string());
    }
    if terms.price.is_finite() && terms.upfront > 0.0 && terms.price <= terms.upfront {
        errors.push("loan.price: must be greater than loan.upfront".to_string());
    }
    if !terms.interest.is_finite() || terms.interest < 0.0 {
        errors.push("loan.interest: must be a non-negative number".to_string());
    }
    if !terms.ufvalue.is_finite() || terms.ufvalue <= 0.0 {
        errors.push("loan.ufvalue: must be a positive number".to_string());
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Reject a client record before any sub-score runs: salary, savings, and
/// every debt amount must be finite and non-negative.
pub fn validate_client(client: &Client) -> Result<(), ScoreError> {
    if !client.salary.is_finite() || client.salary < 0.0 {
        return Err(ScoreError::InvalidInput(format!(
            "client {}: salary {} is negative or not a number",
            client.id, client.salary
        )));
    }
    if !client.savings.is_finite() || client.savings < 0.0 {
        return Err(ScoreError::InvalidInput(format!(
            "client {}: savings {} is negative or not a number",
            client.id, client.savings
        )));
    }
    for debt in &client.debts {
        if !debt.amount.is_finite() || debt.amount < 0.0 {
            return Err(ScoreError::InvalidInput(format!(
                "client {}: debt amount {} is negative or not a number",
                client.id, debt.amount
            )));
        }
    }
    Ok(())
}
