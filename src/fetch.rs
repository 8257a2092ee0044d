use chrono::Utc;

use crate::clients::{Client, ClientStore};
use crate::error::ScoreError;
use crate::scoring::{score_client, LoanTerms, ScoreResult};

/// Fetch one client from the store and score the snapshot.
///
/// Store failures and scoring failures pass through unchanged; there is no
/// retry, caching, or partial result.
pub async fn fetch_and_score(
    store: &ClientStore,
    id: u64,
    terms: &LoanTerms,
) -> Result<(Client, ScoreResult), ScoreError> {
    let client = store.fetch_client(id).await?;
    let result = score_client(&client, terms, Utc::now())?;
    Ok((client, result))
}

/// Score every client in the store for the ranked list.
///
/// Clients that cannot be scored (no debts, no messages, bad amounts) are
/// skipped with a warning rather than failing the whole listing; a store
/// failure still aborts. The returned list is sorted by score descending,
/// name ascending for ties.
pub async fn fetch_and_score_all(
    store: &ClientStore,
    terms: &LoanTerms,
    verbose: bool,
) -> Result<Vec<(Client, ScoreResult)>, ScoreError> {
    let clients = store.fetch_all().await?;
    let now = Utc::now();

    let mut scored = Vec::with_capacity(clients.len());
    for client in clients {
        match score_client(&client, terms, now) {
            Ok(result) => scored.push((client, result)),
            Err(e) => {
                if verbose {
                    eprintln!("Skipping {} (#{}): {}", client.name, client.id, e);
                }
            }
        }
    }

    scored.sort_by(|a, b| {
        b.1.score
            .cmp(&a.1.score)
            .then_with(|| a.0.name.cmp(&b.0.name))
    });

    Ok(scored)
}
