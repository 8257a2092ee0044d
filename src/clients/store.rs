use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::types::Client;
use crate::error::ScoreError;

/// On-disk shape of the client book.
#[derive(Debug, Serialize, Deserialize)]
struct ClientBook {
    #[serde(default)]
    clients: Vec<Client>,
}

/// File-backed client data provider.
///
/// Each fetch re-reads the file, so a scoring request always sees a fresh
/// snapshot of the record. The store gives no ordering guarantee on a
/// client's messages or debts; the engine derives what it needs itself.
pub struct ClientStore {
    path: PathBuf,
}

impl ClientStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    async fn read_book(&self) -> Result<ClientBook, anyhow::Error> {
        let content = tokio::fs::read_to_string(&self.path)
            .await
            .with_context(|| format!("Failed to read client file at {}", self.path.display()))?;

        serde_saphyr::from_str(&content).with_context(|| {
            format!("Failed to parse clients: invalid YAML in {}", self.path.display())
        })
    }

    /// Fetch a single client record, or `ClientNotFound`.
    pub async fn fetch_client(&self, id: u64) -> Result<Client, ScoreError> {
        let book = self.read_book().await?;
        book.clients
            .into_iter()
            .find(|c| c.id == id)
            .ok_or(ScoreError::ClientNotFound(id))
    }

    /// Fetch every client record in the book.
    pub async fn fetch_all(&self) -> Result<Vec<Client>, ScoreError> {
        Ok(self.read_book().await?.clients)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const BOOK: &str = r#"
clients:
  - id: 1
    name: Maria Rojas
    salary: 2000000
    savings: 30000000
    messages:
      - role: client
        sent_at: "2026-08-20T14:00:00Z"
    debts:
      - amount: 1000000
        due_date: "2024-09-01T00:00:00Z"
  - id: 2
    name: Pedro Soto
    salary: 1500000
    savings: 5000000
"#;

    // Tests run in parallel, so each writes its own file.
    fn write_book(tag: &str, content: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!(
            "lead-score-store-test-{}-{}.yaml",
            std::process::id(),
            tag
        ));
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(content.as_bytes()).unwrap();
        path
    }

    #[tokio::test]
    async fn test_fetch_client_by_id() {
        let path = write_book("by-id", BOOK);
        let store = ClientStore::new(path.clone());
        let client = store.fetch_client(1).await.unwrap();
        assert_eq!(client.name, "Maria Rojas");
        assert_eq!(client.messages.len(), 1);
        assert_eq!(client.debts.len(), 1);
        std::fs::remove_file(path).ok();
    }

    #[tokio::test]
    async fn test_fetch_missing_client_is_not_found() {
        let path = write_book("not-found", BOOK);
        let store = ClientStore::new(path.clone());
        let err = store.fetch_client(99).await.unwrap_err();
        assert!(matches!(err, ScoreError::ClientNotFound(99)));
        std::fs::remove_file(path).ok();
    }

    #[tokio::test]
    async fn test_missing_collections_default_to_empty() {
        let path = write_book("defaults", BOOK);
        let store = ClientStore::new(path.clone());
        let client = store.fetch_client(2).await.unwrap();
        assert!(client.messages.is_empty());
        assert!(client.debts.is_empty());
        std::fs::remove_file(path).ok();
    }

    #[tokio::test]
    async fn test_fetch_all_returns_every_client() {
        let path = write_book("all", BOOK);
        let store = ClientStore::new(path.clone());
        let clients = store.fetch_all().await.unwrap();
        assert_eq!(clients.len(), 2);
        std::fs::remove_file(path).ok();
    }

    #[tokio::test]
    async fn test_missing_file_is_store_error() {
        let store = ClientStore::new(PathBuf::from("/nonexistent/clients.yaml"));
        let err = store.fetch_client(1).await.unwrap_err();
        assert!(matches!(err, ScoreError::Store(_)));
    }
}
