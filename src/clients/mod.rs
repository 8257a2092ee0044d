pub mod store;
pub mod types;

pub use store::ClientStore;
pub use types::{Client, Debt, Message, Role};
