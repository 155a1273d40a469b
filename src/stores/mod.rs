// Stores layer - Data access and repository pattern
pub mod credential_store;
pub mod product_store;
pub mod review_store;

pub use credential_store::{CredentialStore, VerifiedUser};
pub use product_store::ProductStore;
pub use review_store::{ReviewDraft, ReviewStore, ReviewWithContext, SentimentCount};
