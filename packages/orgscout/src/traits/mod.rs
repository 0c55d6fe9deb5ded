//! Collaborator seams for the discovery pipeline.

pub mod ai;
pub mod fetcher;
pub mod store;

pub use ai::LanguageModel;
pub use fetcher::ContentFetcher;
pub use store::OrganizationStore;
