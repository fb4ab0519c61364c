//! Chat advisor proxy: validates chat requests and relays them to an
//! OpenAI-compatible completion API configured through the environment.

mod error;
pub mod request;
pub mod router;
pub mod upstream;

#[cfg(test)]
mod tests;

pub use error::AdvisorError;
pub use request::{ChatProxyRequest, CompletionRequest, MAX_MESSAGES_LENGTH};
pub use router::advisor_router;
pub use upstream::{CompletionUpstream, HttpCompletionUpstream};
