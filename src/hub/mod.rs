//! Hugging Face Hub HTTP surface
//!
//! Everything that talks to the Hub REST API: token resolution, repo
//! discussion listing, model search, and the create-pull-request file
//! upload. The rest of the crate consumes these through narrow traits so
//! tests never touch the network.

pub mod auth;
pub mod client;
pub mod error;

pub use auth::resolve_token;
pub use client::{Discussion, HubClient, ModelSummary};
pub use error::HubError;
