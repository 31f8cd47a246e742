//! qabot-client: talks to the Q&A server's `/ask` endpoint.
//!
//! One JSON request, one JSON response. The [AskClient] trait is the seam the
//! TUI controller depends on; [HttpAskClient] is the reqwest implementation.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use qabot_client::{AskClient, ClientConfig, HttpAskClient};
//! use qabot_core::AskRequest;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = HttpAskClient::new(ClientConfig::from_env()?)?;
//!     let reply = client.ask(AskRequest::new("What is in the handbook?")).await?;
//!     println!("{}", reply.answer);
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod config;
pub mod error;

pub use client::{AskClient, HttpAskClient};
pub use config::ClientConfig;
pub use error::{AskError, Result};
