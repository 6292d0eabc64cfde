//! Chat backend API
//!
//! One JSON exchange per turn:
//!
//! ```text
//! POST {base}/chat   {"query": "...", "session_id": "..."}
//! 200 OK             {"response": "..."}
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use legaltalk::api::{ChatBackend, ChatRequest, HttpChatBackend};
//! use legaltalk::config::AppConfig;
//!
//! # async fn example() -> Result<(), legaltalk::api::ChatError> {
//! let backend = HttpChatBackend::new(&AppConfig::from_env());
//! let reply = backend
//!     .send(&ChatRequest::new("Thủ tục cấp giấy phép hành nghề?", "session-1"))
//!     .await?;
//! # Ok(())
//! # }
//! ```
mod client;

pub use client::{ChatBackend, ChatError, ChatRequest, ChatResponse, ChatResult, HttpChatBackend};
