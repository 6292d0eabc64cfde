//! Chat transcript state and markdown rendering for bot replies.

pub mod markdown;
mod session;

pub use markdown::markdown_to_html;
pub use session::{ChatSession, FALLBACK_REPLY, GREETING};
