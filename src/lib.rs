//! LegalTalk
//!
//! Client for a Vietnamese public-health legal assistant: landing page,
//! themed navigation, particle background, and a chat view that talks to the
//! LegalTalk backend over a single JSON endpoint.

pub mod api;
pub mod chat;
pub mod config;
pub mod particles;
pub mod storage;
pub mod theme;
pub mod types;

#[cfg(feature = "dioxus")]
pub mod ui;
#[cfg(feature = "dioxus")]
pub mod views;
