//! Arogya: a rule-based health information assistant.
//!
//! The core is [`engine::ResponseEngine`] — keyword classification and
//! deterministic template rendering over a static knowledge base, with
//! English / Hindi / Hinglish output and an emergency short-circuit —
//! plus a lab-report interpreter over a simplified marker reference.
//! Chat history ([`chat`]) and optional integrations ([`capability`])
//! sit outside the engine; it has no dependency on them.

pub mod capability;
pub mod chat;
pub mod config;
pub mod engine;

pub use engine::{Language, ResponseEngine};
