//! Utility helpers shared across UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate routing rules, chart math and browser timing from
//! page and component code to improve reuse and testability.

pub mod auth;
pub mod chart;
pub mod latency;
