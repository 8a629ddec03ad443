//! Transcript app: loads a transcript snapshot and renders it as text.
pub mod platform;
