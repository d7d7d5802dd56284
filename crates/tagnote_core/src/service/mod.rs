//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate store mutations, persistence and view derivation.
//! - Keep callers decoupled from slot and storage details.

pub mod notebook_service;
