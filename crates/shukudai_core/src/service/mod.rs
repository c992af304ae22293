//! Use-case services consumed by UI collaborators.
//!
//! # Responsibility
//! - Orchestrate repository calls into the surface a dashboard renders.
//! - Keep UI layers decoupled from store and column details.

pub mod homework_service;
