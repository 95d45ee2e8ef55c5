//! # ziwei-core
//!
//! Core chart model, vocabularies, and error types for the Zi Wei report engine.
//!
//! This crate provides the foundational types shared across all ziwei crates:
//! - Chart, palace, and marker entities with structural validation
//! - Category enums (palaces with spelling aliases, seasons, archetypes, role groups)
//! - Cross-cutting error types
//! - Report output types

pub mod entities;
pub mod enums;
pub mod errors;
pub mod responses;
