//! Domain layer - Core identification logic
//!
//! Entities describing file types and the rules that recognize them, and the services
//! that evaluate those rules against names and byte streams.

pub mod entities;
pub mod services;
