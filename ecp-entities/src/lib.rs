//#![deny(missing_docs)] // TODO: Complete missing documentation and enable this option
#![deny(missing_debug_implementations)]
#![cfg_attr(test, deny(warnings))]

//! # ecp-entities
//!
//! Reusable, agnostic domain entities for Ecoponto.
//!
//! The entities only contain generic functionality that does not reveal any application-specific business logic.

pub mod geo;
pub mod id;
pub mod location;
pub mod point;

#[cfg(any(test, feature = "builders"))]
pub mod builders;
