#![deny(missing_debug_implementations)]
#![cfg_attr(test, deny(warnings))]

//! # ecp-core
//!
//! The business logic of the Ecoponto client: use cases working on
//! abstract gateways and repositories.

pub mod entities {
    pub use ecp_entities::{geo::*, id::*, location::*, point::*};
}

pub mod gateways;
pub mod repositories;
pub mod usecases;
