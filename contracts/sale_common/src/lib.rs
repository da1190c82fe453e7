#![no_std]

//! Pieces shared by every contract taking part in a sale: the error
//! vocabulary, owner/role bookkeeping, checked arithmetic, the sale
//! configuration and the client traits used for cross-contract calls.

pub mod errors;
pub mod interfaces;
pub mod math;
pub mod roles;
pub mod sale;

pub use errors::Error;
pub use roles::Role;
