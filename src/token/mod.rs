//! Token creation, signing, and verification.
//! Used by: handlers, state.

pub mod claims;
pub mod sign;
pub mod verify;
