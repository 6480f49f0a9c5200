//! HTTP handler modules.
//! Used by: server.

pub mod health;
pub mod protected;
pub mod token;
