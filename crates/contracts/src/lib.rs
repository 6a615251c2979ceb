//! Shared types between the POS frontend and the sales server.
//!
//! Nothing in this crate touches the browser: every type here can be built
//! and tested on the host.

pub mod domain;
pub mod shared;
