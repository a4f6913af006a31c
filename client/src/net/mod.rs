//! Networking modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` carries the three account mutations to the GraphQL endpoint. The
//! wire schema itself lives in the `account` crate.

pub mod api;
