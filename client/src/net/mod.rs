//! Networking for the case service.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` implements the `board::Remote` contract over `gloo-net`; pages reach
//! it through the shared `BoardSync` handle provided by the app root.

pub mod api;
