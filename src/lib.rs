//! quoteboard: single-instrument market data dashboard.
//!
//! Hexagonal architecture: the pure pipeline lives in [`domain`], port traits
//! in [`ports`], document sources and renderers in [`adapters`].

pub mod adapters;
pub mod cli;
pub mod domain;
pub mod ports;
