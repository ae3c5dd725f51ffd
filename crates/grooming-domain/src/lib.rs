//! Grooming price domain
//!
//! Weight-banded service prices, selections and quotes. Everything here is
//! pure: no I/O, no shared state.

pub mod model;
pub mod repository;
pub mod service;
