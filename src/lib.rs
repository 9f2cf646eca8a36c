//! Car Quiz - Recommendation Service
//!
//! This crate serves a short car quiz and turns the answers into a vehicle
//! model recommendation that is always drawn from a known catalog.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
