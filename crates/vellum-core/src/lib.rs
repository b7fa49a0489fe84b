//! # vellum-core
//!
//! Core domain types for Vellum.
//!
//! This crate provides the foundational types shared across all Vellum crates:
//! - The `Contract` entity struct
//! - Payment cadence and renewal enums
//! - ID prefix constants
//! - Money rounding helpers

pub mod entities;
pub mod enums;
pub mod ids;
pub mod money;
