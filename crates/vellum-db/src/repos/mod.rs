//! Repository modules implementing CRUD operations for Vellum entities.
//!
//! Each module adds methods to `VellumService` via `impl VellumService` blocks.

pub mod contract;
