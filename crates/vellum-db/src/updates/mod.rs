//! Update builders for partial entity mutations.

pub mod contract;
