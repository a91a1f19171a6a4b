//! CLI command definitions.

pub mod call;
pub mod info;
pub mod read;
pub mod serve;
pub mod tools;
