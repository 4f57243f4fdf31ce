//! Subcommand implementations.

pub mod compare;
pub mod convert;
pub mod export;
pub mod noise;
