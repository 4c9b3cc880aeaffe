//! Command handlers for unitsheet CLI

pub mod export;
