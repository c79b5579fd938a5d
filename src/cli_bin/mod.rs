//! Command-line front end for the `jsonpeek` binary

pub mod args;
pub mod commands;
