//! cli/mod.rs
//!
//! The command-line front end:
//! - Parse options (args)
//! - Resolve them into an immutable [`config::RunConfig`] (config)
//! - Run the per-file pipeline and format its output (run, template, context, escape)

pub mod args;
pub mod config;
pub mod context;
pub mod escape;
pub mod run;
pub mod template;
