//! Flatten a C/C++ file and everything it includes locally into a single file.
//!
//! Quoted includes are inlined recursively, angle-bracket includes are
//! deduplicated and hoisted to the top, and per-file `#pragma once` guards are
//! replaced by at most one guard for the whole output.

pub mod config;
pub mod directive;
pub mod emitter;
pub mod error;
pub mod orchestrator;
pub mod resolver;
pub mod types;

pub use config::{Config, GuardPolicy};
pub use error::{AmalgamError, RecursionCause};
pub use orchestrator::Amalgamator;
pub use types::Amalgamation;
