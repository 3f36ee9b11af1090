//! bakehook is the context-handoff layer of a project scaffolding tool.
//! It serializes the template context into self-describing envelopes and
//! runs pre/post generation hooks that can read and replace that context.

/// Command-line interface module for the bakehook application
pub mod cli;

/// Configuration handling for hook-enabled templates
/// Supports JSON and YAML formats (bakehook.json, bakehook.yml, bakehook.yaml)
pub mod config;

/// Common constants
pub mod constants;

/// Context type and dot-notation access
pub mod context;

/// `type|payload$` envelope framing and extraction
pub mod envelope;

/// Error types and handling for the bakehook application
pub mod error;

/// Helpers for hooks written in Rust
pub mod hook_api;

/// Pre and post generation hook processing
/// Handles execution of scripts in:
/// - hooks/pre_gen_project.*
/// - hooks/post_gen_project.*
pub mod hooks;

/// Logger initialisation for the binary
pub mod logger;

/// Hook script template rendering
pub mod renderer;

/// Serializer registry and envelope facade
pub mod serialization;

/// Context codecs
pub mod serializer;

/// Working directory and file permission helpers
pub mod utils;
