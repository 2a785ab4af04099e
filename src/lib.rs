//! Fridge Chef - A Discord bot that designs recipes from leftover ingredients
//!
//! This crate exposes a single `/cook` slash command: it collects ingredients,
//! cuisine style, cooking method and dietary restrictions, asks the Gemini API for
//! a recipe, and replies with the result as Discord embeds.

// Deny the most critical lints that could lead to bugs or security issues
#![deny(
    // Security and correctness
    unsafe_code,
    unsafe_op_in_unsafe_fn,

    // Code quality - things that are almost always bugs
    unreachable_code,
    unreachable_patterns,
    unused_must_use,

    // Documentation - broken links are bugs
    rustdoc::broken_intra_doc_links,
    rustdoc::private_intra_doc_links,
)]
// Warn on things that should be fixed but aren't necessarily bugs
#![warn(
    // Documentation
    missing_docs,

    // Clippy categories for overall code quality
    clippy::all,
    clippy::pedantic,
    clippy::nursery,

    // Performance
    clippy::inefficient_to_string,
    clippy::large_types_passed_by_value,
    clippy::needless_pass_by_value,
    clippy::unnecessary_wraps,

    // Correctness
    clippy::clone_on_ref_ptr,
    clippy::dbg_macro,
    clippy::exit,
    clippy::expect_used,
    clippy::float_cmp,
    clippy::panic,
    clippy::todo,
    clippy::unimplemented,
    clippy::unwrap_used,

    // Complexity and readability
    clippy::cognitive_complexity,
    clippy::large_enum_variant,
    clippy::match_same_arms,
    clippy::too_many_lines,

    // Style consistency
    clippy::enum_glob_use,
    clippy::inconsistent_struct_constructor,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::redundant_closure_for_method_calls,
    clippy::semicolon_if_nothing_returned,
    clippy::wildcard_imports,

    // Future compatibility
    future_incompatible,
    rust_2018_idioms,
)]
// `CookRequest` in `core::request`, `RecipeClient` in `core::client`, ...
#![allow(clippy::module_name_repetitions)]

// `missing_docs` stays a warning: `poise::command` generates undocumented items,
// which the command modules silence locally.

/// Discord bot interface - commands, reply delivery, and bot context
pub mod bot;
/// Configuration management for secrets, generation settings and the keep-alive port
pub mod config;
/// Core business logic - framework-agnostic prompt, generation and formatting pipeline
pub mod core;
/// Unified error types and result handling
pub mod errors;
/// Keep-alive HTTP endpoint for hosting platform port checks
pub mod keepalive;

#[cfg(test)]
pub mod test_utils;
