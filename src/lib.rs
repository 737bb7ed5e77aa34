/// Handles argument parsing and the top-level run workflow.
pub mod cli;

/// Defines custom error types.
pub mod error;

/// Constants shared across the application.
pub mod constants;

/// Package manager detection (yarn probe with npm fallback).
pub mod pm;

/// Template variants and templates-root resolution.
pub mod template;

/// The scaffold request and the three pipeline step bodies.
pub mod scaffold;

/// Ordered fail-stop step execution.
pub mod pipeline;

/// Reading and rewriting the generated project's package.json.
pub mod manifest;

/// Repository initialization and the initial commit.
pub mod git;

/// A set of helpers for working with the file system.
pub mod ioutils;

/// Post-scaffold summary output.
pub mod report;
