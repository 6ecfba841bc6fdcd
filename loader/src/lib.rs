//! Maven repository resolver and CLI plumbing for `jarstrap`.
//!
//! This crate supplies the concrete [`ArtifactResolver`](jarstrap::ArtifactResolver)
//! that fetches artifacts over HTTP into a local repository, and the command
//! orchestration behind the `jarstrap` binary.
//!
//! # Modules
//!
//! - [`cli`] - Command-line argument definitions
//! - [`dirs`] - Platform directory resolution
//! - [`download`] - HTTP transfer of artifact files
//! - [`error`] - CLI error types
//! - [`layout`] - Maven 2 repository layout
//! - [`maven`] - Local repository and Maven resolver
//! - [`output`] - Output formatting
//! - [`run`] - Command orchestration

pub mod cli;
pub mod dirs;
pub mod download;
pub mod error;
pub mod layout;
pub mod maven;
pub mod output;
pub mod run;
