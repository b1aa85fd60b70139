//! Windows-folder linking engine for WSL.
//!
//! `winlink` creates symbolic links from well-known Windows personal folders
//! (Documents, Downloads, Pictures, …) into a WSL-side git repository, so the
//! repository can track references to those folders without copying their
//! contents.
//!
//! The public API is organised into four layers:
//!
//! - **[`config`]** — caller-supplied inputs: the Windows base path, the
//!   folder list, and the repository root
//! - **[`resources`]** — the idempotent link-reconciliation primitive
//! - **[`tasks`]** — sequential units of work wired to the reconciler
//! - **[`commands`]** — top-level subcommand orchestration (`link`, `unlink`,
//!   `status`)
#![deny(clippy::or_fun_call)]
#![deny(clippy::bool_to_int_with_if)]

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod logging;
pub mod platform;
pub mod resources;
pub mod tasks;
