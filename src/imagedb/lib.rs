//! # Imagedb Architecture
//!
//! Imagedb is a **UI-agnostic image collection library**: upload, tag, browse, search, preview
//! and delete images against a remote store. The terminal session in `main.rs` is one client; a
//! GUI or web front end would drive the same API.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Interactive session, argument parsing, printing          │
//! │  - The ONLY place that knows about stdin/stdout/stderr      │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Root coordinator: owns collection + preview state        │
//! │  - Sequences async store calls, tracks the loading flag     │
//! │  - Logs store failures instead of returning them            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Synchronous state transitions applied at resolution      │
//! │  - Collection (collection.rs), preview (preview.rs),        │
//! │    search filter (search.rs)                                │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Store Layer (store/)                                       │
//! │  - Async RemoteStore trait                                  │
//! │  - SimulatedStore (latency stub), test fixtures             │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! The upload pipeline (`upload.rs`) sits beside the API: it turns a file into a
//! [`model::SubmissionPayload`] that the API hands to the store.
//!
//! ## Data Flow
//!
//! Upload pipeline → API → collection → search filter → rendered list → preview.
//!
//! ## Scheduling
//!
//! Everything runs on one logical thread. Store calls and file reads suspend the caller without
//! blocking anything else; several may be outstanding at once and each applies its effect when it
//! resolves. No cancellation and no retries: a failed save or delete needs a fresh attempt.
//!
//! ## Module Overview
//!
//! - [`api`]: The root coordinator, entry point for all operations
//! - [`commands`]: State transitions and the `CmdResult` type
//! - [`collection`]: Ordered in-memory collection
//! - [`preview`]: Preview selection state machine
//! - [`search`]: Case-insensitive name filter
//! - [`upload`]: File staging, tag parsing, upload form state
//! - [`media`]: Media types, data URLs, file sizes
//! - [`store`]: Remote store abstraction and the simulated backend
//! - [`model`]: Core data types
//! - [`config`]: Configuration management
//! - [`error`]: Error types

pub mod api;
pub mod collection;
pub mod commands;
pub mod config;
pub mod error;
pub mod media;
pub mod model;
pub mod preview;
pub mod search;
pub mod store;
pub mod upload;
