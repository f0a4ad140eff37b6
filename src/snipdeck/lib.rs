//! # Snipdeck Architecture
//!
//! Snipdeck keeps a small, user-edited catalog of labeled text snippets in two
//! fixed categories, `offer` and `price`, and copies a snippet's text to the
//! clipboard with one action. The library is UI-agnostic: the terminal binary
//! is just one host for it.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Host (cli/, wired by main.rs)                              │
//! │  - Implements the Shell traits: prompts, notices,           │
//! │    clipboard, rendering                                     │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Controller (controller.rs)                                 │
//! │  - One transaction per user intent                          │
//! │  - validate → mutate → persist → resync, or roll back       │
//! └─────────────────────────────────────────────────────────────┘
//!               │                              │
//!               ▼                              ▼
//! ┌──────────────────────────┐   ┌──────────────────────────────┐
//! │  Catalog (catalog.rs)    │   │  Storage (store/)            │
//! │  - invariants, ordering  │   │  - CatalogStore trait        │
//! └──────────────────────────┘   │  - FileStore, InMemoryStore  │
//!               │                └──────────────────────────────┘
//!               ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  View Synchronizer (view.rs)                                │
//! │  - pure: catalog → rows of buttons + selection lists        │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From the controller inward, code never prints, never exits the process and
//! never assumes a terminal. All user-facing effects go through [`shell`]
//! traits, so a desktop toolkit could host the same core.
//!
//! ## Module Overview
//!
//! - [`model`]: `Snippet` and `Category`
//! - [`catalog`]: the in-memory catalog and its invariants
//! - [`store`]: persistence trait and implementations
//! - [`view`]: layout and selection-list derivation
//! - [`controller`]: add/remove/copy orchestration
//! - [`shell`]: capabilities a host must provide
//! - [`clipboard`]: OS clipboard support
//! - [`config`]: configuration file
//! - [`paths`]: catalog file resolution
//! - [`error`]: error types

pub mod catalog;
pub mod clipboard;
pub mod config;
pub mod controller;
pub mod error;
pub mod model;
pub mod paths;
pub mod shell;
pub mod store;
pub mod view;
