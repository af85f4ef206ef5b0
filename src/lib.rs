//! # GSOS Clients
//!
//! A small HTTP backend for managing client installations and the history of
//! version pulls made against them. Usable as a standalone binary or as a
//! library.
//!
//! ## Library Usage
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use gsos_clients::config::DatabaseConfig;
//! use gsos_clients::server::{AppState, create_router};
//! use gsos_clients::store::{SqliteStore, Store};
//!
//! let store = SqliteStore::new(DatabaseConfig::new("./gsos_clients.db")).unwrap();
//! store.initialize().unwrap();
//!
//! let state = Arc::new(AppState::new(Arc::new(store), "http://localhost:3000").unwrap());
//! let router = create_router(state);
//! // Serve with axum...
//! ```
//!
//! ## Feature Flags
//!
//! - `cli` (default): Builds the `gsos-clients` binary. Disable with `default-features = false`.

pub mod auth;
pub mod config;
pub mod error;
pub mod server;
pub mod store;
pub mod types;
