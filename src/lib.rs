//! Minimal HTTP message store.
//!
//! Accepts text messages over HTTP, persists them to `SQLite`, and serves them
//! back through three retrieval strategies: an eager list on a worker pool, a
//! lazy stream drained on the request thread, and a lazy stream drained
//! inside a read-only transaction on the worker pool.
//!
//! # Modules
//!
//! - [`message`]: domain, repository port, storage adapters and service
//! - [`worker`]: bounded pool for blocking work
//! - [`http`]: Axum routes and error mapping
//! - [`config`]: environment-driven settings
//! - [`telemetry`]: tracing subscriber setup
//! - [`bootstrap`]: wiring and server loop

pub mod bootstrap;
pub mod config;
pub mod http;
pub mod message;
pub mod telemetry;
pub mod worker;
