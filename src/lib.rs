//! # Stringlens
//!
//! A string-analysis service with content-addressed storage and
//! natural-language filtering.
//!
//! Submitted text is analyzed for structural properties (length,
//! palindrome status, unique characters, word count, per-character
//! frequency) and stored under its SHA-256 content hash. Stored records
//! can be listed with structured filters or with free-text queries that
//! an interpreter resolves into the same filter set.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────┐   ┌──────────┐   ┌─────────────┐
//! │ Analyzer │──▶│  Engine  │──▶│ RecordStore │
//! │ (pure)   │   │          │   │ sqlite/mem  │
//! └──────────┘   └────┬─────┘   └─────────────┘
//!                     │
//!        ┌────────────┤
//!        ▼            ▼
//!   ┌──────────┐ ┌──────────┐
//!   │   CLI    │ │   HTTP   │
//!   │ (slens)  │ │  (axum)  │
//!   └──────────┘ └──────────┘
//! ```
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`config`] | TOML configuration parsing |
//! | [`models`] | Core data types and response shapes |
//! | [`analyzer`] | Pure string analysis and content hashing |
//! | [`filter`] | Filter legality checks and record matching |
//! | [`interpret`] | Natural-language query interpretation |
//! | [`engine`] | Orchestration over the record store |
//! | [`store`] | Storage abstraction (SQLite, in-memory) |
//! | [`server`] | HTTP server |
//! | [`db`] | Database connection |
//! | [`migrate`] | Schema migrations |

pub mod analyzer;
pub mod config;
pub mod db;
pub mod engine;
pub mod error;
pub mod filter;
pub mod interpret;
pub mod migrate;
pub mod models;
pub mod server;
pub mod store;
