//! hh_core — Core types for the apportionment engine.
//!
//! This crate is **I/O-free**. It defines the stable types used across the
//! workspace (`hh_io`, `hh_algo`, `hh_pipeline`, `hh_cli`):
//!
//! - `StateName` token (lexicographic order is the canonical iteration order)
//! - `ApportionmentDataset` (immutable per-state populations)
//! - `Lifecycle` / `Disposable` (permanent, idempotent disposal protocol)
//! - `CoreError`

#![forbid(unsafe_code)]

pub mod dispose;
pub mod entities;
pub mod errors;

pub use dispose::{Disposable, Lifecycle};
pub use entities::{ApportionmentDataset, StateName};
pub use errors::CoreError;
