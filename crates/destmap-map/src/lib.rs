//! Destination-to-country lookup.
//!
//! This crate provides the resolution core of the destination mapper: exact-match
//! lookup tables built from `(key, country)` pairs, and a resolver that walks an
//! ordered chain (city table, then airport table) and falls back to the original
//! destination value when neither matches.

mod resolver;
mod table;

pub use resolver::{Resolution, ResolutionSource, resolve};
pub use table::CountryTable;
