//! Implementation of the `#[derive(Seekable)]` macro.
//!
//! Generates the `sieve::Seekable` accessor and typed field-path constants
//! from `#[seek(...)]` annotations.

mod attrs;
mod derive;

pub use derive::seekable_derive_impl;
