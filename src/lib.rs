//! fxgen - FiveM resource manifest generator
//!
//! Scans a resource directory tree, buckets every file by the execution
//! context it loads into, extracts declared dependencies from Lua sources,
//! and renders an fxmanifest.lua for the resource.

pub mod cli;
pub mod error;
pub mod generator;
pub mod resolver;
pub mod scanner;
pub mod ui;
