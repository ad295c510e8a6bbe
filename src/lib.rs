//! addValidator migration helper
//!
//! Takes the arguments of an `addValidator` call as they were logged in a
//! browser console, rebuilds the typed call from them and submits it once:
//! - tolerant blob parsing (JSON arrays and tuple renderings)
//! - typed coercion into the registry ABI
//! - gas estimation with a configurable buffer

pub mod args;
pub mod config;
pub mod contract;
pub mod prompt;
pub mod report;
pub mod submit;
