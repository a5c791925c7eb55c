// src/core/mod.rs

pub mod distance;
pub mod engine;
pub mod filter;
pub mod normalize;
pub mod script;
pub mod store;
pub mod trigram;
pub mod types;
