// src/graph/mod.rs
pub mod links;
pub mod rank;
