// src/lib.rs
pub mod banner;
pub mod config;
pub mod dispatcher;
pub mod errors;
pub mod origin;
pub mod protocol;
