pub mod asset;
pub mod commands;
pub mod manifest;
pub mod runtime;
