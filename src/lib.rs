pub mod config;
pub mod consts;
pub mod error;
pub mod galaxy;
pub mod profile;
pub mod store;
pub mod transition;
// cmd and reports belong to the binary (main.rs).
