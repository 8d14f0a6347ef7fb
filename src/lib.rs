pub mod commands;
pub mod http;
pub mod registry;
pub mod runtime;
pub mod validate;
