pub mod autoconf;
pub mod config;
pub mod fetch;
