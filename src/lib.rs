// flowgen — n8n workflow generator backed by a chat-completion model
// License: Apache-2.0

pub mod config;
pub mod generator;
pub mod logger;
pub mod provider;
pub mod web;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
