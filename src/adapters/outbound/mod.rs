/// Outbound adapters - Infrastructure implementations of outbound ports
pub mod browser;
pub mod console;
pub mod filesystem;
pub mod formatters;
pub mod network;
