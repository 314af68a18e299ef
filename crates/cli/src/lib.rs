//! Process wiring shared by the `honeyzone` and `ioc-rules` binaries.
pub mod bootstrap;
pub mod di;
pub mod server;
