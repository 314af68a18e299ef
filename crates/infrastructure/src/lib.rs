//! Honeyzone Infrastructure Layer
pub mod dns;
pub mod feed;
