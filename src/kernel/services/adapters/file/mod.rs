//! Local filesystem host.

pub mod local;

pub use local::LocalHost;
