//! Services layer (ports + adapters).
//!
//! - `ports`: contracts shared by the display side and the host side.
//! - `adapters`: OS/runtime specific implementations (IO/async).

pub mod adapters;
pub mod ports;
