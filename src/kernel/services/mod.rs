//! Services layer (ports + adapters).
//!
//! - `ports`: pure contracts/types used by the kernel.
//! - `adapters`: OS specific implementations (settings file, log directory).

pub mod adapters;
pub mod ports;
