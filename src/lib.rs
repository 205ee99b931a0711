//! Object-oriented concepts expressed with Rust traits and value types.
//!
//! The core is the [`Shape`] capability with its two variants, [`Circle`] and
//! [`Rectangle`], and the area reporter in [`report`]. The remaining modules
//! are small standalone demonstrations: encapsulation ([`account`]),
//! plain data with behaviour ([`vehicle`]) and instance vs. type-level
//! methods ([`methods`]).

pub mod account;
pub mod config;
pub mod error;
pub mod logging;
pub mod methods;
pub mod report;
pub mod shape;
pub mod vehicle;

pub use config::{Config, ShapeSpec, Validation};
pub use error::{ConfigError, ShapeError};
pub use report::{compute_area, format_area, print_area, AreaReporter};
pub use shape::{Circle, PiConstant, Rectangle, Shape, ShapeKind};
