//! SLA tracking
//!
//! Pure evaluation of elapsed time against a target budget. Nothing here
//! reads a clock: callers capture `now` once and pass it to every evaluation
//! they render together.

pub mod business_hours;
pub mod calculator;
pub mod display;
pub mod target;

pub use business_hours::*;
pub use calculator::*;
pub use display::*;
pub use target::*;
