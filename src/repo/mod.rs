pub mod request;
pub mod event;
pub mod target;

pub use request::*;
pub use event::*;
pub use target::*;
