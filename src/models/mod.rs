// Core data models for SRL
// These structs represent the domain entities

pub mod status;
pub mod locale;
pub mod stage;
pub mod category;
pub mod request;

pub use status::*;
pub use locale::*;
pub use stage::*;
pub use category::*;
pub use request::*;
