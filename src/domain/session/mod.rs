//! Trading sessions: the static session table and the window calculator.

pub mod services;
pub mod timeline;
pub mod value_objects;

pub use services::*;
pub use value_objects::*;
