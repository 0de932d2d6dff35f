//! Market data aggregate: value objects, analysis service and the source seam.

pub mod repositories;
pub mod services;
pub mod value_objects;

pub use repositories::*;
pub use services::*;
pub use value_objects::*;
