//! Trade signal aggregate: the analysis request, the backend's verdict and the provider seam.

pub mod repositories;
pub mod value_objects;
pub mod verdict;

pub use repositories::*;
pub use value_objects::*;
pub use verdict::*;
