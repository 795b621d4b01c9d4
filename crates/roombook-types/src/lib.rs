pub mod domain;
pub mod draft;
pub mod error;
pub mod status;

pub use domain::*;
pub use draft::*;
pub use error::{ApiFailure, Error, Result};
pub use status::*;
