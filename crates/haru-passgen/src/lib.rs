//! Random password generation with a simple strength rating.

pub mod charset;
pub mod error;
pub mod generate;
pub mod strength;

pub use charset::CharsetOptions;
pub use error::{PassgenError, PassgenResult};
pub use generate::generate;
pub use strength::{Strength, StrengthGrade, rate};
