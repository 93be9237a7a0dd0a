//! Numeric primitives for moving values between modality ranges
//!
//! Scaling functions, summary statistics and pitch-class helpers used by
//! the analyzers and every converter.

mod linear;
mod logarithmic;
mod mapper;
mod scale;
pub mod stats;

pub use linear::LinearMapper;
pub use logarithmic::LogarithmicMapper;
pub use mapper::Mapper;
pub use scale::{pitch_class, Scale, A4_HZ};
