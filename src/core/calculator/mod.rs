pub mod duration;
pub mod rounding;
