pub mod color_check;
pub mod responses;

pub use color_check::ColorCheck;
