pub mod error;
pub mod pages;

pub use error::AppError;
