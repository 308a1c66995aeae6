pub mod types;
pub mod settings;
pub mod error;
pub mod events;

pub use error::{AppError, AppResult};
