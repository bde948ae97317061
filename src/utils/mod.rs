pub mod error;
pub mod logging;
pub mod output;

pub use error::{AppError, AppResult, report_error};
pub use output::OutputStyle;
