//! Application state module

mod app_state;
mod forms;
mod iso_date;
mod navigation;
mod validation;

pub use app_state::*;
pub use forms::*;
pub use navigation::*;
pub use validation::*;
