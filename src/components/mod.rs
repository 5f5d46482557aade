//! Reusable UI components

mod insights_panel;
mod loading;
mod results_panel;
mod url_input;

pub use insights_panel::*;
pub use loading::*;
pub use results_panel::*;
pub use url_input::*;
