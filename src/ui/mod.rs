// UI module - egui overlay on top of the court

mod stats;
mod ui;

pub use ui::{UIState, draw_ui, process_egui};
