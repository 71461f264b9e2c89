pub mod catalog;

pub use catalog::{ScreenInputs, present_form, present_page, present_row, present_screen};
