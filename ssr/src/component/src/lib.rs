pub mod buttons;
pub mod file_picker;
pub mod response_view;
