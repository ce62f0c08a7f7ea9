pub mod body_editor;
pub mod counter_panel;
pub mod diagnostics_panel;
pub mod header;
pub mod headers_editor;
pub mod request_bar;
pub mod response_panel;
pub mod style;
