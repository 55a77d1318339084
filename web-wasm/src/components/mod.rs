//! UIコンポーネント

pub mod header;
pub mod upload_area;
pub mod busy_indicator;
pub mod extracted_content;
pub mod fullscreen_viewer;
