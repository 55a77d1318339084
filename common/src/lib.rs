//! PDF Extractor Common Library
//!
//! Web(WASM)とCLIで共有される型、アップロード制御、ビューア状態

pub mod types;
pub mod error;
pub mod parser;
pub mod upload;
pub mod navigation;
pub mod viewer;
pub mod download;

pub use types::{ExtractedData, UploadStatus};
pub use error::{Error, Result, GENERIC_UPLOAD_FAILURE};
pub use parser::{backend_failure, normalize_response, normalize_value};
pub use upload::{
    extract, is_pdf, normalize_keyword, validate_pdf, ExtractClient, HttpReply,
    UploadController, UploadSession, DEFAULT_EXTRACT_API_URL, EXTRACT_API_URL_ENV,
};
pub use navigation::{NavigationCursor, ViewerAction};
pub use viewer::{ClickTarget, FullscreenSession, ViewerOutcome, ViewerState};
pub use download::{download_file_name, image_alt, image_data_url, strip_data_url, PNG_DATA_URL_PREFIX};
