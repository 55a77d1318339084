//! エラー型定義
//!
//! `Display` はそのままユーザーに表示するメッセージ

use thiserror::Error;

/// サーバーから文字列メッセージが得られない場合の汎用メッセージ
pub const GENERIC_UPLOAD_FAILURE: &str = "Upload failed. Ensure the extraction service is running.";

/// 共通エラー型
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Please select a PDF file first.")]
    NoFileSelected,

    #[error("Only PDF files are supported: {0}")]
    NotPdf(String),

    #[error("An upload is already in progress.")]
    Busy,

    /// 通信エラー（詳細はログ用）
    #[error("{}", GENERIC_UPLOAD_FAILURE)]
    Transport(String),

    #[error("{}", .message.as_deref().unwrap_or(GENERIC_UPLOAD_FAILURE))]
    Backend { status: u16, message: Option<String> },

    #[error("The extraction service returned an unreadable response: {0}")]
    MalformedResponse(String),

    #[error("No images to display")]
    EmptyGallery,

    #[error("Image index {index} is out of range (total {total})")]
    IndexOutOfRange { index: usize, total: usize },
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;
