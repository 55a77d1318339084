use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExtractorError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("ファイルが見つかりません: {0}")]
    FileNotFound(String),

    #[error("HTTPクライアントの初期化に失敗: {0}")]
    HttpClient(String),

    #[error("画像のデコードに失敗 ({file}): {reason}")]
    ImageDecode { file: String, reason: String },

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Upload(#[from] pdf_extractor_common::Error),
}

pub type Result<T> = std::result::Result<T, ExtractorError>;
