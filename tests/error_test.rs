//! エラーケーステスト
//!
//! 各種エラー条件でのエラーハンドリングを検証

use pdf_extractor::client::PdfFile;
use pdf_extractor::config::Config;
use pdf_extractor::error::ExtractorError;
use pdf_extractor_common::{Error, GENERIC_UPLOAD_FAILURE};
use std::path::Path;
use tempfile::tempdir;

/// 存在しないPDFを開いた場合
#[test]
fn test_open_nonexistent_pdf() {
    let result = PdfFile::open(Path::new("/nonexistent/path/12345.pdf"));

    let err = result.unwrap_err();
    assert!(matches!(err, ExtractorError::FileNotFound(_)));
}

/// ディレクトリを指定した場合もファイル無しとして扱う
#[test]
fn test_open_directory() {
    let dir = tempdir().expect("Failed to create temp dir");
    let result = PdfFile::open(dir.path());

    assert!(matches!(result, Err(ExtractorError::FileNotFound(_))));
}

/// PDF以外のファイルは送信前に拒否される
#[test]
fn test_open_non_pdf() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("notes.txt");
    std::fs::write(&path, "hello").unwrap();

    let err = PdfFile::open(&path).unwrap_err();
    match err {
        ExtractorError::Upload(Error::NotPdf(name)) => assert_eq!(name, "notes.txt"),
        other => panic!("unexpected error: {:?}", other),
    }
}

/// 拡張子の大文字小文字は区別しない
#[test]
fn test_open_uppercase_extension() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("REPORT.PDF");
    std::fs::write(&path, b"%PDF-1.4\n").unwrap();

    let pdf = PdfFile::open(&path).unwrap();
    assert_eq!(pdf.name, "REPORT.PDF");
    assert_eq!(pdf.bytes, b"%PDF-1.4\n");
}

/// 壊れた設定ファイル
#[test]
fn test_load_invalid_config() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("config.json");
    std::fs::write(&path, "{ not json").unwrap();

    let result = Config::load_from(&path);
    assert!(matches!(result, Err(ExtractorError::JsonParse(_))));
}

/// アップロード失敗はサーバーのメッセージまたは汎用メッセージをそのまま表示する
#[test]
fn test_upload_error_display_is_transparent() {
    let transport: ExtractorError = Error::Transport("connection refused".into()).into();
    assert_eq!(transport.to_string(), GENERIC_UPLOAD_FAILURE);

    let backend: ExtractorError = Error::Backend {
        status: 422,
        message: Some("PDF is encrypted".into()),
    }
    .into();
    assert_eq!(backend.to_string(), "PDF is encrypted");
}

#[test]
fn test_error_display() {
    let err = ExtractorError::FileNotFound("/path/to/file.pdf".to_string());
    assert!(err.to_string().contains("/path/to/file.pdf"));

    let err = ExtractorError::ImageDecode {
        file: "extracted_image_2.png".to_string(),
        reason: "Invalid byte 33".to_string(),
    };
    let msg = err.to_string();
    assert!(msg.contains("extracted_image_2.png"));
    assert!(msg.contains("Invalid byte 33"));

    let err = ExtractorError::Config("bad url".to_string());
    assert!(err.to_string().contains("bad url"));
}
