//! 抽出APIクライアント（reqwest multipart）

use crate::error::{ExtractorError, Result};
use pdf_extractor_common::{validate_pdf, ExtractClient, HttpReply};
use reqwest::multipart::{Form, Part};
use std::path::Path;

/// 送信するPDF
#[derive(Debug, Clone)]
pub struct PdfFile {
    pub name: String,
    pub bytes: Vec<u8>,
}

impl PdfFile {
    /// ファイルを読み込む（存在しない・PDFでない場合はエラー）
    pub fn open(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Err(ExtractorError::FileNotFound(path.display().to_string()));
        }

        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();
        validate_pdf(&name, "")?;

        let bytes = std::fs::read(path)?;
        Ok(Self { name, bytes })
    }
}

pub struct HttpExtractClient {
    http: reqwest::Client,
    endpoint: String,
}

impl HttpExtractClient {
    pub fn new(endpoint: impl Into<String>) -> Result<Self> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("pdf-extractor/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| ExtractorError::HttpClient(e.to_string()))?;

        Ok(Self {
            http,
            endpoint: endpoint.into(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl ExtractClient for HttpExtractClient {
    type File = PdfFile;

    async fn post_pdf(
        &self,
        file: &PdfFile,
        keyword: Option<&str>,
    ) -> std::result::Result<HttpReply, String> {
        let part = Part::bytes(file.bytes.clone())
            .file_name(file.name.clone())
            .mime_str("application/pdf")
            .map_err(|e| e.to_string())?;

        let mut form = Form::new().part("file", part);
        if let Some(keyword) = keyword {
            form = form.text("keyword", keyword.to_string());
        }

        log::debug!("POST {} ({} bytes)", self.endpoint, file.bytes.len());
        let response = self
            .http
            .post(&self.endpoint)
            .multipart(form)
            .send()
            .await
            .map_err(|e| e.to_string())?;

        let status = response.status().as_u16();
        let body = response.text().await.map_err(|e| e.to_string())?;
        log::debug!("response {} ({} bytes)", status, body.len());

        Ok(HttpReply { status, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_reports_resolved_endpoint() {
        let client = HttpExtractClient::new("http://127.0.0.1:9000/extract-text").unwrap();
        assert_eq!(client.endpoint(), "http://127.0.0.1:9000/extract-text");
    }
}
