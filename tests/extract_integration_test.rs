//! 抽出APIとの統合テスト
//!
//! ローカルの擬似サーバーに対して multipart 送信から正規化までを通す

use pdf_extractor::client::{HttpExtractClient, PdfFile};
use pdf_extractor_common::{Error, UploadController, GENERIC_UPLOAD_FAILURE};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

fn sample_pdf() -> PdfFile {
    PdfFile {
        name: "sample.pdf".to_string(),
        bytes: b"%PDF-1.4\n%%EOF\n".to_vec(),
    }
}

fn find(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    haystack.windows(needle.len()).position(|w| w == needle)
}

/// リクエストを1件だけ受けて固定のレスポンスを返す。受信したリクエスト全体を返す
async fn serve_once(status_line: &'static str, body: &'static str) -> (String, JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let url = format!("http://{}/extract-text", listener.local_addr().unwrap());

    let handle = tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let mut request = Vec::new();
        let mut buf = [0u8; 4096];

        loop {
            let n = socket.read(&mut buf).await.unwrap();
            if n == 0 {
                break;
            }
            request.extend_from_slice(&buf[..n]);

            let Some(header_end) = find(&request, b"\r\n\r\n") else {
                continue;
            };
            let headers = String::from_utf8_lossy(&request[..header_end]).to_ascii_lowercase();
            let content_length = headers
                .lines()
                .find_map(|line| line.strip_prefix("content-length:"))
                .and_then(|v| v.trim().parse::<usize>().ok());

            let done = match content_length {
                Some(len) => request.len() >= header_end + 4 + len,
                None => request.ends_with(b"0\r\n\r\n"),
            };
            if done {
                break;
            }
        }

        let response = format!(
            "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            status_line,
            body.len(),
            body
        );
        socket.write_all(response.as_bytes()).await.unwrap();
        socket.shutdown().await.ok();

        String::from_utf8_lossy(&request).to_string()
    });

    (url, handle)
}

#[tokio::test]
async fn test_extract_success_is_normalized() {
    let (url, server) = serve_once(
        "200 OK",
        r#"{"text":"Name: Taro","images":["AAA"],"cropped_images":["BBB"]}"#,
    )
    .await;

    let controller = UploadController::new(HttpExtractClient::new(url).unwrap());
    controller.select(sample_pdf());

    let data = controller.submit(Some("Name")).await.unwrap();
    assert_eq!(data.text, "Name: Taro");
    assert_eq!(data.images, vec!["AAA".to_string(), "BBB".to_string()]);

    let status = controller.status();
    assert!(!status.busy);
    assert!(status.last_error.is_none());
    assert!(status.has_file);

    let request = server.await.unwrap();
    assert!(request.starts_with("POST /extract-text"));
    assert!(request.contains("multipart/form-data"));
    assert!(request.contains(r#"name="file"; filename="sample.pdf""#));
    assert!(request.contains("application/pdf"));
    assert!(request.contains(r#"name="keyword""#));
    assert!(request.contains("Name"));
}

/// キーワードなしの場合は keyword パートを送らない
#[tokio::test]
async fn test_extract_without_keyword() {
    let (url, server) = serve_once("200 OK", r#"{"text":"","images":[]}"#).await;

    let controller = UploadController::new(HttpExtractClient::new(url).unwrap());
    controller.select(sample_pdf());

    let data = controller.submit(None).await.unwrap();
    assert!(data.is_empty());

    let request = server.await.unwrap();
    assert!(request.contains(r#"name="file""#));
    assert!(!request.contains(r#"name="keyword""#));
}

/// 文字列のエラーボディはそのまま表示される
#[tokio::test]
async fn test_backend_error_message_is_surfaced() {
    let (url, server) = serve_once("422 Unprocessable Entity", "PDF is encrypted").await;

    let controller = UploadController::new(HttpExtractClient::new(url).unwrap());
    controller.select(sample_pdf());

    let err = controller.submit(None).await.unwrap_err();
    assert_eq!(
        err,
        Error::Backend {
            status: 422,
            message: Some("PDF is encrypted".to_string()),
        }
    );
    assert_eq!(controller.status().last_error.as_deref(), Some("PDF is encrypted"));
    server.await.unwrap();
}

/// オブジェクトのエラーボディは汎用メッセージになる
#[tokio::test]
async fn test_backend_error_object_uses_generic_message() {
    let (url, server) = serve_once("500 Internal Server Error", r#"{"detail":"boom"}"#).await;

    let controller = UploadController::new(HttpExtractClient::new(url).unwrap());
    controller.select(sample_pdf());

    let err = controller.submit(None).await.unwrap_err();
    assert_eq!(err.to_string(), GENERIC_UPLOAD_FAILURE);
    server.await.unwrap();
}

/// 接続できない場合は汎用メッセージ。ファイルは保持され再送できる
#[tokio::test]
async fn test_transport_failure_keeps_file() {
    // 一度バインドして閉じたポートへ送る
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let url = format!("http://{}/extract-text", listener.local_addr().unwrap());
    drop(listener);

    let controller = UploadController::new(HttpExtractClient::new(url).unwrap());
    controller.select(sample_pdf());

    let err = controller.submit(None).await.unwrap_err();
    assert!(matches!(err, Error::Transport(_)));
    assert_eq!(err.to_string(), GENERIC_UPLOAD_FAILURE);

    let status = controller.status();
    assert!(!status.busy);
    assert!(status.has_file);
    assert_eq!(status.last_error.as_deref(), Some(GENERIC_UPLOAD_FAILURE));
}

/// ファイル未選択なら通信しない
#[tokio::test]
async fn test_submit_without_file() {
    let controller = UploadController::new(
        HttpExtractClient::new("http://127.0.0.1:1/extract-text").unwrap(),
    );

    let err = controller.submit(None).await.unwrap_err();
    assert_eq!(err, Error::NoFileSelected);
    assert!(!controller.status().busy);
}
