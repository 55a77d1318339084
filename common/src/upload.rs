//! アップロード制御
//!
//! 選択中のPDF1件と処理中フラグを持ち、抽出APIへの送信と結果の正規化を行う。
//! 送信は同時に1件のみ。処理中の再送信はキューに積まずに拒否する。

use std::cell::RefCell;
use std::rc::Rc;

use crate::error::{Error, Result};
use crate::parser::{backend_failure, normalize_response};
use crate::types::{ExtractedData, UploadStatus};

/// 抽出APIのデフォルトURL
pub const DEFAULT_EXTRACT_API_URL: &str = "http://localhost:8000/extract-text";

/// 抽出API URLを上書きする環境変数
pub const EXTRACT_API_URL_ENV: &str = "PDF_EXTRACT_API_URL";

/// HTTPレスポンス（ステータスと本文のみ）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpReply {
    pub status: u16,
    pub body: String,
}

impl HttpReply {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// 抽出APIへの送信手段
///
/// ブラウザでは `fetch`、CLIでは `reqwest` で実装する。
/// 通信自体の失敗は `Err(詳細)`、HTTPエラーは `Ok(HttpReply)` として返す。
#[allow(async_fn_in_trait)]
pub trait ExtractClient {
    type File: Clone;

    /// multipart/form-data で `file` と任意の `keyword` を資格情報付きでPOSTする
    async fn post_pdf(
        &self,
        file: &Self::File,
        keyword: Option<&str>,
    ) -> std::result::Result<HttpReply, String>;
}

/// PDFファイルか判定（MIMEタイプまたは拡張子）
pub fn is_pdf(file_name: &str, mime_type: &str) -> bool {
    mime_type.eq_ignore_ascii_case("application/pdf")
        || file_name.to_ascii_lowercase().ends_with(".pdf")
}

pub fn validate_pdf(file_name: &str, mime_type: &str) -> Result<()> {
    if is_pdf(file_name, mime_type) {
        Ok(())
    } else {
        Err(Error::NotPdf(file_name.to_string()))
    }
}

/// 前後の空白を除き、空ならキーワードなしとする
pub fn normalize_keyword(keyword: &str) -> Option<&str> {
    let trimmed = keyword.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}

/// 1回分の送信と正規化
pub async fn extract<C: ExtractClient>(
    client: &C,
    file: &C::File,
    keyword: Option<&str>,
) -> Result<ExtractedData> {
    let reply = client
        .post_pdf(file, keyword)
        .await
        .map_err(Error::Transport)?;

    if !reply.is_success() {
        return Err(backend_failure(reply.status, &reply.body));
    }

    normalize_response(&reply.body)
}

/// アップロードセッション
pub struct UploadSession<F> {
    selected_file: Option<F>,
    busy: bool,
    last_error: Option<String>,
}

impl<F> Default for UploadSession<F> {
    fn default() -> Self {
        Self {
            selected_file: None,
            busy: false,
            last_error: None,
        }
    }
}

impl<F: Clone> UploadSession<F> {
    pub fn new() -> Self {
        Self::default()
    }

    /// ファイルを選択（次に選択されるまで保持）
    pub fn select(&mut self, file: F) {
        self.selected_file = Some(file);
        self.last_error = None;
    }

    pub fn report_error(&mut self, error: &Error) {
        self.last_error = Some(error.to_string());
    }

    /// 送信開始。処理中なら状態を変えずに `Busy`、未選択ならエラーを記録する
    pub fn begin(&mut self) -> Result<F> {
        if self.busy {
            return Err(Error::Busy);
        }
        let Some(file) = self.selected_file.clone() else {
            let error = Error::NoFileSelected;
            self.report_error(&error);
            return Err(error);
        };
        self.busy = true;
        self.last_error = None;
        Ok(file)
    }

    /// 送信完了
    pub fn finish(&mut self, outcome: &Result<ExtractedData>) {
        self.busy = false;
        self.last_error = match outcome {
            Ok(_) => None,
            Err(error) => Some(error.to_string()),
        };
    }

    /// 結果を受け取らずに処理中フラグだけ戻す
    pub fn release(&mut self) {
        self.busy = false;
    }

    pub fn status(&self) -> UploadStatus {
        UploadStatus {
            busy: self.busy,
            last_error: self.last_error.clone(),
            has_file: self.selected_file.is_some(),
        }
    }
}

type StatusListener = Rc<dyn Fn(&UploadStatus)>;

/// アップロードコントローラー
///
/// シングルスレッド前提。内部状態の借用は `.await` をまたがない。
pub struct UploadController<C: ExtractClient> {
    client: Rc<C>,
    session: Rc<RefCell<UploadSession<C::File>>>,
    listener: Option<StatusListener>,
}

impl<C: ExtractClient> Clone for UploadController<C> {
    fn clone(&self) -> Self {
        Self {
            client: Rc::clone(&self.client),
            session: Rc::clone(&self.session),
            listener: self.listener.clone(),
        }
    }
}

impl<C: ExtractClient> UploadController<C> {
    pub fn new(client: C) -> Self {
        Self {
            client: Rc::new(client),
            session: Rc::new(RefCell::new(UploadSession::new())),
            listener: None,
        }
    }

    /// 状態遷移のたびに呼ばれるリスナーを登録
    pub fn with_status_listener(mut self, listener: impl Fn(&UploadStatus) + 'static) -> Self {
        self.listener = Some(Rc::new(listener));
        self
    }

    pub fn status(&self) -> UploadStatus {
        self.session.borrow().status()
    }

    pub fn select(&self, file: C::File) {
        self.session.borrow_mut().select(file);
        self.notify();
    }

    pub fn report_error(&self, error: &Error) {
        self.session.borrow_mut().report_error(error);
        self.notify();
    }

    /// 選択中のPDFを送信する
    ///
    /// 処理中の呼び出しは通信せず `Err(Error::Busy)` を返す。
    /// 失敗時も以前の抽出結果には触れない（呼び出し側が成功時のみ置き換える）。
    pub async fn submit(&self, keyword: Option<&str>) -> Result<ExtractedData> {
        let begun = self.session.borrow_mut().begin();
        let file = match begun {
            Ok(file) => file,
            Err(Error::Busy) => {
                log::debug!("upload already in flight; ignoring submission");
                return Err(Error::Busy);
            }
            Err(error) => {
                log::warn!("upload rejected: {}", error);
                self.notify();
                return Err(error);
            }
        };
        self.notify();
        log::info!("uploading PDF (keyword: {:?})", keyword);

        let in_flight = InFlight {
            controller: self,
            finished: false,
        };
        let outcome = extract(self.client.as_ref(), &file, keyword).await;
        match &outcome {
            Ok(data) => log::info!(
                "extraction succeeded: {} chars of text, {} images",
                data.text.len(),
                data.image_count()
            ),
            Err(error) => log::error!("extraction failed: {:?}", error),
        }
        in_flight.finish(&outcome);
        outcome
    }

    fn notify(&self) {
        if let Some(listener) = &self.listener {
            let status = self.status();
            listener(&status);
        }
    }
}

/// 処理中フラグの解放を保証する
///
/// 送信中のFutureが破棄された場合もDropで解放する
struct InFlight<'a, C: ExtractClient> {
    controller: &'a UploadController<C>,
    finished: bool,
}

impl<C: ExtractClient> InFlight<'_, C> {
    fn finish(mut self, outcome: &Result<ExtractedData>) {
        self.controller.session.borrow_mut().finish(outcome);
        self.finished = true;
        self.controller.notify();
    }
}

impl<C: ExtractClient> Drop for InFlight<'_, C> {
    fn drop(&mut self) {
        if !self.finished {
            log::warn!("upload dropped before completion; releasing busy flag");
            self.controller.session.borrow_mut().release();
            self.controller.notify();
        }
    }
}
