//! ルート状態と全画面ビューアのセッション

use std::sync::Arc;

use crate::error::{Error, Result};
use crate::navigation::{NavigationCursor, ViewerAction};
use crate::types::ExtractedData;

/// ルートが保持する状態
///
/// 抽出結果と全画面表示中のインデックスのみ。更新はメソッド経由で行う。
/// 抽出結果は `Arc` で共有し、全画面の開閉で画像列を複製しない。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewerState {
    data: Arc<ExtractedData>,
    open_index: Option<usize>,
}

impl ViewerState {
    pub fn data(&self) -> &Arc<ExtractedData> {
        &self.data
    }

    pub fn open_index(&self) -> Option<usize> {
        self.open_index
    }

    pub fn is_fullscreen_open(&self) -> bool {
        self.open_index.is_some()
    }

    /// 新しい抽出結果に置き換える
    ///
    /// 古い画像列へのインデックスが残らないよう全画面表示は閉じる
    pub fn replace_data(&mut self, data: ExtractedData) {
        if self.open_index.take().is_some() {
            log::debug!("closing fullscreen viewer for new extraction result");
        }
        self.data = Arc::new(data);
    }

    pub fn open_fullscreen(&mut self, index: usize) -> Result<()> {
        let total = self.data.image_count();
        if total == 0 {
            return Err(Error::EmptyGallery);
        }
        if index >= total {
            return Err(Error::IndexOutOfRange { index, total });
        }
        self.open_index = Some(index);
        Ok(())
    }

    pub fn close_fullscreen(&mut self) {
        self.open_index = None;
    }
}

/// クリックされた要素
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    /// 画像の外側（オーバーレイ背景）
    Background,
    Image,
    Control,
}

/// 操作後にビューアを閉じるかどうか
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewerOutcome {
    Stay,
    Close,
}

/// 全画面ビューア1回分の状態
///
/// 開いた時点のインデックスから始まるカーソルを持つ。閉じた後の入力は無視する。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FullscreenSession {
    cursor: NavigationCursor,
    closed: bool,
}

impl FullscreenSession {
    pub fn open(total: usize, open_index: usize) -> Result<Self> {
        Ok(Self {
            cursor: NavigationCursor::new(open_index, total)?,
            closed: false,
        })
    }

    pub fn index(&self) -> usize {
        self.cursor.index()
    }

    pub fn counter_label(&self) -> String {
        self.cursor.counter_label()
    }

    pub fn dispatch(&mut self, action: ViewerAction) -> ViewerOutcome {
        if self.closed {
            return ViewerOutcome::Stay;
        }
        match action {
            ViewerAction::Next => self.cursor.next(),
            ViewerAction::Prev => self.cursor.prev(),
            ViewerAction::Close => {
                self.closed = true;
                return ViewerOutcome::Close;
            }
        }
        ViewerOutcome::Stay
    }

    /// キー入力。割り当てのないキーは `None`
    pub fn handle_key(&mut self, key: &str) -> Option<ViewerOutcome> {
        if self.closed {
            return None;
        }
        ViewerAction::from_key(key).map(|action| self.dispatch(action))
    }

    /// 背景クリックのみ閉じる。画像・ボタンは伝播させない
    pub fn handle_click(&mut self, target: ClickTarget) -> ViewerOutcome {
        match target {
            ClickTarget::Background => self.dispatch(ViewerAction::Close),
            ClickTarget::Image | ClickTarget::Control => ViewerOutcome::Stay,
        }
    }
}
