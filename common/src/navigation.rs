//! 画像ナビゲーション
//!
//! 全画面ビューアの「現在表示中の画像」を循環インデックスで保持する

use crate::error::{Error, Result};

/// 全画面ビューアへの操作
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewerAction {
    Next,
    Prev,
    Close,
}

impl ViewerAction {
    /// `KeyboardEvent.key` の値から操作を得る
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowRight" => Some(ViewerAction::Next),
            "ArrowLeft" => Some(ViewerAction::Prev),
            "Escape" => Some(ViewerAction::Close),
            _ => None,
        }
    }
}

/// ナビゲーションカーソル
///
/// `0 <= index < total` を常に満たす。空の画像列では作れない。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavigationCursor {
    index: usize,
    total: usize,
}

impl NavigationCursor {
    pub fn new(initial_index: usize, total: usize) -> Result<Self> {
        if total == 0 {
            return Err(Error::EmptyGallery);
        }
        if initial_index >= total {
            return Err(Error::IndexOutOfRange {
                index: initial_index,
                total,
            });
        }
        Ok(Self {
            index: initial_index,
            total,
        })
    }

    pub fn index(&self) -> usize {
        self.index
    }

    /// 次へ（最後から最初へ折り返す）
    pub fn next(&mut self) {
        self.index = (self.index + 1) % self.total;
    }

    /// 前へ（最初から最後へ折り返す）
    pub fn prev(&mut self) {
        self.index = (self.index + self.total - 1) % self.total;
    }

    /// "3 of 10" 形式のカウンタ表示
    pub fn counter_label(&self) -> String {
        format!("{} of {}", self.index + 1, self.total)
    }
}
