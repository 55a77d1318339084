//! 抽出API連携

pub mod extract;
