//! PDF Extractor CLI
//!
//! 抽出APIへのPDF送信、結果の保存、設定管理

pub mod cli;
pub mod client;
pub mod config;
pub mod error;
pub mod output;
