use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "pdf-extractor")]
#[command(about = "PDFを抽出APIへ送信し、テキストと画像を保存するツール", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// PDFを送信して抽出結果を保存
    Extract {
        /// PDFファイルのパス
        #[arg(required = true)]
        file: PathBuf,

        /// APIへ渡すキーワード（省略時は設定ファイルの値）
        #[arg(short, long)]
        keyword: Option<String>,

        /// 出力ディレクトリ（デフォルト: ./extracted_日時）
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// 抽出APIのURL（環境変数・設定ファイルより優先）
        #[arg(long)]
        endpoint: Option<String>,

        /// 画像を保存しない
        #[arg(long)]
        no_images: bool,
    },

    /// 設定の表示・変更
    Config {
        /// 抽出APIのURLを設定
        #[arg(long)]
        set_endpoint: Option<String>,

        /// デフォルトのキーワードを設定（空文字で解除）
        #[arg(long)]
        set_keyword: Option<String>,

        /// 現在の設定を表示
        #[arg(long)]
        show: bool,
    },
}
