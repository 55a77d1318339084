use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use pdf_extractor::{cli, client, config, error, output};
use pdf_extractor_common::{normalize_keyword, UploadController};
use simplelog::{ColorChoice, LevelFilter, TermLogger, TerminalMode};
use std::time::Duration;

use cli::{Cli, Commands};
use client::{HttpExtractClient, PdfFile};
use config::Config;
use error::Result;

fn init_logger(verbose: bool) {
    let level = if verbose { LevelFilter::Debug } else { LevelFilter::Warn };
    let _ = TermLogger::init(
        level,
        simplelog::Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    );
}

fn upload_spinner(endpoint: &str) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::with_template("{spinner} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    spinner.set_message(format!("{} に送信中...", endpoint));
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logger(cli.verbose);
    let config = Config::load()?;

    match cli.command {
        Commands::Extract { file, keyword, output: output_arg, endpoint, no_images } => {
            println!("📄 pdf-extractor - 抽出\n");

            // 1. PDF読み込み（通信前に検証）
            println!("[1/3] PDFを読み込み中...");
            let pdf = PdfFile::open(&file)?;
            println!("✔ {} ({} bytes)\n", pdf.name, pdf.bytes.len());

            // 2. 抽出API呼び出し
            let endpoint = config.resolve_endpoint(endpoint.as_deref());
            let keyword = keyword.or_else(|| config.default_keyword.clone());

            println!("[2/3] 抽出APIへ送信中...");
            let client = HttpExtractClient::new(endpoint)?;
            let spinner = upload_spinner(client.endpoint());

            let controller = UploadController::new(client);
            controller.select(pdf);

            let result = controller
                .submit(keyword.as_deref().and_then(normalize_keyword))
                .await;
            spinner.finish_and_clear();
            let data = result?;
            println!(
                "✔ テキスト {}文字 / 画像 {}枚\n",
                data.text.chars().count(),
                data.image_count()
            );

            // 3. 保存
            println!("[3/3] 結果を保存中...");
            let output_dir = output_arg.unwrap_or_else(|| output::default_output_dir(chrono::Local::now()));
            let saved = output::save_extracted(&data, &output_dir, !no_images)?;

            if let Some(path) = &saved.text_file {
                println!("✔ テキストを保存: {}", path.display());
            }
            if !saved.images.is_empty() {
                println!("✔ 画像を{}枚保存: {}", saved.images.len(), output_dir.display());
            }
            for skipped in &saved.skipped {
                println!("⚠ {}", skipped);
            }

            if data.has_text() {
                println!("\n--- Extracted Text ---\n{}", data.text);
            } else {
                println!("\nテキストは抽出されませんでした");
            }

            println!("\n✅ 抽出完了");
        }

        Commands::Config { set_endpoint, set_keyword, show } => {
            let mut config = config;
            let mut changed = false;

            if let Some(url) = set_endpoint {
                config.set_endpoint(url)?;
                changed = true;
                println!("✔ 抽出APIのURLを設定しました");
            }

            if let Some(keyword) = set_keyword {
                config.set_default_keyword(keyword);
                changed = true;
                println!("✔ デフォルトのキーワードを設定しました");
            }

            if changed {
                config.save()?;
            }

            if show || !changed {
                println!("設定:");
                println!("  抽出API: {}", config.resolve_endpoint(None));
                println!(
                    "  キーワード: {}",
                    config.default_keyword.as_deref().unwrap_or("(なし)")
                );
                println!("  設定ファイル: {}", Config::config_path()?.display());
            }
        }
    }

    Ok(())
}
