use crate::error::{ExtractorError, Result};
use pdf_extractor_common::{DEFAULT_EXTRACT_API_URL, EXTRACT_API_URL_ENV};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub endpoint: Option<String>,
    #[serde(default)]
    pub default_keyword: Option<String>,
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| ExtractorError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("pdf-extractor").join("config.json"))
    }

    /// 抽出APIのURL
    ///
    /// 優先順位: 引数 > 環境変数 > 設定ファイル > デフォルト
    pub fn resolve_endpoint(&self, flag: Option<&str>) -> String {
        let from_env = std::env::var(EXTRACT_API_URL_ENV).ok();
        Self::pick_endpoint(flag, from_env.as_deref(), self.endpoint.as_deref())
    }

    fn pick_endpoint(flag: Option<&str>, env: Option<&str>, saved: Option<&str>) -> String {
        [flag, env, saved]
            .into_iter()
            .flatten()
            .map(str::trim)
            .find(|url| !url.is_empty())
            .unwrap_or(DEFAULT_EXTRACT_API_URL)
            .to_string()
    }

    pub fn set_endpoint(&mut self, url: String) -> Result<()> {
        let url = url.trim().to_string();
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(ExtractorError::Config(format!(
                "URLは http:// または https:// で始めてください: {}",
                url
            )));
        }
        self.endpoint = Some(url);
        Ok(())
    }

    pub fn set_default_keyword(&mut self, keyword: String) {
        let keyword = keyword.trim().to_string();
        self.default_keyword = (!keyword.is_empty()).then_some(keyword);
    }
}
