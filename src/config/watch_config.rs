use crate::domain::ports::ConfigProvider;
use crate::utils::error::{RankError, Result};
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// 目標供應商的固定關鍵字集合
pub const DEFAULT_VENDOR_KEYWORDS: &[&str] = &["bt-miners", "bt miners", "bt-miners.com"];

const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 Chrome/120.0.0.0 Safari/537.36";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WatchConfig {
    pub urls: Vec<String>,

    #[serde(default = "default_top_n")]
    pub top_n: usize,

    #[serde(default = "default_keywords")]
    pub keywords: Vec<String>,

    #[serde(default = "default_output_path")]
    pub output_path: String,

    #[serde(default = "default_csv_filename")]
    pub csv_filename: String,

    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,

    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

fn default_top_n() -> usize {
    3
}

fn default_keywords() -> Vec<String> {
    DEFAULT_VENDOR_KEYWORDS
        .iter()
        .map(|keyword| keyword.to_string())
        .collect()
}

fn default_output_path() -> String {
    ".".to_string()
}

fn default_csv_filename() -> String {
    "rank_report.csv".to_string()
}

fn default_timeout_seconds() -> u64 {
    25
}

fn default_user_agent() -> String {
    DEFAULT_USER_AGENT.to_string()
}

impl WatchConfig {
    /// 從 JSON 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(RankError::IoError)?;
        Self::from_json_str(&content)
    }

    /// 從 JSON 字串解析配置
    pub fn from_json_str(content: &str) -> Result<Self> {
        serde_json::from_str(content).map_err(|e| RankError::ConfigError {
            message: format!("JSON parsing error: {}", e),
        })
    }

    /// 驗證配置的合理性，任何違規都會在處理任何 URL 前中止整次執行
    pub fn validate_config(&self) -> Result<()> {
        if self.urls.is_empty() {
            return Err(RankError::InvalidConfigValueError {
                field: "urls".to_string(),
                value: "[]".to_string(),
                reason: "At least one URL is required".to_string(),
            });
        }

        for url in &self.urls {
            validation::validate_url("urls", url)?;
        }

        validation::validate_positive_number("top_n", self.top_n, 1)?;
        validation::validate_positive_number("timeout_seconds", self.timeout_seconds as usize, 1)?;
        validation::validate_path("output_path", &self.output_path)?;
        validation::validate_non_empty_string("csv_filename", &self.csv_filename)?;

        if self.keywords.is_empty() {
            return Err(RankError::InvalidConfigValueError {
                field: "keywords".to_string(),
                value: "[]".to_string(),
                reason: "At least one vendor keyword is required".to_string(),
            });
        }

        Ok(())
    }
}

impl ConfigProvider for WatchConfig {
    fn top_n(&self) -> usize {
        self.top_n
    }

    fn keywords(&self) -> &[String] {
        &self.keywords
    }

    fn timeout_seconds(&self) -> u64 {
        self.timeout_seconds
    }

    fn user_agent(&self) -> &str {
        &self.user_agent
    }

    fn output_path(&self) -> &str {
        &self.output_path
    }

    fn csv_filename(&self) -> &str {
        &self.csv_filename
    }
}

impl Validate for WatchConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
