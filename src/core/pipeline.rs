use crate::core::{extract, report, resolve};
use crate::domain::model::{RankResult, RunReport};
use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
use crate::utils::error::Result;
use reqwest::Client;
use std::time::Duration;
use url::Url;

pub struct RankPipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
    client: Client,
}

impl<S: Storage, C: ConfigProvider> RankPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Result<Self> {
        let client = Client::builder()
            .user_agent(config.user_agent())
            .timeout(Duration::from_secs(config.timeout_seconds()))
            .build()?;

        Ok(Self {
            storage,
            config,
            client,
        })
    }

    async fn fetch_page(&self, url: &str) -> Result<String> {
        let response = self.client.get(url).send().await?;
        tracing::debug!("HTTP {} for {}", response.status(), url);

        // 非 2xx 一律視為抓取失敗
        let response = response.error_for_status()?;
        Ok(response.text().await?)
    }
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider> Pipeline for RankPipeline<S, C> {
    async fn check(&self, url: &str) -> RankResult {
        let model = model_label(url);

        let html = match self.fetch_page(url).await {
            Ok(html) => html,
            Err(e) => {
                tracing::error!("❌ Request failed for {}: {}", url, e);
                return RankResult::request_error(model, url.to_string());
            }
        };

        let vendors = extract::extract_vendor_names(&html);
        tracing::debug!("Extracted {} vendor names from {}", vendors.len(), url);

        let resolution = resolve::resolve_rank(&vendors, self.config.keywords(), self.config.top_n());

        RankResult {
            model,
            url: url.to_string(),
            rank: resolution.rank,
            top3: resolution.top3,
            status: resolution.status,
        }
    }

    async fn load(&self, run: &RunReport) -> Result<String> {
        let document = report::csv_document(&run.results)?;

        tracing::debug!(
            "Writing CSV report ({} rows) to storage",
            run.results.len()
        );
        self.storage
            .write_file(self.config.csv_filename(), document.as_bytes())
            .await?;

        Ok(format!(
            "{}/{}",
            self.config.output_path(),
            self.config.csv_filename()
        ))
    }
}

/// 由 URL 推導人類可讀的型號標籤：取最後一段路徑，連字號換成空格後轉大寫
pub fn model_label(url: &str) -> String {
    let slug = Url::parse(url)
        .ok()
        .and_then(|parsed| {
            let last_segment = parsed.path_segments().and_then(|segments| {
                segments
                    .filter(|segment| !segment.is_empty())
                    .last()
                    .map(str::to_string)
            });
            last_segment.or_else(|| parsed.host_str().map(str::to_string))
        })
        .unwrap_or_else(|| {
            url.trim_end_matches('/')
                .rsplit('/')
                .next()
                .unwrap_or(url)
                .to_string()
        });

    slug.replace('-', " ").to_uppercase()
}
