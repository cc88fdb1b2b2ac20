use crate::domain::model::{RankResult, RunReport};
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn top_n(&self) -> usize;
    fn keywords(&self) -> &[String];
    fn timeout_seconds(&self) -> u64;
    fn user_agent(&self) -> &str;
    fn output_path(&self) -> &str;
    fn csv_filename(&self) -> &str;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    /// 抓取單一 URL 並解析出目標供應商的名次；請求失敗折入結果本身
    async fn check(&self, url: &str) -> RankResult;
    /// 將整次執行的結果寫出為 CSV 報表，回傳輸出路徑
    async fn load(&self, report: &RunReport) -> Result<String>;
}
