use crate::domain::model::{RankResult, RunReport};
use crate::utils::error::{RankError, Result};

pub const CSV_HEADER: [&str; 5] = ["Model", "URL", "BT Rank", "Top 3 Vendors", "Status"];

const TOP3_SEPARATOR: &str = " / ";

/// 全量結果的 Markdown 表格
pub fn markdown_table(results: &[RankResult]) -> String {
    let mut lines = vec![
        "| Model | URL | BT Rank | Top 3 Vendors | Status |".to_string(),
        "|---|---|---:|---|---|".to_string(),
    ];

    for row in results {
        lines.push(format!(
            "| {} | {} | {} | {} | {} |",
            row.model,
            row.url,
            row.rank,
            row.top3.join(TOP3_SEPARATOR),
            row.status
        ));
    }

    lines.join("\n")
}

/// CSV 報表內容，一個 URL 一列
pub fn csv_document(results: &[RankResult]) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(CSV_HEADER)?;

    for row in results {
        let rank = row.rank.to_string();
        let top3 = row.top3.join(TOP3_SEPARATOR);
        let status = row.status.to_string();
        writer.write_record([
            row.model.as_str(),
            row.url.as_str(),
            rank.as_str(),
            top3.as_str(),
            status.as_str(),
        ])?;
    }

    let buffer = writer
        .into_inner()
        .map_err(|e| RankError::ProcessingError {
            message: format!("CSV buffer error: {}", e),
        })?;
    String::from_utf8(buffer).map_err(|e| RankError::ProcessingError {
        message: format!("CSV encoding error: {}", e),
    })
}

/// 警報摘要的逐行輸出
pub fn alert_lines(report: &RunReport) -> Vec<String> {
    report
        .alerts()
        .iter()
        .map(|alert| {
            format!(
                "ALERT: {} | {} | {} | Top3: {:?}",
                alert.model,
                alert.alert_reason(),
                alert.url,
                alert.top3
            )
        })
        .collect()
}
