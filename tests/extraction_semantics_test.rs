use httpmock::prelude::*;
use rank_watch::core::extract::extract_vendor_names;
use rank_watch::domain::model::RankOutcome;
use rank_watch::domain::ports::Pipeline;
use rank_watch::{LocalStorage, RankPipeline, WatchConfig};
use tempfile::TempDir;

fn pipeline_for(output_path: &str, url: &str) -> RankPipeline<LocalStorage, WatchConfig> {
    let content = serde_json::json!({
        "urls": [url],
        "output_path": output_path,
        "timeout_seconds": 5,
    });
    let config = WatchConfig::from_json_str(&content.to_string()).unwrap();
    RankPipeline::new(LocalStorage::new(output_path.to_string()), config).unwrap()
}

#[tokio::test]
async fn test_duplicate_vendor_links_count_once_for_ranking() {
    let temp_dir = TempDir::new().unwrap();
    let output_path = temp_dir.path().to_str().unwrap().to_string();

    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/gear/antminer-s21");
        then.status(200).header("Content-Type", "text/html").body(
            r#"<html><body>
                <a href="/vendors/acme">Acme Corp</a>
                <a href="/vendors/acme?ref=sidebar">Acme Corp</a>
                <a href="/vendors/bt-miners">BT-Miners.com</a>
            </body></html>"#,
        );
    });

    let url = server.url("/gear/antminer-s21");
    let pipeline = pipeline_for(&output_path, &url);
    let result = pipeline.check(&url).await;

    // 重複條目只算一次，BT-Miners 實際名次是第 2 不是第 3
    assert_eq!(result.rank, RankOutcome::Ranked(2));
    assert_eq!(result.top3, vec!["Acme Corp", "BT-Miners.com"]);
}

#[tokio::test]
async fn test_primary_links_shadow_table_even_when_sparse() {
    let temp_dir = TempDir::new().unwrap();
    let output_path = temp_dir.path().to_str().unwrap().to_string();

    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/gear/whatsminer-m60");
        then.status(200).header("Content-Type", "text/html").body(
            r#"<html><body>
                <a href="/vendors/acme">Acme Corp</a>
                <table>
                    <tr><td>BT-Miners.com</td></tr>
                    <tr><td>ZenHash</td></tr>
                </table>
            </body></html>"#,
        );
    });

    let url = server.url("/gear/whatsminer-m60");
    let pipeline = pipeline_for(&output_path, &url);
    let result = pipeline.check(&url).await;

    // 主要策略有任何結果就不退回表格，即使因此判定 missing
    assert_eq!(result.rank, RankOutcome::Missing);
    assert_eq!(result.top3, vec!["Acme Corp"]);
}

#[test]
fn test_extractor_is_pure_over_raw_markup() {
    let html = r#"
        <html><body>
            <div><a href="/vendors/zenhash"> Zen
                Hash </a></div>
            <a href="/vendors/bt-miners"><b>BT-Miners.com</b></a>
        </body></html>
    "#;

    let first = extract_vendor_names(html);
    let second = extract_vendor_names(html);

    assert_eq!(first, vec!["Zen Hash", "BT-Miners.com"]);
    assert_eq!(first, second);
}
