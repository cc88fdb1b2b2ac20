use crate::core::report;
use crate::domain::model::{RankOutcome, RankResult, RunReport, Status};
use crate::domain::ports::Pipeline;
use crate::utils::error::Result;

pub struct WatchEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> WatchEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    /// 逐一檢查每個 URL，彙整結果並寫出 CSV 報表，回傳報表路徑。
    ///
    /// 嚴格循序：前一個 URL 完整處理完才開始下一個。單一 URL 失敗
    /// 只影響該列結果，不中斷整次執行。
    pub async fn run(&self, urls: &[String], top_n: usize) -> Result<String> {
        let mut results = Vec::with_capacity(urls.len());

        for url in urls {
            println!("\nChecking: {}", url);
            let result = self.pipeline.check(url).await;
            print_check_line(&result);
            results.push(result);
        }

        let run = RunReport::new(results);

        print_alert_summary(&run, top_n);

        println!("\n=== FULL TABLE (Markdown) ===");
        println!("{}", report::markdown_table(&run.results));

        let csv_path = self.pipeline.load(&run).await?;
        println!("\nCSV saved: {}", csv_path);

        Ok(csv_path)
    }
}

fn print_check_line(result: &RankResult) {
    match &result.rank {
        RankOutcome::RequestError => println!("❌ REQUEST ERROR"),
        RankOutcome::Missing => {
            println!("❌ BT-MINERS: MISSING | Top3: {:?}", result.top3);
        }
        RankOutcome::Ranked(rank) => match result.status {
            Status::Ok => println!("✅ BT-MINERS rank #{} | Top3: {:?}", rank, result.top3),
            Status::Alert => println!("❌ BT-MINERS rank #{} | Top3: {:?}", rank, result.top3),
        },
    }
}

fn print_alert_summary(run: &RunReport, top_n: usize) {
    println!("\n=== ALERT SUMMARY ===");

    let lines = report::alert_lines(run);
    if lines.is_empty() {
        println!("🎉 All URLs are within Top {}", top_n);
    } else {
        for line in lines {
            println!("{}", line);
        }
    }
}
