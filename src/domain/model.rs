use std::fmt;

/// 每個 URL 的檢查狀態
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Ok,
    Alert,
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Status::Ok => write!(f, "OK"),
            Status::Alert => write!(f, "ALERT"),
        }
    }
}

/// 目標供應商在頁面排序中的位置
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RankOutcome {
    /// 1-based 名次
    Ranked(usize),
    /// 頁面成功解析，但沒有任何條目符合關鍵字
    Missing,
    /// 請求失敗（網路錯誤、逾時或非 2xx 回應）
    RequestError,
}

impl fmt::Display for RankOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RankOutcome::Ranked(rank) => write!(f, "#{}", rank),
            RankOutcome::Missing => write!(f, "missing"),
            RankOutcome::RequestError => write!(f, "request_error"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankResult {
    pub model: String,
    pub url: String,
    pub rank: RankOutcome,
    pub top3: Vec<String>,
    pub status: Status,
}

impl RankResult {
    pub fn request_error(model: String, url: String) -> Self {
        Self {
            model,
            url,
            rank: RankOutcome::RequestError,
            top3: Vec::new(),
            status: Status::Alert,
        }
    }

    pub fn is_alert(&self) -> bool {
        self.status == Status::Alert
    }

    /// 警報摘要行使用的原因字串
    pub fn alert_reason(&self) -> String {
        match &self.rank {
            RankOutcome::RequestError => "REQUEST ERROR".to_string(),
            RankOutcome::Missing => "missing".to_string(),
            RankOutcome::Ranked(rank) => format!("#{}", rank),
        }
    }
}

/// 單次執行的完整結果集，順序與輸入 URL 順序一致
#[derive(Debug, Clone)]
pub struct RunReport {
    pub results: Vec<RankResult>,
}

impl RunReport {
    pub fn new(results: Vec<RankResult>) -> Self {
        Self { results }
    }

    pub fn alerts(&self) -> Vec<&RankResult> {
        self.results.iter().filter(|r| r.is_alert()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rank_outcome_display() {
        assert_eq!(RankOutcome::Ranked(2).to_string(), "#2");
        assert_eq!(RankOutcome::Missing.to_string(), "missing");
        assert_eq!(RankOutcome::RequestError.to_string(), "request_error");
    }

    #[test]
    fn test_request_error_result_has_empty_top3() {
        let result = RankResult::request_error("ANTMINER S21".to_string(), "https://example.com/antminer-s21".to_string());
        assert_eq!(result.rank, RankOutcome::RequestError);
        assert!(result.top3.is_empty());
        assert_eq!(result.status, Status::Alert);
        assert_eq!(result.alert_reason(), "REQUEST ERROR");
    }

    #[test]
    fn test_run_report_alert_subset() {
        let ok = RankResult {
            model: "A".to_string(),
            url: "https://example.com/a".to_string(),
            rank: RankOutcome::Ranked(1),
            top3: vec!["BT-Miners.com".to_string()],
            status: Status::Ok,
        };
        let missing = RankResult {
            model: "B".to_string(),
            url: "https://example.com/b".to_string(),
            rank: RankOutcome::Missing,
            top3: vec!["Acme Corp".to_string()],
            status: Status::Alert,
        };
        let report = RunReport::new(vec![ok, missing]);

        let alerts = report.alerts();
        assert_eq!(alerts.len(), 1);
        assert_eq!(alerts[0].model, "B");
        assert_eq!(alerts[0].alert_reason(), "missing");
    }
}
