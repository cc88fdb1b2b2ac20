use crate::domain::model::{RankOutcome, Status};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub rank: RankOutcome,
    pub top3: Vec<String>,
    pub status: Status,
}

/// 在有序供應商清單中找出目標供應商的 1-based 名次。
///
/// 比對為大小寫不敏感、去前後空白的子字串測試，最先命中的條目即為結果。
/// top3 永遠是清單前三筆原文，與比對結果無關。
pub fn resolve_rank(vendors: &[String], keywords: &[String], top_n: usize) -> Resolution {
    let top3: Vec<String> = vendors.iter().take(3).cloned().collect();

    let position = vendors.iter().position(|name| {
        let normalized = normalize(name);
        keywords
            .iter()
            .any(|keyword| normalized.contains(&normalize(keyword)))
    });

    match position {
        Some(index) => {
            let rank = index + 1;
            let status = if rank <= top_n {
                Status::Ok
            } else {
                Status::Alert
            };
            Resolution {
                rank: RankOutcome::Ranked(rank),
                top3,
                status,
            }
        }
        None => Resolution {
            rank: RankOutcome::Missing,
            top3,
            status: Status::Alert,
        },
    }
}

fn normalize(value: &str) -> String {
    value.trim().to_lowercase()
}
