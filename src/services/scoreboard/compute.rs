use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::collections::HashMap;

use super::ScoreboardService;
use crate::models::entries::entities::Entry;
use crate::models::evaluations::entities::Evaluation;
use crate::models::scoreboard::responses::{ScoreboardResponse, ScoreboardRow};
use crate::models::{ApiResponse, ErrorCode};

/// 计算当前记分板
///
/// 每次请求从存储读出可计入评审（Submitted/Locked）现算，
/// 不落库；草稿与退回中的记录不参与排名。
pub async fn get_scoreboard(
    service: &ScoreboardService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let entries = match storage.list_eligible_entries().await {
        Ok(entries) => entries,
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("查询可评审作品失败: {e}"),
                )),
            );
        }
    };

    let evaluations = match storage.list_countable_evaluations().await {
        Ok(evaluations) => evaluations,
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("查询可计入评审失败: {e}"),
                )),
            );
        }
    };

    let rows = rank_entries(&entries, &evaluations);

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        ScoreboardResponse {
            rows,
            generated_at: chrono::Utc::now(),
        },
        "查询成功",
    )))
}

/// 对可评审作品排名
///
/// 排序规则：
/// 1. 有可计入评审的作品按平均加权分降序；
/// 2. 平均分相同按作品编号升序（编号唯一，排序确定）；
/// 3. 没有任何可计入评审的作品列在最后（平均分记 0），同样按编号升序。
/// 平均分保留两位小数。
pub fn rank_entries(entries: &[Entry], evaluations: &[Evaluation]) -> Vec<ScoreboardRow> {
    // 按作品聚合加权分
    let mut scores_by_entry: HashMap<i64, Vec<f64>> = HashMap::new();
    for evaluation in evaluations {
        scores_by_entry
            .entry(evaluation.entry_id)
            .or_default()
            .push(evaluation.weighted_score);
    }

    let mut rows: Vec<ScoreboardRow> = entries
        .iter()
        .map(|entry| {
            let scores = scores_by_entry.get(&entry.id);
            let evaluation_count = scores.map(|s| s.len()).unwrap_or(0) as i64;
            let average_score = match scores {
                Some(scores) if !scores.is_empty() => {
                    let sum: f64 = scores.iter().sum();
                    ((sum / scores.len() as f64) * 100.0).round() / 100.0
                }
                _ => 0.0,
            };

            ScoreboardRow {
                rank: 0,
                entry_id: entry.id,
                entry_code: entry.code.clone(),
                entry_title: entry.title.clone(),
                average_score,
                evaluation_count,
            }
        })
        .collect();

    rows.sort_by(|a, b| {
        // 零评审的作品永远排在有评审的作品之后
        let a_empty = a.evaluation_count == 0;
        let b_empty = b.evaluation_count == 0;
        a_empty
            .cmp(&b_empty)
            .then_with(|| {
                b.average_score
                    .partial_cmp(&a.average_score)
                    .unwrap_or(std::cmp::Ordering::Equal)
            })
            .then_with(|| a.entry_code.cmp(&b.entry_code))
    });

    for (index, row) in rows.iter_mut().enumerate() {
        row.rank = index as i64 + 1;
    }

    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::entries::entities::EntryStatus;
    use crate::models::evaluations::entities::EvaluationStatus;

    fn entry(id: i64, code: &str) -> Entry {
        Entry {
            id,
            code: code.to_string(),
            title: format!("entry-{code}"),
            status: EntryStatus::Approved,
            created_at: chrono::Utc::now(),
            updated_at: chrono::Utc::now(),
        }
    }

    fn evaluation(entry_id: i64, weighted_score: f64) -> Evaluation {
        Evaluation {
            id: 0,
            judge_id: 1,
            entry_id,
            status: EvaluationStatus::Submitted,
            ratings: vec![],
            overall_comment: None,
            total_score: 0.0,
            max_possible_score: 0.0,
            weighted_score,
            submitted_at: None,
            locked_at: None,
            sent_back_at: None,
            sent_back_reason: None,
            lock_version: 0,
            created_at: chrono::Utc::now(),
            updated_at: chrono::Utc::now(),
        }
    }

    #[test]
    fn test_average_over_countable_evaluations() {
        let entries = vec![entry(1, "A01")];
        let evaluations = vec![evaluation(1, 80.0), evaluation(1, 90.0)];

        let rows = rank_entries(&entries, &evaluations);
        assert_eq!(rows[0].average_score, 85.0);
        assert_eq!(rows[0].evaluation_count, 2);
    }

    #[test]
    fn test_ranking_descending_by_average() {
        let entries = vec![entry(1, "A01"), entry(2, "A02"), entry(3, "A03")];
        let evaluations = vec![
            evaluation(1, 70.0),
            evaluation(2, 95.0),
            evaluation(3, 88.0),
        ];

        let rows = rank_entries(&entries, &evaluations);
        assert_eq!(rows[0].entry_id, 2);
        assert_eq!(rows[0].rank, 1);
        assert_eq!(rows[1].entry_id, 3);
        assert_eq!(rows[2].entry_id, 1);
        assert_eq!(rows[2].rank, 3);
    }

    #[test]
    fn test_tie_broken_by_entry_code() {
        let entries = vec![entry(1, "B02"), entry(2, "B01")];
        let evaluations = vec![evaluation(1, 88.0), evaluation(2, 88.0)];

        let rows = rank_entries(&entries, &evaluations);
        // 平均分相同时编号小的在前
        assert_eq!(rows[0].entry_code, "B01");
        assert_eq!(rows[1].entry_code, "B02");
        assert_eq!(rows[0].rank, 1);
        assert_eq!(rows[1].rank, 2);
    }

    #[test]
    fn test_entry_without_evaluations_listed_last() {
        let entries = vec![entry(1, "A01"), entry(2, "A02")];
        // A01 没有任何可计入评审，即便 A02 平均分是 0 也排在 A01 前面
        let evaluations = vec![evaluation(2, 0.0)];

        let rows = rank_entries(&entries, &evaluations);
        assert_eq!(rows[0].entry_id, 2);
        assert_eq!(rows[0].evaluation_count, 1);
        assert_eq!(rows[1].entry_id, 1);
        assert_eq!(rows[1].average_score, 0.0);
        assert_eq!(rows[1].evaluation_count, 0);
    }

    #[test]
    fn test_average_rounded_to_two_decimals() {
        let entries = vec![entry(1, "A01")];
        let evaluations = vec![
            evaluation(1, 88.0),
            evaluation(1, 88.0),
            evaluation(1, 89.0),
        ];

        let rows = rank_entries(&entries, &evaluations);
        assert_eq!(rows[0].average_score, 88.33);
    }
}
