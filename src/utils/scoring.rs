//! 评分计算
//!
//! 纯函数：从评分快照算出总分、满分和加权得分，不触碰存储。
//! 每次保存评审时都重新计算，不信任调用方传入的派生值。

use std::collections::HashMap;

use crate::models::evaluations::entities::Rating;
use crate::models::evaluations::requests::RatingInput;
use crate::models::rubric::entities::RubricQuestion;

/// 一条评审记录的派生分数
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreTotals {
    pub total_score: f64,
    pub max_possible_score: f64,
    pub weighted_score: f64,
}

/// 计算派生分数
///
/// weighted_score = Σ (score / max_score) * 该评分项的权重。
/// max_score 快照为 0 的评分按零贡献跳过，不做除零运算；
/// 权重表中找不到的评分项（例如后来被物理清理的历史项）同样按零贡献处理。
pub fn compute_totals(ratings: &[Rating], weights: &HashMap<i64, f64>) -> ScoreTotals {
    let mut total_score = 0.0;
    let mut max_possible_score = 0.0;
    let mut weighted_score = 0.0;

    for rating in ratings {
        total_score += rating.score as f64;
        max_possible_score += rating.max_score as f64;

        if rating.max_score == 0 {
            continue;
        }
        if let Some(weight) = weights.get(&rating.question_id) {
            weighted_score += (rating.score as f64 / rating.max_score as f64) * weight;
        }
    }

    ScoreTotals {
        total_score,
        max_possible_score,
        weighted_score,
    }
}

/// 百分比便捷值，满分为 0 时返回 0
pub fn percentage(total_score: f64, max_possible_score: f64) -> f64 {
    if max_possible_score == 0.0 {
        0.0
    } else {
        total_score / max_possible_score * 100.0
    }
}

/// 启用评分项的权重和（应当为 100，偏离时仅告警）
pub fn weight_sum(questions: &[RubricQuestion]) -> f64 {
    questions
        .iter()
        .filter(|q| q.is_active)
        .map(|q| q.weight_percent)
        .sum()
}

/// 构造评分项权重表（包含停用项，保证历史评分不因停用被清零）
pub fn weight_table(questions: &[RubricQuestion]) -> HashMap<i64, f64> {
    questions
        .iter()
        .map(|q| (q.id, q.weight_percent))
        .collect()
}

/// 将打分输入校验并补齐为快照
///
/// 校验规则：评分项必须存在且处于启用状态，分值在 0..=max_score 之间，
/// 同一评分项不允许出现两次。任何一条不合法则整体拒绝。
pub fn build_ratings(
    inputs: &[RatingInput],
    active_questions: &[RubricQuestion],
) -> Result<Vec<Rating>, String> {
    let by_id: HashMap<i64, &RubricQuestion> =
        active_questions.iter().map(|q| (q.id, q)).collect();

    let mut seen: Vec<i64> = Vec::with_capacity(inputs.len());
    let mut ratings = Vec::with_capacity(inputs.len());

    for input in inputs {
        let question = by_id
            .get(&input.question_id)
            .ok_or_else(|| format!("评分项不存在或已停用: {}", input.question_id))?;

        if seen.contains(&input.question_id) {
            return Err(format!("评分项重复打分: {}", input.question_id));
        }
        seen.push(input.question_id);

        if input.score < 0 || input.score > question.max_score {
            return Err(format!(
                "评分项 {} 的分值 {} 超出范围 0..={}",
                question.id, input.score, question.max_score
            ));
        }

        ratings.push(Rating {
            question_id: question.id,
            question_text: question.text.clone(),
            score: input.score,
            max_score: question.max_score,
            comment: input.comment.clone(),
        });
    }

    Ok(ratings)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn question(id: i64, max_score: i32, weight_percent: f64) -> RubricQuestion {
        RubricQuestion {
            id,
            text: format!("question-{id}"),
            description: None,
            max_score,
            weight_percent,
            is_active: true,
            sort_order: id as i32,
            created_at: chrono::Utc::now(),
            updated_at: chrono::Utc::now(),
        }
    }

    fn rating(question_id: i64, score: i32, max_score: i32) -> Rating {
        Rating {
            question_id,
            question_text: format!("question-{question_id}"),
            score,
            max_score,
            comment: None,
        }
    }

    #[test]
    fn test_weighted_score_worked_example() {
        // 两个评分项：满分10/权重60 与 满分5/权重40，打 8 分和 5 分
        let questions = vec![question(1, 10, 60.0), question(2, 5, 40.0)];
        let weights = weight_table(&questions);
        let ratings = vec![rating(1, 8, 10), rating(2, 5, 5)];

        let totals = compute_totals(&ratings, &weights);
        assert_eq!(totals.total_score, 13.0);
        assert_eq!(totals.max_possible_score, 15.0);
        assert_eq!(totals.weighted_score, 88.0);
    }

    #[test]
    fn test_all_zero_scores_give_zero_weighted() {
        let questions = vec![question(1, 10, 60.0), question(2, 5, 40.0)];
        let weights = weight_table(&questions);
        let ratings = vec![rating(1, 0, 10), rating(2, 0, 5)];

        let totals = compute_totals(&ratings, &weights);
        assert_eq!(totals.total_score, 0.0);
        assert_eq!(totals.weighted_score, 0.0);
    }

    #[test]
    fn test_weighted_score_bounded_by_weight_sum() {
        let questions = vec![question(1, 10, 60.0), question(2, 5, 40.0)];
        let weights = weight_table(&questions);
        let ratings = vec![rating(1, 10, 10), rating(2, 5, 5)];

        let totals = compute_totals(&ratings, &weights);
        assert_eq!(totals.weighted_score, 100.0);
        assert!(totals.weighted_score <= weight_sum(&questions));
    }

    #[test]
    fn test_zero_max_snapshot_is_skipped() {
        let questions = vec![question(1, 10, 50.0), question(2, 5, 50.0)];
        let weights = weight_table(&questions);
        // 历史脏数据：max_score 快照为 0，不能触发除零
        let ratings = vec![rating(1, 0, 0), rating(2, 5, 5)];

        let totals = compute_totals(&ratings, &weights);
        assert_eq!(totals.weighted_score, 50.0);
    }

    #[test]
    fn test_unknown_question_contributes_zero_weight() {
        let questions = vec![question(1, 10, 100.0)];
        let weights = weight_table(&questions);
        let ratings = vec![rating(1, 10, 10), rating(999, 5, 5)];

        let totals = compute_totals(&ratings, &weights);
        assert_eq!(totals.weighted_score, 100.0);
        assert_eq!(totals.total_score, 15.0);
    }

    #[test]
    fn test_percentage_guards_division_by_zero() {
        assert_eq!(percentage(0.0, 0.0), 0.0);
        assert_eq!(percentage(13.0, 15.0), 13.0 / 15.0 * 100.0);
    }

    #[test]
    fn test_weight_sum_ignores_inactive() {
        let mut questions = vec![question(1, 10, 60.0), question(2, 5, 40.0)];
        questions[1].is_active = false;
        assert_eq!(weight_sum(&questions), 60.0);
    }

    #[test]
    fn test_build_ratings_snapshots_question_fields() {
        let questions = vec![question(1, 10, 60.0)];
        let inputs = vec![RatingInput {
            question_id: 1,
            score: 7,
            comment: Some("solid".to_string()),
        }];

        let ratings = build_ratings(&inputs, &questions).unwrap();
        assert_eq!(ratings[0].question_text, "question-1");
        assert_eq!(ratings[0].max_score, 10);
        assert_eq!(ratings[0].score, 7);
    }

    #[test]
    fn test_build_ratings_rejects_unknown_question() {
        let questions = vec![question(1, 10, 60.0)];
        let inputs = vec![RatingInput {
            question_id: 2,
            score: 1,
            comment: None,
        }];
        assert!(build_ratings(&inputs, &questions).is_err());
    }

    #[test]
    fn test_build_ratings_rejects_out_of_range_score() {
        let questions = vec![question(1, 10, 60.0)];
        let too_big = vec![RatingInput {
            question_id: 1,
            score: 11,
            comment: None,
        }];
        let negative = vec![RatingInput {
            question_id: 1,
            score: -1,
            comment: None,
        }];
        assert!(build_ratings(&too_big, &questions).is_err());
        assert!(build_ratings(&negative, &questions).is_err());
    }

    #[test]
    fn test_build_ratings_rejects_duplicate_question() {
        let questions = vec![question(1, 10, 60.0)];
        let inputs = vec![
            RatingInput {
                question_id: 1,
                score: 5,
                comment: None,
            },
            RatingInput {
                question_id: 1,
                score: 6,
                comment: None,
            },
        ];
        assert!(build_ratings(&inputs, &questions).is_err());
    }
}
