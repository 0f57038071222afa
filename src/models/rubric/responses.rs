use serde::Serialize;
use ts_rs::TS;

use crate::models::rubric::entities::RubricQuestion;

/// 评分项列表响应
///
/// weight_sum 是当前启用评分项的权重和，应当等于 100；
/// 偏离时由运营方自行校正，计算逻辑不受影响。
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/rubric.ts")]
pub struct QuestionListResponse {
    pub items: Vec<RubricQuestion>,
    pub weight_sum: f64,
}
