use serde::Deserialize;
use ts_rs::TS;

/// 创建评分项请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/rubric.ts")]
pub struct CreateQuestionRequest {
    pub text: String,
    pub description: Option<String>,
    pub max_score: i32,
    pub weight_percent: f64,
    pub sort_order: Option<i32>,
}

/// 更新评分项请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/rubric.ts")]
pub struct UpdateQuestionRequest {
    pub text: Option<String>,
    pub description: Option<String>,
    pub max_score: Option<i32>,
    pub weight_percent: Option<f64>,
    pub sort_order: Option<i32>,
}
