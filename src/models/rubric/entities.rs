use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 评分项实体
//
// 历史评审记录保存评分项的文本/满分快照，这里的编辑和停用
// 不会回溯修改已记录的评分。
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/rubric.ts")]
pub struct RubricQuestion {
    pub id: i64,
    pub text: String,
    pub description: Option<String>,
    pub max_score: i32,
    pub weight_percent: f64,
    pub is_active: bool,
    pub sort_order: i32,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}
