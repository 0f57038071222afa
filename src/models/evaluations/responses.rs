use serde::Serialize;
use ts_rs::TS;

use crate::models::PaginationInfo;
use crate::models::evaluations::entities::Evaluation;

/// 评审记录关联的评委信息
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/evaluation.ts")]
pub struct EvaluationJudge {
    pub id: i64,
    pub username: String,
    pub display_name: Option<String>,
}

/// 评审记录关联的作品信息
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/evaluation.ts")]
pub struct EvaluationEntryInfo {
    pub id: i64,
    pub code: String,
    pub title: String,
}

/// 评审记录列表项（管理员视角，带评委与作品信息）
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/evaluation.ts")]
pub struct EvaluationListItem {
    #[serde(flatten)]
    #[ts(flatten)]
    pub evaluation: Evaluation,
    pub judge: EvaluationJudge,
    pub entry: EvaluationEntryInfo,
}

/// 评审记录列表响应
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/evaluation.ts")]
pub struct EvaluationListResponse {
    pub items: Vec<EvaluationListItem>,
    pub pagination: PaginationInfo,
}

/// 批量锁定结果
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/evaluation.ts")]
pub struct LockAllResponse {
    /// 本次实际转换为 Locked 的记录数；重复执行时为 0
    pub locked_count: i64,
}
