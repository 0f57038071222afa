use serde::Deserialize;
use ts_rs::TS;

use crate::models::evaluations::entities::EvaluationStatus;

/// 保存评审时的单项打分输入
///
/// 只接受 question_id / score / comment，文本与满分快照由服务端
/// 从当前评分项补齐，不信任调用方传入的派生值。
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/evaluation.ts")]
pub struct RatingInput {
    pub question_id: i64,
    pub score: i32,
    pub comment: Option<String>,
}

/// 保存评审请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/evaluation.ts")]
pub struct SaveEvaluationRequest {
    pub ratings: Vec<RatingInput>,
    pub overall_comment: Option<String>,
    /// 读取记录时拿到的版本号；与当前值不一致说明记录已被他人修改
    pub lock_version: i32,
}

/// 提交评审请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/evaluation.ts")]
pub struct SubmitEvaluationRequest {
    pub lock_version: i32,
}

/// 管理员退回请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/evaluation.ts")]
pub struct SendBackRequest {
    pub reason: String,
}

/// 评审记录列表查询参数
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/evaluation.ts")]
pub struct EvaluationListQuery {
    pub page: Option<i64>,
    pub size: Option<i64>,
    pub entry_id: Option<i64>,
    pub judge_id: Option<i64>,
    pub status: Option<EvaluationStatus>,
}
