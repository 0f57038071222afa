use serde::Serialize;
use ts_rs::TS;

use crate::models::entries::entities::Entry;

/// 分配操作结果
///
/// skipped 是已存在而被幂等跳过的对数，重复执行同一分配
/// 请求时 created 归零、skipped 增长。
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/assignment.ts")]
pub struct AssignResultResponse {
    pub created: i64,
    pub skipped: i64,
}

/// 评委视角的分配列表项：作品 + 本人评审进度
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/assignment.ts")]
pub struct MyAssignmentItem {
    pub entry: Entry,
    /// 尚未开始评审时为 None
    pub evaluation_status: Option<String>,
    pub weighted_score: Option<f64>,
}

/// 评委分配列表响应
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/assignment.ts")]
pub struct MyAssignmentsResponse {
    pub items: Vec<MyAssignmentItem>,
}
