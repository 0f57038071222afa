use serde::Deserialize;
use ts_rs::TS;

/// 单评委分配请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/assignment.ts")]
pub struct AssignRequest {
    pub judge_id: i64,
    pub entry_ids: Vec<i64>,
}
