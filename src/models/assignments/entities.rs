use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 评审分配关系：存在即表示该评委可以评审该作品
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/assignment.ts")]
pub struct Assignment {
    pub id: i64,
    pub judge_id: i64,
    pub entry_id: i64,
    pub created_at: chrono::DateTime<chrono::Utc>,
}
