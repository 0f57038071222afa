use serde::Serialize;
use ts_rs::TS;

/// 记分板行（按需计算，不落库）
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/scoreboard.ts")]
pub struct ScoreboardRow {
    pub rank: i64,
    pub entry_id: i64,
    pub entry_code: String,
    pub entry_title: String,
    /// 可计入评审加权分的平均值，保留两位小数；无可计入评审时为 0
    pub average_score: f64,
    pub evaluation_count: i64,
}

/// 记分板响应
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/scoreboard.ts")]
pub struct ScoreboardResponse {
    pub rows: Vec<ScoreboardRow>,
    pub generated_at: chrono::DateTime<chrono::Utc>,
}
