use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 作品状态（由外部报名系统维护，核心只消费 Approved）
#[derive(Debug, Clone, Serialize, PartialEq, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "../frontend/src/types/generated/entry.ts")]
pub enum EntryStatus {
    Pending,  // 待审核
    Approved, // 已通过，可参与评审
    Rejected, // 已驳回
}

impl<'de> Deserialize<'de> for EntryStatus {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        match s.as_str() {
            "pending" => Ok(EntryStatus::Pending),
            "approved" => Ok(EntryStatus::Approved),
            "rejected" => Ok(EntryStatus::Rejected),
            _ => Err(serde::de::Error::custom(format!(
                "无效的作品状态: '{s}'. 支持的状态: pending, approved, rejected"
            ))),
        }
    }
}

impl std::fmt::Display for EntryStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EntryStatus::Pending => write!(f, "pending"),
            EntryStatus::Approved => write!(f, "approved"),
            EntryStatus::Rejected => write!(f, "rejected"),
        }
    }
}

impl std::str::FromStr for EntryStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(EntryStatus::Pending),
            "approved" => Ok(EntryStatus::Approved),
            "rejected" => Ok(EntryStatus::Rejected),
            _ => Err(format!("Invalid entry status: {s}")),
        }
    }
}

// 参赛作品实体
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/entry.ts")]
pub struct Entry {
    pub id: i64,
    pub code: String,
    pub title: String,
    pub status: EntryStatus,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

impl Entry {
    /// 只有已通过审核的作品可被分配评审、进入记分板
    pub fn is_eligible(&self) -> bool {
        self.status == EntryStatus::Approved
    }
}
