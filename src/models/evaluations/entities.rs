use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 评审记录状态
//
// 状态机：Draft -> Submitted -> Locked，Submitted 可被管理员退回为
// SentBack，SentBack 修改后可再次 Submitted；Locked 只能由管理员
// 重新打开回到 Submitted。
#[derive(Debug, Clone, Copy, Serialize, PartialEq, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "../frontend/src/types/generated/evaluation.ts")]
pub enum EvaluationStatus {
    Draft,     // 草稿，评委可编辑
    Submitted, // 已提交，等待锁定或退回
    Locked,    // 已锁定，评委不可再写
    SentBack,  // 被退回，评委修改后重新提交
}

impl EvaluationStatus {
    pub const DRAFT: &'static str = "draft";
    pub const SUBMITTED: &'static str = "submitted";
    pub const LOCKED: &'static str = "locked";
    pub const SENT_BACK: &'static str = "sent_back";

    /// 评委是否可以保存/提交该状态下的记录
    pub fn is_editable(&self) -> bool {
        matches!(self, EvaluationStatus::Draft | EvaluationStatus::SentBack)
    }

    /// 是否计入记分板（草稿与退回中的记录不参与排名）
    pub fn is_countable(&self) -> bool {
        matches!(self, EvaluationStatus::Submitted | EvaluationStatus::Locked)
    }
}

impl<'de> Deserialize<'de> for EvaluationStatus {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse::<EvaluationStatus>().map_err(|_| {
            serde::de::Error::custom(format!(
                "无效的评审状态: '{s}'. 支持的状态: draft, submitted, locked, sent_back"
            ))
        })
    }
}

impl std::fmt::Display for EvaluationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EvaluationStatus::Draft => write!(f, "{}", Self::DRAFT),
            EvaluationStatus::Submitted => write!(f, "{}", Self::SUBMITTED),
            EvaluationStatus::Locked => write!(f, "{}", Self::LOCKED),
            EvaluationStatus::SentBack => write!(f, "{}", Self::SENT_BACK),
        }
    }
}

impl std::str::FromStr for EvaluationStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "draft" => Ok(EvaluationStatus::Draft),
            "submitted" => Ok(EvaluationStatus::Submitted),
            "locked" => Ok(EvaluationStatus::Locked),
            "sent_back" => Ok(EvaluationStatus::SentBack),
            _ => Err(format!("Invalid evaluation status: {s}")),
        }
    }
}

// 单项评分快照
//
// question_text / max_score 在打分时从评分项复制，之后评分项的
// 编辑或停用不影响已有记录。
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/evaluation.ts")]
pub struct Rating {
    pub question_id: i64,
    pub question_text: String,
    pub score: i32,
    pub max_score: i32,
    pub comment: Option<String>,
}

// 评审记录实体
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/evaluation.ts")]
pub struct Evaluation {
    pub id: i64,
    pub judge_id: i64,
    pub entry_id: i64,
    pub status: EvaluationStatus,
    pub ratings: Vec<Rating>,
    pub overall_comment: Option<String>,
    pub total_score: f64,
    pub max_possible_score: f64,
    pub weighted_score: f64,
    pub submitted_at: Option<chrono::DateTime<chrono::Utc>>,
    pub locked_at: Option<chrono::DateTime<chrono::Utc>>,
    pub sent_back_at: Option<chrono::DateTime<chrono::Utc>>,
    pub sent_back_reason: Option<String>,
    /// 乐观并发版本号，save/submit 请求需要带上读取时的值
    pub lock_version: i32,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_status_round_trip() {
        for s in ["draft", "submitted", "locked", "sent_back"] {
            assert_eq!(EvaluationStatus::from_str(s).unwrap().to_string(), s);
        }
        assert!(EvaluationStatus::from_str("graded").is_err());
    }

    #[test]
    fn test_editable_states() {
        assert!(EvaluationStatus::Draft.is_editable());
        assert!(EvaluationStatus::SentBack.is_editable());
        assert!(!EvaluationStatus::Submitted.is_editable());
        assert!(!EvaluationStatus::Locked.is_editable());
    }

    #[test]
    fn test_countable_states() {
        assert!(EvaluationStatus::Submitted.is_countable());
        assert!(EvaluationStatus::Locked.is_countable());
        assert!(!EvaluationStatus::Draft.is_countable());
        assert!(!EvaluationStatus::SentBack.is_countable());
    }
}
