//! 评审记录实体
//!
//! (judge_id, entry_id) 上有唯一索引，懒创建依赖该约束防止并发重复。
//! ratings 列以 JSON 文本保存评分快照；lock_version 用于乐观并发控制。

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "evaluations")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub judge_id: i64,
    pub entry_id: i64,
    pub status: String,
    #[sea_orm(column_type = "Text")]
    pub ratings: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub overall_comment: Option<String>,
    pub total_score: f64,
    pub max_possible_score: f64,
    pub weighted_score: f64,
    pub submitted_at: Option<i64>,
    pub locked_at: Option<i64>,
    pub sent_back_at: Option<i64>,
    #[sea_orm(column_type = "Text", nullable)]
    pub sent_back_reason: Option<String>,
    pub lock_version: i32,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::JudgeId",
        to = "super::users::Column::Id"
    )]
    Judge,
    #[sea_orm(
        belongs_to = "super::entries::Entity",
        from = "Column::EntryId",
        to = "super::entries::Column::Id"
    )]
    Entry,
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Judge.def()
    }
}

impl Related<super::entries::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Entry.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_evaluation(self) -> crate::models::evaluations::entities::Evaluation {
        use crate::models::evaluations::entities::{Evaluation, EvaluationStatus, Rating};
        use chrono::{DateTime, Utc};

        // ratings 列损坏时按空列表处理，读取路径不因历史脏数据中断
        let ratings: Vec<Rating> = serde_json::from_str(&self.ratings).unwrap_or_default();

        Evaluation {
            id: self.id,
            judge_id: self.judge_id,
            entry_id: self.entry_id,
            status: self
                .status
                .parse::<EvaluationStatus>()
                .unwrap_or(EvaluationStatus::Draft),
            ratings,
            overall_comment: self.overall_comment,
            total_score: self.total_score,
            max_possible_score: self.max_possible_score,
            weighted_score: self.weighted_score,
            submitted_at: self
                .submitted_at
                .map(|ts| DateTime::<Utc>::from_timestamp(ts, 0).unwrap_or_default()),
            locked_at: self
                .locked_at
                .map(|ts| DateTime::<Utc>::from_timestamp(ts, 0).unwrap_or_default()),
            sent_back_at: self
                .sent_back_at
                .map(|ts| DateTime::<Utc>::from_timestamp(ts, 0).unwrap_or_default()),
            sent_back_reason: self.sent_back_reason,
            lock_version: self.lock_version,
            created_at: DateTime::<Utc>::from_timestamp(self.created_at, 0).unwrap_or_default(),
            updated_at: DateTime::<Utc>::from_timestamp(self.updated_at, 0).unwrap_or_default(),
        }
    }
}
