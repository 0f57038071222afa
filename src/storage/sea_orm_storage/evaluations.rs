//! 评审记录存储操作
//!
//! 所有变更都是单条带条件的 UPDATE：同时匹配 id、lock_version 和
//! 期望状态，影响行数为 0 即说明记录已被并发修改或状态不允许，
//! 由服务层转换为 Conflict 返回给调用方。

use std::collections::HashMap;

use super::SeaOrmStorage;
use crate::entity::entries::{Column as EntryColumn, Entity as Entries};
use crate::entity::evaluations::{ActiveModel, Column, Entity as Evaluations};
use crate::entity::users::{Column as UserColumn, Entity as Users};
use crate::errors::{EvalSystemError, Result};
use crate::models::{
    PaginationInfo,
    evaluations::{
        entities::{Evaluation, EvaluationStatus, Rating},
        requests::EvaluationListQuery,
        responses::{
            EvaluationEntryInfo, EvaluationJudge, EvaluationListItem, EvaluationListResponse,
        },
    },
};
use crate::utils::scoring::ScoreTotals;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, ExprTrait, PaginatorTrait, QueryFilter, QueryOrder,
    Set,
};

/// 评委可写状态（Draft / SentBack）
fn editable_statuses() -> Vec<String> {
    vec![
        EvaluationStatus::DRAFT.to_string(),
        EvaluationStatus::SENT_BACK.to_string(),
    ]
}

impl SeaOrmStorage {
    /// 通过 ID 获取评审记录
    pub async fn get_evaluation_by_id_impl(
        &self,
        evaluation_id: i64,
    ) -> Result<Option<Evaluation>> {
        let result = Evaluations::find_by_id(evaluation_id)
            .one(&self.db)
            .await
            .map_err(|e| EvalSystemError::database_operation(format!("查询评审记录失败: {e}")))?;

        Ok(result.map(|m| m.into_evaluation()))
    }

    /// 获取评委对某作品的评审记录
    pub async fn get_evaluation_by_judge_and_entry_impl(
        &self,
        judge_id: i64,
        entry_id: i64,
    ) -> Result<Option<Evaluation>> {
        let result = Evaluations::find()
            .filter(Column::JudgeId.eq(judge_id))
            .filter(Column::EntryId.eq(entry_id))
            .one(&self.db)
            .await
            .map_err(|e| EvalSystemError::database_operation(format!("查询评审记录失败: {e}")))?;

        Ok(result.map(|m| m.into_evaluation()))
    }

    /// 创建空白草稿
    ///
    /// 并发首次访问会撞 (judge_id, entry_id) 唯一索引，此时读回
    /// 已存在的记录返回，保证每个键只有一条记录。
    pub async fn create_draft_evaluation_impl(
        &self,
        judge_id: i64,
        entry_id: i64,
    ) -> Result<Evaluation> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            judge_id: Set(judge_id),
            entry_id: Set(entry_id),
            status: Set(EvaluationStatus::Draft.to_string()),
            ratings: Set("[]".to_string()),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        match model.insert(&self.db).await {
            Ok(result) => Ok(result.into_evaluation()),
            Err(e)
                if matches!(
                    e.sql_err(),
                    Some(sea_orm::SqlErr::UniqueConstraintViolation(_))
                ) =>
            {
                self.get_evaluation_by_judge_and_entry_impl(judge_id, entry_id)
                    .await?
                    .ok_or_else(|| {
                        EvalSystemError::database_operation(format!(
                            "创建评审记录失败且无法读回: {e}"
                        ))
                    })
            }
            Err(e) => Err(EvalSystemError::database_operation(format!(
                "创建评审记录失败: {e}"
            ))),
        }
    }

    /// 保存评审内容与重新计算的分数
    ///
    /// 分数三元组与评分快照在一条 UPDATE 中写入，不存在半写状态。
    pub async fn save_evaluation_impl(
        &self,
        evaluation_id: i64,
        expected_version: i32,
        ratings: &[Rating],
        totals: &ScoreTotals,
        overall_comment: Option<String>,
    ) -> Result<bool> {
        let ratings_json = serde_json::to_string(ratings)
            .map_err(|e| EvalSystemError::serialization(format!("序列化评分失败: {e}")))?;

        let result = Evaluations::update_many()
            .col_expr(Column::Ratings, Expr::value(ratings_json))
            .col_expr(Column::OverallComment, Expr::value(overall_comment))
            .col_expr(Column::TotalScore, Expr::value(totals.total_score))
            .col_expr(
                Column::MaxPossibleScore,
                Expr::value(totals.max_possible_score),
            )
            .col_expr(Column::WeightedScore, Expr::value(totals.weighted_score))
            .col_expr(
                Column::UpdatedAt,
                Expr::value(chrono::Utc::now().timestamp()),
            )
            .col_expr(Column::LockVersion, Expr::col(Column::LockVersion).add(1))
            .filter(Column::Id.eq(evaluation_id))
            .filter(Column::LockVersion.eq(expected_version))
            .filter(Column::Status.is_in(editable_statuses()))
            .exec(&self.db)
            .await
            .map_err(|e| EvalSystemError::database_operation(format!("保存评审记录失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }

    /// 提交评审（Draft/SentBack -> Submitted）
    pub async fn submit_evaluation_impl(
        &self,
        evaluation_id: i64,
        expected_version: i32,
    ) -> Result<bool> {
        let now = chrono::Utc::now().timestamp();

        let result = Evaluations::update_many()
            .col_expr(
                Column::Status,
                Expr::value(EvaluationStatus::Submitted.to_string()),
            )
            .col_expr(Column::SubmittedAt, Expr::value(Some(now)))
            // 退出 SentBack 时清除退回痕迹
            .col_expr(Column::SentBackAt, Expr::value(Option::<i64>::None))
            .col_expr(Column::SentBackReason, Expr::value(Option::<String>::None))
            .col_expr(Column::UpdatedAt, Expr::value(now))
            .col_expr(Column::LockVersion, Expr::col(Column::LockVersion).add(1))
            .filter(Column::Id.eq(evaluation_id))
            .filter(Column::LockVersion.eq(expected_version))
            .filter(Column::Status.is_in(editable_statuses()))
            .exec(&self.db)
            .await
            .map_err(|e| EvalSystemError::database_operation(format!("提交评审记录失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }

    /// 批量锁定所有已提交记录
    ///
    /// 逐条幂等：已锁定的记录不在筛选范围内，重复执行返回 0。
    pub async fn lock_all_submitted_impl(&self) -> Result<u64> {
        let now = chrono::Utc::now().timestamp();

        let result = Evaluations::update_many()
            .col_expr(
                Column::Status,
                Expr::value(EvaluationStatus::Locked.to_string()),
            )
            .col_expr(Column::LockedAt, Expr::value(Some(now)))
            .col_expr(Column::UpdatedAt, Expr::value(now))
            .col_expr(Column::LockVersion, Expr::col(Column::LockVersion).add(1))
            .filter(Column::Status.eq(EvaluationStatus::SUBMITTED))
            .exec(&self.db)
            .await
            .map_err(|e| EvalSystemError::database_operation(format!("批量锁定失败: {e}")))?;

        Ok(result.rows_affected)
    }

    /// 退回已提交记录（Submitted -> SentBack）
    pub async fn send_back_evaluation_impl(&self, evaluation_id: i64, reason: &str) -> Result<bool> {
        let now = chrono::Utc::now().timestamp();

        let result = Evaluations::update_many()
            .col_expr(
                Column::Status,
                Expr::value(EvaluationStatus::SentBack.to_string()),
            )
            .col_expr(Column::SentBackAt, Expr::value(Some(now)))
            .col_expr(Column::SentBackReason, Expr::value(Some(reason.to_string())))
            .col_expr(Column::UpdatedAt, Expr::value(now))
            .col_expr(Column::LockVersion, Expr::col(Column::LockVersion).add(1))
            .filter(Column::Id.eq(evaluation_id))
            .filter(Column::Status.eq(EvaluationStatus::SUBMITTED))
            .exec(&self.db)
            .await
            .map_err(|e| EvalSystemError::database_operation(format!("退回评审记录失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }

    /// 重新打开已锁定记录（Locked -> Submitted）
    pub async fn reopen_evaluation_impl(&self, evaluation_id: i64) -> Result<bool> {
        let now = chrono::Utc::now().timestamp();

        let result = Evaluations::update_many()
            .col_expr(
                Column::Status,
                Expr::value(EvaluationStatus::Submitted.to_string()),
            )
            .col_expr(Column::LockedAt, Expr::value(Option::<i64>::None))
            .col_expr(Column::UpdatedAt, Expr::value(now))
            .col_expr(Column::LockVersion, Expr::col(Column::LockVersion).add(1))
            .filter(Column::Id.eq(evaluation_id))
            .filter(Column::Status.eq(EvaluationStatus::LOCKED))
            .exec(&self.db)
            .await
            .map_err(|e| {
                EvalSystemError::database_operation(format!("重新打开评审记录失败: {e}"))
            })?;

        Ok(result.rows_affected > 0)
    }

    /// 列出评委的全部评审记录
    pub async fn list_evaluations_by_judge_impl(&self, judge_id: i64) -> Result<Vec<Evaluation>> {
        let results = Evaluations::find()
            .filter(Column::JudgeId.eq(judge_id))
            .order_by_asc(Column::EntryId)
            .all(&self.db)
            .await
            .map_err(|e| {
                EvalSystemError::database_operation(format!("查询评审记录列表失败: {e}"))
            })?;

        Ok(results.into_iter().map(|m| m.into_evaluation()).collect())
    }

    /// 分页列出评审记录（管理员视角）
    pub async fn list_evaluations_with_pagination_impl(
        &self,
        query: EvaluationListQuery,
    ) -> Result<EvaluationListResponse> {
        let page = std::cmp::Ord::max(query.page.unwrap_or(1), 1) as u64;
        let size = query.size.unwrap_or(10).clamp(1, 100) as u64;

        let mut select = Evaluations::find();

        if let Some(entry_id) = query.entry_id {
            select = select.filter(Column::EntryId.eq(entry_id));
        }
        if let Some(judge_id) = query.judge_id {
            select = select.filter(Column::JudgeId.eq(judge_id));
        }
        if let Some(ref status) = query.status {
            select = select.filter(Column::Status.eq(status.to_string()));
        }

        select = select.order_by_desc(Column::UpdatedAt);

        let paginator = select.paginate(&self.db, size);
        let total = paginator.num_items().await.map_err(|e| {
            EvalSystemError::database_operation(format!("查询评审记录总数失败: {e}"))
        })?;

        let pages = paginator.num_pages().await.map_err(|e| {
            EvalSystemError::database_operation(format!("查询评审记录页数失败: {e}"))
        })?;

        let evaluations = paginator.fetch_page(page - 1).await.map_err(|e| {
            EvalSystemError::database_operation(format!("查询评审记录列表失败: {e}"))
        })?;

        // 批量查询评委信息
        let judge_ids: Vec<i64> = evaluations
            .iter()
            .map(|e| e.judge_id)
            .collect::<std::collections::HashSet<_>>()
            .into_iter()
            .collect();

        let judges = Users::find()
            .filter(UserColumn::Id.is_in(judge_ids))
            .all(&self.db)
            .await
            .map_err(|e| EvalSystemError::database_operation(format!("查询评委信息失败: {e}")))?;
        let judge_map: HashMap<i64, _> = judges.into_iter().map(|u| (u.id, u)).collect();

        // 批量查询作品信息
        let entry_ids: Vec<i64> = evaluations
            .iter()
            .map(|e| e.entry_id)
            .collect::<std::collections::HashSet<_>>()
            .into_iter()
            .collect();

        let entries = Entries::find()
            .filter(EntryColumn::Id.is_in(entry_ids))
            .all(&self.db)
            .await
            .map_err(|e| EvalSystemError::database_operation(format!("查询作品信息失败: {e}")))?;
        let entry_map: HashMap<i64, _> = entries.into_iter().map(|en| (en.id, en)).collect();

        // 组装列表项
        let items = evaluations
            .into_iter()
            .map(|m| {
                let judge = judge_map.get(&m.judge_id);
                let entry = entry_map.get(&m.entry_id);
                EvaluationListItem {
                    judge: EvaluationJudge {
                        id: m.judge_id,
                        username: judge
                            .map(|u| u.username.clone())
                            .unwrap_or_else(|| "未知评委".to_string()),
                        display_name: judge.and_then(|u| u.display_name.clone()),
                    },
                    entry: EvaluationEntryInfo {
                        id: m.entry_id,
                        code: entry.map(|en| en.code.clone()).unwrap_or_default(),
                        title: entry
                            .map(|en| en.title.clone())
                            .unwrap_or_else(|| "未知作品".to_string()),
                    },
                    evaluation: m.into_evaluation(),
                }
            })
            .collect();

        Ok(EvaluationListResponse {
            items,
            pagination: PaginationInfo {
                page: page as i64,
                page_size: size as i64,
                total: total as i64,
                total_pages: pages as i64,
            },
        })
    }

    /// 列出全部可计入记分板的记录
    pub async fn list_countable_evaluations_impl(&self) -> Result<Vec<Evaluation>> {
        let results = Evaluations::find()
            .filter(Column::Status.is_in(vec![
                EvaluationStatus::SUBMITTED.to_string(),
                EvaluationStatus::LOCKED.to_string(),
            ]))
            .all(&self.db)
            .await
            .map_err(|e| {
                EvalSystemError::database_operation(format!("查询可计入评审失败: {e}"))
            })?;

        Ok(results.into_iter().map(|m| m.into_evaluation()).collect())
    }
}
