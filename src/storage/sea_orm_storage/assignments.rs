//! 评审分配存储操作

use std::collections::HashSet;

use super::SeaOrmStorage;
use crate::entity::assignments::{ActiveModel, Column, Entity as Assignments};
use crate::errors::{EvalSystemError, Result};
use crate::models::assignments::entities::Assignment;
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};

impl SeaOrmStorage {
    /// 为评委批量创建分配，返回 (新建数, 跳过数)
    ///
    /// 先查出已有的 entry_id 集合，只插入缺失的对；并发下撞到
    /// (judge_id, entry_id) 唯一索引时同样按跳过处理，因此进程
    /// 中途崩溃后重跑只会补齐缺失的对。
    pub async fn create_assignments_impl(
        &self,
        judge_id: i64,
        entry_ids: &[i64],
    ) -> Result<(i64, i64)> {
        let existing: HashSet<i64> = Assignments::find()
            .filter(Column::JudgeId.eq(judge_id))
            .filter(Column::EntryId.is_in(entry_ids.to_vec()))
            .all(&self.db)
            .await
            .map_err(|e| EvalSystemError::database_operation(format!("查询已有分配失败: {e}")))?
            .into_iter()
            .map(|m| m.entry_id)
            .collect();

        let now = chrono::Utc::now().timestamp();
        let mut created = 0i64;
        let mut skipped = existing.len() as i64;

        for &entry_id in entry_ids {
            if existing.contains(&entry_id) {
                continue;
            }

            let model = ActiveModel {
                judge_id: Set(judge_id),
                entry_id: Set(entry_id),
                created_at: Set(now),
                ..Default::default()
            };

            match model.insert(&self.db).await {
                Ok(_) => created += 1,
                // 并发写入撞唯一索引，按已存在跳过
                Err(e)
                    if matches!(
                        e.sql_err(),
                        Some(sea_orm::SqlErr::UniqueConstraintViolation(_))
                    ) =>
                {
                    skipped += 1
                }
                Err(e) => {
                    return Err(EvalSystemError::database_operation(format!(
                        "创建分配失败: {e}"
                    )));
                }
            }
        }

        Ok((created, skipped))
    }

    /// 是否存在分配关系
    pub async fn is_assigned_impl(&self, judge_id: i64, entry_id: i64) -> Result<bool> {
        let result = Assignments::find()
            .filter(Column::JudgeId.eq(judge_id))
            .filter(Column::EntryId.eq(entry_id))
            .one(&self.db)
            .await
            .map_err(|e| EvalSystemError::database_operation(format!("查询分配失败: {e}")))?;

        Ok(result.is_some())
    }

    /// 列出评委的全部分配
    pub async fn list_assignments_by_judge_impl(&self, judge_id: i64) -> Result<Vec<Assignment>> {
        let results = Assignments::find()
            .filter(Column::JudgeId.eq(judge_id))
            .order_by_asc(Column::EntryId)
            .all(&self.db)
            .await
            .map_err(|e| EvalSystemError::database_operation(format!("查询分配列表失败: {e}")))?;

        Ok(results.into_iter().map(|m| m.into_assignment()).collect())
    }
}
