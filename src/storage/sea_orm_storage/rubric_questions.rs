//! 评分项存储操作

use super::SeaOrmStorage;
use crate::entity::rubric_questions::{ActiveModel, Column, Entity as RubricQuestions};
use crate::errors::{EvalSystemError, Result};
use crate::models::rubric::{
    entities::RubricQuestion,
    requests::{CreateQuestionRequest, UpdateQuestionRequest},
};
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};

impl SeaOrmStorage {
    /// 创建评分项
    pub async fn create_question_impl(
        &self,
        req: CreateQuestionRequest,
    ) -> Result<RubricQuestion> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            text: Set(req.text),
            description: Set(req.description),
            max_score: Set(req.max_score),
            weight_percent: Set(req.weight_percent),
            is_active: Set(true),
            sort_order: Set(req.sort_order.unwrap_or(0)),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| EvalSystemError::database_operation(format!("创建评分项失败: {e}")))?;

        Ok(result.into_question())
    }

    /// 通过 ID 获取评分项
    pub async fn get_question_by_id_impl(
        &self,
        question_id: i64,
    ) -> Result<Option<RubricQuestion>> {
        let result = RubricQuestions::find_by_id(question_id)
            .one(&self.db)
            .await
            .map_err(|e| EvalSystemError::database_operation(format!("查询评分项失败: {e}")))?;

        Ok(result.map(|m| m.into_question()))
    }

    /// 更新评分项
    ///
    /// 只更新评分项本身；历史评审记录持有文本/满分快照，不受影响。
    pub async fn update_question_impl(
        &self,
        question_id: i64,
        update: UpdateQuestionRequest,
    ) -> Result<Option<RubricQuestion>> {
        let existing = RubricQuestions::find_by_id(question_id)
            .one(&self.db)
            .await
            .map_err(|e| EvalSystemError::database_operation(format!("查询评分项失败: {e}")))?;

        let Some(existing) = existing else {
            return Ok(None);
        };

        let mut model: ActiveModel = existing.into();

        if let Some(text) = update.text {
            model.text = Set(text);
        }
        if let Some(description) = update.description {
            model.description = Set(Some(description));
        }
        if let Some(max_score) = update.max_score {
            model.max_score = Set(max_score);
        }
        if let Some(weight_percent) = update.weight_percent {
            model.weight_percent = Set(weight_percent);
        }
        if let Some(sort_order) = update.sort_order {
            model.sort_order = Set(sort_order);
        }
        model.updated_at = Set(chrono::Utc::now().timestamp());

        let result = model
            .update(&self.db)
            .await
            .map_err(|e| EvalSystemError::database_operation(format!("更新评分项失败: {e}")))?;

        Ok(Some(result.into_question()))
    }

    /// 停用评分项（软删除）
    pub async fn deactivate_question_impl(&self, question_id: i64) -> Result<bool> {
        let result = RubricQuestions::update_many()
            .col_expr(Column::IsActive, sea_orm::sea_query::Expr::value(false))
            .col_expr(
                Column::UpdatedAt,
                sea_orm::sea_query::Expr::value(chrono::Utc::now().timestamp()),
            )
            .filter(Column::Id.eq(question_id))
            .filter(Column::IsActive.eq(true))
            .exec(&self.db)
            .await
            .map_err(|e| EvalSystemError::database_operation(format!("停用评分项失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }

    /// 列出启用的评分项
    pub async fn list_active_questions_impl(&self) -> Result<Vec<RubricQuestion>> {
        let results = RubricQuestions::find()
            .filter(Column::IsActive.eq(true))
            .order_by_asc(Column::SortOrder)
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| EvalSystemError::database_operation(format!("查询评分项失败: {e}")))?;

        Ok(results.into_iter().map(|m| m.into_question()).collect())
    }

    /// 列出全部评分项（含停用）
    pub async fn list_all_questions_impl(&self) -> Result<Vec<RubricQuestion>> {
        let results = RubricQuestions::find()
            .order_by_asc(Column::SortOrder)
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| EvalSystemError::database_operation(format!("查询评分项失败: {e}")))?;

        Ok(results.into_iter().map(|m| m.into_question()).collect())
    }
}
