use std::sync::Arc;

use crate::models::{
    assignments::entities::Assignment,
    entries::{entities::Entry, requests::EntryListQuery, responses::EntryListResponse},
    evaluations::{
        entities::{Evaluation, Rating},
        requests::EvaluationListQuery,
        responses::EvaluationListResponse,
    },
    rubric::{
        entities::RubricQuestion,
        requests::{CreateQuestionRequest, UpdateQuestionRequest},
    },
    users::{
        entities::User,
        requests::{CreateUserRequest, UpdateUserRequest, UserListQuery},
        responses::UserListResponse,
    },
};
use crate::utils::scoring::ScoreTotals;

use crate::errors::Result;

pub mod sea_orm_storage;

#[async_trait::async_trait]
pub trait Storage: Send + Sync {
    /// 用户管理方法
    // 创建用户
    async fn create_user(&self, user: CreateUserRequest) -> Result<User>;
    // 通过ID获取用户信息
    async fn get_user_by_id(&self, id: i64) -> Result<Option<User>>;
    // 通过用户名获取用户信息
    async fn get_user_by_username(&self, username: &str) -> Result<Option<User>>;
    // 通过用户名或邮箱获取用户信息
    async fn get_user_by_username_or_email(&self, identifier: &str) -> Result<Option<User>>;
    // 列出用户
    async fn list_users_with_pagination(&self, query: UserListQuery) -> Result<UserListResponse>;
    // 列出所有活跃评委的 ID（用于整体分配）
    async fn list_active_judge_ids(&self) -> Result<Vec<i64>>;
    // 更新用户信息
    async fn update_user(&self, id: i64, update: UpdateUserRequest) -> Result<Option<User>>;
    // 删除用户
    async fn delete_user(&self, id: i64) -> Result<bool>;
    // 更新用户最后登录时间
    async fn update_last_login(&self, id: i64) -> Result<bool>;
    // 统计用户数量（用于初始化默认管理员）
    async fn count_users(&self) -> Result<u64>;

    /// 作品读取方法（作品由外部报名系统维护）
    // 通过ID获取作品
    async fn get_entry_by_id(&self, entry_id: i64) -> Result<Option<Entry>>;
    // 列出作品
    async fn list_entries_with_pagination(
        &self,
        query: EntryListQuery,
    ) -> Result<EntryListResponse>;
    // 列出所有可评审（已通过审核）的作品，按编号排序
    async fn list_eligible_entries(&self) -> Result<Vec<Entry>>;

    /// 评分项管理方法
    // 创建评分项
    async fn create_question(&self, question: CreateQuestionRequest) -> Result<RubricQuestion>;
    // 通过ID获取评分项
    async fn get_question_by_id(&self, question_id: i64) -> Result<Option<RubricQuestion>>;
    // 更新评分项
    async fn update_question(
        &self,
        question_id: i64,
        update: UpdateQuestionRequest,
    ) -> Result<Option<RubricQuestion>>;
    // 停用评分项（软删除，历史评分保留快照）
    async fn deactivate_question(&self, question_id: i64) -> Result<bool>;
    // 列出启用的评分项（按 sort_order 排序）
    async fn list_active_questions(&self) -> Result<Vec<RubricQuestion>>;
    // 列出全部评分项（含停用，用于构建权重表）
    async fn list_all_questions(&self) -> Result<Vec<RubricQuestion>>;

    /// 评审分配方法
    // 为评委批量创建分配，返回 (新建数, 跳过数)；已存在的对幂等跳过
    async fn create_assignments(&self, judge_id: i64, entry_ids: &[i64]) -> Result<(i64, i64)>;
    // 是否存在分配关系
    async fn is_assigned(&self, judge_id: i64, entry_id: i64) -> Result<bool>;
    // 列出评委的全部分配
    async fn list_assignments_by_judge(&self, judge_id: i64) -> Result<Vec<Assignment>>;

    /// 评审记录方法
    // 通过ID获取评审记录
    async fn get_evaluation_by_id(&self, evaluation_id: i64) -> Result<Option<Evaluation>>;
    // 获取评委对某作品的评审记录
    async fn get_evaluation_by_judge_and_entry(
        &self,
        judge_id: i64,
        entry_id: i64,
    ) -> Result<Option<Evaluation>>;
    // 创建空白草稿；并发下撞到唯一索引时返回已存在的记录
    async fn create_draft_evaluation(&self, judge_id: i64, entry_id: i64) -> Result<Evaluation>;
    // 保存评审内容与重新计算的分数（乐观并发，版本或状态不匹配返回 false）
    async fn save_evaluation(
        &self,
        evaluation_id: i64,
        expected_version: i32,
        ratings: &[Rating],
        totals: &ScoreTotals,
        overall_comment: Option<String>,
    ) -> Result<bool>;
    // 提交评审（Draft/SentBack -> Submitted，清除退回原因）
    async fn submit_evaluation(&self, evaluation_id: i64, expected_version: i32) -> Result<bool>;
    // 批量锁定所有已提交记录，返回实际转换数；可安全重复执行
    async fn lock_all_submitted(&self) -> Result<u64>;
    // 退回已提交记录（Submitted -> SentBack）
    async fn send_back_evaluation(&self, evaluation_id: i64, reason: &str) -> Result<bool>;
    // 重新打开已锁定记录（Locked -> Submitted）
    async fn reopen_evaluation(&self, evaluation_id: i64) -> Result<bool>;
    // 列出评委的全部评审记录
    async fn list_evaluations_by_judge(&self, judge_id: i64) -> Result<Vec<Evaluation>>;
    // 分页列出评审记录（管理员视角，含评委与作品信息）
    async fn list_evaluations_with_pagination(
        &self,
        query: EvaluationListQuery,
    ) -> Result<EvaluationListResponse>;
    // 列出全部可计入记分板的记录（Submitted/Locked）
    async fn list_countable_evaluations(&self) -> Result<Vec<Evaluation>>;
}

pub async fn create_storage() -> Result<Arc<dyn Storage>> {
    let storage = sea_orm_storage::SeaOrmStorage::new_async().await?;
    Ok(Arc::new(storage))
}
