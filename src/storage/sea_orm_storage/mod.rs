//! SeaORM 存储实现
//!
//! 统一的数据库存储层，支持 SQLite、PostgreSQL 和 MySQL。

mod assignments;
mod entries;
mod evaluations;
mod rubric_questions;
mod users;

use crate::config::AppConfig;
use crate::errors::{EvalSystemError, Result};
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use std::time::Duration;
use tracing::info;

/// SeaORM 存储实现
#[derive(Clone)]
pub struct SeaOrmStorage {
    pub(crate) db: DatabaseConnection,
}

impl SeaOrmStorage {
    /// 创建新的 SeaORM 存储实例
    pub async fn new_async() -> Result<Self> {
        let config = AppConfig::get();
        let db_url = Self::build_database_url(&config.database.url)?;

        // 根据数据库类型选择连接方式
        let db = if db_url.starts_with("sqlite://") {
            Self::connect_sqlite(&db_url, config).await?
        } else {
            Self::connect_generic(&db_url, config).await?
        };

        // 运行迁移
        Migrator::up(&db, None)
            .await
            .map_err(|e| EvalSystemError::database_operation(format!("数据库迁移失败: {e}")))?;

        info!("SeaORM 存储初始化完成，数据库: {}", db_url);

        Ok(Self { db })
    }

    /// SQLite 专用连接（WAL + pragma 优化）
    async fn connect_sqlite(url: &str, config: &AppConfig) -> Result<DatabaseConnection> {
        use sea_orm::SqlxSqliteConnector;
        use sea_orm::sqlx::sqlite::{
            SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous,
        };
        use std::str::FromStr;

        let opt = SqliteConnectOptions::from_str(url)
            .map_err(|e| EvalSystemError::database_config(format!("SQLite URL 解析失败: {e}")))?
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal)
            .busy_timeout(Duration::from_secs(5))
            .pragma("cache_size", "-64000")
            .pragma("temp_store", "memory")
            .pragma("mmap_size", "536870912")
            .pragma("wal_autocheckpoint", "1000");

        let pool = SqlitePoolOptions::new()
            .max_connections(config.database.pool_size)
            .min_connections(1)
            .test_before_acquire(true)
            .acquire_timeout(Duration::from_secs(config.database.timeout))
            .idle_timeout(Duration::from_secs(300))
            .connect_with(opt)
            .await
            .map_err(|e| EvalSystemError::database_connection(format!("SQLite 连接失败: {e}")))?;

        Ok(SqlxSqliteConnector::from_sqlx_sqlite_pool(pool))
    }

    /// 通用连接（PostgreSQL、MySQL 等）
    async fn connect_generic(url: &str, config: &AppConfig) -> Result<DatabaseConnection> {
        let mut opt = ConnectOptions::new(url);
        opt.max_connections(config.database.pool_size)
            .min_connections(5)
            .connect_timeout(Duration::from_secs(config.database.timeout))
            .acquire_timeout(Duration::from_secs(config.database.timeout))
            .idle_timeout(Duration::from_secs(600))
            .max_lifetime(Duration::from_secs(1800))
            .sqlx_logging(false)
            .sqlx_logging_level(tracing::log::LevelFilter::Debug);

        Database::connect(opt)
            .await
            .map_err(|e| EvalSystemError::database_connection(format!("无法连接到数据库: {e}")))
    }

    /// 从 URL 自动推断数据库类型并构建连接 URL
    fn build_database_url(url: &str) -> Result<String> {
        if url.starts_with("sqlite://") {
            Ok(url.to_string())
        } else if url.ends_with(".db") || url.ends_with(".sqlite") || url == ":memory:" {
            Ok(format!("sqlite://{}?mode=rwc", url))
        } else if url.starts_with("postgres://")
            || url.starts_with("postgresql://")
            || url.starts_with("mysql://")
            || url.starts_with("mariadb://")
        {
            Ok(url.to_string())
        } else {
            Err(EvalSystemError::database_config(format!(
                "无法从 URL 推断数据库类型: {url}. 支持: sqlite://, postgres://, mysql://, 或 .db/.sqlite 文件路径"
            )))
        }
    }
}

// Storage trait 实现
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
use crate::storage::Storage;
use crate::utils::scoring::ScoreTotals;
use async_trait::async_trait;

#[async_trait]
impl Storage for SeaOrmStorage {
    // 用户模块
    async fn create_user(&self, user: CreateUserRequest) -> Result<User> {
        self.create_user_impl(user).await
    }

    async fn get_user_by_id(&self, id: i64) -> Result<Option<User>> {
        self.get_user_by_id_impl(id).await
    }

    async fn get_user_by_username(&self, username: &str) -> Result<Option<User>> {
        self.get_user_by_username_impl(username).await
    }

    async fn get_user_by_username_or_email(&self, identifier: &str) -> Result<Option<User>> {
        self.get_user_by_username_or_email_impl(identifier).await
    }

    async fn list_users_with_pagination(&self, query: UserListQuery) -> Result<UserListResponse> {
        self.list_users_with_pagination_impl(query).await
    }

    async fn list_active_judge_ids(&self) -> Result<Vec<i64>> {
        self.list_active_judge_ids_impl().await
    }

    async fn update_user(&self, id: i64, update: UpdateUserRequest) -> Result<Option<User>> {
        self.update_user_impl(id, update).await
    }

    async fn delete_user(&self, id: i64) -> Result<bool> {
        self.delete_user_impl(id).await
    }

    async fn update_last_login(&self, id: i64) -> Result<bool> {
        self.update_last_login_impl(id).await
    }

    async fn count_users(&self) -> Result<u64> {
        self.count_users_impl().await
    }

    // 作品模块
    async fn get_entry_by_id(&self, entry_id: i64) -> Result<Option<Entry>> {
        self.get_entry_by_id_impl(entry_id).await
    }

    async fn list_entries_with_pagination(
        &self,
        query: EntryListQuery,
    ) -> Result<EntryListResponse> {
        self.list_entries_with_pagination_impl(query).await
    }

    async fn list_eligible_entries(&self) -> Result<Vec<Entry>> {
        self.list_eligible_entries_impl().await
    }

    // 评分项模块
    async fn create_question(&self, question: CreateQuestionRequest) -> Result<RubricQuestion> {
        self.create_question_impl(question).await
    }

    async fn get_question_by_id(&self, question_id: i64) -> Result<Option<RubricQuestion>> {
        self.get_question_by_id_impl(question_id).await
    }

    async fn update_question(
        &self,
        question_id: i64,
        update: UpdateQuestionRequest,
    ) -> Result<Option<RubricQuestion>> {
        self.update_question_impl(question_id, update).await
    }

    async fn deactivate_question(&self, question_id: i64) -> Result<bool> {
        self.deactivate_question_impl(question_id).await
    }

    async fn list_active_questions(&self) -> Result<Vec<RubricQuestion>> {
        self.list_active_questions_impl().await
    }

    async fn list_all_questions(&self) -> Result<Vec<RubricQuestion>> {
        self.list_all_questions_impl().await
    }

    // 评审分配模块
    async fn create_assignments(&self, judge_id: i64, entry_ids: &[i64]) -> Result<(i64, i64)> {
        self.create_assignments_impl(judge_id, entry_ids).await
    }

    async fn is_assigned(&self, judge_id: i64, entry_id: i64) -> Result<bool> {
        self.is_assigned_impl(judge_id, entry_id).await
    }

    async fn list_assignments_by_judge(&self, judge_id: i64) -> Result<Vec<Assignment>> {
        self.list_assignments_by_judge_impl(judge_id).await
    }

    // 评审记录模块
    async fn get_evaluation_by_id(&self, evaluation_id: i64) -> Result<Option<Evaluation>> {
        self.get_evaluation_by_id_impl(evaluation_id).await
    }

    async fn get_evaluation_by_judge_and_entry(
        &self,
        judge_id: i64,
        entry_id: i64,
    ) -> Result<Option<Evaluation>> {
        self.get_evaluation_by_judge_and_entry_impl(judge_id, entry_id)
            .await
    }

    async fn create_draft_evaluation(&self, judge_id: i64, entry_id: i64) -> Result<Evaluation> {
        self.create_draft_evaluation_impl(judge_id, entry_id).await
    }

    async fn save_evaluation(
        &self,
        evaluation_id: i64,
        expected_version: i32,
        ratings: &[Rating],
        totals: &ScoreTotals,
        overall_comment: Option<String>,
    ) -> Result<bool> {
        self.save_evaluation_impl(
            evaluation_id,
            expected_version,
            ratings,
            totals,
            overall_comment,
        )
        .await
    }

    async fn submit_evaluation(&self, evaluation_id: i64, expected_version: i32) -> Result<bool> {
        self.submit_evaluation_impl(evaluation_id, expected_version)
            .await
    }

    async fn lock_all_submitted(&self) -> Result<u64> {
        self.lock_all_submitted_impl().await
    }

    async fn send_back_evaluation(&self, evaluation_id: i64, reason: &str) -> Result<bool> {
        self.send_back_evaluation_impl(evaluation_id, reason).await
    }

    async fn reopen_evaluation(&self, evaluation_id: i64) -> Result<bool> {
        self.reopen_evaluation_impl(evaluation_id).await
    }

    async fn list_evaluations_by_judge(&self, judge_id: i64) -> Result<Vec<Evaluation>> {
        self.list_evaluations_by_judge_impl(judge_id).await
    }

    async fn list_evaluations_with_pagination(
        &self,
        query: EvaluationListQuery,
    ) -> Result<EvaluationListResponse> {
        self.list_evaluations_with_pagination_impl(query).await
    }

    async fn list_countable_evaluations(&self) -> Result<Vec<Evaluation>> {
        self.list_countable_evaluations_impl().await
    }
}
