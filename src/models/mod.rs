//! 业务数据模型定义
//!
//! 按领域拆分 entities / requests / responses，与 entity 模块中的
//! 数据库实体分离。

pub mod assignments;
pub mod auth;
pub mod common;
pub mod entries;
pub mod evaluations;
pub mod rubric;
pub mod scoreboard;
pub mod users;

pub use common::pagination::{PaginationInfo, PaginationQuery};
pub use common::response::ApiResponse;

use serde::{Deserialize, Serialize};

/// 统一业务错误码（写入 ApiResponse.code）
///
/// 0 表示成功；4xxxx 对应客户端语义错误，5xxxx 对应服务端错误。
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ErrorCode {
    Success = 0,
    BadRequest = 40000,
    UserPasswordInvalid = 40001,
    UserUpdateFailed = 40002,
    UserNameInvalid = 40003,
    UserEmailInvalid = 40004,
    CanNotDeleteCurrentUser = 40005,
    Unauthorized = 40100,
    AuthFailed = 40101,
    Forbidden = 40300,
    NotFound = 40400,
    UserNotFound = 40401,
    EntryNotFound = 40402,
    QuestionNotFound = 40403,
    AssignmentNotFound = 40404,
    EvaluationNotFound = 40405,
    Conflict = 40900,
    EvaluationLocked = 40901,
    UserAlreadyExists = 40902,
    UserEmailAlreadyExists = 40903,
    RateLimitExceeded = 42900,
    InternalServerError = 50000,
    UserCreationFailed = 50001,
    UserDeleteFailed = 50002,
}

/// 程序启动时间，用于统计预处理耗时
#[derive(Debug, Clone)]
pub struct AppStartTime {
    pub start_datetime: chrono::DateTime<chrono::Utc>,
}
