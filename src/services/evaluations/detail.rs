use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::{EvaluationService, not_owner_response};
use crate::middlewares::RequireJWT;
use crate::models::{ApiResponse, ErrorCode};

/// 获取（必要时创建）当前评委对某作品的评审记录
///
/// 首次访问时懒创建空白草稿；必须先存在分配关系。
/// 并发首次访问由 (judge_id, entry_id) 唯一索引兜底，总是
/// 返回同一条记录。
pub async fn get_or_create_evaluation(
    service: &EvaluationService,
    request: &HttpRequest,
    entry_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let current_user = match RequireJWT::extract_user_claims(request) {
        Some(user) => user,
        None => {
            return Ok(HttpResponse::Unauthorized()
                .json(ApiResponse::error_empty(ErrorCode::Unauthorized, "未登录")));
        }
    };

    // 分配关系是评审记录存在的前提
    match storage.is_assigned(current_user.id, entry_id).await {
        Ok(true) => {}
        Ok(false) => return Ok(not_owner_response()),
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("查询分配失败: {e}"),
                )),
            );
        }
    }

    // 已有记录直接返回
    match storage
        .get_evaluation_by_judge_and_entry(current_user.id, entry_id)
        .await
    {
        Ok(Some(evaluation)) => {
            return Ok(HttpResponse::Ok().json(ApiResponse::success(evaluation, "查询成功")));
        }
        Ok(None) => {}
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("查询评审记录失败: {e}"),
                )),
            );
        }
    }

    // 懒创建空白草稿
    match storage
        .create_draft_evaluation(current_user.id, entry_id)
        .await
    {
        Ok(evaluation) => {
            Ok(HttpResponse::Created().json(ApiResponse::success(evaluation, "评审记录已创建")))
        }
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("创建评审记录失败: {e}"),
            )),
        ),
    }
}
