use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::EvaluationService;
use crate::middlewares::RequireJWT;
use crate::models::{ApiResponse, ErrorCode};

/// 重新打开已锁定记录（管理员，Locked -> Submitted）
///
/// 用于锁定后的单条更正：清除 locked_at，记录回到 Submitted，
/// 之后可退回给评委修改。
pub async fn reopen(
    service: &EvaluationService,
    request: &HttpRequest,
    evaluation_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);
    let admin_id = RequireJWT::extract_user_id(request).unwrap_or_default();

    match storage.get_evaluation_by_id(evaluation_id).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::EvaluationNotFound,
                "评审记录不存在",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("查询评审记录失败: {e}"),
                )),
            );
        }
    }

    match storage.reopen_evaluation(evaluation_id).await {
        Ok(true) => {
            info!("Admin {} reopened evaluation {}", admin_id, evaluation_id);
            Ok(HttpResponse::Ok().json(ApiResponse::success_empty("评审记录已重新打开")))
        }
        Ok(false) => Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
            ErrorCode::Conflict,
            "仅已锁定状态的评审记录可重新打开",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("重新打开评审记录失败: {e}"),
            )),
        ),
    }
}
