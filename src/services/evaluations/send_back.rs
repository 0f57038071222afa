use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::EvaluationService;
use crate::middlewares::RequireJWT;
use crate::models::evaluations::requests::SendBackRequest;
use crate::models::{ApiResponse, ErrorCode};
use crate::utils::validate::validate_send_back_reason;

/// 退回已提交记录（管理员，Submitted -> SentBack）
///
/// 退回必须附带非空理由，理由持久化后评委可见。管理员只改
/// 状态与退回信息，不会改写评委已录入的分数。
pub async fn send_back(
    service: &EvaluationService,
    request: &HttpRequest,
    evaluation_id: i64,
    req: SendBackRequest,
) -> ActixResult<HttpResponse> {
    if let Err(msg) = validate_send_back_reason(&req.reason) {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::BadRequest, msg)));
    }

    let storage = service.get_storage(request);
    let admin_id = RequireJWT::extract_user_id(request).unwrap_or_default();

    // 管理员视角允许区分不存在与状态不符
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

    match storage
        .send_back_evaluation(evaluation_id, req.reason.trim())
        .await
    {
        Ok(true) => {
            info!(
                "Admin {} sent back evaluation {}: {}",
                admin_id,
                evaluation_id,
                req.reason.trim()
            );
            Ok(HttpResponse::Ok().json(ApiResponse::success_empty("评审记录已退回")))
        }
        Ok(false) => Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
            ErrorCode::Conflict,
            "仅已提交状态的评审记录可退回",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("退回评审记录失败: {e}"),
            )),
        ),
    }
}
