use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::{EvaluationService, not_owner_response};
use crate::middlewares::RequireJWT;
use crate::models::evaluations::entities::EvaluationStatus;
use crate::models::evaluations::requests::SubmitEvaluationRequest;
use crate::models::{ApiResponse, ErrorCode};

/// 提交评审（Draft/SentBack -> Submitted）
///
/// 提交设置 submitted_at 并清除退回原因；带版本条件，
/// 与管理员操作竞争时输掉的一方得到 Conflict。
pub async fn submit_evaluation(
    service: &EvaluationService,
    request: &HttpRequest,
    evaluation_id: i64,
    req: SubmitEvaluationRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let current_user = match RequireJWT::extract_user_claims(request) {
        Some(user) => user,
        None => {
            return Ok(HttpResponse::Unauthorized()
                .json(ApiResponse::error_empty(ErrorCode::Unauthorized, "未登录")));
        }
    };

    let evaluation = match storage.get_evaluation_by_id(evaluation_id).await {
        Ok(Some(evaluation)) if evaluation.judge_id == current_user.id => evaluation,
        Ok(_) => return Ok(not_owner_response()),
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("查询评审记录失败: {e}"),
                )),
            );
        }
    };

    if evaluation.status == EvaluationStatus::Locked {
        return Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
            ErrorCode::EvaluationLocked,
            "评审记录已被锁定，不可提交",
        )));
    }
    if evaluation.status == EvaluationStatus::Submitted {
        return Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
            ErrorCode::Conflict,
            "评审记录已提交",
        )));
    }

    match storage
        .submit_evaluation(evaluation_id, req.lock_version)
        .await
    {
        Ok(true) => {
            info!(
                "Judge {} submitted evaluation {} for entry {}",
                current_user.id, evaluation_id, evaluation.entry_id
            );
            match storage.get_evaluation_by_id(evaluation_id).await {
                Ok(Some(submitted)) => {
                    Ok(HttpResponse::Ok().json(ApiResponse::success(submitted, "提交成功")))
                }
                Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                    ErrorCode::EvaluationNotFound,
                    "评审记录不存在",
                ))),
                Err(e) => Ok(
                    HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                        ErrorCode::InternalServerError,
                        format!("读取评审记录失败: {e}"),
                    )),
                ),
            }
        }
        Ok(false) => Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
            ErrorCode::Conflict,
            "评审记录已被并发修改，请刷新后重试",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("提交评审记录失败: {e}"),
            )),
        ),
    }
}
