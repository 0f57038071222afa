use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::{EvaluationService, not_owner_response};
use crate::middlewares::RequireJWT;
use crate::models::evaluations::entities::EvaluationStatus;
use crate::models::evaluations::requests::SaveEvaluationRequest;
use crate::models::{ApiResponse, ErrorCode};
use crate::utils::scoring::{build_ratings, compute_totals, weight_table};

/// 保存评审内容
///
/// 派生分数（总分/满分/加权分）总是由服务端重新计算后连同评分
/// 快照在一条带版本条件的 UPDATE 中写入；版本或状态不匹配返回
/// Conflict，调用方需要重新读取后重试。
pub async fn save_evaluation(
    service: &EvaluationService,
    request: &HttpRequest,
    evaluation_id: i64,
    req: SaveEvaluationRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let current_user = match RequireJWT::extract_user_claims(request) {
        Some(user) => user,
        None => {
            return Ok(HttpResponse::Unauthorized()
                .json(ApiResponse::error_empty(ErrorCode::Unauthorized, "未登录")));
        }
    };

    // 所有权校验：记录不存在与不属于当前评委返回同一响应
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

    // 状态守卫：锁定记录不可被评委覆盖
    if evaluation.status == EvaluationStatus::Locked {
        return Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
            ErrorCode::EvaluationLocked,
            "评审记录已被锁定，不可修改",
        )));
    }
    if evaluation.status == EvaluationStatus::Submitted {
        return Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
            ErrorCode::Conflict,
            "评审记录已提交，如需修改请联系管理员退回",
        )));
    }

    // 校验打分并补齐快照
    let active_questions = match storage.list_active_questions().await {
        Ok(questions) => questions,
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("查询评分项失败: {e}"),
                )),
            );
        }
    };

    let ratings = match build_ratings(&req.ratings, &active_questions) {
        Ok(ratings) => ratings,
        Err(msg) => {
            return Ok(HttpResponse::BadRequest()
                .json(ApiResponse::error_empty(ErrorCode::BadRequest, msg)));
        }
    };

    // 权重表包含停用项，历史评分不因停用被清零
    let all_questions = match storage.list_all_questions().await {
        Ok(questions) => questions,
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("查询评分项失败: {e}"),
                )),
            );
        }
    };
    let totals = compute_totals(&ratings, &weight_table(&all_questions));

    match storage
        .save_evaluation(
            evaluation_id,
            req.lock_version,
            &ratings,
            &totals,
            req.overall_comment,
        )
        .await
    {
        Ok(true) => {
            // 返回保存后的最新记录，调用方拿到新的 lock_version
            match storage.get_evaluation_by_id(evaluation_id).await {
                Ok(Some(saved)) => {
                    Ok(HttpResponse::Ok().json(ApiResponse::success(saved, "保存成功")))
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
                format!("保存评审记录失败: {e}"),
            )),
        ),
    }
}
