use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::warn;

use super::{RubricService, require_admin};
use crate::models::{ApiResponse, ErrorCode, rubric::requests::UpdateQuestionRequest};
use crate::utils::scoring::weight_sum;

pub async fn update_question(
    service: &RubricService,
    question_id: i64,
    update: UpdateQuestionRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    if let Err(resp) = require_admin(request) {
        return Ok(resp);
    }

    if let Some(max_score) = update.max_score
        && max_score < 1
    {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            "满分必须大于等于 1",
        )));
    }

    if let Some(weight_percent) = update.weight_percent
        && weight_percent < 0.0
    {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            "权重不能为负数",
        )));
    }

    if let Some(ref text) = update.text
        && text.trim().is_empty()
    {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            "评分项标题不能为空",
        )));
    }

    let storage = service.get_storage(request);

    match storage.update_question(question_id, update).await {
        Ok(Some(updated)) => {
            if let Ok(questions) = storage.list_active_questions().await {
                let sum = weight_sum(&questions);
                if (sum - 100.0).abs() > f64::EPSILON {
                    warn!("评分项权重和为 {}，应当为 100", sum);
                }
            }
            Ok(HttpResponse::Ok().json(ApiResponse::success(updated, "评分项更新成功")))
        }
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::QuestionNotFound,
            "评分项不存在",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("更新评分项失败: {e}"),
            )),
        ),
    }
}
