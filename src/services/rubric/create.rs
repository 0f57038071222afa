use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::warn;

use super::{RubricService, require_admin};
use crate::models::{ApiResponse, ErrorCode, rubric::requests::CreateQuestionRequest};
use crate::utils::scoring::weight_sum;

pub async fn create_question(
    service: &RubricService,
    question: CreateQuestionRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    if let Err(resp) = require_admin(request) {
        return Ok(resp);
    }

    // 满分至少为 1
    if question.max_score < 1 {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            "满分必须大于等于 1",
        )));
    }

    // 权重不能为负
    if question.weight_percent < 0.0 {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            "权重不能为负数",
        )));
    }

    if question.text.trim().is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            "评分项标题不能为空",
        )));
    }

    let storage = service.get_storage(request);

    match storage.create_question(question).await {
        Ok(created) => {
            // 权重和偏离 100 时告警提示运营方校正，不阻断
            if let Ok(questions) = storage.list_active_questions().await {
                let sum = weight_sum(&questions);
                if (sum - 100.0).abs() > f64::EPSILON {
                    warn!("评分项权重和为 {}，应当为 100", sum);
                }
            }
            Ok(HttpResponse::Created().json(ApiResponse::success(created, "评分项创建成功")))
        }
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("创建评分项失败: {e}"),
            )),
        ),
    }
}
