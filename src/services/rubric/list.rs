use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::RubricService;
use crate::models::{ApiResponse, ErrorCode, rubric::responses::QuestionListResponse};
use crate::utils::scoring::weight_sum;

pub async fn list_questions(
    service: &RubricService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.list_active_questions().await {
        Ok(items) => {
            let response = QuestionListResponse {
                weight_sum: weight_sum(&items),
                items,
            };
            Ok(HttpResponse::Ok().json(ApiResponse::success(response, "查询成功")))
        }
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("查询评分项失败: {e}"),
            )),
        ),
    }
}
