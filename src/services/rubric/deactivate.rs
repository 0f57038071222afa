use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::{RubricService, require_admin};
use crate::models::{ApiResponse, ErrorCode};

/// 停用评分项
///
/// 软删除：历史评审记录持有文本与满分快照，评分项从不物理删除。
pub async fn deactivate_question(
    service: &RubricService,
    question_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    if let Err(resp) = require_admin(request) {
        return Ok(resp);
    }

    let storage = service.get_storage(request);

    match storage.deactivate_question(question_id).await {
        Ok(true) => Ok(HttpResponse::Ok().json(ApiResponse::success_empty("评分项已停用"))),
        Ok(false) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::QuestionNotFound,
            "评分项不存在或已停用",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("停用评分项失败: {e}"),
            )),
        ),
    }
}
