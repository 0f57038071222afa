use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::EvaluationService;
use crate::middlewares::RequireJWT;
use crate::models::evaluations::responses::LockAllResponse;
use crate::models::{ApiResponse, ErrorCode};

/// 批量锁定所有已提交记录（管理员）
///
/// 逐条幂等转换，不要求整批原子：中途失败后部分记录已锁定，
/// 重跑只处理剩余的 Submitted 记录；全部锁定后重复执行返回 0。
pub async fn lock_all_submitted(
    service: &EvaluationService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let admin_id = RequireJWT::extract_user_id(request).unwrap_or_default();

    match storage.lock_all_submitted().await {
        Ok(count) => {
            info!("Admin {} locked {} submitted evaluations", admin_id, count);
            Ok(HttpResponse::Ok().json(ApiResponse::success(
                LockAllResponse {
                    locked_count: count as i64,
                },
                "批量锁定完成",
            )))
        }
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("批量锁定失败: {e}"),
            )),
        ),
    }
}
