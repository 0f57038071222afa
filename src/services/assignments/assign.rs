use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::AssignmentService;
use crate::models::users::entities::{UserRole, UserStatus};
use crate::models::{
    ApiResponse, ErrorCode,
    assignments::{requests::AssignRequest, responses::AssignResultResponse},
};

/// 为单个评委分配一组作品
///
/// 评委必须存在、处于活跃状态且具有评委角色；作品必须已通过审核。
/// 任何一项校验失败整体拒绝，不会产生悬挂的分配关系。
pub async fn assign(
    service: &AssignmentService,
    req: AssignRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    if req.entry_ids.is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            "作品列表不能为空",
        )));
    }

    let storage = service.get_storage(request);

    // 校验评委
    let judge = match storage.get_user_by_id(req.judge_id).await {
        Ok(Some(user)) => user,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::UserNotFound,
                "评委不存在",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("查询评委失败: {e}"),
                )),
            );
        }
    };

    if judge.role != UserRole::Judge {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            "只能为评委角色分配评审任务",
        )));
    }

    if judge.status != UserStatus::Active {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            "评委账号未处于活跃状态",
        )));
    }

    // 逐个校验作品可评审
    for &entry_id in &req.entry_ids {
        match storage.get_entry_by_id(entry_id).await {
            Ok(Some(entry)) if entry.is_eligible() => {}
            Ok(Some(_)) => {
                return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                    ErrorCode::BadRequest,
                    format!("作品 {entry_id} 未通过审核，不可分配"),
                )));
            }
            Ok(None) => {
                return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                    ErrorCode::EntryNotFound,
                    format!("作品 {entry_id} 不存在"),
                )));
            }
            Err(e) => {
                return Ok(
                    HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                        ErrorCode::InternalServerError,
                        format!("查询作品失败: {e}"),
                    )),
                );
            }
        }
    }

    match storage
        .create_assignments(req.judge_id, &req.entry_ids)
        .await
    {
        Ok((created, skipped)) => {
            info!(
                "Assigned {} entries to judge {} ({} skipped as existing)",
                created, req.judge_id, skipped
            );
            Ok(HttpResponse::Ok().json(ApiResponse::success(
                AssignResultResponse { created, skipped },
                "分配完成",
            )))
        }
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("创建分配失败: {e}"),
            )),
        ),
    }
}
