use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::AssignmentService;
use crate::models::{ApiResponse, ErrorCode, assignments::responses::AssignResultResponse};

/// 整体分配：所有活跃评委 x 所有已通过审核的作品
///
/// 按评委逐个执行，已存在的对幂等跳过；进程中途失败后重跑
/// 只会补齐缺失的对，不会产生重复分配。
pub async fn assign_all(
    service: &AssignmentService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let judge_ids = match storage.list_active_judge_ids().await {
        Ok(ids) => ids,
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("查询评委列表失败: {e}"),
                )),
            );
        }
    };

    let entries = match storage.list_eligible_entries().await {
        Ok(entries) => entries,
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("查询可评审作品失败: {e}"),
                )),
            );
        }
    };

    let entry_ids: Vec<i64> = entries.iter().map(|e| e.id).collect();

    let mut created = 0i64;
    let mut skipped = 0i64;

    for judge_id in judge_ids {
        match storage.create_assignments(judge_id, &entry_ids).await {
            Ok((c, s)) => {
                created += c;
                skipped += s;
            }
            Err(e) => {
                // 单个评委失败不回滚已完成的分配，重跑可补齐
                return Ok(
                    HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                        ErrorCode::InternalServerError,
                        format!("为评委 {judge_id} 分配失败: {e}，已完成 {created} 对，可重试补齐"),
                    )),
                );
            }
        }
    }

    info!(
        "Bulk assignment finished: {} created, {} skipped",
        created, skipped
    );

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        AssignResultResponse { created, skipped },
        "整体分配完成",
    )))
}
