use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::collections::HashMap;

use super::AssignmentService;
use crate::models::{
    ApiResponse, ErrorCode,
    assignments::responses::{MyAssignmentItem, MyAssignmentsResponse},
};

/// 当前评委的分配列表，附带每个作品的评审进度
pub async fn list_my_assignments(
    service: &AssignmentService,
    judge_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let assignments = match storage.list_assignments_by_judge(judge_id).await {
        Ok(list) => list,
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("查询分配列表失败: {e}"),
                )),
            );
        }
    };

    // 该评委已有的评审记录，按作品索引
    let evaluations = match storage.list_evaluations_by_judge(judge_id).await {
        Ok(list) => list,
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("查询评审记录失败: {e}"),
                )),
            );
        }
    };
    let evaluation_map: HashMap<i64, _> =
        evaluations.into_iter().map(|e| (e.entry_id, e)).collect();

    let mut items = Vec::with_capacity(assignments.len());
    for assignment in assignments {
        let entry = match storage.get_entry_by_id(assignment.entry_id).await {
            Ok(Some(entry)) => entry,
            // 作品被外部系统移除后分配残留，跳过不展示
            Ok(None) => continue,
            Err(e) => {
                return Ok(
                    HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                        ErrorCode::InternalServerError,
                        format!("查询作品失败: {e}"),
                    )),
                );
            }
        };

        let evaluation = evaluation_map.get(&assignment.entry_id);
        items.push(MyAssignmentItem {
            entry,
            evaluation_status: evaluation.map(|e| e.status.to_string()),
            weighted_score: evaluation.map(|e| e.weighted_score),
        });
    }

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        MyAssignmentsResponse { items },
        "查询成功",
    )))
}
