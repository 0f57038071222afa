use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares::{self, RequireJWT, RequireRole};
use crate::models::assignments::requests::AssignRequest;
use crate::models::users::entities::UserRole;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::AssignmentService;

// 懒加载的全局 AssignmentService 实例
static ASSIGNMENT_SERVICE: Lazy<AssignmentService> = Lazy::new(AssignmentService::new_lazy);

// 为单个评委分配作品
pub async fn assign(
    req: HttpRequest,
    body: web::Json<AssignRequest>,
) -> ActixResult<HttpResponse> {
    ASSIGNMENT_SERVICE.assign(body.into_inner(), &req).await
}

// 整体分配：所有活跃评委 x 所有可评审作品
pub async fn assign_all(req: HttpRequest) -> ActixResult<HttpResponse> {
    ASSIGNMENT_SERVICE.assign_all(&req).await
}

// 当前评委的分配列表
pub async fn list_my_assignments(req: HttpRequest) -> ActixResult<HttpResponse> {
    let user_id = match RequireJWT::extract_user_id(&req) {
        Some(id) => id,
        None => {
            return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
                ErrorCode::Unauthorized,
                "无法获取用户信息",
            )));
        }
    };

    ASSIGNMENT_SERVICE.list_my_assignments(user_id, &req).await
}

// 配置路由
pub fn configure_assignments_routes(cfg: &mut web::ServiceConfig) {
    // 评委查看自己的分配
    cfg.service(
        web::scope("/api/v1/assignments/my")
            .wrap(middlewares::RequireJWT)
            .route("", web::get().to(list_my_assignments)),
    );

    // 分配操作仅管理员可用
    cfg.service(
        web::scope("/api/v1/assignments")
            .wrap(RequireRole::new_any(UserRole::admin_roles()))
            .wrap(middlewares::RequireJWT)
            .route("", web::post().to(assign))
            .route("/all", web::post().to(assign_all)),
    );
}
