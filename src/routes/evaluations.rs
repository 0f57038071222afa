use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares::{self, RateLimit, RequireRole};
use crate::models::evaluations::requests::{
    EvaluationListQuery, SaveEvaluationRequest, SendBackRequest, SubmitEvaluationRequest,
};
use crate::models::users::entities::UserRole;
use crate::services::EvaluationService;

// 懒加载的全局 EvaluationService 实例
static EVALUATION_SERVICE: Lazy<EvaluationService> = Lazy::new(EvaluationService::new_lazy);

// 获取（必要时创建）当前评委对某作品的评审记录
pub async fn get_or_create_evaluation(
    req: HttpRequest,
    path: web::Path<i64>, // entry_id
) -> ActixResult<HttpResponse> {
    EVALUATION_SERVICE
        .get_or_create_evaluation(&req, path.into_inner())
        .await
}

// 保存评审内容
pub async fn save_evaluation(
    req: HttpRequest,
    path: web::Path<i64>,
    body: web::Json<SaveEvaluationRequest>,
) -> ActixResult<HttpResponse> {
    EVALUATION_SERVICE
        .save_evaluation(&req, path.into_inner(), body.into_inner())
        .await
}

// 提交评审
pub async fn submit_evaluation(
    req: HttpRequest,
    path: web::Path<i64>,
    body: web::Json<SubmitEvaluationRequest>,
) -> ActixResult<HttpResponse> {
    EVALUATION_SERVICE
        .submit_evaluation(&req, path.into_inner(), body.into_inner())
        .await
}

// 当前评委的评审记录列表
pub async fn list_my_evaluations(req: HttpRequest) -> ActixResult<HttpResponse> {
    EVALUATION_SERVICE.list_my_evaluations(&req).await
}

// 全部评审记录列表（管理员）
pub async fn list_evaluations(
    req: HttpRequest,
    query: web::Query<EvaluationListQuery>,
) -> ActixResult<HttpResponse> {
    EVALUATION_SERVICE
        .list_evaluations(&req, query.into_inner())
        .await
}

// 批量锁定所有已提交记录（管理员）
pub async fn lock_all_submitted(req: HttpRequest) -> ActixResult<HttpResponse> {
    EVALUATION_SERVICE.lock_all_submitted(&req).await
}

// 退回已提交记录（管理员）
pub async fn send_back(
    req: HttpRequest,
    path: web::Path<i64>,
    body: web::Json<SendBackRequest>,
) -> ActixResult<HttpResponse> {
    EVALUATION_SERVICE
        .send_back(&req, path.into_inner(), body.into_inner())
        .await
}

// 重新打开已锁定记录（管理员）
pub async fn reopen(req: HttpRequest, path: web::Path<i64>) -> ActixResult<HttpResponse> {
    EVALUATION_SERVICE.reopen(&req, path.into_inner()).await
}

// 配置路由
pub fn configure_evaluations_routes(cfg: &mut web::ServiceConfig) {
    // 管理员批量/单条干预操作
    cfg.service(
        web::scope("/api/v1/evaluations/admin")
            .wrap(RequireRole::new_any(UserRole::admin_roles()))
            .wrap(middlewares::RequireJWT)
            .route("", web::get().to(list_evaluations))
            .route("/lock-all", web::post().to(lock_all_submitted))
            .route("/{id}/send-back", web::post().to(send_back))
            .route("/{id}/reopen", web::post().to(reopen)),
    );

    // 评委本人操作
    cfg.service(
        web::scope("/api/v1/evaluations")
            .wrap(middlewares::RequireJWT)
            .route("/my", web::get().to(list_my_evaluations))
            .route("/entry/{entry_id}", web::get().to(get_or_create_evaluation))
            .service(
                web::resource("/{id}")
                    .wrap(RateLimit::evaluation_save())
                    .route(web::put().to(save_evaluation)),
            )
            .route("/{id}/submit", web::post().to(submit_evaluation)),
    );
}
