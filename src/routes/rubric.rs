use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::rubric::requests::{CreateQuestionRequest, UpdateQuestionRequest};
use crate::services::RubricService;

// 懒加载的全局 RubricService 实例
static RUBRIC_SERVICE: Lazy<RubricService> = Lazy::new(RubricService::new_lazy);

// 列出启用的评分项（评委打分时也需要读取）
pub async fn list_questions(req: HttpRequest) -> ActixResult<HttpResponse> {
    RUBRIC_SERVICE.list_questions(&req).await
}

// 创建评分项
pub async fn create_question(
    req: HttpRequest,
    question: web::Json<CreateQuestionRequest>,
) -> ActixResult<HttpResponse> {
    RUBRIC_SERVICE
        .create_question(question.into_inner(), &req)
        .await
}

// 更新评分项
pub async fn update_question(
    req: HttpRequest,
    path: web::Path<i64>,
    update: web::Json<UpdateQuestionRequest>,
) -> ActixResult<HttpResponse> {
    RUBRIC_SERVICE
        .update_question(path.into_inner(), update.into_inner(), &req)
        .await
}

// 停用评分项（软删除）
pub async fn deactivate_question(
    req: HttpRequest,
    path: web::Path<i64>,
) -> ActixResult<HttpResponse> {
    RUBRIC_SERVICE
        .deactivate_question(path.into_inner(), &req)
        .await
}

// 配置路由
pub fn configure_rubric_routes(cfg: &mut web::ServiceConfig) {
    // 读取对所有登录用户开放（评委打分页也要渲染评分项），
    // 变更操作在 service 层校验管理员角色
    cfg.service(
        web::scope("/api/v1/rubric/questions")
            .wrap(middlewares::RequireJWT)
            .route("", web::get().to(list_questions))
            .route("", web::post().to(create_question))
            .route("/{id}", web::put().to(update_question))
            .route("/{id}", web::delete().to(deactivate_question)),
    );
}
