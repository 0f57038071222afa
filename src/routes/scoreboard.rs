use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::services::ScoreboardService;

// 懒加载的全局 ScoreboardService 实例
static SCOREBOARD_SERVICE: Lazy<ScoreboardService> = Lazy::new(ScoreboardService::new_lazy);

// 获取当前记分板（每次请求现算，页面刷新即最新）
pub async fn get_scoreboard(req: HttpRequest) -> ActixResult<HttpResponse> {
    SCOREBOARD_SERVICE.get_scoreboard(&req).await
}

// 配置路由
pub fn configure_scoreboard_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/scoreboard")
            .wrap(middlewares::RequireJWT)
            .route("", web::get().to(get_scoreboard)),
    );
}
