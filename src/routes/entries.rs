use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::entries::requests::EntryListParams;
use crate::services::EntryService;

// 懒加载的全局 EntryService 实例
static ENTRY_SERVICE: Lazy<EntryService> = Lazy::new(EntryService::new_lazy);

// 列出作品（作品由外部报名系统写入，这里只读）
pub async fn list_entries(
    req: HttpRequest,
    params: web::Query<EntryListParams>,
) -> ActixResult<HttpResponse> {
    ENTRY_SERVICE
        .list_entries(params.into_inner().into_query(), &req)
        .await
}

// 配置路由
pub fn configure_entries_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/entries")
            .wrap(middlewares::RequireJWT)
            .route("", web::get().to(list_entries)),
    );
}
