use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::EntryService;
use crate::models::{ApiResponse, ErrorCode, entries::requests::EntryListQuery};

pub async fn list_entries(
    service: &EntryService,
    query: EntryListQuery,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.list_entries_with_pagination(query).await {
        Ok(response) => Ok(HttpResponse::Ok().json(ApiResponse::success(response, "查询成功"))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("查询作品列表失败: {e}"),
            )),
        ),
    }
}
