pub mod detail;
pub mod list;
pub mod lock_all;
pub mod reopen;
pub mod save;
pub mod send_back;
pub mod submit;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::evaluations::requests::{
    EvaluationListQuery, SaveEvaluationRequest, SendBackRequest, SubmitEvaluationRequest,
};
use crate::models::{ApiResponse, ErrorCode};
use crate::storage::Storage;

pub struct EvaluationService {
    storage: Option<Arc<dyn Storage>>,
}

impl EvaluationService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> Arc<dyn Storage> {
        if let Some(storage) = &self.storage {
            storage.clone()
        } else {
            request
                .app_data::<actix_web::web::Data<Arc<dyn Storage>>>()
                .expect("Storage not found in app data")
                .get_ref()
                .clone()
        }
    }

    /// 获取（必要时创建）当前评委对某作品的评审记录
    pub async fn get_or_create_evaluation(
        &self,
        request: &HttpRequest,
        entry_id: i64,
    ) -> ActixResult<HttpResponse> {
        detail::get_or_create_evaluation(self, request, entry_id).await
    }

    /// 保存评审内容
    pub async fn save_evaluation(
        &self,
        request: &HttpRequest,
        evaluation_id: i64,
        req: SaveEvaluationRequest,
    ) -> ActixResult<HttpResponse> {
        save::save_evaluation(self, request, evaluation_id, req).await
    }

    /// 提交评审
    pub async fn submit_evaluation(
        &self,
        request: &HttpRequest,
        evaluation_id: i64,
        req: SubmitEvaluationRequest,
    ) -> ActixResult<HttpResponse> {
        submit::submit_evaluation(self, request, evaluation_id, req).await
    }

    /// 当前评委的评审记录列表
    pub async fn list_my_evaluations(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        list::list_my_evaluations(self, request).await
    }

    /// 全部评审记录列表（管理员）
    pub async fn list_evaluations(
        &self,
        request: &HttpRequest,
        query: EvaluationListQuery,
    ) -> ActixResult<HttpResponse> {
        list::list_evaluations(self, request, query).await
    }

    /// 批量锁定所有已提交记录（管理员）
    pub async fn lock_all_submitted(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        lock_all::lock_all_submitted(self, request).await
    }

    /// 退回已提交记录（管理员）
    pub async fn send_back(
        &self,
        request: &HttpRequest,
        evaluation_id: i64,
        req: SendBackRequest,
    ) -> ActixResult<HttpResponse> {
        send_back::send_back(self, request, evaluation_id, req).await
    }

    /// 重新打开已锁定记录（管理员）
    pub async fn reopen(
        &self,
        request: &HttpRequest,
        evaluation_id: i64,
    ) -> ActixResult<HttpResponse> {
        reopen::reopen(self, request, evaluation_id).await
    }
}

/// 评委访问他人或不存在的记录时的统一响应
///
/// 不区分“记录不存在”与“记录不属于你”，避免泄露记录是否存在。
pub(crate) fn not_owner_response() -> HttpResponse {
    HttpResponse::Forbidden().json(ApiResponse::error_empty(
        ErrorCode::Forbidden,
        "无权访问该评审记录",
    ))
}
