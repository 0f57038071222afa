pub mod assign;
pub mod assign_all;
pub mod list;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::assignments::requests::AssignRequest;
use crate::storage::Storage;

pub struct AssignmentService {
    storage: Option<Arc<dyn Storage>>,
}

impl AssignmentService {
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

    /// 为单个评委分配作品
    pub async fn assign(
        &self,
        req: AssignRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        assign::assign(self, req, request).await
    }

    /// 所有活跃评委 x 所有可评审作品的整体分配
    pub async fn assign_all(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        assign_all::assign_all(self, request).await
    }

    /// 当前评委的分配列表（含评审进度）
    pub async fn list_my_assignments(
        &self,
        judge_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        list::list_my_assignments(self, judge_id, request).await
    }
}
