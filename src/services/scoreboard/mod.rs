pub mod compute;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::storage::Storage;

pub struct ScoreboardService {
    storage: Option<Arc<dyn Storage>>,
}

impl ScoreboardService {
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

    /// 计算当前记分板
    pub async fn get_scoreboard(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        compute::get_scoreboard(self, request).await
    }
}
