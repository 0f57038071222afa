pub mod list;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::entries::requests::EntryListQuery;
use crate::storage::Storage;

pub struct EntryService {
    storage: Option<Arc<dyn Storage>>,
}

impl EntryService {
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

    /// 列出作品
    pub async fn list_entries(
        &self,
        query: EntryListQuery,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        list::list_entries(self, query, request).await
    }
}
