use serde::Deserialize;
use ts_rs::TS;

use crate::models::common::PaginationQuery;
use crate::models::entries::entities::EntryStatus;

// 作品列表查询参数（来自HTTP请求）
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/entry.ts")]
pub struct EntryListParams {
    #[serde(flatten)]
    #[ts(flatten)]
    pub pagination: PaginationQuery,
    pub status: Option<EntryStatus>,
    pub search: Option<String>,
}

impl EntryListParams {
    pub fn into_query(self) -> EntryListQuery {
        EntryListQuery {
            page: Some(self.pagination.page),
            size: Some(self.pagination.size),
            status: self.status,
            search: self.search,
        }
    }
}

// 作品列表查询参数（用于存储层）
#[derive(Debug, Clone)]
pub struct EntryListQuery {
    pub page: Option<i64>,
    pub size: Option<i64>,
    pub status: Option<EntryStatus>,
    pub search: Option<String>,
}
