use serde::Serialize;
use ts_rs::TS;

use crate::models::PaginationInfo;
use crate::models::entries::entities::Entry;

/// 作品列表响应
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/entry.ts")]
pub struct EntryListResponse {
    pub items: Vec<Entry>,
    pub pagination: PaginationInfo,
}
