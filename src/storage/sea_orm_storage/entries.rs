//! 作品存储操作
//!
//! 作品数据由外部报名系统写入，这里只提供读取。

use super::SeaOrmStorage;
use crate::entity::entries::{Column, Entity as Entries};
use crate::errors::{EvalSystemError, Result};
use crate::models::{
    PaginationInfo,
    entries::{
        entities::{Entry, EntryStatus},
        requests::EntryListQuery,
        responses::EntryListResponse,
    },
};
use crate::utils::escape_like_pattern;
use sea_orm::{
    ColumnTrait, Condition, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
};

impl SeaOrmStorage {
    /// 通过 ID 获取作品
    pub async fn get_entry_by_id_impl(&self, entry_id: i64) -> Result<Option<Entry>> {
        let result = Entries::find_by_id(entry_id)
            .one(&self.db)
            .await
            .map_err(|e| EvalSystemError::database_operation(format!("查询作品失败: {e}")))?;

        Ok(result.map(|m| m.into_entry()))
    }

    /// 分页列出作品
    pub async fn list_entries_with_pagination_impl(
        &self,
        query: EntryListQuery,
    ) -> Result<EntryListResponse> {
        let page = query.page.unwrap_or(1).max(1) as u64;
        let size = query.size.unwrap_or(10).clamp(1, 100) as u64;

        let mut select = Entries::find();

        // 搜索条件
        if let Some(ref search) = query.search
            && !search.trim().is_empty()
        {
            let escaped = escape_like_pattern(search.trim());
            select = select.filter(
                Condition::any()
                    .add(Column::Code.contains(&escaped))
                    .add(Column::Title.contains(&escaped)),
            );
        }

        // 状态筛选
        if let Some(ref status) = query.status {
            select = select.filter(Column::Status.eq(status.to_string()));
        }

        // 按编号排序，保证列表顺序稳定
        select = select.order_by_asc(Column::Code);

        let paginator = select.paginate(&self.db, size);
        let total = paginator
            .num_items()
            .await
            .map_err(|e| EvalSystemError::database_operation(format!("查询作品总数失败: {e}")))?;

        let pages = paginator
            .num_pages()
            .await
            .map_err(|e| EvalSystemError::database_operation(format!("查询作品页数失败: {e}")))?;

        let entries = paginator
            .fetch_page(page - 1)
            .await
            .map_err(|e| EvalSystemError::database_operation(format!("查询作品列表失败: {e}")))?;

        Ok(EntryListResponse {
            items: entries.into_iter().map(|m| m.into_entry()).collect(),
            pagination: PaginationInfo {
                page: page as i64,
                page_size: size as i64,
                total: total as i64,
                total_pages: pages as i64,
            },
        })
    }

    /// 列出所有可评审的作品
    pub async fn list_eligible_entries_impl(&self) -> Result<Vec<Entry>> {
        let results = Entries::find()
            .filter(Column::Status.eq(EntryStatus::Approved.to_string()))
            .order_by_asc(Column::Code)
            .all(&self.db)
            .await
            .map_err(|e| {
                EvalSystemError::database_operation(format!("查询可评审作品失败: {e}"))
            })?;

        Ok(results.into_iter().map(|m| m.into_entry()).collect())
    }
}
