use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::routes::params::Pagination;

/// Paging block flattened into every list response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PageMeta {
    pub total: usize,
    pub page: usize,
    pub limit: usize,
    pub total_pages: usize,
}

impl PageMeta {
    pub fn new(page: usize, limit: usize, total: usize) -> Self {
        Self {
            total,
            page,
            limit,
            total_pages: total.div_ceil(limit).max(1),
        }
    }
}

/// Slices `items` to the requested page: `[(page-1)*limit, page*limit)`.
pub fn paginate<T>(items: Vec<T>, pagination: &Pagination) -> (Vec<T>, PageMeta) {
    let (page, limit, offset) = pagination.normalize();
    let meta = PageMeta::new(page, limit, items.len());
    let data = items.into_iter().skip(offset).take(limit).collect();
    (data, meta)
}
