//! Exhaustive listing
//!
//! Drains a paged query to completion by following next cursors.

use super::types::{PagedResult, Paging};
use crate::error::Result;
use std::future::Future;

/// Page size used when draining a query to completion. A practical upper
/// bound on what the remote service accepts per call.
pub const EXHAUSTIVE_PAGE_SIZE: u32 = 999;

/// Fetch every page of a paged query and concatenate the results in page
/// order.
///
/// Starts from a last-id cursor with [`EXHAUSTIVE_PAGE_SIZE`] rows per call;
/// seek paging keeps the drain stable against concurrent inserts shifting
/// offsets. An explicit loop rather than recursion, so call-stack depth stays
/// constant no matter how many pages the data set spans. There is no upper
/// bound on page count: an unbounded data set means unbounded memory.
///
/// The output preserves the ordering requested of the underlying fetch, with
/// no reordering or deduplication across page boundaries.
pub async fn list_all<T, F, Fut>(mut fetch_page: F) -> Result<Vec<T>>
where
    F: FnMut(Paging) -> Fut,
    Fut: Future<Output = Result<PagedResult<T>>>,
{
    let mut paging = Paging::last_id(EXHAUSTIVE_PAGE_SIZE);
    let mut all = Vec::new();

    loop {
        let page = fetch_page(paging).await?;
        all.extend(page.data);
        match page.next_paging {
            Some(next) => paging = next,
            None => return Ok(all),
        }
    }
}
