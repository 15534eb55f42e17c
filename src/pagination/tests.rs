//! Tests for the pagination module

use super::*;
use crate::error::{Error, Result};
use test_case::test_case;

#[derive(Debug, Clone, PartialEq, Eq)]
struct Row {
    id: String,
}

impl Row {
    fn new(n: usize) -> Self {
        // Zero-padded so lexicographic id ordering matches numeric ordering.
        Self {
            id: format!("row-{n:06}"),
        }
    }
}

impl Identifiable for Row {
    fn id(&self) -> &str {
        &self.id
    }
}

fn rows(range: std::ops::Range<usize>) -> Vec<Row> {
    range.map(Row::new).collect()
}

// ============================================================================
// Paging Tests
// ============================================================================

#[test]
fn test_paging_default_is_skip() {
    let paging = Paging::default();
    assert_eq!(paging, Paging::skip(DEFAULT_PAGE_SIZE));
    assert_eq!(paging.skip_value(), Some(0));
    assert_eq!(paging.last_id_value(), None);
}

#[test]
fn test_paging_take_clamped_to_positive() {
    assert_eq!(Paging::skip(0).take(), 1);
    assert_eq!(Paging::last_id(0).take(), 1);
    assert_eq!(Paging::skip_from(10, 0).take(), 1);
}

#[test]
fn test_paging_take_plus_one() {
    assert_eq!(Paging::skip(25).take_plus_one(), 26);
    assert_eq!(Paging::last_id(999).take_plus_one(), 1000);
}

#[test]
fn test_paging_last_id_starts_empty() {
    let paging = Paging::last_id(50);
    assert_eq!(paging.last_id_value(), None);
    assert_eq!(paging.skip_value(), None);
}

// ============================================================================
// Lookahead Tests
// ============================================================================

#[test]
fn test_lookahead_exactly_take_plus_one_rows() {
    let paging = Paging::skip(3);
    let page = PagedResult::from_rows(rows(0..4), &paging);

    assert_eq!(page.data.len(), 3);
    assert!(page.has_next());
    // The lookahead row is discarded, not delivered.
    assert_eq!(page.data.last().unwrap().id, "row-000002");
}

#[test]
fn test_lookahead_exactly_take_rows() {
    let paging = Paging::skip(3);
    let page = PagedResult::from_rows(rows(0..3), &paging);

    assert_eq!(page.data.len(), 3);
    assert!(!page.has_next());
}

#[test]
fn test_lookahead_fewer_than_take_rows() {
    let paging = Paging::last_id(10);
    let page = PagedResult::from_rows(rows(0..4), &paging);

    assert_eq!(page.data, rows(0..4));
    assert!(!page.has_next());
}

#[test]
fn test_lookahead_empty_response() {
    let paging = Paging::skip(10);
    let page = PagedResult::from_rows(Vec::<Row>::new(), &paging);

    assert!(page.data.is_empty());
    assert!(!page.has_next());
}

// ============================================================================
// Cursor Advance Tests
// ============================================================================

#[test]
fn test_skip_cursor_advance() {
    let paging = Paging::skip_from(20, 10);
    let page = PagedResult::from_rows(rows(0..11), &paging);

    assert_eq!(page.next_paging, Some(Paging::skip_from(30, 10)));
}

#[test]
fn test_last_id_cursor_advance_to_last_kept_row() {
    let paging = Paging::last_id(5);
    let page = PagedResult::from_rows(rows(0..6), &paging);

    assert_eq!(page.data.len(), 5);
    match page.next_paging {
        Some(Paging::LastId { last_id, take }) => {
            assert_eq!(last_id.as_deref(), Some("row-000004"));
            assert_eq!(take, 5);
        }
        other => panic!("expected last-id cursor, got {other:?}"),
    }
}

// ============================================================================
// Exhaustive Lister Tests
// ============================================================================

/// Simulated backend: `total` rows, served per last-id cursor with lookahead.
fn fetch_window(total: usize, paging: &Paging) -> Vec<Row> {
    let start = match paging.last_id_value() {
        // Ids are zero-padded, so a linear scan finds the resume point.
        Some(last) => (0..total)
            .position(|n| Row::new(n).id == last)
            .map_or(total, |pos| pos + 1),
        None => 0,
    };
    let end = total.min(start + paging.take_plus_one() as usize);
    rows(start..end)
}

async fn drain(total: usize, calls: std::rc::Rc<std::cell::Cell<usize>>) -> Result<Vec<Row>> {
    list_all(|paging| {
        calls.set(calls.get() + 1);
        let window = fetch_window(total, &paging);
        async move { Ok(PagedResult::from_rows(window, &paging)) }
    })
    .await
}

#[test_case(0 ; "empty data set")]
#[test_case(1 ; "single row")]
#[test_case(998 ; "one short of a page")]
#[test_case(999 ; "exactly one page")]
#[test_case(1998 ; "exactly two pages")]
#[test_case(2500 ; "partial final page")]
#[tokio::test]
async fn test_list_all_returns_every_row_in_order(total: usize) {
    let calls = std::rc::Rc::new(std::cell::Cell::new(0));
    let all = drain(total, calls.clone()).await.unwrap();

    assert_eq!(all, rows(0..total));
}

#[tokio::test]
async fn test_list_all_page_boundary_call_counts() {
    // 999 rows fit one page but the lookahead cannot prove it, so a second,
    // empty fetch confirms the end.
    let calls = std::rc::Rc::new(std::cell::Cell::new(0));
    drain(999, calls.clone()).await.unwrap();
    assert_eq!(calls.get(), 2);

    // 998 rows are strictly under the page size: one call suffices.
    let calls = std::rc::Rc::new(std::cell::Cell::new(0));
    drain(998, calls.clone()).await.unwrap();
    assert_eq!(calls.get(), 1);
}

#[tokio::test]
async fn test_list_all_propagates_fetch_error() {
    let result: Result<Vec<Row>> =
        list_all(|_paging| async move { Err(Error::remote("backend unavailable")) }).await;

    assert!(matches!(result, Err(Error::Remote { .. })));
}

#[tokio::test]
async fn test_list_all_starts_from_last_id_cursor() {
    let mut first_cursor = None;
    let _ = list_all(|paging| {
        if first_cursor.is_none() {
            first_cursor = Some(paging.clone());
        }
        async move { Ok(PagedResult::<Row>::from_rows(Vec::new(), &paging)) }
    })
    .await
    .unwrap();

    assert_eq!(first_cursor, Some(Paging::last_id(EXHAUSTIVE_PAGE_SIZE)));
}
