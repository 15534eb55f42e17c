//! Pagination types
//!
//! Defines the cursor sum type and the lookahead page construction used by all
//! listing operations.

/// Default page size for single-page listing calls
pub const DEFAULT_PAGE_SIZE: u32 = 100;

/// Types that expose the opaque entity id last-id paging resumes after
pub trait Identifiable {
    /// The entity's opaque id
    fn id(&self) -> &str;
}

/// Position marker describing where a listing resumes.
///
/// Two strategies with different trade-offs:
///
/// - [`Paging::Skip`] is offset-based. It tolerates arbitrary orderings but can
///   skip or duplicate rows if the underlying data set is mutated between
///   calls; that is a documented limitation of offset paging, not a bug here.
/// - [`Paging::LastId`] is seek-based and continues strictly after a given
///   entity id. It never skips or repeats rows, provided the requested
///   ordering is strictly monotonic and collision-free over entity ids.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Paging {
    /// Offset-based cursor
    Skip {
        /// Number of rows to skip
        skip: u64,
        /// Page size
        take: u32,
    },
    /// Seek-based cursor, continues strictly after `last_id`
    LastId {
        /// Id of the last row already delivered, `None` on the first page
        last_id: Option<String>,
        /// Page size
        take: u32,
    },
}

impl Paging {
    /// Create a skip cursor starting at offset 0
    pub fn skip(take: u32) -> Self {
        Self::Skip {
            skip: 0,
            take: take.max(1),
        }
    }

    /// Create a skip cursor at a given offset
    pub fn skip_from(skip: u64, take: u32) -> Self {
        Self::Skip {
            skip,
            take: take.max(1),
        }
    }

    /// Create a last-id cursor starting from the beginning
    pub fn last_id(take: u32) -> Self {
        Self::LastId {
            last_id: None,
            take: take.max(1),
        }
    }

    /// Page size of this cursor
    pub fn take(&self) -> u32 {
        match self {
            Paging::Skip { take, .. } | Paging::LastId { take, .. } => *take,
        }
    }

    /// Row count to actually request: one extra row detects a further page
    /// without a separate count query
    pub fn take_plus_one(&self) -> u32 {
        self.take() + 1
    }

    /// Offset to send with the request, if this is a skip cursor
    pub fn skip_value(&self) -> Option<u64> {
        match self {
            Paging::Skip { skip, .. } => Some(*skip),
            Paging::LastId { .. } => None,
        }
    }

    /// `id_gt` value to send with the request, if this is a last-id cursor
    /// with a position
    pub fn last_id_value(&self) -> Option<&str> {
        match self {
            Paging::Skip { .. } => None,
            Paging::LastId { last_id, .. } => last_id.as_deref(),
        }
    }

    /// The cursor resuming after a full page whose last kept row has
    /// `last_row_id`
    fn advance(&self, last_row_id: &str) -> Paging {
        match self {
            Paging::Skip { skip, take } => Paging::Skip {
                skip: skip + u64::from(*take),
                take: *take,
            },
            Paging::LastId { take, .. } => Paging::LastId {
                last_id: Some(last_row_id.to_string()),
                take: *take,
            },
        }
    }
}

impl Default for Paging {
    fn default() -> Self {
        Self::skip(DEFAULT_PAGE_SIZE)
    }
}

/// One bounded batch of results plus an optional cursor for continuation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PagedResult<T> {
    /// Normalized rows, at most `take` of them, in request order
    pub data: Vec<T>,
    /// Cursor for the next page, present iff the response held more than
    /// `take` rows
    pub next_paging: Option<Paging>,
}

impl<T: Identifiable> PagedResult<T> {
    /// Build a page from the rows the transport returned for a `take + 1`
    /// lookahead request.
    ///
    /// Strictly more than `take` rows means another page exists: the extra row
    /// is discarded and the next cursor resumes after the last kept row. At
    /// most `take` rows means this was the final page.
    pub fn from_rows(mut rows: Vec<T>, paging: &Paging) -> Self {
        let take = paging.take() as usize;
        let has_next = rows.len() > take;
        if has_next {
            rows.truncate(take);
        }
        let next_paging = match (has_next, rows.last()) {
            (true, Some(last)) => Some(paging.advance(last.id())),
            _ => None,
        };
        Self {
            data: rows,
            next_paging,
        }
    }
}

impl<T> PagedResult<T> {
    /// Whether a further page exists
    pub fn has_next(&self) -> bool {
        self.next_paging.is_some()
    }
}
