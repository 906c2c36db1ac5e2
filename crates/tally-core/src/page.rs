//! Pagination types for todo listings.
//!
//! A [`PageRequest`] carries the caller's optional paging and sorting
//! choices; [`PageRequest::resolve`] turns it into a concrete [`PageSpec`]
//! with the skip/limit math applied. [`Page`] wraps one page of results
//! together with the total match count and the derived page count.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Items per page when the caller does not specify a limit.
pub const DEFAULT_LIMIT: u32 = 10;

/// Field a todo listing can be sorted by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortField {
    /// Creation timestamp (the default)
    #[default]
    CreatedAt,

    /// Last-modified timestamp
    UpdatedAt,

    /// Due date; records without one always sort last
    DueDate,

    /// Semantic priority rank, lowest urgency first under ascending order
    Priority,

    /// Title text
    Title,
}

impl FromStr for SortField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "createdat" | "created_at" | "created" => Ok(SortField::CreatedAt),
            "updatedat" | "updated_at" | "updated" => Ok(SortField::UpdatedAt),
            "duedate" | "due_date" | "due" => Ok(SortField::DueDate),
            "priority" => Ok(SortField::Priority),
            "title" => Ok(SortField::Title),
            _ => Err(format!("Invalid sort field: {s}")),
        }
    }
}

impl SortField {
    /// Convert to the canonical field name.
    pub fn as_str(&self) -> &'static str {
        match self {
            SortField::CreatedAt => "created_at",
            SortField::UpdatedAt => "updated_at",
            SortField::DueDate => "due_date",
            SortField::Priority => "priority",
            SortField::Title => "title",
        }
    }
}

/// Direction of a sort.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    /// Ascending order
    Asc,

    /// Descending order (the default)
    #[default]
    Desc,
}

impl SortOrder {
    /// Parse a caller-supplied order string.
    ///
    /// Only the literal `"asc"` (any case) selects ascending; every other
    /// value, including an absent one, selects descending. This parse never
    /// fails.
    pub fn parse_lenient(s: Option<&str>) -> Self {
        match s {
            Some(v) if v.eq_ignore_ascii_case("asc") => SortOrder::Asc,
            _ => SortOrder::Desc,
        }
    }

    /// Convert to the canonical order name.
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }
}

/// Caller-facing pagination request; every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageRequest {
    /// 1-based page number, defaults to 1
    pub page: Option<u32>,

    /// Items per page, defaults to [`DEFAULT_LIMIT`]
    pub limit: Option<u32>,

    /// Sort field, defaults to creation timestamp
    pub sort_by: Option<SortField>,

    /// Sort direction, defaults to descending
    pub sort_order: Option<SortOrder>,
}

impl PageRequest {
    /// Resolve defaults and compute the skip offset.
    ///
    /// `page` and `limit` are clamped up to 1 rather than rejected, so a
    /// zero from the caller can never produce a negative or nonsensical
    /// offset.
    pub fn resolve(&self) -> PageSpec {
        let page = self.page.unwrap_or(1).max(1);
        let limit = self.limit.unwrap_or(DEFAULT_LIMIT).max(1);

        PageSpec {
            page,
            limit,
            skip: u64::from(page - 1) * u64::from(limit),
            sort_by: self.sort_by.unwrap_or_default(),
            sort_order: self.sort_order.unwrap_or_default(),
        }
    }
}

/// Resolved paging parameters handed to the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageSpec {
    /// 1-based page number after clamping
    pub page: u32,

    /// Items per page after clamping
    pub limit: u32,

    /// Number of records to skip before the first returned one
    pub skip: u64,

    /// Field to sort by
    pub sort_by: SortField,

    /// Direction to sort in
    pub sort_order: SortOrder,
}

/// One page of results plus the totals derived from the same predicate.
///
/// The item fetch and the total count are two sequential store calls; a
/// write landing between them can make `total` disagree with `items`. That
/// gap is accepted, not guarded against.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Page<T> {
    /// The records on this page
    pub items: Vec<T>,

    /// Total records matching the predicate
    pub total: u64,

    /// 1-based page number this page represents
    pub page: u32,

    /// Items per page used for the fetch
    pub limit: u32,

    /// Total pages at this limit, zero when nothing matched
    pub total_pages: u64,
}

impl<T> Page<T> {
    /// Assemble a page from fetched items, the matching total, and the spec
    /// that produced them.
    pub fn new(items: Vec<T>, total: u64, spec: &PageSpec) -> Self {
        let total_pages = if total == 0 {
            0
        } else {
            total.div_ceil(u64::from(spec.limit))
        };

        Self {
            items,
            total,
            page: spec.page,
            limit: spec.limit,
            total_pages,
        }
    }

    /// Whether this page holds no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of items on this page.
    pub fn len(&self) -> usize {
        self.items.len()
    }
}
