use std::ops::Deref;

use schemars::JsonSchema;
use serde::Serialize;

/// One-based page number, never smaller than 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, JsonSchema)]
pub struct PaginationPage(u64);

/// Number of items per page, always within `MIN..=MAX`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, JsonSchema)]
pub struct PaginationLimit(u64);

impl PaginationPage {
    pub const MIN: u64 = 1;

    /// Clamps `page` to the first page if it is smaller than that.
    pub fn new(page: i64) -> Self {
        if page < 1 {
            Self(Self::MIN)
        } else {
            Self(page.unsigned_abs())
        }
    }
}

impl PaginationLimit {
    pub const MIN: u64 = 1;
    pub const MAX: u64 = 100;
    pub const DEFAULT: u64 = 20;

    /// Clamps `limit` into `MIN..=MAX`.
    pub fn new(limit: i64) -> Self {
        if limit < 1 {
            Self(Self::MIN)
        } else {
            Self(limit.unsigned_abs().min(Self::MAX))
        }
    }

    pub fn max() -> Self {
        Self(Self::MAX)
    }
}

impl Default for PaginationPage {
    fn default() -> Self {
        Self(Self::MIN)
    }
}

impl Default for PaginationLimit {
    fn default() -> Self {
        Self(Self::DEFAULT)
    }
}

impl Deref for PaginationPage {
    type Target = u64;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Deref for PaginationLimit {
    type Target = u64;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// A page of a listing, addressed by page number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Pagination {
    pub page: PaginationPage,
    pub limit: PaginationLimit,
}

impl Pagination {
    /// Returns the rows covered by this page.
    pub fn slice(self) -> PaginationSlice {
        PaginationSlice {
            limit: self.limit,
            offset: (*self.page - 1).saturating_mul(*self.limit),
        }
    }

    /// Returns the number of pages needed to show `total` items. An empty
    /// listing still has one (empty) page.
    pub fn page_count(self, total: u64) -> u64 {
        total.div_ceil(*self.limit).max(1)
    }
}

/// A window of rows, addressed by offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PaginationSlice {
    pub limit: PaginationLimit,
    pub offset: u64,
}
