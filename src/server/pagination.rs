use serde::Deserialize;

use super::error::ApiError;

pub const QUESTIONS_PER_PAGE: u32 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageSize(pub u32);

impl Default for PageSize {
    fn default() -> Self {
        PageSize(QUESTIONS_PER_PAGE)
    }
}

// kept as a string so a non-numeric page ends up as our own 400 instead of
// the extractor's plain-text rejection
#[derive(Debug, Default, Deserialize)]
pub struct PageQuery {
    pub page: Option<String>,
}

/// A 1-based page number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page(u32);

impl Page {
    pub fn from_query(raw: Option<&str>) -> Result<Self, ApiError> {
        match raw.map(str::trim) {
            None | Some("") => Ok(Page(1)),
            Some(value) => value
                .parse::<u32>()
                .ok()
                .filter(|page| *page >= 1)
                .map(Page)
                .ok_or(ApiError::BadRequest),
        }
    }

    pub fn number(self) -> u32 {
        self.0
    }

    pub fn offset(self, size: PageSize) -> i64 {
        (i64::from(self.0) - 1) * i64::from(size.0)
    }

    /// Page 1 always exists, any later page must start before `total`.
    pub fn check_in_range(self, total: i64, size: PageSize) -> Result<(), ApiError> {
        if self.0 == 1 || self.offset(size) < total {
            Ok(())
        } else {
            Err(ApiError::BadRequest)
        }
    }
}
