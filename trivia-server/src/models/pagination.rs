//! Page-number pagination over ordered question lists

/// Questions shown per page
pub const QUESTIONS_PER_PAGE: u64 = 10;

/// A 1-indexed page with a fixed page size
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    /// Page number (1-indexed)
    pub page: u64,
}

impl Pagination {
    /// Create pagination, clamping the page to a minimum of 1.
    pub fn new(page: u64) -> Self {
        Self { page: page.max(1) }
    }

    /// Parse a raw `page` query value.
    ///
    /// Missing, non-numeric, zero or negative values all mean page 1.
    /// Positive numbers too large for `u64` saturate to the last possible page.
    pub fn parse(raw: Option<&str>) -> Self {
        let page = raw.map(str::trim).and_then(parse_page).unwrap_or(1);
        Self::new(page)
    }

    /// Number of items skipped before this page.
    pub fn offset(&self) -> u64 {
        (self.page - 1).saturating_mul(QUESTIONS_PER_PAGE)
    }

    pub fn limit(&self) -> u64 {
        QUESTIONS_PER_PAGE
    }

    /// Cut this page out of a full ordered collection.
    ///
    /// Pages past the end yield an empty vector.
    pub fn paginate<T>(&self, items: Vec<T>) -> Vec<T> {
        let skip = usize::try_from(self.offset()).unwrap_or(usize::MAX);
        let take = usize::try_from(self.limit()).unwrap_or(usize::MAX);
        items.into_iter().skip(skip).take(take).collect()
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self { page: 1 }
    }
}

fn parse_page(raw: &str) -> Option<u64> {
    if let Ok(page) = raw.parse::<i64>() {
        return (page > 0).then_some(page as u64);
    }
    let digits = raw.strip_prefix('+').unwrap_or(raw);
    (!digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())).then_some(u64::MAX)
}
