//! Page arithmetic for user listings.

/// Page size used when the caller gives none, or a non-positive one.
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// Hard cap on page size.
pub const MAX_PAGE_SIZE: u32 = 100;

/// A normalized page request. Both fields are always at least 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u32,
    pub page_size: u32,
}

impl PageRequest {
    /// Clamps raw caller input into a valid request.
    ///
    /// - `page` below 1 (or absent) becomes 1
    /// - `page_size` below 1 (or absent) becomes [`DEFAULT_PAGE_SIZE`]
    /// - `page_size` above [`MAX_PAGE_SIZE`] becomes [`MAX_PAGE_SIZE`]
    pub fn normalize(page: Option<i64>, page_size: Option<i64>) -> Self {
        let page = match page {
            Some(p) if p >= 1 => u32::try_from(p).unwrap_or(u32::MAX),
            _ => 1,
        };

        let page_size = match page_size {
            Some(s) if s > i64::from(MAX_PAGE_SIZE) => MAX_PAGE_SIZE,
            Some(s) if s >= 1 => s as u32,
            _ => DEFAULT_PAGE_SIZE,
        };

        Self { page, page_size }
    }

    /// Half-open `start..end` bounds of this page within `len` items.
    pub fn bounds(&self, len: usize) -> (usize, usize) {
        let page_size = self.page_size as usize;
        let start = (self.page.saturating_sub(1) as usize)
            .saturating_mul(page_size)
            .min(len);
        let end = start.saturating_add(page_size).min(len);

        (start, end)
    }

    /// Number of pages needed for `total` items.
    pub fn total_pages(&self, total: i64) -> u32 {
        total_pages(total, self.page_size)
    }
}

/// `ceil(total / page_size)` in integer arithmetic. Negative totals count as 0.
pub fn total_pages(total: i64, page_size: u32) -> u32 {
    let total = u64::try_from(total).unwrap_or(0);
    let page_size = u64::from(page_size.max(1));

    let mut pages = total / page_size;
    if total % page_size > 0 {
        pages += 1;
    }

    u32::try_from(pages).unwrap_or(u32::MAX)
}
