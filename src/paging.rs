//! Paging

/// Pagination metadata for one listing request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PagingInfo {
    /// 1-based page number
    pub current_page: u32,

    /// Maximum number of items on a page
    pub items_per_page: u32,

    /// Number of items matching the request before pagination
    pub total_items: usize,
}

/// One entry of a page link bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageLink {
    /// Page number the link points at
    pub page: u32,

    /// Whether this is the page being viewed
    pub is_current: bool,
}

impl PagingInfo {
    /// Number of pages needed to show every item; zero when there are no items.
    pub fn total_pages(&self) -> u32 {
        if self.items_per_page == 0 {
            return 0;
        }

        let pages = self.total_items.div_ceil(self.items_per_page as usize);

        u32::try_from(pages).unwrap_or(u32::MAX)
    }

    /// Index of the first item on the current page.
    pub fn offset(&self) -> usize {
        (self.current_page.saturating_sub(1) as usize).saturating_mul(self.items_per_page as usize)
    }

    /// Whether a page precedes the current one.
    pub fn has_previous(&self) -> bool {
        self.current_page > 1
    }

    /// Whether a page follows the current one.
    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages()
    }

    /// Links for every page, flagging the current one.
    pub fn page_links(&self) -> impl Iterator<Item = PageLink> + '_ {
        (1..=self.total_pages()).map(|page| PageLink {
            page,
            is_current: page == self.current_page,
        })
    }
}
