use serde::Serialize;

/// Number of page links rendered at once.
pub const PAGE_WINDOW: usize = 5;

/// Page numbers to render as links around `current_page`.
///
/// The window keeps the current page visible, centred when possible and
/// flush to an edge near the first or last page.
pub fn page_window(current_page: usize, total_pages: usize) -> Vec<usize> {
    if total_pages == 0 {
        return vec![];
    }

    let first = if total_pages <= PAGE_WINDOW || current_page <= 3 {
        1
    } else if current_page >= total_pages - 2 {
        total_pages - PAGE_WINDOW + 1
    } else {
        current_page - 2
    };

    (first..first + PAGE_WINDOW)
        .filter(|page| (1..=total_pages).contains(page))
        .collect()
}

/// Number of pages needed for `total_count` items, never less than one.
pub fn total_pages(total_count: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 1;
    }
    total_count.div_ceil(page_size).max(1)
}

#[derive(Debug, Serialize)]
pub struct Paginated<T> {
    pub items: Vec<T>,
    pub pages: Vec<usize>,
    pub page: usize,
    pub total_pages: usize,
    pub previous: Option<usize>,
    pub next: Option<usize>,
}

impl<T> Paginated<T> {
    pub fn new(items: Vec<T>, current_page: usize, total_pages: usize) -> Self {
        let current_page = if current_page == 0 { 1 } else { current_page };

        let pages = page_window(current_page, total_pages);

        Self {
            items,
            pages,
            page: current_page,
            total_pages,
            previous: (current_page > 1).then(|| current_page - 1),
            next: (current_page < total_pages).then(|| current_page + 1),
        }
    }
}
