use crate::types::edition::Edition;

pub const PAGE_SIZE: usize = 10;

pub fn page_count(total_results: usize) -> usize {
    (total_results + PAGE_SIZE - 1) / PAGE_SIZE
}

/// 1-based display range of the current page: "Showing `start` to `end` of
/// `total`". With no results the convention is 1 to 0 of 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    pub start: usize,
    pub end:   usize,
    pub total: usize,
}

impl PageWindow {
    pub fn of(current_page: usize, total_results: usize) -> Self {
        if total_results == 0 {
            return Self {
                start: 1,
                end:   0,
                total: 0,
            };
        }
        Self {
            start: (current_page - 1) * PAGE_SIZE + 1,
            end:   usize::min(current_page * PAGE_SIZE, total_results),
            total: total_results,
        }
    }
}

/// Pages over a work's editions. The whole list is fetched once and sliced
/// here; changing pages never refetches.
#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub struct EditionPager {
    current_page: usize,
    editions:     Vec<Edition>,
}

impl EditionPager {
    pub fn new(editions: Vec<Edition>) -> Self {
        Self {
            current_page: 1,
            editions,
        }
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn total_results(&self) -> usize {
        self.editions.len()
    }

    pub fn page_count(&self) -> usize {
        page_count(self.editions.len())
    }

    /// Clamps rather than rejects: callers hand over whatever the user
    /// typed and always land on a valid page.
    pub fn change_page(&mut self, page: usize) {
        self.current_page = page.clamp(1, self.page_count().max(1));
    }

    pub fn visible(&self) -> &[Edition] {
        let start = usize::min((self.current_page - 1) * PAGE_SIZE, self.editions.len());
        let end = usize::min(start + PAGE_SIZE, self.editions.len());
        &self.editions[start..end]
    }

    pub fn window(&self) -> PageWindow {
        PageWindow::of(self.current_page, self.editions.len())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn editions(n: usize) -> Vec<Edition> {
        (0..n)
            .map(|i| Edition {
                title: Some(format!("Edition {i}")),
                ..Edition::default()
            })
            .collect()
    }

    #[test]
    fn page_count_rounds_up() {
        assert_eq!(page_count(0), 0);
        assert_eq!(page_count(1), 1);
        assert_eq!(page_count(10), 1);
        assert_eq!(page_count(11), 2);
        assert_eq!(page_count(45), 5);
    }

    #[test]
    fn window_of_a_middle_page() {
        let window = PageWindow::of(3, 45);
        assert_eq!(window.start, 21);
        assert_eq!(window.end, 30);
    }

    #[test]
    fn window_of_the_last_partial_page() {
        let window = PageWindow::of(5, 45);
        assert_eq!(window.start, 41);
        assert_eq!(window.end, 45);
    }

    #[test]
    fn empty_results_show_one_to_zero_of_zero() {
        let window = PageWindow::of(1, 0);
        assert_eq!((window.start, window.end, window.total), (1, 0, 0));
    }

    #[test]
    fn window_end_never_exceeds_total() {
        for total in 0..60 {
            for page in 1..=page_count(total).max(1) {
                let window = PageWindow::of(page, total);
                assert!(window.end <= window.total);
                assert!(window.start >= 1);
            }
        }
    }

    #[test]
    fn change_page_clamps_to_bounds() {
        let mut pager = EditionPager::new(editions(25));
        pager.change_page(9);
        assert_eq!(pager.current_page(), 3);
        pager.change_page(0);
        assert_eq!(pager.current_page(), 1);
        pager.change_page(2);
        assert_eq!(pager.current_page(), 2);
    }

    #[test]
    fn change_page_on_an_empty_list_stays_on_page_one() {
        let mut pager = EditionPager::new(vec![]);
        pager.change_page(4);
        assert_eq!(pager.current_page(), 1);
        assert!(pager.visible().is_empty());
        assert_eq!((pager.window().start, pager.window().end), (1, 0));
    }

    #[test]
    fn visible_slice_matches_the_page() {
        let mut pager = EditionPager::new(editions(25));
        pager.change_page(3);
        let titles: Vec<&str> = pager
            .visible()
            .iter()
            .map(|e| e.title.as_deref().unwrap_or_default())
            .collect();
        assert_eq!(
            titles,
            vec!["Edition 20", "Edition 21", "Edition 22", "Edition 23", "Edition 24"]
        );
        assert_eq!(pager.total_results(), 25);
    }
}
