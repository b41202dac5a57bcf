use url::Url;

use super::urls::page_href;

/// One entry of a pagination render plan, in display order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageEntry {
    /// A page number the user can jump to.
    Link(PageLink),
    /// A collapsed run of page numbers.
    Ellipsis,
}

/// A single page link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageLink {
    pub page: usize,
    pub is_current: bool,
    pub href: String,
}

/// Compute the render plan for a paginated result set.
///
/// Zero or one page yields an empty plan (no control is shown). Up to six
/// pages are listed in full. From seven pages on, page 1 and the last page
/// are always shown with a window of up to five pages around the current
/// one; runs elided between the edges and the window become [`Ellipsis`]
/// entries.
///
/// `current_page` is taken as-is: out-of-range values shrink the window
/// (possibly to nothing) instead of being clamped, and no entry is marked
/// current. The window lower bound never drops below 2, so a current page
/// of 1 still puts page 2 inside the window.
///
/// [`Ellipsis`]: PageEntry::Ellipsis
pub fn build_render_plan(
    total: usize,
    per_page: usize,
    current_page: usize,
    current_url: &Url,
) -> Vec<PageEntry> {
    let total_pages = total.div_ceil(per_page.max(1));
    if total_pages < 2 {
        return Vec::new();
    }

    if total_pages < 7 {
        return (1..=total_pages)
            .map(|page| page_link(page, current_page, current_url))
            .collect();
    }

    let window_start = current_page.saturating_sub(2).max(2);
    let window_end = current_page.saturating_add(2).min(total_pages - 1);
    let window: Vec<usize> = (window_start..=window_end).collect();

    let mut plan = vec![page_link(1, current_page, current_url)];
    if window.first().is_some_and(|first| *first > 2) {
        plan.push(PageEntry::Ellipsis);
    }
    plan.extend(
        window
            .iter()
            .map(|page| page_link(*page, current_page, current_url)),
    );
    if window.last().is_some_and(|last| *last < total_pages - 2) {
        plan.push(PageEntry::Ellipsis);
    }
    plan.push(page_link(total_pages, current_page, current_url));
    plan
}

fn page_link(page: usize, current_page: usize, current_url: &Url) -> PageEntry {
    PageEntry::Link(PageLink {
        page,
        is_current: page == current_page,
        href: page_href(current_url, page),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_url() -> Url {
        Url::parse("https://example.com/search?q=rust&page=3").unwrap()
    }

    /// Page numbers in plan order, `None` marking an ellipsis.
    fn pages(plan: &[PageEntry]) -> Vec<Option<usize>> {
        plan.iter()
            .map(|entry| match entry {
                PageEntry::Link(link) => Some(link.page),
                PageEntry::Ellipsis => None,
            })
            .collect()
    }

    fn current_pages(plan: &[PageEntry]) -> Vec<usize> {
        plan.iter()
            .filter_map(|entry| match entry {
                PageEntry::Link(link) if link.is_current => Some(link.page),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn single_page_renders_nothing() {
        assert!(build_render_plan(5, 10, 1, &base_url()).is_empty());
    }

    #[test]
    fn zero_results_render_nothing() {
        assert!(build_render_plan(0, 10, 1, &base_url()).is_empty());
    }

    #[test]
    fn small_case_lists_every_page() {
        let plan = build_render_plan(50, 10, 3, &base_url());
        assert_eq!(
            pages(&plan),
            vec![Some(1), Some(2), Some(3), Some(4), Some(5)]
        );
        assert_eq!(current_pages(&plan), vec![3]);
    }

    #[test]
    fn large_case_collapses_both_sides() {
        let plan = build_render_plan(200, 10, 10, &base_url());
        assert_eq!(
            pages(&plan),
            vec![
                Some(1),
                None,
                Some(8),
                Some(9),
                Some(10),
                Some(11),
                Some(12),
                None,
                Some(20)
            ]
        );
        assert_eq!(current_pages(&plan), vec![10]);
    }

    #[test]
    fn first_page_keeps_page_two_in_the_window() {
        // The window lower bound is clamped to 2, so page 2 shows up even
        // though the current page is 1 and no leading ellipsis appears.
        let plan = build_render_plan(200, 10, 1, &base_url());
        assert_eq!(
            pages(&plan),
            vec![Some(1), Some(2), Some(3), None, Some(20)]
        );
        assert_eq!(current_pages(&plan), vec![1]);
    }

    #[test]
    fn last_page_window_touches_the_right_edge() {
        let plan = build_render_plan(200, 10, 20, &base_url());
        assert_eq!(
            pages(&plan),
            vec![Some(1), None, Some(18), Some(19), Some(20)]
        );
    }

    #[test]
    fn one_page_gap_next_to_the_last_page_gets_no_ellipsis() {
        // total_pages = 7, current = 3: the window ends at 5, page 6 is
        // elided, but 5 is not below total_pages - 2 so no marker is added.
        let plan = build_render_plan(70, 10, 3, &base_url());
        assert_eq!(
            pages(&plan),
            vec![Some(1), Some(2), Some(3), Some(4), Some(5), Some(7)]
        );
    }

    #[test]
    fn out_of_range_page_collapses_the_window() {
        let plan = build_render_plan(200, 10, 1000, &base_url());
        assert_eq!(pages(&plan), vec![Some(1), Some(20)]);
        assert!(current_pages(&plan).is_empty());
    }

    #[test]
    fn zero_current_page_still_terminates() {
        let plan = build_render_plan(200, 10, 0, &base_url());
        assert_eq!(pages(&plan), vec![Some(1), Some(2), None, Some(20)]);
        assert!(current_pages(&plan).is_empty());
    }

    #[test]
    fn zero_per_page_is_treated_as_one() {
        let plan = build_render_plan(3, 0, 1, &base_url());
        assert_eq!(pages(&plan), vec![Some(1), Some(2), Some(3)]);
    }

    #[test]
    fn exactly_one_marked_current_in_range() {
        for page in 1..=5 {
            let plan = build_render_plan(50, 10, page, &base_url());
            assert_eq!(current_pages(&plan), vec![page]);
        }
    }

    #[test]
    fn hrefs_rewrite_only_the_page_parameter() {
        let plan = build_render_plan(50, 10, 3, &base_url());
        let PageEntry::Link(first) = &plan[0] else {
            panic!("expected a page link");
        };
        assert_eq!(first.href, "/search?q=rust&page=1");
    }
}
