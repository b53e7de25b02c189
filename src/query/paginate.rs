//! Page slicing
//!
//! Pagination is a plain subslice of the already filtered and sorted
//! sequence, so it works for any row type. Pages are 1-indexed; an
//! out-of-range page yields an empty slice, not an error. Callers that
//! want to keep the user on a valid page clamp with [`total_pages`].

/// Take the 1-indexed page slice `[(page-1)*size, page*size)` of a sequence
///
/// Total over its inputs: a page past the end, a page of 0, or a
/// `page_size` of 0 all yield an empty slice.
///
/// # Arguments
///
/// * `items` - The full ordered sequence
/// * `page` - 1-indexed page number
/// * `page_size` - Rows per page
///
/// # Returns
///
/// The subslice of `items` visible on the requested page
pub fn paginate<T>(items: &[T], page: usize, page_size: usize) -> &[T] {
    if page == 0 || page_size == 0 {
        return &[];
    }
    let start = (page - 1).saturating_mul(page_size).min(items.len());
    let end = start.saturating_add(page_size).min(items.len());
    &items[start..end]
}

/// Number of pages a collection occupies: `ceil(count / page_size)`, min 1
///
/// An empty collection still has one (empty) page, so a clamped page number
/// always lands in `[1, total_pages]`.
pub fn total_pages(count: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 1;
    }
    count.div_ceil(page_size).max(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::first_page(1, 3, vec![1, 2, 3])]
    #[case::middle_page(2, 3, vec![4, 5, 6])]
    #[case::short_last_page(3, 3, vec![7])]
    #[case::page_past_end(4, 3, vec![])]
    #[case::far_past_end(100, 3, vec![])]
    #[case::whole_collection(1, 10, vec![1, 2, 3, 4, 5, 6, 7])]
    #[case::page_zero(0, 3, vec![])]
    #[case::zero_page_size(1, 0, vec![])]
    fn test_paginate(#[case] page: usize, #[case] page_size: usize, #[case] expected: Vec<i32>) {
        let items = [1, 2, 3, 4, 5, 6, 7];
        assert_eq!(paginate(&items, page, page_size), expected.as_slice());
    }

    #[test]
    fn test_paginate_empty_collection() {
        let items: [i32; 0] = [];
        assert!(paginate(&items, 1, 10).is_empty());
    }

    #[test]
    fn test_pages_are_disjoint_and_cover_input() {
        let items: Vec<i32> = (0..23).collect();
        let page_size = 5;
        let mut reassembled = Vec::new();
        for page in 1..=total_pages(items.len(), page_size) {
            reassembled.extend_from_slice(paginate(&items, page, page_size));
        }
        assert_eq!(reassembled, items);
    }

    #[rstest]
    #[case::exact_multiple(20, 10, 2)]
    #[case::remainder_rounds_up(21, 10, 3)]
    #[case::fewer_than_one_page(3, 10, 1)]
    #[case::empty_collection_has_one_page(0, 10, 1)]
    #[case::zero_page_size_clamps(50, 0, 1)]
    fn test_total_pages(#[case] count: usize, #[case] page_size: usize, #[case] expected: usize) {
        assert_eq!(total_pages(count, page_size), expected);
    }
}
