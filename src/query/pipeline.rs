//! The composed query pipeline
//!
//! The presentation layer re-runs this pipeline on every relevant input
//! change: filter the store's snapshot, sort the survivors, then slice out
//! the requested page. Recomputing from scratch each time is correct at
//! the modeled data volumes (tens to low thousands of rows).

use crate::query::filter::filter_charges;
use crate::query::paginate::{paginate, total_pages};
use crate::query::sort::sort_charges;
use crate::types::{Charge, ChargeFilter, PageRequest, SortState};

/// One visible page of the charge table plus its paging facts
#[derive(Debug, Clone, PartialEq)]
pub struct ChargePage {
    /// The rows visible on the effective page, filtered and ordered
    pub rows: Vec<Charge>,

    /// Number of charges surviving the filter (across all pages)
    pub total_count: usize,

    /// Number of pages the filtered collection occupies, minimum 1
    pub total_pages: usize,

    /// The page actually served, after clamping into `[1, total_pages]`
    pub page: usize,
}

/// Run the full filter -> sort -> paginate pipeline
///
/// The requested page is clamped into `[1, total_pages]` so a filter change
/// that shrinks the collection cannot strand the caller on a page past the
/// end. Pure and total: the same inputs always yield the same page.
///
/// # Arguments
///
/// * `charges` - A snapshot of the full collection
/// * `filter` - Filter criteria
/// * `sort` - Sort column and direction
/// * `page` - Requested page and page size
///
/// # Returns
///
/// The visible rows plus total count, total pages, and the effective page
pub fn run_query(
    charges: &[Charge],
    filter: &ChargeFilter,
    sort: SortState,
    page: PageRequest,
) -> ChargePage {
    let filtered = filter_charges(charges, filter);
    let sorted = sort_charges(&filtered, sort);

    let total_count = sorted.len();
    let pages = total_pages(total_count, page.page_size);
    let effective_page = page.page.clamp(1, pages);

    ChargePage {
        rows: paginate(&sorted, effective_page, page.page_size).to_vec(),
        total_count,
        total_pages: pages,
        page: effective_page,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ChargeStatus, SortColumn, SortDirection};
    use rust_decimal::Decimal;

    fn charge(id: &str, amount: i64, paid: i64, date: &str) -> Charge {
        Charge {
            charge_id: id.to_string(),
            student_id: "stu_101".to_string(),
            student_name: "Jason Schuller".to_string(),
            charge_amount: Decimal::new(amount, 0),
            paid_amount: Decimal::new(paid, 0),
            date_charged: date.to_string(),
        }
    }

    fn sample() -> Vec<Charge> {
        vec![
            charge("chg_0001", 100, 100, "2025-01-05"),
            charge("chg_0002", 100, 40, "2025-01-04"),
            charge("chg_0003", 100, 0, "2025-01-03"),
            charge("chg_0004", 200, 0, "2025-01-02"),
            charge("chg_0005", 300, 0, "2025-01-01"),
        ]
    }

    fn sort_by_date_asc() -> SortState {
        SortState::new(SortColumn::DateCharged, SortDirection::Asc)
    }

    #[test]
    fn test_filters_then_sorts_then_slices() {
        let result = run_query(
            &sample(),
            &ChargeFilter {
                status: Some(ChargeStatus::Unpaid),
                ..Default::default()
            },
            sort_by_date_asc(),
            PageRequest::new(1, 2),
        );

        assert_eq!(result.total_count, 3);
        assert_eq!(result.total_pages, 2);
        assert_eq!(result.page, 1);
        let ids: Vec<&str> = result.rows.iter().map(|c| c.charge_id.as_str()).collect();
        assert_eq!(ids, vec!["chg_0005", "chg_0004"]);
    }

    #[test]
    fn test_out_of_range_page_clamps_to_last() {
        let result = run_query(
            &sample(),
            &ChargeFilter::default(),
            sort_by_date_asc(),
            PageRequest::new(99, 2),
        );

        assert_eq!(result.total_pages, 3);
        assert_eq!(result.page, 3);
        assert_eq!(result.rows.len(), 1);
        assert_eq!(result.rows[0].charge_id, "chg_0001");
    }

    #[test]
    fn test_page_zero_clamps_to_first() {
        let result = run_query(
            &sample(),
            &ChargeFilter::default(),
            sort_by_date_asc(),
            PageRequest::new(0, 2),
        );
        assert_eq!(result.page, 1);
        assert_eq!(result.rows.len(), 2);
    }

    #[test]
    fn test_filter_matching_nothing_serves_one_empty_page() {
        let result = run_query(
            &sample(),
            &ChargeFilter {
                search: "nobody".to_string(),
                ..Default::default()
            },
            sort_by_date_asc(),
            PageRequest::new(1, 10),
        );
        assert_eq!(result.total_count, 0);
        assert_eq!(result.total_pages, 1);
        assert_eq!(result.page, 1);
        assert!(result.rows.is_empty());
    }

    #[test]
    fn test_query_is_deterministic() {
        let charges = sample();
        let filter = ChargeFilter::default();
        let first = run_query(&charges, &filter, sort_by_date_asc(), PageRequest::new(2, 2));
        let second = run_query(&charges, &filter, sort_by_date_asc(), PageRequest::new(2, 2));
        assert_eq!(first, second);
    }
}
