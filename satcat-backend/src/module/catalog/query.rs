///! Query engine: category filters, text search and pagination
use std::collections::BTreeSet;

use satcat_common::{fold_case, FilterCriteria, Satellite, SearchQuery};
use serde::Serialize;

use crate::error::ValidationError;

/// Filter satellites by category criteria and free-text search
///
/// # Matching
/// A satellite is kept iff every active dimension of `criteria` equals the
/// corresponding field exactly (`orbit_regime` is compared against
/// `orbit_code`) and, when `query` is non-empty, the query is a
/// case-insensitive substring of the NORAD id or of the name.
///
/// # Returns
/// Matching satellites in input order
pub fn filter_satellites<'a>(
    satellites: &'a [Satellite],
    criteria: &FilterCriteria,
    query: &SearchQuery,
) -> Vec<&'a Satellite> {
    satellites
        .iter()
        .filter(|sat| matches_criteria(sat, criteria) && matches_search(sat, query))
        .collect()
}

/// Check the category constraints only
pub fn matches_criteria(sat: &Satellite, criteria: &FilterCriteria) -> bool {
    category_holds(criteria.country(), &sat.country_code)
        && category_holds(criteria.orbit_regime(), &sat.orbit_code)
        && category_holds(criteria.object_type(), &sat.object_type)
}

fn category_holds(constraint: Option<&str>, value: &str) -> bool {
    constraint.is_none_or(|expected| expected == value)
}

/// Check the text constraint only
pub fn matches_search(sat: &Satellite, query: &SearchQuery) -> bool {
    let Some(needle) = query.folded() else {
        return true;
    };
    fold_case(&sat.norad_cat_id).contains(needle) || fold_case(&sat.name).contains(needle)
}

/// Slice out one page of `items`
///
/// # Arguments
/// * `page` - 1-indexed page number
/// * `per_page` - Page size
///
/// # Returns
/// `items[(page-1)*per_page .. page*per_page]` clamped to the bounds; empty
/// once the start is past the end. Zero `page` or `per_page` is rejected.
pub fn paginate<T>(items: &[T], page: usize, per_page: usize) -> Result<&[T], ValidationError> {
    if page == 0 {
        return Err(ValidationError::Page(page));
    }
    if per_page == 0 {
        return Err(ValidationError::PerPage(per_page));
    }

    let Some(start) = (page - 1).checked_mul(per_page) else {
        return Ok(&[]);
    };
    if start >= items.len() {
        return Ok(&[]);
    }
    let end = start.saturating_add(per_page).min(items.len());
    Ok(&items[start..end])
}

/// Number of pages needed for `total` items (0 for an empty set)
pub fn page_count(total: usize, per_page: usize) -> usize {
    if per_page == 0 {
        return 0;
    }
    total.div_ceil(per_page)
}

/// Distinct category values present in a collection
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Facets {
    pub country_codes: Vec<String>,
    pub orbit_codes: Vec<String>,
    pub object_types: Vec<String>,
}

/// Collect the sorted, de-duplicated filter choices of a collection
pub fn facets<'a>(satellites: impl IntoIterator<Item = &'a Satellite>) -> Facets {
    let mut countries = BTreeSet::new();
    let mut orbits = BTreeSet::new();
    let mut types = BTreeSet::new();

    for sat in satellites {
        insert_non_empty(&mut countries, &sat.country_code);
        insert_non_empty(&mut orbits, &sat.orbit_code);
        insert_non_empty(&mut types, &sat.object_type);
    }

    Facets {
        country_codes: countries.into_iter().map(str::to_string).collect(),
        orbit_codes: orbits.into_iter().map(str::to_string).collect(),
        object_types: types.into_iter().map(str::to_string).collect(),
    }
}

fn insert_non_empty<'a>(set: &mut BTreeSet<&'a str>, value: &'a str) {
    if !value.is_empty() {
        set.insert(value);
    }
}
