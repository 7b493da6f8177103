//! Conjunctive row filtering.

use crate::criteria::FilterCriteria;
use tracing::{debug, instrument};
use vgsales_common::SalesRecord;

/// Which row dimensions a filter pass checks.
///
/// Each chart filters on the dimensions it does not group by: the genre
/// breakdown ignores the genre selection, the platform chart ignores the
/// platform selection, and so on. The year range always applies. Region
/// selection picks columns, so it is never part of the mask.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    /// Check platform membership.
    pub platform: bool,
    /// Check publisher membership.
    pub publisher: bool,
    /// Check genre membership.
    pub genre: bool,
}

impl Dimensions {
    /// All row dimensions checked.
    pub const ALL: Self = Self {
        platform: true,
        publisher: true,
        genre: true,
    };

    /// All but the platform dimension.
    pub const fn except_platform() -> Self {
        Self {
            platform: false,
            ..Self::ALL
        }
    }

    /// All but the publisher dimension.
    pub const fn except_publisher() -> Self {
        Self {
            publisher: false,
            ..Self::ALL
        }
    }

    /// All but the genre dimension.
    pub const fn except_genre() -> Self {
        Self {
            genre: false,
            ..Self::ALL
        }
    }
}

/// Filters rows on the year range plus the masked dimensions.
///
/// A row with a missing value for a checked dimension never matches,
/// and an empty selected-set for a checked dimension matches nothing.
pub fn filter_rows<'a>(
    records: &'a [SalesRecord],
    criteria: &FilterCriteria,
    dims: Dimensions,
) -> Vec<&'a SalesRecord> {
    records
        .iter()
        .filter(|record| {
            let year_ok = record
                .year_of_release
                .is_some_and(|year| criteria.year_range().contains(&year));
            if !year_ok {
                return false;
            }
            if dims.platform && !criteria.platforms.contains(&record.platform) {
                return false;
            }
            if dims.publisher
                && !record
                    .publisher
                    .as_ref()
                    .is_some_and(|p| criteria.publishers.contains(p))
            {
                return false;
            }
            if dims.genre
                && !record
                    .genre
                    .as_ref()
                    .is_some_and(|g| criteria.genres.contains(g))
            {
                return false;
            }
            true
        })
        .collect()
}

/// Applies the full conjunctive filter across all five dimensions.
///
/// An empty selected-set in any dimension, including regions, yields an
/// empty result rather than "no filter applied".
#[instrument(skip(records, criteria))]
pub fn apply_filter<'a>(
    records: &'a [SalesRecord],
    criteria: &FilterCriteria,
) -> Vec<&'a SalesRecord> {
    if criteria.regions.is_empty() {
        return Vec::new();
    }
    let filtered = filter_rows(records, criteria, Dimensions::ALL);
    debug!("Filter retained {} of {} rows", filtered.len(), records.len());
    filtered
}

#[cfg(test)]
mod tests {
    use super::*;
    use vgsales_common::Region;

    fn record(
        name: &str,
        platform: &str,
        year: Option<u16>,
        genre: Option<&str>,
        publisher: Option<&str>,
    ) -> SalesRecord {
        SalesRecord {
            name: name.to_string(),
            platform: platform.to_string(),
            year_of_release: year,
            genre: genre.map(str::to_string),
            publisher: publisher.map(str::to_string),
            na_sales: Some(1.0),
            eu_sales: None,
            jp_sales: None,
            other_sales: None,
            global_sales: Some(1.0),
            critic_score: None,
            user_score: None,
            user_count: None,
        }
    }

    fn sample_records() -> Vec<SalesRecord> {
        vec![
            record("A", "PS2", Some(2005), Some("Action"), Some("EA")),
            record("B", "PS2", Some(2010), Some("Action"), Some("EA")),
            record("C", "Wii", Some(2006), Some("Sports"), Some("Nintendo")),
            record("D", "PS2", None, Some("Action"), Some("EA")),
            record("E", "PS2", Some(2005), None, Some("EA")),
        ]
    }

    fn sample_criteria() -> FilterCriteria {
        FilterCriteria::new(2005, 2010)
            .with_platforms(["PS2", "Wii"])
            .with_publishers(["EA", "Nintendo"])
            .with_genres(["Action", "Sports"])
            .with_regions(Region::ALL)
    }

    #[test]
    fn test_all_predicates_conjunctive() {
        let records = sample_records();
        let filtered = apply_filter(&records, &sample_criteria());
        let names: Vec<&str> = filtered.iter().map(|r| r.name.as_str()).collect();
        // D has no year, E has no genre.
        assert_eq!(names, vec!["A", "B", "C"]);
    }

    #[test]
    fn test_year_bounds_inclusive() {
        let records = sample_records();
        let criteria = sample_criteria().with_year_range(2005, 2006);
        let filtered = apply_filter(&records, &criteria);
        let names: Vec<&str> = filtered.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["A", "C"]);
    }

    #[test]
    fn test_empty_set_matches_nothing() {
        let records = sample_records();

        let no_platforms = sample_criteria().with_platforms(Vec::<String>::new());
        assert!(apply_filter(&records, &no_platforms).is_empty());

        let no_publishers = sample_criteria().with_publishers(Vec::<String>::new());
        assert!(apply_filter(&records, &no_publishers).is_empty());

        let no_genres = sample_criteria().with_genres(Vec::<String>::new());
        assert!(apply_filter(&records, &no_genres).is_empty());

        let no_regions = sample_criteria().with_regions([]);
        assert!(apply_filter(&records, &no_regions).is_empty());
    }

    #[test]
    fn test_dimension_mask_skips_grouped_dimension() {
        let records = sample_records();
        // Criteria that exclude Sports, but the genre view does not
        // filter on genre.
        let criteria = sample_criteria().with_genres(["Action"]);
        let rows = filter_rows(&records, &criteria, Dimensions::except_genre());
        let names: Vec<&str> = rows.iter().map(|r| r.name.as_str()).collect();
        // C (Sports) and E (no genre) pass; D still fails on year.
        assert_eq!(names, vec!["A", "B", "C", "E"]);
    }

    #[test]
    fn test_mask_still_applies_other_dimensions() {
        let records = sample_records();
        let criteria = sample_criteria().with_platforms(["Wii"]);
        let rows = filter_rows(&records, &criteria, Dimensions::except_publisher());
        let names: Vec<&str> = rows.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["C"]);
    }
}
