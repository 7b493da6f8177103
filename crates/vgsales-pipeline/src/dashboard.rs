//! Full-dashboard recomputation: every derived view in one pass.

use crate::criteria::FilterCriteria;
use crate::filter::{apply_filter, filter_rows, Dimensions};
use crate::views::{
    region_totals, sales_by_genre, sales_by_platform, sales_by_publisher, score_comparison,
    top_games_by, yearly_region_sales, RegionTotal, ScorePoint, YearlyRegionPoint,
};
use tracing::{debug, instrument};
use vgsales_common::{SalesRecord, ValueColumn};

/// Everything one dashboard refresh needs, computed in full from the
/// original unfiltered table on every interaction.
///
/// Each view filters on the dimensions it does not group by, exactly as
/// the dashboard behaves: the genre breakdown ignores the genre
/// selection, the platform chart the platform selection, the publisher
/// chart the publisher selection. The animated yearly view always runs
/// over the unfiltered table.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardData {
    /// Scalar totals per region (summary boxes and the map).
    pub region_totals: Vec<RegionTotal>,
    /// Per-year region sums over the filtered rows (time series).
    pub yearly_region_sales: Vec<YearlyRegionPoint>,
    /// Per-year region sums over the full table (animated view).
    pub animation_years: Vec<YearlyRegionPoint>,
    /// Sales per genre.
    pub genre_sales: Vec<(String, f64)>,
    /// Sales per platform.
    pub platform_sales: Vec<(String, f64)>,
    /// Top publishers by sales, descending.
    pub publisher_sales: Vec<(String, f64)>,
    /// Top games by summed user score, descending.
    pub top_by_user_score: Vec<(String, f64)>,
    /// Top games by summed user vote count, descending.
    pub top_by_user_count: Vec<(String, f64)>,
    /// Top games by summed critic score, descending.
    pub top_by_critic_score: Vec<(String, f64)>,
    /// Critic vs. user score points.
    pub score_comparison: Vec<ScorePoint>,
    /// Whether the year range collapsed to a single year.
    pub single_year: bool,
}

impl DashboardData {
    /// Recomputes every view from the unfiltered table.
    #[instrument(skip(records, criteria), fields(rows = records.len()))]
    pub fn compute(records: &[SalesRecord], criteria: &FilterCriteria, top_n: usize) -> Self {
        let filtered = apply_filter(records, criteria);
        let genre_rows = filter_rows(records, criteria, Dimensions::except_genre());
        let platform_rows = filter_rows(records, criteria, Dimensions::except_platform());
        let publisher_rows = filter_rows(records, criteria, Dimensions::except_publisher());
        let all_rows: Vec<&SalesRecord> = records.iter().collect();

        debug!(
            filtered = filtered.len(),
            genre_rows = genre_rows.len(),
            platform_rows = platform_rows.len(),
            publisher_rows = publisher_rows.len(),
            "Recomputing dashboard views"
        );

        Self {
            region_totals: region_totals(&filtered),
            yearly_region_sales: yearly_region_sales(&filtered),
            animation_years: yearly_region_sales(&all_rows),
            genre_sales: sales_by_genre(&genre_rows, &criteria.regions),
            platform_sales: sales_by_platform(&platform_rows, &criteria.regions),
            publisher_sales: sales_by_publisher(&publisher_rows, &criteria.regions, top_n),
            top_by_user_score: top_games_by(&filtered, ValueColumn::UserScore, top_n),
            top_by_user_count: top_games_by(&filtered, ValueColumn::UserCount, top_n),
            top_by_critic_score: top_games_by(&filtered, ValueColumn::CriticScore, top_n),
            score_comparison: score_comparison(&filtered),
            single_year: criteria.is_single_year(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vgsales_common::Region;

    fn record(
        name: &str,
        platform: &str,
        year: u16,
        genre: &str,
        publisher: &str,
        global: f64,
    ) -> SalesRecord {
        SalesRecord {
            name: name.to_string(),
            platform: platform.to_string(),
            year_of_release: Some(year),
            genre: Some(genre.to_string()),
            publisher: Some(publisher.to_string()),
            na_sales: Some(global / 2.0),
            eu_sales: Some(global / 2.0),
            jp_sales: None,
            other_sales: None,
            global_sales: Some(global),
            critic_score: Some(75.0),
            user_score: Some(7.5),
            user_count: Some(42),
        }
    }

    fn records() -> Vec<SalesRecord> {
        vec![
            record("Alpha", "PS2", 2005, "Action", "EA", 2.0),
            record("Beta", "Wii", 2006, "Sports", "Nintendo", 4.0),
            record("Gamma", "PS2", 2008, "Racing", "Sony", 1.0),
        ]
    }

    #[test]
    fn test_grouped_views_ignore_their_own_dimension() {
        let records = records();
        // Only Action selected, but the genre view still covers every
        // genre passing the other predicates.
        let criteria = FilterCriteria::new(2005, 2008)
            .with_platforms(["PS2", "Wii"])
            .with_publishers(["EA", "Nintendo", "Sony"])
            .with_genres(["Action"])
            .with_regions(Region::ALL);

        let data = DashboardData::compute(&records, &criteria, 10);

        let genres: Vec<&str> = data.genre_sales.iter().map(|(g, _)| g.as_str()).collect();
        assert_eq!(genres, vec!["Action", "Racing", "Sports"]);

        // The fully filtered views only see Action rows.
        assert_eq!(data.score_comparison.len(), 1);
        assert_eq!(data.top_by_user_score.len(), 1);
        assert_eq!(data.top_by_user_score[0].0, "Alpha");
    }

    #[test]
    fn test_animation_covers_unfiltered_table() {
        let records = records();
        let criteria = FilterCriteria::new(2006, 2006)
            .with_platforms(["Wii"])
            .with_publishers(["Nintendo"])
            .with_genres(["Sports"])
            .with_regions(Region::ALL);

        let data = DashboardData::compute(&records, &criteria, 10);

        assert!(data.single_year);
        assert_eq!(data.yearly_region_sales.len(), 1);
        assert_eq!(data.animation_years.len(), 3);
    }

    #[test]
    fn test_empty_criteria_produce_empty_views() {
        let records = records();
        let criteria = FilterCriteria::new(2005, 2008).with_regions(Region::ALL);

        let data = DashboardData::compute(&records, &criteria, 10);

        assert!(data.yearly_region_sales.is_empty());
        assert!(data.score_comparison.is_empty());
        assert!(data.top_by_critic_score.is_empty());
        assert!(data.region_totals.iter().all(|t| t.sales == 0.0));
        // Grouped views filter on the other (empty) dimensions too.
        assert!(data.genre_sales.is_empty());
    }
}
