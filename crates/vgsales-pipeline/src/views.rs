//! Derived views: the per-chart reductions over filtered rows.

use crate::aggregate::{aggregate_by, top_n};
use std::collections::BTreeSet;
use vgsales_common::{Region, SalesRecord, ValueColumn};

/// Total sales for one region over the filtered rows.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RegionTotal {
    /// The region.
    pub region: Region,
    /// Sales in millions of units; 0.0 when no row carries a value.
    pub sales: f64,
}

/// Per-region sums for one release year.
#[derive(Debug, Clone, PartialEq)]
pub struct YearlyRegionPoint {
    /// Release year.
    pub year: u16,
    totals: [Option<f64>; Region::ALL.len()],
}

impl YearlyRegionPoint {
    /// Sales for one region in this year; `None` when no row carried a
    /// value for that region's column.
    pub fn sales(&self, region: Region) -> Option<f64> {
        let idx = Region::ALL.iter().position(|r| *r == region)?;
        self.totals[idx]
    }
}

/// One game's critic/user score pairing.
#[derive(Debug, Clone, PartialEq)]
pub struct ScorePoint {
    /// Game title.
    pub name: String,
    /// Critic score, 0-100 scale.
    pub critic_score: f64,
    /// User score, 0-10 scale.
    pub user_score: f64,
}

/// Scalar sales totals per region — one value for each of the five
/// regions, 0.0 when the selection is empty (the summary boxes show
/// zeros, not gaps).
pub fn region_totals(rows: &[&SalesRecord]) -> Vec<RegionTotal> {
    Region::ALL
        .into_iter()
        .map(|region| RegionTotal {
            region,
            sales: rows.iter().filter_map(|r| r.sales(region)).sum(),
        })
        .collect()
}

/// Per-region sums grouped by release year, year ascending.
pub fn yearly_region_sales(rows: &[&SalesRecord]) -> Vec<YearlyRegionPoint> {
    let columns: Vec<ValueColumn> = Region::ALL.into_iter().map(ValueColumn::Sales).collect();
    aggregate_by(rows, |r| r.year_of_release, &columns)
        .into_iter()
        .map(|group| {
            let mut totals = [None; Region::ALL.len()];
            totals.copy_from_slice(&group.sums);
            YearlyRegionPoint {
                year: group.key,
                totals,
            }
        })
        .collect()
}

/// The sales columns the genre view sums over.
///
/// When Global is selected it replaces the per-region columns entirely;
/// the platform and publisher views do NOT share this special case and
/// treat Global as one more column. Observed dashboard behavior, kept
/// as-is.
pub fn genre_view_columns(regions: &BTreeSet<Region>) -> Vec<Region> {
    if regions.contains(&Region::Global) {
        vec![Region::Global]
    } else {
        regions.iter().copied().collect()
    }
}

fn sales_columns(regions: &[Region]) -> Vec<ValueColumn> {
    regions.iter().copied().map(ValueColumn::Sales).collect()
}

/// Sales per genre over the selected region columns, genre ascending.
///
/// Genres with no value in any selected column are dropped rather than
/// reported as zero.
pub fn sales_by_genre(rows: &[&SalesRecord], regions: &BTreeSet<Region>) -> Vec<(String, f64)> {
    let columns = sales_columns(&genre_view_columns(regions));
    aggregate_by(rows, |r| r.genre.clone(), &columns)
        .into_iter()
        .filter_map(|group| group.combined().map(|total| (group.key, total)))
        .collect()
}

/// Sales per platform over the selected region columns, platform
/// ascending. No Global special case: when Global is selected alongside
/// per-region columns, it is summed in as one more column.
pub fn sales_by_platform(rows: &[&SalesRecord], regions: &BTreeSet<Region>) -> Vec<(String, f64)> {
    let selected: Vec<Region> = regions.iter().copied().collect();
    let columns = sales_columns(&selected);
    aggregate_by(
        rows,
        |r| (!r.platform.is_empty()).then(|| r.platform.clone()),
        &columns,
    )
    .into_iter()
    .filter_map(|group| group.combined().map(|total| (group.key, total)))
    .collect()
}

/// Top-N publishers by sales over the selected region columns,
/// descending. Same column handling as the platform view.
pub fn sales_by_publisher(
    rows: &[&SalesRecord],
    regions: &BTreeSet<Region>,
    n: usize,
) -> Vec<(String, f64)> {
    let selected: Vec<Region> = regions.iter().copied().collect();
    let columns = sales_columns(&selected);
    let totals: Vec<(String, f64)> = aggregate_by(rows, |r| r.publisher.clone(), &columns)
        .into_iter()
        .filter_map(|group| group.combined().map(|total| (group.key, total)))
        .collect();
    top_n(totals, n, true)
}

/// Top-N games by a summed score column, descending.
///
/// Games with no value for the column are dropped; re-releases of the
/// same title across platforms sum together, as on the dashboard.
pub fn top_games_by(rows: &[&SalesRecord], column: ValueColumn, n: usize) -> Vec<(String, f64)> {
    let totals: Vec<(String, f64)> = aggregate_by(
        rows,
        |r| (!r.name.is_empty()).then(|| r.name.clone()),
        &[column],
    )
    .into_iter()
    .filter_map(|group| group.combined().map(|total| (group.key, total)))
    .collect();
    top_n(totals, n, true)
}

/// One `(critic_score, user_score)` point per row, dropping rows missing
/// either value. Row order is preserved.
pub fn score_comparison(rows: &[&SalesRecord]) -> Vec<ScorePoint> {
    rows.iter()
        .filter_map(|r| {
            let critic_score = r.critic_score?;
            let user_score = r.user_score?;
            Some(ScorePoint {
                name: r.name.clone(),
                critic_score,
                user_score,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(
        name: &str,
        platform: &str,
        year: u16,
        genre: &str,
        publisher: &str,
        sales: [Option<f64>; 5],
        critic: Option<f64>,
        user: Option<f64>,
        user_count: Option<u32>,
    ) -> SalesRecord {
        SalesRecord {
            name: name.to_string(),
            platform: platform.to_string(),
            year_of_release: Some(year),
            genre: Some(genre.to_string()),
            publisher: Some(publisher.to_string()),
            na_sales: sales[0],
            eu_sales: sales[1],
            jp_sales: sales[2],
            other_sales: sales[3],
            global_sales: sales[4],
            critic_score: critic,
            user_score: user,
            user_count,
        }
    }

    fn sample() -> Vec<SalesRecord> {
        vec![
            record(
                "Alpha", "PS2", 2005, "Action", "EA",
                [Some(1.0), Some(0.5), None, None, Some(1.5)],
                Some(80.0), Some(8.0), Some(100),
            ),
            record(
                "Beta", "PS2", 2005, "Action", "EA",
                [Some(2.0), None, Some(0.5), None, Some(2.5)],
                Some(70.0), None, Some(50),
            ),
            record(
                "Gamma", "Wii", 2006, "Sports", "Nintendo",
                [None, Some(1.0), None, Some(0.25), Some(1.25)],
                None, Some(9.0), Some(200),
            ),
        ]
    }

    fn rows(records: &[SalesRecord]) -> Vec<&SalesRecord> {
        records.iter().collect()
    }

    #[test]
    fn test_region_totals_cover_all_regions() {
        let records = sample();
        let totals = region_totals(&rows(&records));

        assert_eq!(totals.len(), 5);
        assert_eq!(totals[0].region, Region::Na);
        assert!((totals[0].sales - 3.0).abs() < f64::EPSILON);
        let global = totals.iter().find(|t| t.region == Region::Global).unwrap();
        assert!((global.sales - 5.25).abs() < f64::EPSILON);
    }

    #[test]
    fn test_region_totals_zero_on_empty() {
        let totals = region_totals(&[]);
        assert!(totals.iter().all(|t| t.sales == 0.0));
    }

    #[test]
    fn test_yearly_region_sales_sorted_and_sparse() {
        let records = sample();
        let yearly = yearly_region_sales(&rows(&records));

        assert_eq!(yearly.len(), 2);
        assert_eq!(yearly[0].year, 2005);
        assert_eq!(yearly[1].year, 2006);
        assert_eq!(yearly[0].sales(Region::Na), Some(3.0));
        // No 2005 row carries Other_Sales.
        assert_eq!(yearly[0].sales(Region::Other), None);
        assert_eq!(yearly[1].sales(Region::Na), None);
    }

    #[test]
    fn test_genre_view_global_replaces_columns() {
        let with_global: BTreeSet<Region> = [Region::Na, Region::Global].into_iter().collect();
        assert_eq!(genre_view_columns(&with_global), vec![Region::Global]);

        let without: BTreeSet<Region> = [Region::Na, Region::Jp].into_iter().collect();
        assert_eq!(genre_view_columns(&without), vec![Region::Na, Region::Jp]);
    }

    #[test]
    fn test_sales_by_genre_uses_global_alone() {
        let records = sample();
        let regions: BTreeSet<Region> = Region::ALL.into_iter().collect();
        let genres = sales_by_genre(&rows(&records), &regions);

        // Global alone: Action 1.5 + 2.5, Sports 1.25.
        assert_eq!(genres.len(), 2);
        assert_eq!(genres[0].0, "Action");
        assert!((genres[0].1 - 4.0).abs() < f64::EPSILON);
        assert_eq!(genres[1].0, "Sports");
        assert!((genres[1].1 - 1.25).abs() < f64::EPSILON);
    }

    #[test]
    fn test_sales_by_platform_sums_selected_columns() {
        let records = sample();
        let regions: BTreeSet<Region> = [Region::Na, Region::Eu].into_iter().collect();
        let platforms = sales_by_platform(&rows(&records), &regions);

        assert_eq!(platforms.len(), 2);
        assert_eq!(platforms[0].0, "PS2");
        assert!((platforms[0].1 - 3.5).abs() < f64::EPSILON);
        assert_eq!(platforms[1].0, "Wii");
        assert!((platforms[1].1 - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_platform_view_has_no_global_special_case() {
        let records = sample();
        let regions: BTreeSet<Region> = [Region::Na, Region::Global].into_iter().collect();
        let platforms = sales_by_platform(&rows(&records), &regions);

        // Global is summed in as one more column: PS2 = 3.0 + 4.0.
        let ps2 = platforms.iter().find(|(p, _)| p == "PS2").unwrap();
        assert!((ps2.1 - 7.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_empty_region_selection_drops_all_groups() {
        let records = sample();
        let regions = BTreeSet::new();
        assert!(sales_by_genre(&rows(&records), &regions).is_empty());
        assert!(sales_by_platform(&rows(&records), &regions).is_empty());
    }

    #[test]
    fn test_sales_by_publisher_top_n() {
        let records = sample();
        let regions: BTreeSet<Region> = [Region::Na, Region::Eu].into_iter().collect();
        let publishers = sales_by_publisher(&rows(&records), &regions, 1);

        assert_eq!(publishers.len(), 1);
        assert_eq!(publishers[0].0, "EA");
    }

    #[test]
    fn test_top_games_by_user_score_drops_unscored() {
        let records = sample();
        let games = top_games_by(&rows(&records), ValueColumn::UserScore, 10);

        // Beta has no user score and is dropped, not reported as zero.
        assert_eq!(games.len(), 2);
        assert_eq!(games[0].0, "Gamma");
        assert!((games[0].1 - 9.0).abs() < f64::EPSILON);
        assert_eq!(games[1].0, "Alpha");
    }

    #[test]
    fn test_top_games_sums_rereleases() {
        let mut records = sample();
        records.push(record(
            "Alpha", "PC", 2006, "Action", "EA",
            [Some(0.1), None, None, None, Some(0.1)],
            None, Some(1.5), Some(10),
        ));
        let games = top_games_by(&rows(&records), ValueColumn::UserScore, 10);
        let alpha = games.iter().find(|(n, _)| n == "Alpha").unwrap();
        assert!((alpha.1 - 9.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_score_comparison_drops_incomplete_rows() {
        let records = sample();
        let points = score_comparison(&rows(&records));

        // Beta lacks a user score, Gamma a critic score.
        assert_eq!(points.len(), 1);
        assert_eq!(points[0].name, "Alpha");
        assert!((points[0].critic_score - 80.0).abs() < f64::EPSILON);
        assert!((points[0].user_score - 8.0).abs() < f64::EPSILON);
    }
}
