//! The immutable dataset and its catalog of selectable values.

use std::collections::BTreeSet;
use vgsales_common::SalesRecord;

/// Distinct selectable values computed once at load time.
///
/// These back the dashboard's selector widgets and the
/// everything-selected default criteria. Rows missing a value for a
/// dimension contribute nothing to that dimension's list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    /// Sorted distinct platforms.
    pub platforms: Vec<String>,
    /// Sorted distinct publishers.
    pub publishers: Vec<String>,
    /// Sorted distinct genres.
    pub genres: Vec<String>,
    /// Inclusive release-year bounds, absent for an all-undated dataset.
    pub year_bounds: Option<(u16, u16)>,
}

impl Catalog {
    /// Builds the catalog from a set of records.
    pub fn from_records(records: &[SalesRecord]) -> Self {
        let mut platforms = BTreeSet::new();
        let mut publishers = BTreeSet::new();
        let mut genres = BTreeSet::new();
        let mut year_bounds: Option<(u16, u16)> = None;

        for record in records {
            if !record.platform.is_empty() {
                platforms.insert(record.platform.clone());
            }
            if let Some(publisher) = &record.publisher {
                publishers.insert(publisher.clone());
            }
            if let Some(genre) = &record.genre {
                genres.insert(genre.clone());
            }
            if let Some(year) = record.year_of_release {
                year_bounds = Some(match year_bounds {
                    Some((min, max)) => (min.min(year), max.max(year)),
                    None => (year, year),
                });
            }
        }

        Self {
            platforms: platforms.into_iter().collect(),
            publishers: publishers.into_iter().collect(),
            genres: genres.into_iter().collect(),
            year_bounds,
        }
    }
}

/// The loaded sales table plus its catalog.
///
/// Read-only after construction; every dashboard interaction recomputes
/// from these records in full.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    records: Vec<SalesRecord>,
    catalog: Catalog,
}

impl Dataset {
    /// Wraps a set of records, computing the catalog.
    pub fn new(records: Vec<SalesRecord>) -> Self {
        let catalog = Catalog::from_records(&records);
        Self { records, catalog }
    }

    /// All rows of the table.
    pub fn records(&self) -> &[SalesRecord] {
        &self.records
    }

    /// The catalog of selectable values.
    pub const fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the table holds no rows.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
