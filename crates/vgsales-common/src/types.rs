//! Shared data model for the sales dashboard
//!
//! One [`SalesRecord`] corresponds to one row of the source CSV. Numeric
//! fields are optional throughout: a missing or malformed value coerces
//! to `None` and is excluded from aggregation, never treated as zero.

use serde::{Deserialize, Deserializer, Serialize};

/// Sales regions tracked by the dataset.
///
/// Declaration order is the canonical presentation order for summary
/// totals and region series. Each region maps to one sales column of
/// the source CSV.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Region {
    /// North America (`NA_Sales`)
    #[serde(rename = "NA")]
    Na,
    /// Europe (`EU_Sales`)
    #[serde(rename = "EU")]
    Eu,
    /// Japan (`JP_Sales`)
    #[serde(rename = "JP")]
    Jp,
    /// Rest of the world (`Other_Sales`)
    Other,
    /// Worldwide total (`Global_Sales`)
    Global,
}

impl Region {
    /// All regions in presentation order.
    pub const ALL: [Self; 5] = [Self::Na, Self::Eu, Self::Jp, Self::Other, Self::Global];

    /// Regions that map to a physical location on the sales map.
    pub const MAPPABLE: [Self; 4] = [Self::Na, Self::Eu, Self::Jp, Self::Other];

    /// The CSV column holding this region's sales figures.
    pub const fn column_name(self) -> &'static str {
        match self {
            Self::Na => "NA_Sales",
            Self::Eu => "EU_Sales",
            Self::Jp => "JP_Sales",
            Self::Other => "Other_Sales",
            Self::Global => "Global_Sales",
        }
    }

    /// Short display label, as shown on the dashboard.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Na => "NA",
            Self::Eu => "EU",
            Self::Jp => "JP",
            Self::Other => "Other",
            Self::Global => "Global",
        }
    }

    /// Parses a display label back into a region.
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|r| r.label() == label)
    }
}

impl std::fmt::Display for Region {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// One row of the sales dataset.
///
/// Field names mirror the source CSV headers via serde renames so the
/// record deserializes directly from `csv::Reader::deserialize`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalesRecord {
    /// Game title.
    #[serde(rename = "Name", default)]
    pub name: String,
    /// Platform the release shipped on (e.g. "PS2", "Wii").
    #[serde(rename = "Platform", default)]
    pub platform: String,
    /// Release year; absent for undated entries.
    #[serde(rename = "Year_of_Release", deserialize_with = "lenient_year", default)]
    pub year_of_release: Option<u16>,
    /// Genre; absent for a handful of rows.
    #[serde(rename = "Genre", deserialize_with = "lenient_string", default)]
    pub genre: Option<String>,
    /// Publisher; absent for a handful of rows.
    #[serde(rename = "Publisher", deserialize_with = "lenient_string", default)]
    pub publisher: Option<String>,
    /// North America sales, in millions of units.
    #[serde(rename = "NA_Sales", deserialize_with = "lenient_f64", default)]
    pub na_sales: Option<f64>,
    /// Europe sales, in millions of units.
    #[serde(rename = "EU_Sales", deserialize_with = "lenient_f64", default)]
    pub eu_sales: Option<f64>,
    /// Japan sales, in millions of units.
    #[serde(rename = "JP_Sales", deserialize_with = "lenient_f64", default)]
    pub jp_sales: Option<f64>,
    /// Rest-of-world sales, in millions of units.
    #[serde(rename = "Other_Sales", deserialize_with = "lenient_f64", default)]
    pub other_sales: Option<f64>,
    /// Worldwide sales, in millions of units.
    #[serde(rename = "Global_Sales", deserialize_with = "lenient_f64", default)]
    pub global_sales: Option<f64>,
    /// Aggregate critic score, 0-100 scale.
    #[serde(rename = "Critic_Score", deserialize_with = "lenient_f64", default)]
    pub critic_score: Option<f64>,
    /// Aggregate user score, 0-10 scale. The source data uses "tbd" for
    /// unscored games; that coerces to `None`.
    #[serde(rename = "User_Score", deserialize_with = "lenient_f64", default)]
    pub user_score: Option<f64>,
    /// Number of user votes behind the user score.
    #[serde(rename = "User_Count", deserialize_with = "lenient_u32", default)]
    pub user_count: Option<u32>,
}

impl SalesRecord {
    /// Sales for one region, in millions of units.
    pub const fn sales(&self, region: Region) -> Option<f64> {
        match region {
            Region::Na => self.na_sales,
            Region::Eu => self.eu_sales,
            Region::Jp => self.jp_sales,
            Region::Other => self.other_sales,
            Region::Global => self.global_sales,
        }
    }

    /// Sum of this row's sales across the given regions.
    ///
    /// Missing values are skipped; returns `None` when no region has a
    /// value at all, so the row drops out of that aggregation entirely.
    pub fn region_sales_total(&self, regions: &[Region]) -> Option<f64> {
        let mut total = None;
        for region in regions {
            if let Some(v) = self.sales(*region) {
                total = Some(total.unwrap_or(0.0) + v);
            }
        }
        total
    }
}

/// A numeric column that aggregations can sum over.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueColumn {
    /// One region's sales column.
    Sales(Region),
    /// The `Critic_Score` column.
    CriticScore,
    /// The `User_Score` column.
    UserScore,
    /// The `User_Count` column.
    UserCount,
}

impl ValueColumn {
    /// Reads this column's value from a record.
    pub fn value_of(self, record: &SalesRecord) -> Option<f64> {
        match self {
            Self::Sales(region) => record.sales(region),
            Self::CriticScore => record.critic_score,
            Self::UserScore => record.user_score,
            Self::UserCount => record.user_count.map(f64::from),
        }
    }

    /// The CSV column this selector reads.
    pub const fn column_name(self) -> &'static str {
        match self {
            Self::Sales(region) => region.column_name(),
            Self::CriticScore => "Critic_Score",
            Self::UserScore => "User_Score",
            Self::UserCount => "User_Count",
        }
    }
}

fn parse_lenient_f64(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    // "tbd" shows up in User_Score for unrated games; anything else
    // unparseable is equally missing.
    trimmed.parse::<f64>().ok().filter(|v| v.is_finite())
}

fn lenient_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.as_deref().and_then(parse_lenient_f64))
}

fn lenient_year<'de, D>(deserializer: D) -> Result<Option<u16>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw
        .as_deref()
        .and_then(parse_lenient_f64)
        .map(f64::round)
        .filter(|y| (1000.0..=9999.0).contains(y))
        .map(|y| y as u16))
}

fn lenient_u32<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw
        .as_deref()
        .and_then(parse_lenient_f64)
        .filter(|v| (0.0..=f64::from(u32::MAX)).contains(v))
        .map(|v| v as u32))
}

fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.map(|s| s.trim().to_string()).filter(|s| !s.is_empty()))
}
