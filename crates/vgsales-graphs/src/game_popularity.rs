//! Game popularity section: top-game rankings and the score scatter.

use crate::types::{AxisSpec, ChartKind, ChartSpec, DataPoint, Series, Theme};
use vgsales_pipeline::ScorePoint;

/// Stable id of the user-score ranking.
pub const USER_SCORE_CHART_ID: &str = "top-games-by-user-score";
/// Stable id of the user-count ranking.
pub const USER_COUNT_CHART_ID: &str = "top-games-by-user-count";
/// Stable id of the critic-score ranking.
pub const CRITIC_SCORE_CHART_ID: &str = "top-games-by-critic-score";
/// Stable id of the critic/user scatter.
pub const SCATTER_CHART_ID: &str = "critic-vs-user-score";

fn ranking(id: &str, title: String, y_title: &str, games: &[(String, f64)], theme: Theme) -> ChartSpec {
    let mut spec = ChartSpec::new(id, title, ChartKind::Bar);
    spec.theme = theme;
    spec.x_axis = AxisSpec::titled("Game");
    spec.y_axis = AxisSpec::titled(y_title);

    let points = games
        .iter()
        .map(|(name, value)| {
            DataPoint::categorical(name.clone(), *value).with_label(format!("{value:.2}"))
        })
        .collect();
    spec.series.push(Series::new(y_title, points));
    spec
}

/// Top games ranked by summed user score.
pub fn user_score_chart(games: &[(String, f64)], n: usize, theme: Theme) -> ChartSpec {
    ranking(
        USER_SCORE_CHART_ID,
        format!("Top {n} Video Games by User Score"),
        "User Score",
        games,
        theme,
    )
}

/// Top games ranked by summed user vote count.
pub fn user_count_chart(games: &[(String, f64)], n: usize, theme: Theme) -> ChartSpec {
    ranking(
        USER_COUNT_CHART_ID,
        format!("Top {n} Video Games by User Vote Count"),
        "User Count",
        games,
        theme,
    )
}

/// Top games ranked by summed critic score.
pub fn critic_score_chart(games: &[(String, f64)], n: usize, theme: Theme) -> ChartSpec {
    ranking(
        CRITIC_SCORE_CHART_ID,
        format!("Top {n} Video Games by Critic Score"),
        "Critic Score",
        games,
        theme,
    )
}

/// Critic vs. user score scatter over the filtered rows.
///
/// Axis ranges are fixed to the score scales so the cloud stays
/// comparable across filter changes.
pub fn score_scatter(points: &[ScorePoint], theme: Theme) -> ChartSpec {
    let mut spec = ChartSpec::new(
        SCATTER_CHART_ID,
        "Critic Score vs. User Score Comparison",
        ChartKind::Scatter,
    );
    spec.theme = theme;
    spec.x_axis = AxisSpec::titled("Critic Score").with_range(0.0, 100.0);
    spec.y_axis = AxisSpec::titled("User Score").with_range(0.0, 10.0);

    let data = points
        .iter()
        .map(|p| DataPoint::xy(p.critic_score, p.user_score).with_label(p.name.clone()))
        .collect();
    spec.series.push(Series::new("Games", data));
    spec
}

#[cfg(test)]
mod tests {
    use super::*;

    fn games() -> Vec<(String, f64)> {
        vec![("Gamma".to_string(), 9.0), ("Alpha".to_string(), 8.0)]
    }

    #[test]
    fn test_ranking_titles_carry_limit() {
        let spec = user_score_chart(&games(), 10, Theme::Dark);
        assert_eq!(spec.title, "Top 10 Video Games by User Score");
        assert_eq!(spec.id, USER_SCORE_CHART_ID);

        let spec = user_count_chart(&games(), 5, Theme::Dark);
        assert!(spec.title.contains("Top 5"));
        assert!(spec.title.contains("User Vote Count"));

        let spec = critic_score_chart(&games(), 10, Theme::Dark);
        assert_eq!(spec.y_axis.title.as_deref(), Some("Critic Score"));
    }

    #[test]
    fn test_ranking_preserves_view_order() {
        let spec = user_score_chart(&games(), 10, Theme::Dark);
        let categories: Vec<&str> = spec.series[0]
            .points
            .iter()
            .filter_map(|p| p.category.as_deref())
            .collect();
        assert_eq!(categories, vec!["Gamma", "Alpha"]);
        assert_eq!(spec.series[0].points[0].label.as_deref(), Some("9.00"));
    }

    #[test]
    fn test_scatter_has_fixed_score_ranges() {
        let points = vec![ScorePoint {
            name: "Alpha".to_string(),
            critic_score: 80.0,
            user_score: 8.0,
        }];
        let spec = score_scatter(&points, Theme::Dark);

        assert_eq!(spec.x_axis.range, Some((0.0, 100.0)));
        assert_eq!(spec.y_axis.range, Some((0.0, 10.0)));
        assert_eq!(spec.series[0].points[0].label.as_deref(), Some("Alpha"));
    }

    #[test]
    fn test_empty_views_build_empty_charts() {
        assert!(user_score_chart(&[], 10, Theme::Dark).is_empty());
        assert!(score_scatter(&[], Theme::Dark).is_empty());
    }
}
