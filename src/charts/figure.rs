//! Chart payload types emitted to the presentation layer
//!
//! These are the whole external contract of the pipeline: the renderer
//! receives one of these on every relevant control change. Rendering
//! itself belongs to the presentation layer.

use serde::Serialize;

/// One slice of the proportional distribution chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PieSlice {
    pub label: String,
    pub value: i64,
}

impl PieSlice {
    pub fn new(label: impl Into<String>, value: i64) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }
}

/// Proportional chart of outcome counts (or per-site success totals).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PieChart {
    pub title: String,
    pub slices: Vec<PieSlice>,
}

/// One point of the correlation chart: a record's values, unchanged.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScatterPoint {
    pub payload_kg: f64,
    pub outcome: i64,
    pub booster_category: String,
}

/// Point-per-record chart relating payload mass to outcome, colored by
/// booster category.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScatterChart {
    pub title: String,
    pub points: Vec<ScatterPoint>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pie_chart_serializes() {
        let chart = PieChart {
            title: "t".to_string(),
            slices: vec![PieSlice::new("Success", 3)],
        };
        let json = serde_json::to_value(&chart).unwrap();
        assert_eq!(json["title"], "t");
        assert_eq!(json["slices"][0]["label"], "Success");
        assert_eq!(json["slices"][0]["value"], 3);
    }

    #[test]
    fn test_scatter_chart_serializes() {
        let chart = ScatterChart {
            title: "t".to_string(),
            points: vec![ScatterPoint {
                payload_kg: 2500.5,
                outcome: 1,
                booster_category: "FT".to_string(),
            }],
        };
        let json = serde_json::to_value(&chart).unwrap();
        assert_eq!(json["points"][0]["payload_kg"], 2500.5);
        assert_eq!(json["points"][0]["booster_category"], "FT");
    }
}
