//! Chart data models.
//!
//! Charts are described as data; the frontend turns them into SVG.

use serde::Serialize;

/// Fill color for primary series and active users.
pub const COLOR_PRIMARY: &str = "#1abc9c";
/// Border color for bar outlines.
pub const COLOR_PRIMARY_DARK: &str = "#16a085";
/// Fill color for blocked users.
pub const COLOR_DANGER: &str = "#e74c3c";

/// A bar chart: one labeled bar per entry, on a fixed 0..=max scale.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BarChart {
    pub labels: Vec<String>,
    pub values: Vec<u8>,
    /// Top of the value axis.
    pub max: u8,
}

impl BarChart {
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// One slice of a pie chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PieSlice {
    pub label: String,
    pub value: u32,
    pub color: &'static str,
}

/// A pie chart as a list of labeled slices.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PieChart {
    pub slices: Vec<PieSlice>,
}

impl PieChart {
    /// Sum of all slice values.
    pub fn total(&self) -> u32 {
        self.slices.iter().map(|s| s.value).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pie_chart_total() {
        let chart = PieChart {
            slices: vec![
                PieSlice {
                    label: "Active".to_string(),
                    value: 6,
                    color: COLOR_PRIMARY,
                },
                PieSlice {
                    label: "Blocked".to_string(),
                    value: 3,
                    color: COLOR_DANGER,
                },
            ],
        };

        assert_eq!(chart.total(), 9);
    }

    #[test]
    fn test_empty_bar_chart() {
        let chart = BarChart {
            labels: vec![],
            values: vec![],
            max: 100,
        };

        assert!(chart.is_empty());
    }
}
