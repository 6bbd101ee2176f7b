use chrono::NaiveDate;
use serde::Deserialize;
use utoipa::IntoParams;

/// Columns whose distinct values may be listed. Anything outside this
/// set is rejected before a statement is ever built; each variant maps
/// to its own complete SQL text and no identifier reaches a query from
/// caller input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterColumn {
    Equipment,
    Federation,
    Division,
    WeightClass,
}

impl FilterColumn {
    pub const ALLOWED: [&'static str; 4] =
        ["equipment", "federation", "division", "weight_class"];

    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "equipment" => Some(Self::Equipment),
            "federation" => Some(Self::Federation),
            "division" => Some(Self::Division),
            "weight_class" => Some(Self::WeightClass),
            _ => None,
        }
    }

    pub fn as_column(&self) -> &'static str {
        match self {
            Self::Equipment => "equipment",
            Self::Federation => "federation",
            Self::Division => "division",
            Self::WeightClass => "weight_class",
        }
    }
}

/// Inclusive date window for the date-range listing. An inverted range
/// is not an error; it simply matches nothing.
#[derive(Debug, Deserialize, IntoParams)]
pub struct DateRangeQuery {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

/// Query parameters for the bodyweight similarity search.
#[derive(Debug, Deserialize, IntoParams)]
pub struct BodyweightQuery {
    pub bodyweight: f64,
    #[serde(default = "default_bodyweight_tolerance")]
    pub tolerance: f64,
}

fn default_bodyweight_tolerance() -> f64 {
    0.5
}

impl BodyweightQuery {
    /// Inclusive search band around the target bodyweight.
    pub fn band(&self) -> (f64, f64) {
        (self.bodyweight - self.tolerance, self.bodyweight + self.tolerance)
    }
}

/// Query parameters for the performance similarity search. Each lift
/// gets its own band around the same tolerance.
#[derive(Debug, Deserialize, IntoParams)]
pub struct PerformanceQuery {
    pub squat: f64,
    pub bench: f64,
    pub deadlift: f64,
    #[serde(default = "default_performance_tolerance")]
    pub tolerance: f64,
}

fn default_performance_tolerance() -> f64 {
    5.0
}

impl PerformanceQuery {
    pub fn squat_band(&self) -> (f64, f64) {
        (self.squat - self.tolerance, self.squat + self.tolerance)
    }

    pub fn bench_band(&self) -> (f64, f64) {
        (self.bench - self.tolerance, self.bench + self.tolerance)
    }

    pub fn deadlift_band(&self) -> (f64, f64) {
        (self.deadlift - self.tolerance, self.deadlift + self.tolerance)
    }
}

/// Exact-match cohort filters for the ranking neighborhood lookup. Sex
/// is deliberately absent; the window query pins it through the target
/// athlete's own rows.
#[derive(Debug, Clone)]
pub struct RankingFilter {
    pub athlete: String,
    pub year: i32,
    pub equipment: String,
    pub federation: String,
    pub division: String,
    pub weight_class: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_allowed_column() {
        for name in FilterColumn::ALLOWED {
            let column = FilterColumn::parse(name).unwrap();
            assert_eq!(column.as_column(), name);
        }
    }

    #[test]
    fn rejects_unknown_columns() {
        assert_eq!(FilterColumn::parse("name"), None);
        assert_eq!(FilterColumn::parse("entries; DROP TABLE entries"), None);
        assert_eq!(FilterColumn::parse(""), None);
        assert_eq!(FilterColumn::parse("Equipment"), None);
    }

    #[test]
    fn bodyweight_tolerance_defaults() {
        let query: BodyweightQuery =
            serde_json::from_value(serde_json::json!({ "bodyweight": 100.0 })).unwrap();
        assert_eq!(query.tolerance, 0.5);
        assert_eq!(query.band(), (99.5, 100.5));
    }

    #[test]
    fn bodyweight_band_uses_supplied_tolerance() {
        let query = BodyweightQuery {
            bodyweight: 82.5,
            tolerance: 2.0,
        };
        assert_eq!(query.band(), (80.5, 84.5));
    }

    #[test]
    fn performance_tolerance_defaults() {
        let query: PerformanceQuery = serde_json::from_value(serde_json::json!({
            "squat": 200.0,
            "bench": 150.0,
            "deadlift": 220.0
        }))
        .unwrap();
        assert_eq!(query.tolerance, 5.0);
        assert_eq!(query.squat_band(), (195.0, 205.0));
        assert_eq!(query.bench_band(), (145.0, 155.0));
        assert_eq!(query.deadlift_band(), (215.0, 225.0));
    }
}
