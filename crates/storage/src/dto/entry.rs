use chrono::NaiveDate;
use serde::Serialize;
use utoipa::ToSchema;

use crate::models::Entry;

/// Wire form of an [`Entry`]. The conversion from the model is the one
/// place where non-finite floats are dropped to `null`, so no response
/// can carry a literal JSON cannot represent.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct EntryResponse {
    pub id: i32,
    pub name: Option<String>,
    pub sex: Option<String>,
    pub event: Option<String>,
    pub equipment: Option<String>,
    pub age: Option<f64>,
    pub division: Option<String>,
    pub bodyweight: Option<f64>,
    pub weight_class: Option<String>,
    pub best_squat: Option<f64>,
    pub best_bench: Option<f64>,
    pub best_deadlift: Option<f64>,
    pub total: Option<f64>,
    pub place: Option<String>,
    pub date: Option<NaiveDate>,
    pub meet_name: Option<String>,
    pub ranking: Option<i64>,
    pub federation: Option<String>,
    pub dots: Option<f64>,
}

/// A single distinct value of one filterable column.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ColumnValue {
    pub value: String,
}

/// Target entry plus everyone sharing its weight class.
#[derive(Debug, Serialize, ToSchema)]
pub struct CompareResponse {
    pub lifter: EntryResponse,
    pub competitors: Vec<EntryResponse>,
}

fn sanitize(value: Option<f64>) -> Option<f64> {
    value.filter(|v| v.is_finite())
}

impl From<Entry> for EntryResponse {
    fn from(entry: Entry) -> Self {
        Self {
            id: entry.id,
            name: entry.name,
            sex: entry.sex,
            event: entry.event,
            equipment: entry.equipment,
            age: sanitize(entry.age),
            division: entry.division,
            bodyweight: sanitize(entry.bodyweight),
            weight_class: entry.weight_class,
            best_squat: sanitize(entry.best_squat),
            best_bench: sanitize(entry.best_bench),
            best_deadlift: sanitize(entry.best_deadlift),
            total: sanitize(entry.total),
            place: entry.place,
            date: entry.date,
            meet_name: entry.meet_name,
            ranking: entry.ranking,
            federation: entry.federation,
            dots: sanitize(entry.dots),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry() -> Entry {
        Entry {
            id: 1,
            name: Some("Jane Doe".to_string()),
            sex: Some("F".to_string()),
            event: Some("SBD".to_string()),
            equipment: Some("Raw".to_string()),
            age: Some(28.5),
            division: Some("Open".to_string()),
            bodyweight: Some(74.8),
            weight_class: Some("75".to_string()),
            best_squat: Some(180.0),
            best_bench: Some(105.0),
            best_deadlift: Some(200.0),
            total: Some(485.0),
            place: Some("1".to_string()),
            date: None,
            meet_name: Some("Nationals".to_string()),
            ranking: None,
            federation: Some("IPF".to_string()),
            dots: Some(468.2),
        }
    }

    #[test]
    fn sanitize_drops_nan() {
        assert_eq!(sanitize(Some(f64::NAN)), None);
    }

    #[test]
    fn sanitize_drops_infinities() {
        assert_eq!(sanitize(Some(f64::INFINITY)), None);
        assert_eq!(sanitize(Some(f64::NEG_INFINITY)), None);
    }

    #[test]
    fn sanitize_keeps_finite_and_missing() {
        assert_eq!(sanitize(Some(485.0)), Some(485.0));
        assert_eq!(sanitize(Some(0.0)), Some(0.0));
        assert_eq!(sanitize(None), None);
    }

    #[test]
    fn conversion_nulls_every_non_finite_field() {
        let mut entry = entry();
        entry.age = Some(f64::NAN);
        entry.bodyweight = Some(f64::INFINITY);
        entry.total = Some(f64::NEG_INFINITY);
        entry.dots = Some(f64::NAN);

        let response = EntryResponse::from(entry);
        assert_eq!(response.age, None);
        assert_eq!(response.bodyweight, None);
        assert_eq!(response.total, None);
        assert_eq!(response.dots, None);
        assert_eq!(response.best_squat, Some(180.0));
    }

    #[test]
    fn conversion_preserves_finite_values() {
        let response = EntryResponse::from(entry());
        assert_eq!(response.id, 1);
        assert_eq!(response.total, Some(485.0));
        assert_eq!(response.bodyweight, Some(74.8));
        assert_eq!(response.name.as_deref(), Some("Jane Doe"));
    }

    #[test]
    fn sanitized_response_serializes_to_conformant_json() {
        let mut entry = entry();
        entry.total = Some(f64::NAN);
        entry.dots = Some(f64::INFINITY);

        let value = serde_json::to_value(EntryResponse::from(entry)).unwrap();
        assert!(value["total"].is_null());
        assert!(value["dots"].is_null());

        let text = serde_json::to_string(&value).unwrap();
        assert!(!text.contains("NaN"));
        assert!(!text.contains("Infinity"));
    }
}
