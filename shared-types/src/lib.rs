use serde::{Deserialize, Serialize};

/// A workshop customer row as exchanged between server functions and views.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
pub struct CustomerRecord {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub vehicle: String,
    pub vehicle_year: i32,
    pub notes: String,
}

impl CustomerRecord {
    /// Keys a form is allowed to submit back. `id` is assigned server-side
    /// and never editable.
    pub const EDITABLE_FIELDS: &'static [&'static str] = &[
        "name",
        "email",
        "phone",
        "vehicle",
        "vehicle_year",
        "notes",
    ];
}

#[cfg(test)]
mod customer_record_tests {
    use super::*;
    use serde_json::Value;

    #[test]
    fn test_customer_record_default_values() {
        let record = CustomerRecord::default();

        assert_eq!(record.id, 0);
        assert_eq!(record.name, "");
        assert_eq!(record.email, "");
        assert_eq!(record.phone, "");
        assert_eq!(record.vehicle, "");
        assert_eq!(record.vehicle_year, 0);
        assert_eq!(record.notes, "");
    }

    #[test]
    fn test_customer_record_equality() {
        let record1 = CustomerRecord {
            id: 7,
            name: "Marta Díaz".to_string(),
            vehicle: "Renault Clio".to_string(),
            vehicle_year: 1998,
            ..Default::default()
        };
        let record2 = record1.clone();

        assert_eq!(record1, record2);
        assert_ne!(
            record1,
            CustomerRecord {
                vehicle_year: 1999,
                ..record2
            }
        );
    }

    #[test]
    fn test_customer_record_serialization_roundtrip() {
        let original = CustomerRecord {
            id: 42,
            name: "Jorge Paz".to_string(),
            email: "jorge@example.com".to_string(),
            phone: "555-0142".to_string(),
            vehicle: "Ford Falcon".to_string(),
            vehicle_year: 1979,
            notes: "Prefers morning appointments".to_string(),
        };

        let json = serde_json::to_string(&original).expect("serialization failed");
        let restored: CustomerRecord =
            serde_json::from_str(&json).expect("deserialization failed");

        assert_eq!(original, restored);
    }

    #[test]
    fn test_editable_fields_match_serialized_keys() {
        let value = serde_json::to_value(CustomerRecord::default()).unwrap();
        let Value::Object(map) = value else {
            panic!("record should serialize to an object");
        };

        for field in CustomerRecord::EDITABLE_FIELDS {
            assert!(map.contains_key(*field), "unknown editable field {field}");
        }
        assert!(!CustomerRecord::EDITABLE_FIELDS.contains(&"id"));
    }
}
