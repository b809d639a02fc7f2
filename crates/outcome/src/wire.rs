//! Serde representation of [`Outcome`].
//!
//! An outcome serializes as a map with a `status` tag:
//!
//! ```json
//! { "status": "success", "value": 5 }
//! { "status": "failure", "error": "not found" }
//! ```
//!
//! The shape carries no type names, so any serde format can move it across a
//! process boundary and the receiver gets back a structurally equal value.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::outcome::Outcome;

#[derive(Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
enum WireRef<'a, T, E> {
    Success { value: &'a T },
    Failure { error: &'a E },
}

#[derive(Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
enum Wire<T, E> {
    Success { value: T },
    Failure { error: E },
}

impl<T, E> Serialize for Outcome<T, E>
where
    T: Serialize,
    E: Serialize,
{
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Success(value) => WireRef::Success { value },
            Self::Failure(error) => WireRef::Failure { error },
        }
        .serialize(serializer)
    }
}

impl<'de, T, E> Deserialize<'de> for Outcome<T, E>
where
    T: Deserialize<'de>,
    E: Deserialize<'de>,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match Wire::deserialize(deserializer)? {
            Wire::Success { value } => Self::Success(value),
            Wire::Failure { error } => Self::Failure(error),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::outcome::{failure, success};
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct NotFound {
        resource: String,
        id: u64,
    }

    #[test]
    fn test_success_shape() {
        let outcome: Outcome<u32, String> = success(5);
        assert_eq!(
            serde_json::to_value(outcome).unwrap(),
            json!({ "status": "success", "value": 5 })
        );
    }

    #[test]
    fn test_failure_shape() {
        let outcome: Outcome<u32, NotFound> = failure(NotFound {
            resource: "workflow".into(),
            id: 7,
        });
        assert_eq!(
            serde_json::to_value(&outcome).unwrap(),
            json!({ "status": "failure", "error": { "resource": "workflow", "id": 7 } })
        );
    }

    #[test]
    fn test_unit_success_shape() {
        let outcome: Outcome<(), String> = success(());
        assert_eq!(
            serde_json::to_value(outcome).unwrap(),
            json!({ "status": "success", "value": null })
        );
    }

    #[test]
    fn test_deserialize_equals_fresh_value() {
        let decoded: Outcome<u32, String> =
            serde_json::from_str(r#"{"error":"x","status":"failure"}"#).unwrap();
        assert_eq!(decoded, failure("x".to_string()));

        let decoded: Outcome<u32, String> =
            serde_json::from_str(r#"{"status":"success","value":5}"#).unwrap();
        assert_eq!(decoded, success(5));
    }

    #[test]
    fn test_nested_outcome() {
        let nested: Outcome<Outcome<u8, String>, String> = success(failure("inner".into()));
        let text = serde_json::to_string(&nested).unwrap();
        let decoded: Outcome<Outcome<u8, String>, String> = serde_json::from_str(&text).unwrap();
        assert_eq!(decoded, nested);
    }

    #[test]
    fn test_rejects_unknown_status() {
        let decoded =
            serde_json::from_str::<Outcome<u32, String>>(r#"{"status":"pending","value":5}"#);
        assert!(decoded.is_err());
    }

    #[test]
    fn test_rejects_missing_payload() {
        let decoded = serde_json::from_str::<Outcome<u32, String>>(r#"{"status":"failure"}"#);
        assert!(decoded.is_err());
    }
}
