//! Serde helpers shared by entity and DTO types.

use serde::{Deserialize, Deserializer};

/// Deserializes a field that distinguishes "absent" from "explicitly null".
///
/// Use together with `#[serde(default)]`: an absent key stays `None`, an
/// explicit `null` becomes `Some(None)`, and a value becomes `Some(Some(v))`.
pub fn double_option<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;
    use uuid::Uuid;

    #[derive(Deserialize)]
    struct Payload {
        #[serde(default, deserialize_with = "super::double_option")]
        location_id: Option<Option<Uuid>>,
    }

    #[test]
    fn test_absent_key_is_none() {
        let payload: Payload = serde_json::from_str("{}").unwrap();
        assert!(payload.location_id.is_none());
    }

    #[test]
    fn test_explicit_null_is_some_none() {
        let payload: Payload = serde_json::from_str(r#"{"location_id": null}"#).unwrap();
        assert_eq!(payload.location_id, Some(None));
    }

    #[test]
    fn test_value_is_some_some() {
        let id = Uuid::new_v4();
        let payload: Payload =
            serde_json::from_str(&format!(r#"{{"location_id": "{id}"}}"#)).unwrap();
        assert_eq!(payload.location_id, Some(Some(id)));
    }
}
