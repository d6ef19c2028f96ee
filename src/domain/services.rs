//! Domain services: the fixed puppy catalog and the navigation payload codec.

use crate::domain::{DogImage, DomainError, DomainResult, Puppy};

/// Returns the fixed, ordered puppy catalog.
///
/// Pure and deterministic: no inputs, no I/O, always the same five
/// records in the same order.
pub fn get_puppies() -> Vec<Puppy> {
    vec![
        Puppy::new(
            "Brno",
            2,
            "Very SHarp dog here with a very cute little smile in its face and sharp minded",
            DogImage::Dog1,
        ),
        Puppy::new(
            "Honey",
            4,
            "Cute little furry puppy with very smart and addictive smile in her face",
            DogImage::Dog2,
        ),
        Puppy::new(
            "Tor",
            5,
            "Nice little cute puppy very cheer full and play full",
            DogImage::Dog3,
        ),
        Puppy::new("Sheer", 2, "Cool smart and calm nature dog", DogImage::Dog4),
        Puppy::new(
            "Kiley",
            8,
            "Great sensing power can easily understand your feelings",
            DogImage::Dog5,
        ),
    ]
}

/// Encodes and decodes the puppy payload that crosses the navigation
/// boundary as a string.
pub struct PayloadCodec;

impl PayloadCodec {
    /// Serializes a puppy to its JSON wire form.
    pub fn serialize(puppy: &Puppy) -> String {
        // Serializing a Puppy cannot fail; an empty string would simply
        // be rejected by deserialize on the other side.
        serde_json::to_string(puppy).unwrap_or_default()
    }

    /// Decodes a payload string back into a puppy.
    ///
    /// The inverse of [`PayloadCodec::serialize`]: round-tripping any
    /// valid puppy yields a value-equal reconstruction.
    pub fn deserialize(payload: &str) -> DomainResult<Puppy> {
        serde_json::from_str(payload).map_err(|e| DomainError::MalformedPayload(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_puppies_is_deterministic() {
        assert_eq!(get_puppies(), get_puppies());
    }

    #[test]
    fn test_get_puppies_count_and_order() {
        let puppies = get_puppies();
        assert_eq!(puppies.len(), 5);

        let names: Vec<&str> = puppies.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Brno", "Honey", "Tor", "Sheer", "Kiley"]);
    }

    #[test]
    fn test_payload_round_trip_for_every_puppy() {
        for puppy in get_puppies() {
            let payload = PayloadCodec::serialize(&puppy);
            let restored = PayloadCodec::deserialize(&payload).unwrap();
            assert_eq!(restored, puppy);
        }
    }

    #[test]
    fn test_payload_wire_shape() {
        let puppy = Puppy::new("Sheer", 2, "Cool smart and calm nature dog", DogImage::Dog4);
        let payload = PayloadCodec::serialize(&puppy);
        assert_eq!(
            payload,
            r#"{"name":"Sheer","age":2,"description":"Cool smart and calm nature dog","image":"dog4"}"#
        );
    }

    #[test]
    fn test_deserialize_rejects_garbage() {
        let result = PayloadCodec::deserialize("not json at all");
        assert!(matches!(result, Err(DomainError::MalformedPayload(_))));
    }

    #[test]
    fn test_deserialize_rejects_missing_fields() {
        let result = PayloadCodec::deserialize(r#"{"name":"Rex","age":3}"#);
        assert!(matches!(result, Err(DomainError::MalformedPayload(_))));
    }

    #[test]
    fn test_deserialize_rejects_unknown_image_key() {
        let result = PayloadCodec::deserialize(
            r#"{"name":"Rex","age":3,"description":"hi","image":"dog9"}"#,
        );
        assert!(matches!(result, Err(DomainError::MalformedPayload(_))));
    }
}
