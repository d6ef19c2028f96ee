use serde::{Deserialize, Serialize};

/// Symbolic identifier for a bundled puppy portrait.
///
/// Serializes to a stable string key ("dog1".."dog5") so a payload that
/// crosses the navigation boundary carries a portable id rather than a
/// raw asset handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DogImage {
    Dog1,
    Dog2,
    Dog3,
    Dog4,
    Dog5,
}

/// A single dog profile. Immutable once constructed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Puppy {
    pub name: String,
    pub age: u8,
    pub description: String,
    pub image: DogImage,
}

impl Puppy {
    pub fn new(
        name: impl Into<String>,
        age: u8,
        description: impl Into<String>,
        image: DogImage,
    ) -> Self {
        Self {
            name: name.into(),
            age,
            description: description.into(),
            image,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_puppy_new_sets_all_fields() {
        let puppy = Puppy::new("Rex", 3, "A good boy", DogImage::Dog1);
        assert_eq!(puppy.name, "Rex");
        assert_eq!(puppy.age, 3);
        assert_eq!(puppy.description, "A good boy");
        assert_eq!(puppy.image, DogImage::Dog1);
    }

    #[test]
    fn test_dog_image_uses_symbolic_wire_key() {
        let json = serde_json::to_string(&DogImage::Dog2).unwrap();
        assert_eq!(json, "\"dog2\"");

        let back: DogImage = serde_json::from_str("\"dog5\"").unwrap();
        assert_eq!(back, DogImage::Dog5);
    }
}
