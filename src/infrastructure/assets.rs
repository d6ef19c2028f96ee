use crate::domain::DogImage;

const DOG1_ART: &str = r#"   __      _
o-''))____//
 `_/      )
 (_(_/-(_/
"#;

const DOG2_ART: &str = r#" /^ ^\
/ 0 0 \
V\ Y /V
 / - \
|    \
|| (__V
"#;

const DOG3_ART: &str = r#"      __
o''))}___
 `_/      )
 (_(_/--(_/
"#;

const DOG4_ART: &str = r#"  ,-~~-.___.
 / |  '     \
(  )        0
 \_/-, ,----'
    ====
"#;

const DOG5_ART: &str = r#"      __
 (___()'`;
 /,    /`
 \\"--\\
"#;

/// Read-only store of the portraits bundled into the binary, keyed by
/// the symbolic image id.
pub struct AssetStore;

impl AssetStore {
    pub fn art(image: DogImage) -> &'static str {
        match image {
            DogImage::Dog1 => DOG1_ART,
            DogImage::Dog2 => DOG2_ART,
            DogImage::Dog3 => DOG3_ART,
            DogImage::Dog4 => DOG4_ART,
            DogImage::Dog5 => DOG5_ART,
        }
    }

    /// Single-line stand-in used for list row thumbnails.
    pub fn thumbnail(image: DogImage) -> &'static str {
        match image {
            DogImage::Dog1 => "(o'.'o)",
            DogImage::Dog2 => "(o^.^o)",
            DogImage::Dog3 => "(o-.-o)",
            DogImage::Dog4 => "(o~.~o)",
            DogImage::Dog5 => "(o*.*o)",
        }
    }
}
