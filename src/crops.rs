//! Fixed mapping from classifier output index to crop name.

/// Sentinel returned for indices outside the trained label range.
pub const UNKNOWN_CROP: &str = "Unknown Crop";

/// The 22 crop labels in training order (0-based).
pub const CROP_NAMES: [&str; 22] = [
    "rice",
    "maize",
    "chickpea",
    "kidneybeans",
    "pigeonpeas",
    "mothbeans",
    "mungbean",
    "blackgram",
    "lentil",
    "pomegranate",
    "banana",
    "mango",
    "grapes",
    "watermelon",
    "muskmelon",
    "apple",
    "orange",
    "papaya",
    "coconut",
    "cotton",
    "jute",
    "coffee",
];

/// Maps a predicted label index to its crop name, falling back to
/// [`UNKNOWN_CROP`] for anything outside `0..=21`.
pub fn crop_name(index: i64) -> &'static str {
    usize::try_from(index)
        .ok()
        .and_then(|i| CROP_NAMES.get(i))
        .copied()
        .unwrap_or(UNKNOWN_CROP)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_canonical_index_maps_to_its_crop() {
        let expected = [
            (0, "rice"),
            (1, "maize"),
            (2, "chickpea"),
            (3, "kidneybeans"),
            (4, "pigeonpeas"),
            (5, "mothbeans"),
            (6, "mungbean"),
            (7, "blackgram"),
            (8, "lentil"),
            (9, "pomegranate"),
            (10, "banana"),
            (11, "mango"),
            (12, "grapes"),
            (13, "watermelon"),
            (14, "muskmelon"),
            (15, "apple"),
            (16, "orange"),
            (17, "papaya"),
            (18, "coconut"),
            (19, "cotton"),
            (20, "jute"),
            (21, "coffee"),
        ];
        for (index, name) in expected {
            assert_eq!(crop_name(index), name);
        }
    }

    #[test]
    fn out_of_range_indices_fall_back_to_unknown() {
        for index in [-1, 22, 9999, i64::MIN, i64::MAX] {
            assert_eq!(crop_name(index), UNKNOWN_CROP);
        }
    }
}
