//! Default scenery table for a large (256 x 256) island.

/// `(object type, count)` pairs, placed in this order.
pub const DEFAULT_SCENERY: &[(&str, usize)] = &[
    ("troprockcd", 8),
    ("troprockbd", 7),
    ("troprockad", 6),
    ("troprockcw", 5),
    ("troprockaw", 2),
    ("palm1", 80),
    ("plant1", 30),
    ("palm2", 50),
    ("palm3", 25),
    ("rubblea", 5),
    ("rubbleb", 5),
    ("rubblec", 5),
    ("rubbled", 5),
    ("rubblee", 5),
];

/// Total number of objects in [`DEFAULT_SCENERY`].
#[must_use]
pub fn default_scenery_count() -> usize {
    DEFAULT_SCENERY.iter().map(|(_, count)| count).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_scenery_total() {
        assert_eq!(default_scenery_count(), 238);
    }

    #[test]
    fn test_palms_dominate() {
        let palms: usize = DEFAULT_SCENERY
            .iter()
            .filter(|(name, _)| name.starts_with("palm"))
            .map(|(_, count)| count)
            .sum();
        assert_eq!(palms, 155);
    }
}
