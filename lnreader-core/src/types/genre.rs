/// Genre names known to the catalog. Novels may carry others.
pub const GENRES: [&str; 32] = [
    "Action",
    "Adventure",
    "Comedy",
    "Drama",
    "Ecchi",
    "Fantasy",
    "Gender Bender",
    "Harem",
    "Historical",
    "Horror",
    "Josei",
    "Martial Arts",
    "Mature",
    "Mecha",
    "Mystery",
    "Psychological",
    "Romance",
    "School Life",
    "Sci-fi",
    "Seinen",
    "Shoujo",
    "Shounen",
    "Slice of Life",
    "Smut",
    "Sports",
    "Supernatural",
    "Tragedy",
    "Wuxia",
    "Xianxia",
    "Xuanhuan",
    "Yaoi",
    "Yuri",
];

/// Look up the canonical spelling of a known genre, ignoring case
pub fn canonical_genre(name: &str) -> Option<&'static str> {
    GENRES
        .iter()
        .copied()
        .find(|genre| genre.eq_ignore_ascii_case(name.trim()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_genre() {
        assert_eq!(canonical_genre("slice of life"), Some("Slice of Life"));
        assert_eq!(canonical_genre(" SCI-FI "), Some("Sci-fi"));
        assert_eq!(canonical_genre("Cooking"), None);
    }
}
