/// A read-only entry of a static catalog.
pub trait ContentRecord: 'static {
    fn slug(&self) -> &str;
    fn category(&self) -> &str;
    fn tags(&self) -> &[&'static str];
}

/// In-memory table of records, kept in authoring order.
#[derive(Debug)]
pub struct Catalog<T: 'static> {
    entries: &'static [T],
}

impl<T> Clone for Catalog<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Catalog<T> {}

impl<T: ContentRecord> Catalog<T> {
    pub const fn new(entries: &'static [T]) -> Self {
        Self { entries }
    }

    pub fn all(&self) -> &'static [T] {
        self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn find(&self, slug: &str) -> Option<&'static T> {
        self.entries.iter().find(|entry| entry.slug() == slug)
    }

    pub fn position(&self, slug: &str) -> Option<usize> {
        self.entries.iter().position(|entry| entry.slug() == slug)
    }

    /// Entries sharing the category or at least one tag with `slug`, in
    /// catalog order, excluding `slug` itself. Empty for unknown slugs.
    pub fn related(&self, slug: &str, limit: usize) -> Vec<&'static T> {
        let Some(origin) = self.find(slug) else {
            return Vec::new();
        };
        self.entries
            .iter()
            .filter(|entry| entry.slug() != origin.slug())
            .filter(|entry| {
                entry.category() == origin.category()
                    || entry.tags().iter().any(|tag| origin.tags().contains(tag))
            })
            .take(limit)
            .collect()
    }

    /// The entry after `slug`, wrapping to the first. `None` when that would be
    /// `slug` itself or `slug` is unknown.
    pub fn next_after(&self, slug: &str) -> Option<&'static T> {
        let index = self.position(slug)?;
        let next = (index + 1) % self.entries.len();
        (next != index).then(|| &self.entries[next])
    }

    /// Distinct categories in first-seen order.
    pub fn categories(&self) -> Vec<&'static str> {
        let mut seen: Vec<&'static str> = Vec::new();
        for entry in self.entries {
            let category = entry.category();
            if !seen.contains(&category) {
                seen.push(category);
            }
        }
        seen
    }

    /// Distinct tags in first-seen order.
    pub fn tags(&self) -> Vec<&'static str> {
        let mut seen: Vec<&'static str> = Vec::new();
        for tag in self.entries.iter().flat_map(|entry| entry.tags().iter().copied()) {
            if !seen.contains(&tag) {
                seen.push(tag);
            }
        }
        seen
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Item {
        slug: &'static str,
        category: &'static str,
        tags: &'static [&'static str],
    }

    impl ContentRecord for Item {
        fn slug(&self) -> &str {
            self.slug
        }
        fn category(&self) -> &str {
            self.category
        }
        fn tags(&self) -> &[&'static str] {
            self.tags
        }
    }

    static ITEMS: [Item; 5] = [
        Item { slug: "a", category: "design", tags: &["brand"] },
        Item { slug: "b", category: "dev", tags: &["web"] },
        Item { slug: "c", category: "design", tags: &["print"] },
        Item { slug: "d", category: "motion", tags: &["web", "brand"] },
        Item { slug: "e", category: "dev", tags: &["api"] },
    ];

    static SINGLE: [Item; 1] = [Item { slug: "only", category: "x", tags: &[] }];

    fn catalog() -> Catalog<Item> {
        Catalog::new(&ITEMS)
    }

    fn slugs(items: Vec<&Item>) -> Vec<&str> {
        items.into_iter().map(|i| i.slug).collect()
    }

    #[test]
    fn finds_by_slug() {
        assert_eq!(catalog().find("c").map(|i| i.slug), Some("c"));
        assert!(catalog().find("zzz").is_none());
    }

    #[test]
    fn related_matches_category_or_tag_in_catalog_order() {
        assert_eq!(slugs(catalog().related("a", 10)), vec!["c", "d"]);
        assert_eq!(slugs(catalog().related("b", 10)), vec!["d", "e"]);
        assert_eq!(slugs(catalog().related("d", 1)), vec!["a"]);
        assert!(catalog().related("nope", 3).is_empty());
    }

    #[test]
    fn next_wraps_around() {
        assert_eq!(catalog().next_after("a").map(|i| i.slug), Some("b"));
        assert_eq!(catalog().next_after("e").map(|i| i.slug), Some("a"));
        assert!(catalog().next_after("nope").is_none());
    }

    #[test]
    fn single_entry_has_no_next() {
        let single = Catalog::new(&SINGLE);
        assert!(single.next_after("only").is_none());
    }

    #[test]
    fn distinct_categories_and_tags() {
        assert_eq!(catalog().categories(), vec!["design", "dev", "motion"]);
        assert_eq!(catalog().tags(), vec!["brand", "web", "print", "api"]);
    }
}
