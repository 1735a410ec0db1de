//! Filter/Search Engine
//!
//! Pure, order-preserving filtering of record collections by free text,
//! category and type. Used by the News and Projects listings.

use crate::aggregate::{aggregate, Aggregates, Tally};

/// UI sentinel meaning "no constraint" in category/type selects
pub const ALL_CHOICE: &str = "all";

/// Records that can be searched and filtered
pub trait Searchable {
    fn title(&self) -> &str;
    fn description(&self) -> &str;
    fn category(&self) -> &str;

    /// Records without a type dimension only match `Selection::All`
    fn kind(&self) -> Option<&str> {
        None
    }
}

/// Either every value or exactly one
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Selection {
    #[default]
    All,
    Only(String),
}

impl Selection {
    /// Map a select-box value, treating `"all"` as the sentinel
    pub fn from_choice(choice: &str) -> Self {
        if choice == ALL_CHOICE {
            Selection::All
        } else {
            Selection::Only(choice.to_string())
        }
    }

    /// Inverse of `from_choice`, for binding back into a select box
    pub fn as_choice(&self) -> &str {
        match self {
            Selection::All => ALL_CHOICE,
            Selection::Only(value) => value,
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, Selection::All)
    }

    fn admits(&self, value: Option<&str>) -> bool {
        match self {
            Selection::All => true,
            Selection::Only(wanted) => value == Some(wanted.as_str()),
        }
    }
}

/// Active filter/search parameters of a listing page
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterCriteria {
    pub search_text: String,
    pub category: Selection,
    pub kind: Selection,
}

impl FilterCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_search(mut self, text: impl Into<String>) -> Self {
        self.search_text = text.into();
        self
    }

    pub fn with_category(mut self, category: Selection) -> Self {
        self.category = category;
        self
    }

    pub fn with_kind(mut self, kind: Selection) -> Self {
        self.kind = kind;
        self
    }

    /// Back to "all", empty text
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn is_default(&self) -> bool {
        self.search_text.is_empty() && self.category.is_all() && self.kind.is_all()
    }

    pub fn matches<T: Searchable + ?Sized>(&self, record: &T) -> bool {
        Matcher::new(self).matches(record)
    }
}

/// Criteria with the search needle lowercased once
struct Matcher<'c> {
    needle: String,
    criteria: &'c FilterCriteria,
}

impl<'c> Matcher<'c> {
    fn new(criteria: &'c FilterCriteria) -> Self {
        Self {
            needle: criteria.search_text.to_lowercase(),
            criteria,
        }
    }

    fn matches<T: Searchable + ?Sized>(&self, record: &T) -> bool {
        let text_ok = self.needle.is_empty()
            || record.title().to_lowercase().contains(&self.needle)
            || record.description().to_lowercase().contains(&self.needle);

        text_ok
            && self.criteria.category.admits(Some(record.category()))
            && self.criteria.kind.admits(record.kind())
    }
}

/// Stable filter: references to the retained records, in input order
pub fn filter<'a, T, I>(records: I, criteria: &FilterCriteria) -> Vec<&'a T>
where
    T: Searchable + 'a,
    I: IntoIterator<Item = &'a T>,
{
    let matcher = Matcher::new(criteria);
    records.into_iter().filter(|record| matcher.matches(*record)).collect()
}

/// A full record collection
///
/// Views come from `filter`, statistics from `aggregate`. Statistics are
/// only available on the full collection, so a filtered view can never
/// feed a statistic card.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog<T> {
    records: Vec<T>,
}

impl<T> Catalog<T> {
    pub fn new(records: Vec<T>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[T] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn filter(&self, criteria: &FilterCriteria) -> Vec<&T>
    where
        T: Searchable,
    {
        filter(&self.records, criteria)
    }

    /// Records satisfying an arbitrary predicate, in order
    pub fn select(&self, predicate: impl Fn(&T) -> bool) -> Vec<&T> {
        self.records.iter().filter(|record| predicate(record)).collect()
    }

    pub fn aggregate(&self) -> Aggregates<T::Status>
    where
        T: Tally,
    {
        aggregate(&self.records)
    }
}

impl<T> From<Vec<T>> for Catalog<T> {
    fn from(records: Vec<T>) -> Self {
        Self::new(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    struct Entry {
        title: &'static str,
        description: &'static str,
        category: &'static str,
        kind: Option<&'static str>,
    }

    impl Searchable for Entry {
        fn title(&self) -> &str {
            self.title
        }
        fn description(&self) -> &str {
            self.description
        }
        fn category(&self) -> &str {
            self.category
        }
        fn kind(&self) -> Option<&str> {
            self.kind
        }
    }

    fn entries() -> Vec<Entry> {
        vec![
            Entry { title: "Deed Signing", description: "CEPA and UNDP", category: "Conservation", kind: Some("news") },
            Entry { title: "Model Farms", description: "climate-smart", category: "Agriculture", kind: Some("news") },
            Entry {
                title: "Profile 2025",
                description: "Our history",
                category: "Organization",
                kind: Some("publication"),
            },
            Entry {
                title: "Registration",
                description: "IPA certificate",
                category: "Organization",
                kind: Some("press-release"),
            },
            Entry {
                title: "Adaptation",
                description: "Springer handbook on CLIMATE",
                category: "Research",
                kind: Some("publication"),
            },
        ]
    }

    fn titles(view: &[&Entry]) -> Vec<&'static str> {
        view.iter().map(|e| e.title).collect()
    }

    #[test]
    fn test_default_criteria_returns_everything_in_order() {
        let all = entries();
        let view = filter(&all, &FilterCriteria::default());
        assert_eq!(view.len(), all.len());
        for (kept, original) in view.iter().zip(all.iter()) {
            assert!(std::ptr::eq(*kept, original));
        }
    }

    #[test]
    fn test_search_is_case_insensitive_over_title_and_description() {
        let all = entries();
        let view = filter(&all, &FilterCriteria::new().with_search("climate"));
        assert_eq!(titles(&view), vec!["Model Farms", "Adaptation"]);

        let view = filter(&all, &FilterCriteria::new().with_search("DEED"));
        assert_eq!(titles(&view), vec!["Deed Signing"]);
    }

    #[test]
    fn test_category_and_kind_are_exact() {
        let all = entries();
        let criteria = FilterCriteria::new()
            .with_category(Selection::from_choice("Organization"))
            .with_kind(Selection::from_choice("publication"));
        assert_eq!(titles(&filter(&all, &criteria)), vec!["Profile 2025"]);

        let lower = FilterCriteria::new().with_category(Selection::from_choice("organization"));
        assert!(filter(&all, &lower).is_empty());
    }

    #[test]
    fn test_unknown_values_match_nothing() {
        let all = entries();
        let criteria = FilterCriteria::new().with_kind(Selection::from_choice("podcast"));
        assert!(filter(&all, &criteria).is_empty());
    }

    #[test]
    fn test_records_without_kind_only_match_all() {
        let untyped = vec![Entry { title: "x", description: "y", category: "c", kind: None }];
        assert_eq!(filter(&untyped, &FilterCriteria::default()).len(), 1);
        let typed = FilterCriteria::new().with_kind(Selection::from_choice("news"));
        assert!(filter(&untyped, &typed).is_empty());
    }

    #[test]
    fn test_disjoint_criteria_compose() {
        let all = entries();
        let by_category = FilterCriteria::new().with_category(Selection::from_choice("Organization"));
        let by_text = FilterCriteria::new().with_search("ipa");
        let combined = by_category.clone().with_search("ipa");

        let first = filter(&all, &by_category);
        let chained = filter(first.iter().copied(), &by_text);
        assert_eq!(chained, filter(&all, &combined));

        let other_order = filter(filter(&all, &by_text).iter().copied(), &by_category);
        assert_eq!(other_order, chained);
    }

    #[test]
    fn test_empty_collection() {
        let none: Vec<Entry> = Vec::new();
        assert!(filter(&none, &FilterCriteria::new().with_search("x")).is_empty());
    }

    #[test]
    fn test_selection_choice_round_trip() {
        assert_eq!(Selection::from_choice("all"), Selection::All);
        assert_eq!(Selection::from_choice("news").as_choice(), "news");
        assert_eq!(Selection::All.as_choice(), ALL_CHOICE);
    }

    #[test]
    fn test_reset() {
        let mut criteria = FilterCriteria::new()
            .with_search("farm")
            .with_category(Selection::from_choice("Agriculture"));
        assert!(!criteria.is_default());
        criteria.reset();
        assert!(criteria.is_default());
        assert_eq!(criteria, FilterCriteria::default());
    }
}
