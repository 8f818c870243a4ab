//! # Projection
//!
//! The table never shows `App::records` directly. Every frame it shows
//! `derive_view(records, filter, sort)`: filter by country, then sort.
//! Nothing here is cached; the projection is recomputed from scratch whenever
//! it is needed.

use std::cell::RefCell;
use std::cmp::Ordering;

use feruca::Collator;

use crate::source::User;

/// Which column, if any, orders the projection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortMode {
    /// Keep the fetched order.
    #[default]
    None,
    Country,
    /// By first name.
    Name,
    /// By last name.
    Last,
}

impl SortMode {
    /// The header toggle only cycles None <-> Country, even from Name/Last.
    pub fn toggle_country(self) -> SortMode {
        match self {
            SortMode::Country => SortMode::None,
            _ => SortMode::Country,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SortMode::None => "none",
            SortMode::Country => "country",
            SortMode::Name => "first name",
            SortMode::Last => "last name",
        }
    }

    /// The field this mode sorts on. Empty for `None`.
    fn key(self, user: &User) -> &str {
        match self {
            SortMode::None => "",
            SortMode::Country => &user.location.country,
            SortMode::Name => &user.name.first,
            SortMode::Last => &user.name.last,
        }
    }
}

/// Filters `records` by country substring, then sorts by `sort`.
///
/// - `filter` of `None` or `""` keeps every record.
/// - Matching is case-insensitive substring on `location.country`.
/// - Sorting is stable, so ties keep their relative fetched order.
pub fn derive_view<'a>(records: &'a [User], filter: Option<&str>, sort: SortMode) -> Vec<&'a User> {
    let needle = filter
        .filter(|f| !f.is_empty())
        .map(str::to_lowercase);

    let mut view: Vec<&User> = match needle {
        Some(ref needle) => records
            .iter()
            .filter(|u| u.location.country.to_lowercase().contains(needle.as_str()))
            .collect(),
        None => records.iter().collect(),
    };

    if sort != SortMode::None {
        view.sort_by(|a, b| locale_cmp(sort.key(a), sort.key(b)));
    }
    view
}

/// Locale-aware string comparison under the CLDR root collation.
///
/// Letters compare by alphabet first (Latin, Cyrillic and Arabic script
/// letters each in their own alphabetical order), then accents, then case
/// with lowercase first. Strings the collator ranks equal fall back to
/// code-point order, so distinct strings never compare equal.
pub fn locale_cmp(a: &str, b: &str) -> Ordering {
    COLLATOR
        .with(|collator| collator.borrow_mut().collate(a, b))
        .then_with(|| a.cmp(b))
}

thread_local! {
    // `collate` needs `&mut self` for its scratch buffers.
    static COLLATOR: RefCell<Collator> = RefCell::new(Collator::default());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{scenario_users, user};

    fn emails(view: &[&User]) -> Vec<String> {
        view.iter().map(|u| u.email.clone()).collect()
    }

    fn sample() -> Vec<User> {
        vec![
            user("1@x", "Émile", "Zola", "France"),
            user("2@x", "amy", "Ortiz", "Spain"),
            user("3@x", "Bob", "Ávila", "Finland"),
            user("4@x", "Zed", "berg", "Ireland"),
            user("5@x", "Ana", "Ortiz", "france"),
            user("6@x", "Ola", "Nordmann", "Norway"),
        ]
    }

    #[test]
    fn test_no_filter_no_sort_is_identity() {
        let records = sample();
        let view = derive_view(&records, None, SortMode::None);
        assert_eq!(emails(&view), vec!["1@x", "2@x", "3@x", "4@x", "5@x", "6@x"]);
    }

    #[test]
    fn test_empty_filter_means_no_filter() {
        let records = sample();
        let view = derive_view(&records, Some(""), SortMode::None);
        assert_eq!(view.len(), records.len());
    }

    #[test]
    fn test_filter_is_case_insensitive_ordered_subsequence() {
        let records = sample();
        let view = derive_view(&records, Some("FRAN"), SortMode::None);
        assert_eq!(emails(&view), vec!["1@x", "5@x"]);

        let view = derive_view(&records, Some("land"), SortMode::None);
        assert_eq!(emails(&view), vec!["3@x", "4@x"]);
    }

    #[test]
    fn test_filter_with_no_match_is_empty() {
        let records = sample();
        assert!(derive_view(&records, Some("atlantis"), SortMode::None).is_empty());
    }

    #[test]
    fn test_sorted_views_follow_fixed_orders() {
        let records = sample();
        let expected = [
            // Finland, france, France, Ireland, Norway, Spain
            (SortMode::Country, ["3@x", "5@x", "1@x", "4@x", "6@x", "2@x"]),
            (SortMode::Name, ["2@x", "5@x", "3@x", "1@x", "6@x", "4@x"]),
            (SortMode::Last, ["3@x", "4@x", "6@x", "2@x", "5@x", "1@x"]),
        ];
        for (mode, order) in expected {
            let view = derive_view(&records, None, mode);
            assert_eq!(emails(&view), order, "{mode:?}");
        }
    }

    #[test]
    fn test_mixed_script_last_name_sort() {
        let records = vec![
            user("ua1@x", "Олег", "Коваленко", "Ukraine"),
            user("ir@x", "Kian", "احمدی", "Iran"),
            user("de@x", "Jonas", "Müller", "Germany"),
            user("ua2@x", "Ганна", "Ґудзь", "Ukraine"),
            user("dk@x", "Ida", "Ørsted", "Denmark"),
            user("rs@x", "Ђорђе", "Јовановић", "Serbia"),
            user("ua3@x", "Євген", "Дорошенко", "Ukraine"),
        ];
        let view = derive_view(&records, None, SortMode::Last);
        // Latin, then Cyrillic, then Arabic script
        assert_eq!(
            emails(&view),
            vec!["de@x", "dk@x", "ua2@x", "ua3@x", "rs@x", "ua1@x", "ir@x"]
        );
    }

    #[test]
    fn test_cyrillic_and_persian_letters_sort_alphabetically() {
        let pairs = [
            ("Їжак", "Київ"),
            ("Євген", "Жанна"),
            ("Ґанна", "Дарина"),
            ("Ђорђе", "Жика"),
            ("Јована", "Коста"),
            ("پریا", "تینا"),
            ("چیستا", "حسن"),
            ("ژیلا", "سارا"),
            ("کیان", "لیلا"),
            ("گلاره", "لیلا"),
            ("مریم", "یاسمن"),
        ];
        for (a, b) in pairs {
            assert_eq!(locale_cmp(a, b), Ordering::Less, "{a} < {b}");
            assert_eq!(locale_cmp(b, a), Ordering::Greater, "{b} > {a}");
        }
    }

    #[test]
    fn test_latin_letters_with_marks_sort_by_base_letter() {
        let pairs = [
            ("Aaron", "Åsa"),
            ("Åsa", "Bo"),
            ("Øystein", "Per"),
            ("Strasse", "Straße"),
            ("Straße", "Strasser"),
        ];
        for (a, b) in pairs {
            assert_eq!(locale_cmp(a, b), Ordering::Less, "{a} < {b}");
        }
    }

    #[test]
    fn test_sort_is_idempotent() {
        let records = sample();
        for mode in [SortMode::Country, SortMode::Name, SortMode::Last] {
            let once: Vec<User> = derive_view(&records, None, mode).into_iter().cloned().collect();
            let twice = derive_view(&once, None, mode);
            assert_eq!(emails(&twice), once.iter().map(|u| u.email.clone()).collect::<Vec<_>>());
        }
    }

    #[test]
    fn test_sort_does_not_touch_input() {
        let records = sample();
        let before = records.clone();
        let _ = derive_view(&records, Some("a"), SortMode::Name);
        assert_eq!(records, before);
    }

    #[test]
    fn test_accents_and_case_sort_with_base_letter() {
        let records = sample();
        let view = derive_view(&records, None, SortMode::Name);
        // amy, Ana, Bob, Émile, Ola, Zed
        assert_eq!(emails(&view), vec!["2@x", "5@x", "3@x", "1@x", "6@x", "4@x"]);

        let view = derive_view(&records, None, SortMode::Last);
        // Ávila, berg, Nordmann, Ortiz, Ortiz (stable), Zola
        assert_eq!(emails(&view), vec!["3@x", "4@x", "6@x", "2@x", "5@x", "1@x"]);
    }

    #[test]
    fn test_country_ties_keep_fetched_order() {
        let records = sample();
        let view = derive_view(&records, Some("fran"), SortMode::Country);
        // "France" vs "france": lowercase first at the case level
        assert_eq!(emails(&view), vec!["5@x", "1@x"]);
    }

    #[test]
    fn test_locale_cmp_levels() {
        assert_eq!(locale_cmp("a", "B"), Ordering::Less);
        assert_eq!(locale_cmp("é", "f"), Ordering::Less);
        assert_eq!(locale_cmp("e", "é"), Ordering::Less);
        assert_eq!(locale_cmp("a", "A"), Ordering::Less);
        assert_eq!(locale_cmp("Straße", "Strasse"), Ordering::Greater);
        assert_eq!(locale_cmp("same", "same"), Ordering::Equal);
    }

    #[test]
    fn test_toggle_country_cycle() {
        assert_eq!(SortMode::None.toggle_country(), SortMode::Country);
        assert_eq!(SortMode::Country.toggle_country(), SortMode::None);
        assert_eq!(SortMode::Name.toggle_country(), SortMode::Country);
        assert_eq!(SortMode::Last.toggle_country(), SortMode::Country);
    }

    #[test]
    fn test_scenario_filter_and_name_sort() {
        let records = scenario_users();
        let view = derive_view(&records, Some("ital"), SortMode::None);
        assert_eq!(emails(&view), vec!["b@x"]);

        let view = derive_view(&records, None, SortMode::Name);
        assert_eq!(emails(&view), vec!["b@x", "a@x"]);
    }
}
