use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

/// Contiguous, inclusive index range over the ordered category sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CategoryWindow {
    pub start_index: usize,
    pub end_index: usize,
}

impl CategoryWindow {
    /// Number of categories covered; always at least one.
    #[must_use]
    pub fn size(self) -> usize {
        self.end_index - self.start_index + 1
    }

    #[must_use]
    pub fn contains(self, index: usize) -> bool {
        index >= self.start_index && index <= self.end_index
    }
}

/// Maps scroll position and visible fraction onto a category window.
///
/// Returns `None` when there are no categories. Otherwise
/// `start_index + size - 1 < total_category_count` and `size >= 1` hold for
/// every `ratio`/`thumb_ratio`, including out-of-range and non-finite input.
#[must_use]
pub fn compute_window(
    total_category_count: usize,
    ratio: f64,
    thumb_ratio: f64,
) -> Option<CategoryWindow> {
    if total_category_count == 0 {
        return None;
    }
    let total = total_category_count as f64;
    let thumb_ratio = if thumb_ratio.is_finite() {
        thumb_ratio.clamp(0.0, 1.0)
    } else {
        1.0
    };
    let ratio = if ratio.is_finite() {
        ratio.clamp(0.0, 1.0)
    } else {
        0.0
    };

    let window_size = ((thumb_ratio * total).round() as usize).clamp(1, total_category_count);
    let max_start = total_category_count - window_size;
    let start_index = ((ratio * max_start as f64).round() as usize).min(max_start);

    Some(CategoryWindow {
        start_index,
        end_index: start_index + window_size - 1,
    })
}

/// Builds the ordered, deduplicated category sequence (first occurrence wins).
#[must_use]
pub fn ordered_categories<T, K>(records: &[T], category_key_of: K) -> IndexSet<String>
where
    K: Fn(&T) -> Option<String>,
{
    records.iter().filter_map(category_key_of).collect()
}

/// Keeps records whose category falls inside `window`, in original order.
///
/// Records without a key, or whose key is not part of `categories`, are dropped.
#[must_use]
pub fn filter_records<T, K>(
    records: &[T],
    categories: &IndexSet<String>,
    window: CategoryWindow,
    category_key_of: K,
) -> Vec<T>
where
    T: Clone,
    K: Fn(&T) -> Option<String>,
{
    records
        .iter()
        .filter(|record| {
            category_key_of(*record)
                .and_then(|key| categories.get_index_of(&key))
                .is_some_and(|index| window.contains(index))
        })
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{CategoryWindow, compute_window, filter_records, ordered_categories};

    #[test]
    fn window_size_follows_thumb_ratio() {
        let window = compute_window(14, 0.0, 9.0 / 14.0).expect("window");
        assert_eq!(
            window,
            CategoryWindow {
                start_index: 0,
                end_index: 8
            }
        );
        assert_eq!(window.size(), 9);

        let window = compute_window(14, 1.0, 9.0 / 14.0).expect("window");
        assert_eq!(window.start_index, 5);
        assert_eq!(window.end_index, 13);
    }

    #[test]
    fn tiny_thumb_ratio_still_shows_one_category() {
        let window = compute_window(50, 0.5, 1e-9).expect("window");
        assert_eq!(window.size(), 1);
        assert_eq!(window.start_index, 25);
    }

    #[test]
    fn empty_category_set_has_no_window() {
        assert_eq!(compute_window(0, 0.3, 0.5), None);
    }

    #[test]
    fn ordered_categories_dedupe_in_first_seen_order() {
        let records = ["b", "a", "b", "c", "a"];
        let categories = ordered_categories(&records, |r| Some((*r).to_owned()));
        let keys: Vec<&str> = categories.iter().map(String::as_str).collect();
        assert_eq!(keys, vec!["b", "a", "c"]);
    }

    #[test]
    fn filter_preserves_record_order() {
        let records = [("a", 1), ("b", 2), ("a", 3), ("c", 4), ("b", 5)];
        let categories = ordered_categories(&records, |r| Some(r.0.to_owned()));
        let window = CategoryWindow {
            start_index: 0,
            end_index: 1,
        };
        let filtered = filter_records(&records, &categories, window, |r| Some(r.0.to_owned()));
        assert_eq!(filtered, vec![("a", 1), ("b", 2), ("a", 3), ("b", 5)]);
    }
}
