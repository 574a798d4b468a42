use crate::shared::constants::QUESTIONS_PER_PAGE;

/// Returns the 1-indexed `page` of `items`, `QUESTIONS_PER_PAGE` records at a time.
///
/// Pages past the end, and any page below 1, come back empty.
pub fn paginate<T: Clone>(items: &[T], page: i64) -> Vec<T> {
    if page < 1 {
        return Vec::new();
    }

    let start = usize::try_from(page - 1)
        .ok()
        .and_then(|p| p.checked_mul(QUESTIONS_PER_PAGE))
        .unwrap_or(usize::MAX);

    items
        .iter()
        .skip(start)
        .take(QUESTIONS_PER_PAGE)
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_page() {
        let items: Vec<i32> = (1..=25).collect();
        assert_eq!(paginate(&items, 1), (1..=10).collect::<Vec<_>>());
    }

    #[test]
    fn test_last_partial_page() {
        let items: Vec<i32> = (1..=25).collect();
        assert_eq!(paginate(&items, 3), vec![21, 22, 23, 24, 25]);
    }

    #[test]
    fn test_out_of_range_is_empty() {
        let items: Vec<i32> = (1..=25).collect();
        assert!(paginate(&items, 4).is_empty());
        assert!(paginate(&items, 0).is_empty());
        assert!(paginate(&items, -3).is_empty());
        assert!(paginate(&items, i64::MAX).is_empty());
        assert!(paginate::<i32>(&[], 1).is_empty());
    }

    #[test]
    fn test_pages_cover_prefix() {
        let items: Vec<i32> = (1..=47).collect();
        for k in 1..=6 {
            let covered: Vec<i32> = (1..=k).flat_map(|p| paginate(&items, p)).collect();
            let expected = items.len().min(k as usize * QUESTIONS_PER_PAGE);
            assert_eq!(covered, items[..expected].to_vec());
            assert!(paginate(&items, k).len() <= QUESTIONS_PER_PAGE);
        }
    }
}
