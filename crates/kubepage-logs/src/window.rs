use crate::error::{LogsError, LogsResult};

/// Check that a requested page size is usable and convert it to a length
pub fn validate_page_size(count: i64) -> LogsResult<usize> {
    if count <= 0 {
        return Err(LogsError::InvalidPageSize { count });
    }
    Ok(usize::try_from(count).unwrap_or(usize::MAX))
}

/// Select the page of `lines` starting at `start_index` holding at most
/// `count` entries.
///
/// A negative `start_index`, or one greater than `lines.len()`, selects the
/// last page. The last page starts at the greatest multiple of `count` not
/// above `lines.len()`, so pages line up with those reached by stepping
/// forward from zero. When the length is an exact multiple of `count` that
/// page is empty.
///
/// Returns the index of the first selected line together with the lines.
pub fn select_window<T>(lines: &[T], start_index: i64, count: i64) -> LogsResult<(usize, &[T])> {
    let page_size = validate_page_size(count)?;
    let len = lines.len();

    let requested = match usize::try_from(start_index) {
        Ok(start) if start <= len => Some(start),
        // negative or past the end
        _ => None,
    };

    let start = requested.unwrap_or((len / page_size) * page_size);
    let end = start.saturating_add(page_size).min(len);

    Ok((start, &lines[start..end]))
}

#[cfg(test)]
mod tests {
    use super::*;

    const LETTERS: [&str; 10] = ["a", "b", "c", "d", "e", "f", "g", "h", "i", "j"];

    #[test]
    fn test_negative_start_selects_aligned_last_page() {
        let (start, window) = select_window(&LETTERS, -1, 4).unwrap();
        assert_eq!(start, 8);
        assert_eq!(window, ["i", "j"]);
    }

    #[test]
    fn test_start_within_range() {
        let (start, window) = select_window(&LETTERS, 3, 4).unwrap();
        assert_eq!(start, 3);
        assert_eq!(window, ["d", "e", "f", "g"]);
    }

    #[test]
    fn test_window_clipped_at_end() {
        let (start, window) = select_window(&LETTERS, 9, 4).unwrap();
        assert_eq!(start, 9);
        assert_eq!(window, ["j"]);
    }

    #[test]
    fn test_start_past_end_selects_last_page() {
        let (start, window) = select_window(&LETTERS, 20, 4).unwrap();
        assert_eq!(start, 8);
        assert_eq!(window, ["i", "j"]);

        let (start, _) = select_window(&LETTERS, i64::MAX, 4).unwrap();
        assert_eq!(start, 8);
    }

    #[test]
    fn test_start_at_len_is_not_out_of_range() {
        let (start, window) = select_window(&LETTERS, 10, 4).unwrap();
        assert_eq!(start, 10);
        assert!(window.is_empty());
    }

    #[test]
    fn test_last_page_empty_when_len_is_multiple_of_count() {
        let (start, window) = select_window(&LETTERS, -1, 5).unwrap();
        assert_eq!(start, 10);
        assert!(window.is_empty());
    }

    #[test]
    fn test_empty_log() {
        let empty: [&str; 0] = [];
        for start_index in [-7, -1, 0, 1, 100] {
            let (start, window) = select_window(&empty, start_index, 5).unwrap();
            assert_eq!(start, 0);
            assert!(window.is_empty());
        }
    }

    #[test]
    fn test_count_larger_than_log() {
        let (start, window) = select_window(&LETTERS, -1, 50).unwrap();
        assert_eq!(start, 0);
        assert_eq!(window.len(), 10);

        let (start, window) = select_window(&LETTERS, 2, i64::MAX).unwrap();
        assert_eq!(start, 2);
        assert_eq!(window.len(), 8);
    }

    #[test]
    fn test_in_range_window_length() {
        for count in 1..=12 {
            for start_index in 0..=10 {
                let (start, window) = select_window(&LETTERS, start_index, count).unwrap();
                assert_eq!(start as i64, start_index);
                assert_eq!(window.len() as i64, count.min(10 - start_index));
            }
        }
    }

    #[test]
    fn test_out_of_range_start_resolution() {
        for count in 1..=12i64 {
            for start_index in [-100, -2, -1, 11, 12, 1000] {
                let (start, window) = select_window(&LETTERS, start_index, count).unwrap();
                assert_eq!(start as i64, (10 / count) * count);
                assert!(start <= LETTERS.len());
                assert_eq!(&LETTERS[start..start + window.len()], window);
            }
        }
    }

    #[test]
    fn test_selection_is_repeatable() {
        let first = select_window(&LETTERS, -1, 3).unwrap();
        let second = select_window(&LETTERS, -1, 3).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_rejects_non_positive_count() {
        assert!(matches!(
            select_window(&LETTERS, 0, 0),
            Err(LogsError::InvalidPageSize { count: 0 })
        ));
        assert!(matches!(
            select_window(&LETTERS, -1, -3),
            Err(LogsError::InvalidPageSize { count: -3 })
        ));
    }
}
