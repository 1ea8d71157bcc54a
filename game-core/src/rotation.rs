use game_types::Category;

/// Next presenter, wrapping around to the first player.
///
/// `total` must be non-zero; a roster always has at least two players.
pub fn next_player_index(current: usize, total: usize) -> usize {
    (current + 1) % total
}

/// Category following `current` in `available`, wrapping around.
/// A category missing from the list restarts the rotation at the first entry.
pub fn next_category(current: Category, available: &[Category]) -> Option<Category> {
    if available.is_empty() {
        return None;
    }
    let next = match available.iter().position(|&c| c == current) {
        Some(index) => (index + 1) % available.len(),
        None => 0,
    };
    available.get(next).copied()
}

/// Category for a 1-based round number, derived purely from the round index
pub fn category_for_round(round_number: u32, available: &[Category]) -> Option<Category> {
    if available.is_empty() {
        return None;
    }
    let index = (round_number.saturating_sub(1) as usize) % available.len();
    available.get(index).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_player_index_wraps() {
        assert_eq!(next_player_index(0, 3), 1);
        assert_eq!(next_player_index(1, 3), 2);
        assert_eq!(next_player_index(2, 3), 0);
        assert_eq!(next_player_index(0, 1), 0);
    }

    #[test]
    fn test_next_category_rotation() {
        let all = Category::ALL;
        assert_eq!(next_category(Category::Draw, &all), Some(Category::Explain));
        assert_eq!(next_category(Category::Explain, &all), Some(Category::Signal));
        assert_eq!(next_category(Category::Signal, &all), Some(Category::Draw));

        let subset = [Category::Explain, Category::Signal];
        assert_eq!(next_category(Category::Signal, &subset), Some(Category::Explain));
        assert_eq!(next_category(Category::Draw, &subset), Some(Category::Explain));
        assert_eq!(next_category(Category::Draw, &[]), None);
    }

    #[test]
    fn test_category_for_round() {
        let all = Category::ALL;
        assert_eq!(category_for_round(1, &all), Some(Category::Draw));
        assert_eq!(category_for_round(2, &all), Some(Category::Explain));
        assert_eq!(category_for_round(3, &all), Some(Category::Signal));
        assert_eq!(category_for_round(4, &all), Some(Category::Draw));
        assert_eq!(category_for_round(1, &[]), None);
    }
}
