use std::collections::VecDeque;

use crate::color::Color;
use crate::config::RECENT_COLORS_LIMIT;

/// Recently used colors, most recent first, without duplicates
#[derive(Debug, Clone)]
pub struct RecentColors {
    colors: VecDeque<Color>,
    limit: usize,
}

impl Default for RecentColors {
    fn default() -> Self {
        Self::new(RECENT_COLORS_LIMIT)
    }
}

impl RecentColors {
    pub fn new(limit: usize) -> Self {
        Self {
            colors: VecDeque::with_capacity(limit),
            limit,
        }
    }

    /// Move `color` to the front. Transparent is never recorded.
    pub fn push(&mut self, color: Color) {
        if color.is_transparent() {
            return;
        }
        self.colors.retain(|&c| c != color);
        self.colors.push_front(color);
        self.colors.truncate(self.limit);
    }

    pub fn iter(&self) -> impl Iterator<Item = Color> + '_ {
        self.colors.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_most_recent_first_without_duplicates() {
        let mut recent = RecentColors::default();
        recent.push(Color::RED);
        recent.push(Color::GREEN);
        recent.push(Color::RED);

        let colors: Vec<_> = recent.iter().collect();
        assert_eq!(colors, vec![Color::RED, Color::GREEN]);
    }

    #[test]
    fn test_capped_at_limit() {
        let mut recent = RecentColors::default();
        for i in 0..20u8 {
            recent.push(Color::rgb(i, i, i));
        }
        assert_eq!(recent.len(), RECENT_COLORS_LIMIT);
        assert_eq!(recent.iter().next(), Some(Color::rgb(19, 19, 19)));
    }

    #[test]
    fn test_transparent_is_ignored() {
        let mut recent = RecentColors::default();
        recent.push(Color::Transparent);
        assert!(recent.is_empty());
    }
}
