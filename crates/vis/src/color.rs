//! Dataset colors.

use rand::Rng;
use serde::Serialize;

const CHART_COLORS: [&str; 7] = [
    "rgb(255, 99, 132)",  // red
    "rgb(255, 159, 64)",  // orange
    "rgb(255, 205, 86)",  // yellow
    "rgb(75, 192, 192)",  // green
    "rgb(54, 162, 235)",  // blue
    "rgb(153, 102, 255)", // purple
    "rgb(201, 203, 207)", // grey
];

// Neighbouring datasets skip two table entries so that they don't end up
// with similar hues.
const STEP: usize = 3;

/// A CSS color value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Color(&'static str);

impl Color {
    /// The CSS representation of the color.
    pub fn as_str(&self) -> &'static str {
        self.0
    }
}

/// An endless sequence of colors walking the color table.
///
/// A cursor is seeded once per package and copied for each of the
/// package's charts, so a benchmark has the same color on all of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorCursor {
    index: usize,
}

impl ColorCursor {
    /// Creates a cursor at a random position of the color table.
    pub fn seed<R: Rng + ?Sized>(rng: &mut R) -> ColorCursor {
        Self::starting_at(rng.gen_range(0..=CHART_COLORS.len()))
    }

    /// Creates a cursor at the given position of the color table.
    pub fn starting_at(index: usize) -> ColorCursor {
        Self { index }
    }
}

impl Iterator for ColorCursor {
    type Item = Color;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.index = self.index.wrapping_add(STEP);
        Some(Color(CHART_COLORS[self.index % CHART_COLORS.len()]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn cursor_advances_three_entries() {
        let colors: Vec<&str> = ColorCursor::starting_at(0)
            .take(4)
            .map(|c| c.as_str())
            .collect();

        assert_eq!(
            colors,
            vec![
                "rgb(75, 192, 192)",
                "rgb(201, 203, 207)",
                "rgb(255, 205, 86)",
                "rgb(153, 102, 255)",
            ]
        );
    }

    #[test]
    fn cursor_wraps_around_the_table() {
        let colors: Vec<Color> = ColorCursor::starting_at(7).take(7).collect();
        let expected: Vec<Color> = ColorCursor::starting_at(0).take(7).collect();

        assert_eq!(colors, expected);
    }

    #[test]
    fn same_seed_gives_same_colors() {
        let mut first = StdRng::seed_from_u64(42);
        let mut second = StdRng::seed_from_u64(42);

        for _ in 0..10 {
            let a: Vec<Color> = ColorCursor::seed(&mut first).take(5).collect();
            let b: Vec<Color> = ColorCursor::seed(&mut second).take(5).collect();

            assert_eq!(a, b);
        }
    }

    #[test]
    fn seed_stays_within_the_table() {
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..100 {
            let cursor = ColorCursor::seed(&mut rng);
            assert!(cursor.index <= CHART_COLORS.len());
        }
    }
}
