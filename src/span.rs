use serde::{Deserialize, Serialize};

/// Closed interval `[start, start + extent]` covered by a hitbox on one axis.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    start: i32,
    end: i32,
}

impl Span {
    pub fn new(start: i32, extent: i32) -> Self {
        Self {
            start,
            end: start.wrapping_add(extent),
        }
    }

    pub fn start(&self) -> i32 { self.start }

    pub fn end(&self) -> i32 { self.end }

    /// Inclusive on both bounds. A negative extent gives `end < start`,
    /// so nothing is contained.
    pub fn contains(&self, value: i32) -> bool {
        value >= self.start && value <= self.end
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds_are_inclusive() {
        let span = Span::new(5, 10);
        assert_eq!(span.end(), 15);
        assert!(span.contains(5));
        assert!(span.contains(15));
        assert!(!span.contains(4));
        assert!(!span.contains(16));
    }

    #[test]
    fn zero_extent_holds_only_its_start() {
        let span = Span::new(-3, 0);
        assert!(span.contains(-3));
        assert!(!span.contains(-2));
        assert!(!span.contains(-4));
    }

    #[test]
    fn negative_extent_contains_nothing() {
        let span = Span::new(10, -4);
        assert_eq!(span.end(), 6);
        for v in 0..20 {
            assert!(!span.contains(v), "{v} should not be inside an inverted span");
        }
    }

    #[test]
    fn end_wraps_on_overflow() {
        let span = Span::new(i32::MAX, 1);
        assert_eq!(span.end(), i32::MIN);
        assert!(!span.contains(i32::MAX));
    }
}
