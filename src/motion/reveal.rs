use std::collections::HashSet;
use std::hash::Hash;

/// Browsers report the crossing ratio with float noise, so a report sitting a
/// hair under its own threshold still counts.
const RATIO_TOLERANCE: f64 = 1e-3;

/// One entry from a visibility observer batch, keyed by an opaque identifier.
#[derive(Clone, Debug, PartialEq)]
pub struct IntersectionReport<K> {
    pub id: K,
    pub is_intersecting: bool,
    pub ratio: f64,
}

impl<K> IntersectionReport<K> {
    pub fn new(id: K, is_intersecting: bool, ratio: f64) -> Self {
        Self {
            id,
            is_intersecting,
            ratio,
        }
    }

    pub fn satisfies(&self, threshold: f64) -> bool {
        self.is_intersecting && self.ratio + RATIO_TOLERANCE >= threshold
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum RevealThreshold {
    Fixed(f64),
    /// `narrow` applies below `breakpoint_px` of viewport width, `wide` at or above it.
    Responsive {
        narrow: f64,
        wide: f64,
        breakpoint_px: f64,
    },
}

impl RevealThreshold {
    /// Resolved once at mount; later resizes keep the first answer.
    pub fn resolve(self, viewport_width: f64) -> f64 {
        match self {
            Self::Fixed(value) => value,
            Self::Responsive {
                narrow,
                wide,
                breakpoint_px,
            } => {
                if viewport_width < breakpoint_px {
                    narrow
                } else {
                    wide
                }
            }
        }
    }
}

/// Identifiers that have been seen in the viewport at least once.
///
/// Only ever grows: a later non-intersecting report for a revealed id is ignored.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RevealSet<K: Eq + Hash> {
    seen: HashSet<K>,
}

impl<K: Eq + Hash> Default for RevealSet<K> {
    fn default() -> Self {
        Self {
            seen: HashSet::new(),
        }
    }
}

impl<K: Eq + Hash> RevealSet<K> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains<Q>(&self, id: &Q) -> bool
    where
        K: std::borrow::Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        self.seen.contains(id)
    }

    /// Folds one observer batch in. Returns how many ids were newly revealed.
    pub fn absorb<I>(&mut self, reports: I, threshold: f64) -> usize
    where
        I: IntoIterator<Item = IntersectionReport<K>>,
    {
        let before = self.seen.len();

        for report in reports {
            if report.satisfies(threshold) {
                self.seen.insert(report.id);
            }
        }

        self.seen.len() - before
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn responsive_threshold_picks_narrow_below_breakpoint() {
        let threshold = RevealThreshold::Responsive {
            narrow: 0.15,
            wide: 0.3,
            breakpoint_px: 768.0,
        };

        assert_eq!(threshold.resolve(390.0), 0.15);
        assert_eq!(threshold.resolve(767.9), 0.15);
        assert_eq!(threshold.resolve(768.0), 0.3);
        assert_eq!(threshold.resolve(1440.0), 0.3);
        assert_eq!(RevealThreshold::Fixed(0.25).resolve(320.0), 0.25);
    }

    #[test]
    fn revealed_ids_are_never_removed() {
        let mut revealed = RevealSet::new();
        let batches = vec![
            vec![
                IntersectionReport::new(1, true, 0.5),
                IntersectionReport::new(2, false, 0.0),
            ],
            vec![IntersectionReport::new(1, false, 0.0)],
            vec![
                IntersectionReport::new(2, true, 0.31),
                IntersectionReport::new(3, true, 0.1),
            ],
            vec![
                IntersectionReport::new(1, false, 0.0),
                IntersectionReport::new(2, false, 0.0),
            ],
        ];

        let mut previous: HashSet<i32> = HashSet::new();
        for batch in batches {
            revealed.absorb(batch, 0.3);
            let current: HashSet<i32> = revealed.seen.clone();
            assert!(current.is_superset(&previous));
            previous = current;
        }

        assert!(revealed.contains(&1));
        assert!(revealed.contains(&2));
        assert!(!revealed.contains(&3));
    }

    #[test]
    fn intersecting_below_threshold_does_not_reveal() {
        let mut revealed = RevealSet::new();

        let added = revealed.absorb([IntersectionReport::new("card", true, 0.1)], 0.3);

        assert_eq!(added, 0);
        assert!(!revealed.contains("card"));
    }

    #[test]
    fn ratio_within_float_noise_of_threshold_reveals() {
        let mut revealed = RevealSet::new();

        revealed.absorb([IntersectionReport::new("card", true, 0.2995)], 0.3);

        assert!(revealed.contains("card"));
    }

    #[test]
    fn duplicate_reports_count_once() {
        let mut revealed = RevealSet::new();

        let added = revealed.absorb(
            [
                IntersectionReport::new("a".to_string(), true, 1.0),
                IntersectionReport::new("a".to_string(), true, 1.0),
            ],
            0.3,
        );

        assert_eq!(added, 1);
        assert!(revealed.contains("a"));
        assert_eq!(
            revealed.absorb([IntersectionReport::new("a".to_string(), true, 1.0)], 0.3),
            0
        );
    }

    #[test]
    fn empty_batch_is_a_no_op() {
        let mut revealed: RevealSet<u32> = RevealSet::new();

        assert_eq!(revealed.absorb(Vec::new(), 0.15), 0);
        assert_eq!(revealed, RevealSet::default());
    }
}
