use serde::Deserialize;

/// Birth and death year of one figure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Lifespan {
    pub birth: i32,
    pub death: i32,
}

impl Lifespan {
    pub fn new(birth: i32, death: i32) -> Self {
        Self { birth, death }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlapResult {
    NoOverlap,
    Overlap(u32),
}

impl OverlapResult {
    /// Whether the overlap falls inside the inclusive `[min, max]` window.
    pub fn within(self, min: u32, max: u32) -> bool {
        match self {
            Self::Overlap(years) => min <= years && years <= max,
            Self::NoOverlap => false,
        }
    }
}

/// What to report when the younger figure dies before the older one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InnerOverlapPolicy {
    /// Report zero years, as every published dataset so far has.
    #[default]
    Zero,
    /// Report the younger figure's whole lifespan.
    YoungerLifespan,
}

/// Order two lifespans older-first: ascending birth, then ascending death.
///
/// The death tie-break makes figures born in the same year resolve to an
/// outer overlap regardless of argument order.
pub fn older_first(a: Lifespan, b: Lifespan) -> (Lifespan, Lifespan) {
    if (b.birth, b.death) < (a.birth, a.death) {
        (b, a)
    } else {
        (a, b)
    }
}

/// Years during which both figures were alive.
///
/// Touching lifespans (`younger.birth == older.death`) count as no overlap.
pub fn overlap(a: Lifespan, b: Lifespan, policy: InnerOverlapPolicy) -> OverlapResult {
    let (older, younger) = older_first(a, b);

    if younger.birth >= older.death {
        return OverlapResult::NoOverlap;
    }

    let years = if younger.death < older.death {
        match policy {
            InnerOverlapPolicy::Zero => 0,
            InnerOverlapPolicy::YoungerLifespan => {
                i64::from(younger.death) - i64::from(younger.birth)
            }
        }
    } else {
        i64::from(older.death) - i64::from(younger.birth)
    };

    // Negative spans only come from records whose death precedes birth.
    OverlapResult::Overlap(u32::try_from(years.max(0)).unwrap_or(u32::MAX))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const ZERO: InnerOverlapPolicy = InnerOverlapPolicy::Zero;

    #[test]
    fn test_outer_overlap() {
        let a = Lifespan::new(100, 160);
        let b = Lifespan::new(150, 220);
        assert_eq!(overlap(a, b, ZERO), OverlapResult::Overlap(10));
    }

    #[test]
    fn test_inner_overlap_reports_zero() {
        let a = Lifespan::new(100, 200);
        let b = Lifespan::new(150, 180);
        assert_eq!(overlap(a, b, ZERO), OverlapResult::Overlap(0));
    }

    #[test]
    fn test_inner_overlap_younger_lifespan_policy() {
        let a = Lifespan::new(100, 200);
        let b = Lifespan::new(150, 180);
        assert_eq!(
            overlap(a, b, InnerOverlapPolicy::YoungerLifespan),
            OverlapResult::Overlap(30)
        );
    }

    #[test]
    fn test_touching_lifespans_do_not_overlap() {
        let a = Lifespan::new(100, 150);
        let b = Lifespan::new(150, 220);
        assert_eq!(overlap(a, b, ZERO), OverlapResult::NoOverlap);
    }

    #[test]
    fn test_disjoint_lifespans() {
        let socrates = Lifespan::new(-470, -399);
        let caesar = Lifespan::new(-100, -44);
        assert_eq!(overlap(socrates, caesar, ZERO), OverlapResult::NoOverlap);
    }

    #[test]
    fn test_bce_overlap() {
        let socrates = Lifespan::new(-470, -399);
        let plato = Lifespan::new(-428, -348);
        assert_eq!(overlap(plato, socrates, ZERO), OverlapResult::Overlap(29));
    }

    #[test]
    fn test_same_birth_year_is_outer() {
        let a = Lifespan::new(100, 150);
        let b = Lifespan::new(100, 200);
        assert_eq!(overlap(a, b, ZERO), OverlapResult::Overlap(50));
        assert_eq!(overlap(b, a, ZERO), OverlapResult::Overlap(50));
    }

    #[test]
    fn test_within_window() {
        assert!(OverlapResult::Overlap(15).within(15, 20));
        assert!(OverlapResult::Overlap(20).within(15, 20));
        assert!(!OverlapResult::Overlap(21).within(15, 20));
        assert!(!OverlapResult::NoOverlap.within(0, u32::MAX));
    }

    fn lifespan() -> impl Strategy<Value = Lifespan> {
        (-3000i32..2000, 1i32..110).prop_map(|(birth, age)| Lifespan::new(birth, birth + age))
    }

    proptest! {
        #[test]
        fn overlap_is_order_independent(a in lifespan(), b in lifespan()) {
            prop_assert_eq!(overlap(a, b, ZERO), overlap(b, a, ZERO));
            let alt = InnerOverlapPolicy::YoungerLifespan;
            prop_assert_eq!(overlap(a, b, alt), overlap(b, a, alt));
        }

        #[test]
        fn born_after_death_never_overlaps(a in lifespan(), gap in 0i32..500, age in 1i32..110) {
            let b = Lifespan::new(a.death + gap, a.death + gap + age);
            prop_assert_eq!(overlap(a, b, ZERO), OverlapResult::NoOverlap);
        }

        #[test]
        fn younger_dying_first_is_zero(a in lifespan(), offset in 0i32..110) {
            prop_assume!(a.death - a.birth >= 2);
            let birth = a.birth + 1 + offset % (a.death - a.birth - 1);
            let b = Lifespan::new(birth, a.death - 1);
            prop_assume!(b.birth < b.death);
            prop_assert_eq!(overlap(a, b, ZERO), OverlapResult::Overlap(0));
        }
    }
}
