//! Bounded sweeps for charting when only one quantity is known.
//!
//! Candidates are produced lazily from a fixed grid; samples that hit a
//! formula domain guard or fall outside the display window are dropped and
//! the sweep carries on.

use std::iter::FusedIterator;

use tracing::trace;

use super::format::{format_multiplier, format_percentage, format_years};
use super::formulas::{cagr_from, multiplier_from};
use super::types::{ChartSpec, ProjectionPoint, Quantity};

const CAGR_SWEEP_YEARS: u32 = 30;
const MULTIPLIER_SWEEP_YEARS: u32 = 50;
const MAX_CAGR_SWEEP_MULTIPLIER: f64 = 1000.0;
const MULTIPLIER_SWEEP_CAGR_WINDOW: (f64, f64) = (-50.0, 100.0);

const YEARS_SWEEP_CAGR_START: f64 = -20.0;
const YEARS_SWEEP_CAGR_STEP: f64 = 0.5;
/// -20% to 50% inclusive in half-point steps.
const YEARS_SWEEP_STEPS: u32 = 141;
const YEARS_SWEEP_MULTIPLIER_WINDOW: (f64, f64) = (0.1, 100.0);

/// Ordered, finite sweep over the quantities complementary to `fixed`.
///
/// Consumed once; calling [`project`] again with the same arguments yields
/// the same sequence.
#[derive(Debug, Clone)]
pub struct Projection {
    fixed: Quantity,
    value: f64,
    step: u32,
}

pub fn project(value: f64, fixed: Quantity) -> Projection {
    Projection {
        fixed,
        value,
        step: 0,
    }
}

impl Projection {
    fn steps(&self) -> u32 {
        match self.fixed {
            Quantity::Cagr => CAGR_SWEEP_YEARS,
            Quantity::Multiplier => MULTIPLIER_SWEEP_YEARS,
            Quantity::Years => YEARS_SWEEP_STEPS,
        }
    }

    fn sample(&self, step: u32) -> Option<ProjectionPoint> {
        match self.fixed {
            Quantity::Cagr => {
                let years = f64::from(step + 1);
                let multiplier = multiplier_from(self.value, years).ok()?;
                (multiplier <= MAX_CAGR_SWEEP_MULTIPLIER).then(|| ProjectionPoint {
                    x: years,
                    y: multiplier,
                    label: format!("{}: {}", format_years(years), format_multiplier(multiplier)),
                })
            }
            Quantity::Multiplier => {
                let years = f64::from(step + 1);
                let cagr = cagr_from(self.value, years).ok()? * 100.0;
                let (low, high) = MULTIPLIER_SWEEP_CAGR_WINDOW;
                (low..=high).contains(&cagr).then(|| ProjectionPoint {
                    x: years,
                    y: cagr,
                    label: format!(
                        "{}: {}",
                        format_years(years),
                        format_percentage(cagr / 100.0)
                    ),
                })
            }
            Quantity::Years => {
                let cagr = YEARS_SWEEP_CAGR_START + f64::from(step) * YEARS_SWEEP_CAGR_STEP;
                let multiplier = multiplier_from(cagr, self.value).ok()?;
                let (low, high) = YEARS_SWEEP_MULTIPLIER_WINDOW;
                (low..=high).contains(&multiplier).then(|| ProjectionPoint {
                    x: cagr,
                    y: multiplier,
                    label: format!(
                        "{}: {}",
                        format_percentage(cagr / 100.0),
                        format_multiplier(multiplier)
                    ),
                })
            }
        }
    }
}

impl Iterator for Projection {
    type Item = ProjectionPoint;

    fn next(&mut self) -> Option<Self::Item> {
        while self.step < self.steps() {
            let step = self.step;
            self.step += 1;
            match self.sample(step) {
                Some(point) => return Some(point),
                None => trace!(fixed = %self.fixed, step, "projection sample skipped"),
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.steps().saturating_sub(self.step) as usize))
    }
}

impl FusedIterator for Projection {}

/// Title and axes for a sweep holding `fixed` at `value`.
pub fn chart_spec(value: f64, fixed: Quantity) -> ChartSpec {
    match fixed {
        Quantity::Cagr => ChartSpec {
            title: format!(
                "Investment Growth with {} CAGR",
                format_percentage(value / 100.0)
            ),
            x_axis_name: "Years",
            y_axis_name: "Multiplier",
            x_axis_suffix: "",
            y_axis_suffix: "×",
        },
        Quantity::Multiplier => ChartSpec {
            title: format!("CAGR Required for {} Growth", format_multiplier(value)),
            x_axis_name: "Years",
            y_axis_name: "CAGR (%)",
            x_axis_suffix: "",
            y_axis_suffix: "%",
        },
        Quantity::Years => ChartSpec {
            title: format!("Growth Potential over {}", format_years(value)),
            x_axis_name: "CAGR (%)",
            y_axis_name: "Multiplier",
            x_axis_suffix: "%",
            y_axis_suffix: "×",
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::{prop_assert, proptest};

    #[test]
    fn cagr_sweep_stays_inside_bounds() {
        let points: Vec<_> = project(20.0, Quantity::Cagr).collect();
        assert_eq!(points.len(), 30);
        for p in &points {
            assert!((1.0..=30.0).contains(&p.x));
            assert!(p.y <= 1000.0);
        }
        assert_eq!(points[0].x, 1.0);
        assert_eq!(points[0].label, "1 year: 1.20×");
        assert_eq!(points[1].label, "2 years: 1.44×");
    }

    #[test]
    fn steep_cagr_sweep_drops_points_past_one_thousand() {
        let points: Vec<_> = project(100.0, Quantity::Cagr).collect();
        // 2^9 = 512, 2^10 = 1024
        assert_eq!(points.len(), 9);
        assert!(points.iter().all(|p| p.y <= 1000.0));
    }

    #[test]
    fn total_loss_cagr_yields_empty_sweep() {
        assert_eq!(project(-100.0, Quantity::Cagr).count(), 0);
    }

    #[test]
    fn multiplier_sweep_keeps_cagr_window() {
        let points: Vec<_> = project(2.0, Quantity::Multiplier).collect();
        assert_eq!(points.len(), 50);
        assert_eq!(points[0].y, 100.0);
        assert_eq!(points[0].label, "1 year: 100.00%");
        for p in &points {
            assert!((-50.0..=100.0).contains(&p.y));
        }
    }

    #[test]
    fn multiplier_sweep_skips_rates_above_window() {
        // 10x in one year is 900%, in two years ~216%, three ~115%, four ~78%.
        let points: Vec<_> = project(10.0, Quantity::Multiplier).collect();
        assert_eq!(points.first().map(|p| p.x), Some(4.0));
        assert_eq!(points.len(), 47);
    }

    #[test]
    fn non_positive_multiplier_sweep_is_empty_not_an_error() {
        assert_eq!(project(0.0, Quantity::Multiplier).count(), 0);
    }

    #[test]
    fn years_sweep_walks_half_point_steps() {
        let points: Vec<_> = project(1.0, Quantity::Years).collect();
        assert_eq!(points.len(), 141);
        assert_eq!(points[0].x, -20.0);
        assert_eq!(points[1].x, -19.5);
        assert_eq!(points.last().map(|p| p.x), Some(50.0));
        assert_eq!(points[0].label, "-20.00%: 0.80×");
    }

    #[test]
    fn years_sweep_filters_multiplier_window() {
        let points: Vec<_> = project(30.0, Quantity::Years).collect();
        assert!(!points.is_empty());
        assert!(points.len() < 141);
        for p in &points {
            assert!((0.1..=100.0).contains(&p.y), "{p:?}");
        }
    }

    #[test]
    fn reinvocation_reproduces_sequence() {
        let first: Vec<_> = project(7.5, Quantity::Years).collect();
        let second: Vec<_> = project(7.5, Quantity::Years).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn exhausted_projection_stays_exhausted() {
        let mut sweep = project(5.0, Quantity::Cagr);
        while sweep.next().is_some() {}
        assert!(sweep.next().is_none());
        assert_eq!(sweep.size_hint(), (0, Some(0)));
    }

    #[test]
    fn chart_titles_follow_fixed_quantity() {
        assert_eq!(
            chart_spec(12.0, Quantity::Cagr).title,
            "Investment Growth with 12.00% CAGR"
        );
        assert_eq!(
            chart_spec(3.0, Quantity::Multiplier).title,
            "CAGR Required for 3.00× Growth"
        );
        let years = chart_spec(1.0, Quantity::Years);
        assert_eq!(years.title, "Growth Potential over 1 year");
        assert_eq!(years.x_axis_name, "CAGR (%)");
        assert_eq!(years.x_axis_suffix, "%");
    }

    proptest! {
        #![proptest_config(proptest::test_runner::Config::with_cases(48))]

        #[test]
        fn prop_cagr_sweep_never_exceeds_limits(cagr_bp in -10_000i32..50_000) {
            let cagr = cagr_bp as f64 / 100.0;
            for p in project(cagr, Quantity::Cagr) {
                prop_assert!((1.0..=30.0).contains(&p.x));
                prop_assert!(p.y <= 1000.0);
            }
        }

        #[test]
        fn prop_years_sweep_x_is_ascending(years in 1u32..=1000) {
            let xs: Vec<f64> = project(years as f64, Quantity::Years).map(|p| p.x).collect();
            prop_assert!(xs.windows(2).all(|w| w[0] < w[1]));
        }
    }
}
