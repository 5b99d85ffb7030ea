//! Scenario stream parsing and generation.
//!
//! # Format
//!
//! Whitespace-separated tokens:
//!
//! ```text
//! <scenario count>
//! <k> <m>
//! <x1> <y1>
//! ...
//! <xm> <ym>
//! <k> <m>
//! ...
//! ```
//!
//! Tokens after the last declared scenario are ignored.

use std::io::Write;
use std::str::SplitWhitespace;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::RoutingError;
use crate::models::Capacity;
use crate::session::RoutingSession;

/// One routing problem read from the input stream.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    /// Per-trip capacity k.
    pub capacity: Capacity,
    /// Point coordinates in input order.
    pub coords: Vec<(f64, f64)>,
}

impl Scenario {
    /// Opens a fresh routing session holding this scenario's points.
    pub fn session(&self) -> Result<RoutingSession, RoutingError> {
        RoutingSession::with_points(self.capacity, &self.coords)
    }
}

struct Tokens<'a> {
    inner: SplitWhitespace<'a>,
    scenario: usize,
}

impl<'a> Tokens<'a> {
    fn next(&mut self, expected: &'static str) -> Result<&'a str, RoutingError> {
        self.inner.next().ok_or(RoutingError::UnexpectedEof {
            scenario: self.scenario,
            expected,
        })
    }

    fn next_int(&mut self, expected: &'static str) -> Result<i64, RoutingError> {
        let token = self.next(expected)?;
        token.parse().map_err(|_| self.invalid(expected, token))
    }

    fn next_float(&mut self, expected: &'static str) -> Result<f64, RoutingError> {
        let token = self.next(expected)?;
        token.parse().map_err(|_| self.invalid(expected, token))
    }

    fn invalid(&self, expected: &'static str, token: &str) -> RoutingError {
        RoutingError::InvalidToken {
            scenario: self.scenario,
            expected,
            token: token.to_string(),
        }
    }
}

/// Parses every scenario declared in `input`.
///
/// Rejects a capacity below 1, a negative point count, non-numeric or
/// non-finite coordinates, and input that ends early.
///
/// # Examples
///
/// ```
/// use pickup_routing::io::parse_scenarios;
///
/// let scenarios = parse_scenarios("1\n2 3\n1 0\n2 0\n0 1\n").unwrap();
/// assert_eq!(scenarios.len(), 1);
/// assert_eq!(scenarios[0].capacity.get(), 2);
/// assert_eq!(scenarios[0].coords, vec![(1.0, 0.0), (2.0, 0.0), (0.0, 1.0)]);
/// ```
pub fn parse_scenarios(input: &str) -> Result<Vec<Scenario>, RoutingError> {
    let mut tokens = Tokens {
        inner: input.split_whitespace(),
        scenario: 0,
    };

    let count = tokens.next_int("scenario count")?;
    let count = usize::try_from(count)
        .map_err(|_| tokens.invalid("scenario count", &count.to_string()))?;

    let mut scenarios = Vec::new();
    for number in 1..=count {
        tokens.scenario = number;

        let capacity = Capacity::new(tokens.next_int("capacity")?)?;
        let m = tokens.next_int("point count")?;
        let m = usize::try_from(m).map_err(|_| RoutingError::NegativePointCount {
            scenario: number,
            count: m,
        })?;

        let mut coords = Vec::new();
        for _ in 0..m {
            let x = tokens.next_float("x-coordinate")?;
            let y = tokens.next_float("y-coordinate")?;
            if !x.is_finite() || !y.is_finite() {
                return Err(RoutingError::NonFiniteCoordinate { x, y });
            }
            coords.push((x, y));
        }
        scenarios.push(Scenario { capacity, coords });
    }

    Ok(scenarios)
}

/// Writes scenarios in the input format accepted by [`parse_scenarios`].
pub fn write_scenarios<W: Write>(mut out: W, scenarios: &[Scenario]) -> Result<(), RoutingError> {
    writeln!(out, "{}", scenarios.len())?;
    for scenario in scenarios {
        writeln!(out, "{} {}", scenario.capacity.get(), scenario.coords.len())?;
        for &(x, y) in &scenario.coords {
            writeln!(out, "{x:.2} {y:.2}")?;
        }
    }
    out.flush()?;
    Ok(())
}

/// Generates a scenario of `count` points drawn uniformly from the square
/// `[-extent, extent]²`, rounded to two decimals.
///
/// The sign of `extent` is ignored. Returns
/// [`RoutingError::NonFiniteExtent`] for NaN or infinite extents.
///
/// # Examples
///
/// ```
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
/// use pickup_routing::models::Capacity;
/// use pickup_routing::io::random_scenario;
///
/// let mut rng = StdRng::seed_from_u64(7);
/// let s = random_scenario(&mut rng, Capacity::new(3).unwrap(), 12, 50.0).unwrap();
/// assert_eq!(s.coords.len(), 12);
/// assert!(s.coords.iter().all(|&(x, y)| x.abs() <= 50.0 && y.abs() <= 50.0));
/// ```
pub fn random_scenario<R: Rng>(
    rng: &mut R,
    capacity: Capacity,
    count: usize,
    extent: f64,
) -> Result<Scenario, RoutingError> {
    if !extent.is_finite() {
        return Err(RoutingError::NonFiniteExtent(extent));
    }
    let extent = extent.abs();
    let coord = |rng: &mut R| {
        if extent > 0.0 {
            (rng.random_range(-extent..=extent) * 100.0).round() / 100.0
        } else {
            0.0
        }
    };
    let coords = (0..count).map(|_| (coord(&mut *rng), coord(&mut *rng))).collect();
    Ok(Scenario { capacity, coords })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_parse_multiple() {
        let input = "2\n3 2\n1.5 2.5\n-3 4\n1 0\n";
        let scenarios = parse_scenarios(input).expect("valid");
        assert_eq!(scenarios.len(), 2);
        assert_eq!(scenarios[0].capacity.get(), 3);
        assert_eq!(scenarios[0].coords, vec![(1.5, 2.5), (-3.0, 4.0)]);
        assert_eq!(scenarios[1].capacity.get(), 1);
        assert!(scenarios[1].coords.is_empty());
    }

    #[test]
    fn test_parse_zero_scenarios() {
        assert!(parse_scenarios("0").expect("valid").is_empty());
    }

    #[test]
    fn test_parse_ignores_trailing_tokens() {
        let scenarios = parse_scenarios("1 1 1 7 7 garbage").expect("valid");
        assert_eq!(scenarios[0].coords, vec![(7.0, 7.0)]);
    }

    #[test]
    fn test_parse_rejects_zero_capacity() {
        assert!(matches!(
            parse_scenarios("1\n0 1\n1 1"),
            Err(RoutingError::InvalidCapacity(0))
        ));
    }

    #[test]
    fn test_parse_rejects_negative_count() {
        assert!(matches!(
            parse_scenarios("2\n1 0\n2 -1"),
            Err(RoutingError::NegativePointCount {
                scenario: 2,
                count: -1
            })
        ));
    }

    #[test]
    fn test_parse_rejects_bad_token() {
        let err = parse_scenarios("1\n2 1\n1.0 north").expect_err("invalid");
        assert!(matches!(
            err,
            RoutingError::InvalidToken {
                scenario: 1,
                expected: "y-coordinate",
                ..
            }
        ));
    }

    #[test]
    fn test_parse_rejects_non_finite() {
        assert!(matches!(
            parse_scenarios("1\n2 1\ninf 0"),
            Err(RoutingError::NonFiniteCoordinate { .. })
        ));
    }

    #[test]
    fn test_parse_truncated() {
        assert!(matches!(
            parse_scenarios("1\n2 3\n1 1\n2 2\n"),
            Err(RoutingError::UnexpectedEof {
                scenario: 1,
                expected: "x-coordinate"
            })
        ));
        assert!(matches!(
            parse_scenarios(""),
            Err(RoutingError::UnexpectedEof { scenario: 0, .. })
        ));
    }

    #[test]
    fn test_parse_huge_scenario_count_truncated() {
        assert!(matches!(
            parse_scenarios("9223372036854775807\n"),
            Err(RoutingError::UnexpectedEof {
                scenario: 1,
                expected: "capacity"
            })
        ));
    }

    #[test]
    fn test_parse_huge_point_count_truncated() {
        assert!(matches!(
            parse_scenarios("1\n2 100000000000\n1 1\n"),
            Err(RoutingError::UnexpectedEof {
                scenario: 1,
                expected: "x-coordinate"
            })
        ));
    }

    #[test]
    fn test_write_then_parse() {
        let mut rng = StdRng::seed_from_u64(42);
        let generated = vec![
            random_scenario(&mut rng, Capacity::new(2).expect("valid"), 5, 20.0).expect("finite"),
            random_scenario(&mut rng, Capacity::new(4).expect("valid"), 0, 20.0).expect("finite"),
        ];
        let mut buf = Vec::new();
        write_scenarios(&mut buf, &generated).expect("in-memory write");
        let text = String::from_utf8(buf).expect("utf8");
        let parsed = parse_scenarios(&text).expect("valid");
        assert_eq!(parsed, generated);
    }

    #[test]
    fn test_random_zero_extent() {
        let mut rng = StdRng::seed_from_u64(1);
        let s = random_scenario(&mut rng, Capacity::new(1).expect("valid"), 3, 0.0)
            .expect("finite");
        assert!(s.coords.iter().all(|&c| c == (0.0, 0.0)));
    }

    #[test]
    fn test_random_rejects_non_finite_extent() {
        let mut rng = StdRng::seed_from_u64(1);
        let k = Capacity::new(2).expect("valid");
        for extent in [f64::INFINITY, f64::NEG_INFINITY, f64::NAN] {
            assert!(matches!(
                random_scenario(&mut rng, k, 4, extent),
                Err(RoutingError::NonFiniteExtent(_))
            ));
        }
    }

    #[test]
    fn test_random_negative_extent() {
        let mut rng = StdRng::seed_from_u64(3);
        let s = random_scenario(&mut rng, Capacity::new(2).expect("valid"), 8, -5.0)
            .expect("finite");
        assert!(s.coords.iter().all(|&(x, y)| x.abs() <= 5.0 && y.abs() <= 5.0));
    }

    #[test]
    fn test_scenario_session() {
        let s = Scenario {
            capacity: Capacity::new(2).expect("valid"),
            coords: vec![(1.0, 1.0), (2.0, 2.0)],
        };
        let session = s.session().expect("finite");
        assert_eq!(session.num_points(), 2);
        assert_eq!(session.capacity().get(), 2);
    }
}
