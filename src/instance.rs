//! QAP problem instances.
//!
//! A [`QapInstance`] owns the two `n×n` integer matrices of the Koopmans &
//! Beckmann formulation: a facility-flow matrix `F` and a location-distance
//! matrix `D`. Both are fixed at construction and read-only for the
//! lifetime of the instance, so one instance can back any number of
//! sequential search runs.
//!
//! # Text format
//!
//! [`QapInstance::parse`] reads the plain whitespace-separated format used
//! by QAPLIB-style instance files: the dimension `n`, followed by the `n²`
//! flow entries in row-major order, followed by the `n²` distance entries.
//!
//! # References
//!
//! - Koopmans, T. & Beckmann, M. (1957). "Assignment Problems and the
//!   Location of Economic Activities", *Econometrica* 25(1), 53-76.
//! - Burkard, R., Karisch, S. & Rendl, F. (1997). "QAPLIB — A Quadratic
//!   Assignment Problem Library", *Journal of Global Optimization* 10.

use std::io::{BufReader, Read};
use std::path::Path;

use crate::error::SearchError;

/// An immutable QAP instance: flow matrix, distance matrix, dimension.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QapInstance {
    n: usize,
    flows: Vec<Vec<i64>>,
    distances: Vec<Vec<i64>>,
}

impl QapInstance {
    /// Builds an instance from the two matrices.
    ///
    /// Both matrices must be square, of equal dimension, and of dimension
    /// at least 2 (a single facility admits no swap move).
    pub fn new(flows: Vec<Vec<i64>>, distances: Vec<Vec<i64>>) -> Result<Self, SearchError> {
        let n = flows.len();
        if distances.len() != n {
            return Err(SearchError::DimensionMismatch {
                flows: n,
                distances: distances.len(),
            });
        }
        if n < 2 {
            return Err(SearchError::DegenerateInstance { n });
        }
        check_square("flow", &flows, n)?;
        check_square("distance", &distances, n)?;
        Ok(Self {
            n,
            flows,
            distances,
        })
    }

    /// Parses the whitespace-separated text format.
    pub fn parse(text: &str) -> Result<Self, SearchError> {
        let mut tokens = text.split_whitespace();
        let dimension = next_int(&mut tokens, "dimension")?;
        let n = usize::try_from(dimension)
            .map_err(|_| SearchError::Parse(format!("negative dimension {dimension}")))?;
        let mut read_matrix = |name: &str| -> Result<Vec<Vec<i64>>, SearchError> {
            let mut rows = Vec::with_capacity(n);
            for row in 0..n {
                let mut entries = Vec::with_capacity(n);
                for col in 0..n {
                    let label = format!("{name}[{row}][{col}]");
                    entries.push(next_int(&mut tokens, &label)?);
                }
                rows.push(entries);
            }
            Ok(rows)
        };
        let flows = read_matrix("flow")?;
        let distances = read_matrix("distance")?;
        Self::new(flows, distances)
    }

    /// Reads and parses an instance from any reader.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, SearchError> {
        let mut text = String::new();
        BufReader::new(reader).read_to_string(&mut text)?;
        Self::parse(&text)
    }

    /// Reads and parses an instance file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, SearchError> {
        Self::from_reader(std::fs::File::open(path)?)
    }

    /// The instance dimension `n`.
    pub fn size(&self) -> usize {
        self.n
    }

    /// Flow between facilities `a` and `b`.
    pub fn flow(&self, a: usize, b: usize) -> i64 {
        self.flows[a][b]
    }

    /// Distance between locations `a` and `b`.
    pub fn distance(&self, a: usize, b: usize) -> i64 {
        self.distances[a][b]
    }

    /// The flow matrix, row-major.
    pub fn flows(&self) -> &[Vec<i64>] {
        &self.flows
    }

    /// The distance matrix, row-major.
    pub fn distances(&self) -> &[Vec<i64>] {
        &self.distances
    }
}

fn check_square(
    matrix: &'static str,
    rows: &[Vec<i64>],
    expected: usize,
) -> Result<(), SearchError> {
    for (row, entries) in rows.iter().enumerate() {
        if entries.len() != expected {
            return Err(SearchError::NotSquare {
                matrix,
                row,
                len: entries.len(),
                expected,
            });
        }
    }
    Ok(())
}

fn next_int<'a, I: Iterator<Item = &'a str>>(
    tokens: &mut I,
    what: &str,
) -> Result<i64, SearchError> {
    let token = tokens
        .next()
        .ok_or_else(|| SearchError::Parse(format!("unexpected end of input reading {what}")))?;
    token
        .parse()
        .map_err(|_| SearchError::Parse(format!("expected integer for {what}, found {token:?}")))
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// The 4-facility instance used as a golden example across the crate.
    pub(crate) fn golden() -> QapInstance {
        QapInstance::new(
            vec![
                vec![0, 1, 1, 2],
                vec![1, 0, 2, 1],
                vec![1, 2, 0, 1],
                vec![2, 1, 1, 0],
            ],
            vec![
                vec![0, 3, 1, 2],
                vec![3, 0, 4, 1],
                vec![1, 4, 0, 3],
                vec![2, 1, 3, 0],
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_new_accepts_golden() {
        let instance = golden();
        assert_eq!(instance.size(), 4);
        assert_eq!(instance.flow(0, 3), 2);
        assert_eq!(instance.distance(1, 2), 4);
    }

    #[test]
    fn test_new_rejects_single_facility() {
        let err = QapInstance::new(vec![vec![0]], vec![vec![0]]).unwrap_err();
        assert!(matches!(err, SearchError::DegenerateInstance { n: 1 }));
    }

    #[test]
    fn test_new_rejects_dimension_mismatch() {
        let err = QapInstance::new(
            vec![vec![0, 1], vec![1, 0]],
            vec![vec![0, 1, 2], vec![1, 0, 3], vec![2, 3, 0]],
        )
        .unwrap_err();
        assert!(matches!(
            err,
            SearchError::DimensionMismatch {
                flows: 2,
                distances: 3
            }
        ));
    }

    #[test]
    fn test_new_rejects_ragged_matrix() {
        let err = QapInstance::new(
            vec![vec![0, 1], vec![1]],
            vec![vec![0, 1], vec![1, 0]],
        )
        .unwrap_err();
        assert!(matches!(
            err,
            SearchError::NotSquare {
                matrix: "flow",
                row: 1,
                len: 1,
                expected: 2
            }
        ));
    }

    #[test]
    fn test_parse_round_trips_golden() {
        let text = "\
            4\n\
            0 1 1 2\n 1 0 2 1\n 1 2 0 1\n 2 1 1 0\n\
            0 3 1 2\n 3 0 4 1\n 1 4 0 3\n 2 1 3 0\n";
        let parsed = QapInstance::parse(text).unwrap();
        assert_eq!(parsed, golden());
    }

    #[test]
    fn test_parse_reports_truncated_input() {
        let err = QapInstance::parse("3\n0 1 2\n").unwrap_err();
        assert!(matches!(err, SearchError::Parse(_)));
    }

    #[test]
    fn test_parse_reports_non_integer_token() {
        let err = QapInstance::parse("2\n0 x\n1 0\n0 1\n1 0\n").unwrap_err();
        assert!(matches!(err, SearchError::Parse(_)));
    }
}
