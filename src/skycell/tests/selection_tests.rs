//! Tests for best-skycell selection

extern crate std;

use crate::errors::SkycellError;
use crate::skycell::{select_best, SkycellCandidate, TileDimensions};

fn tile() -> TileDimensions {
    TileDimensions::new(6279.0, 6261.0)
}

#[test]
fn test_single_candidate_ignores_margin() {
    // Outside the tile, would never win a margin comparison
    let candidates = vec![SkycellCandidate::new("2381.064", -50.0, 7000.0)];
    let resolution = select_best(candidates, &tile(), 10.0, 20.0).unwrap();

    std::assert_eq!(resolution.skycell(), "2381.064");
    std::assert_eq!(resolution.candidate_count, 1);
}

#[test]
fn test_largest_margin_wins() {
    // Margins: 100 and min(79, 6200, 61, 6200) = 61
    let candidates = vec![
        SkycellCandidate::new("a", 100.0, 100.0),
        SkycellCandidate::new("b", 6200.0, 6200.0),
    ];
    std::assert_eq!(candidates[0].margin(&tile()), 100.0);
    std::assert_eq!(candidates[1].margin(&tile()), 61.0);

    let resolution = select_best(candidates, &tile(), 0.0, 0.0).unwrap();
    std::assert_eq!(resolution.skycell(), "a");
    std::assert_eq!(resolution.candidate_count, 2);
}

#[test]
fn test_later_candidate_can_win() {
    let candidates = vec![
        SkycellCandidate::new("edge", 20.0, 3000.0),
        SkycellCandidate::new("centre", 3139.5, 3130.5),
        SkycellCandidate::new("corner", 6000.0, 6000.0),
    ];
    let resolution = select_best(candidates, &tile(), 0.0, 0.0).unwrap();
    std::assert_eq!(resolution.skycell(), "centre");
    std::assert_eq!(resolution.candidate_count, 3);
}

#[test]
fn test_tie_keeps_first() {
    let candidates = vec![
        SkycellCandidate::new("first", 500.0, 500.0),
        SkycellCandidate::new("second", 6279.0 - 500.0, 6261.0 - 500.0),
    ];
    let resolution = select_best(candidates, &tile(), 0.0, 0.0).unwrap();
    std::assert_eq!(resolution.skycell(), "first");
}

#[test]
fn test_margin_symmetric_under_reflection() {
    let t = tile();
    for &(x, y) in &[(0.0, 0.0), (12.5, 4000.0), (3000.0, 17.25), (6100.0, 6000.0)] {
        let a = SkycellCandidate::new("a", x, y);
        let b = SkycellCandidate::new("b", t.width - x, t.height - y);
        std::assert_eq!(a.margin(&t), b.margin(&t));
    }
}

#[test]
fn test_no_positive_margin_is_internal_error() {
    let candidates = vec![
        SkycellCandidate::new("a", 0.0, 100.0),
        SkycellCandidate::new("b", -5.0, 100.0),
    ];
    let result = select_best(candidates, &tile(), 1.0, 2.0);
    std::assert!(matches!(result, Err(SkycellError::InternalError(_))));
}

#[test]
fn test_empty_is_no_candidates() {
    let result = select_best(Vec::new(), &tile(), 1.0, 2.0);
    match result {
        Err(SkycellError::NoCandidates { ra, dec }) => {
            std::assert_eq!(ra, 1.0);
            std::assert_eq!(dec, 2.0);
        }
        other => std::panic!("unexpected result: {:?}", other),
    }
}
