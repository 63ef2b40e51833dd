//! Tests for starting board generation.

use rand::SeedableRng;
use rand::rngs::StdRng;
use strictly_mill::generator::{fallback_phase, generate_board, quick_win_reachable};
use strictly_mill::rules::winner;
use strictly_mill::{GeneratorConfig, Provenance, Side};

#[test]
fn test_thousand_boards_are_fair() {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    let config = GeneratorConfig::default();

    for _ in 0..1000 {
        let generated = generate_board(&mut rng, &config);
        let board = generated.board();

        assert_eq!(board.count(Side::Black), 3);
        assert_eq!(board.count(Side::White), 3);
        assert_eq!(winner(board), None);

        if !generated.is_fallback() {
            assert!(!quick_win_reachable(board, Side::Black, 3));
        }
    }
}

#[test]
fn test_strict_attempt_is_within_bound() {
    let mut rng = StdRng::seed_from_u64(17);
    let config = GeneratorConfig::new(10, 3);

    for _ in 0..100 {
        match *generate_board(&mut rng, &config).provenance() {
            Provenance::Strict { attempt } => assert!((1..=10).contains(&attempt)),
            Provenance::Fallback { .. } => {}
        }
    }
}

#[test]
fn test_fallback_phase_in_isolation() {
    let mut rng = StdRng::seed_from_u64(1);
    for _ in 0..500 {
        let generated = fallback_phase(&mut rng);
        assert!(generated.is_fallback());
        assert_eq!(winner(generated.board()), None);
    }
}

#[test]
fn test_same_seed_same_board() {
    let config = GeneratorConfig::default();
    let a = generate_board(&mut StdRng::seed_from_u64(8), &config);
    let b = generate_board(&mut StdRng::seed_from_u64(8), &config);
    assert_eq!(a, b);
}
