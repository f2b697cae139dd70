use std::collections::HashSet;

use cube_solver_tui::core::{CubePatch, CubeState, MoveLog, SimpleRng, UNKNOWN_FACE};
use cube_solver_tui::types::{Color, Face, Move, MOVE_COUNT, RANDOM_SCRAMBLE_LEN};

#[test]
fn initial_cube_is_six_uniform_distinct_faces() {
    let cube = CubeState::initial();
    let mut seen = HashSet::new();
    for face in Face::ALL {
        let stickers = cube.face(face);
        assert_eq!(stickers.len(), 9);
        let first = stickers[0].expect("initial stickers are known");
        assert!(stickers.iter().all(|s| *s == Some(first)));
        assert_eq!(first, face.home_color());
        seen.insert(first);
    }
    assert_eq!(seen.len(), Color::ALL.len());
    assert!(cube.is_valid());
}

#[test]
fn replace_overwrites_only_supplied_faces() {
    let mut cube = CubeState::initial();
    cube.replace(&CubePatch::new().with_face(Face::Front, UNKNOWN_FACE));
    assert_eq!(cube.face(Face::Front), &UNKNOWN_FACE);
    assert_eq!(cube.face(Face::Up), &[Some(Color::White); 9]);
    assert!(!cube.is_valid());
}

#[test]
fn serialize_round_trips_through_split() {
    let mut rng = SimpleRng::new(2024);
    for len in [1usize, 2, 7, 20, 64] {
        let mut log = MoveLog::new();
        log.append_random(&mut rng, len);
        let text = log.serialize();
        let tokens: Vec<Move> = text
            .split(' ')
            .map(|t| Move::from_str(t).expect("serialized token parses"))
            .collect();
        assert_eq!(tokens.as_slice(), log.as_slice());
        assert_eq!(MoveLog::parse(&text).unwrap().as_slice(), log.as_slice());
    }
}

#[test]
fn empty_log_serializes_to_empty_string() {
    assert_eq!(MoveLog::new().serialize(), "");
}

#[test]
fn append_random_yields_twenty_valid_tokens_and_reaches_all() {
    let mut rng = SimpleRng::new(7);
    let mut seen = HashSet::new();
    for _ in 0..50 {
        let mut log = MoveLog::new();
        log.append_random(&mut rng, RANDOM_SCRAMBLE_LEN);
        assert_eq!(log.len(), RANDOM_SCRAMBLE_LEN);
        for m in log.as_slice() {
            assert!(Move::ALL.contains(m));
            seen.insert(*m);
        }
    }
    assert_eq!(seen.len(), MOVE_COUNT);
}

#[test]
fn parse_rejects_unknown_tokens() {
    let err = MoveLog::parse("R X U").unwrap_err();
    assert_eq!(err.token, "X");
}
