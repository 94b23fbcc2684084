use super::*;

fn sq(name: &str) -> Coordinate {
    name.parse().unwrap()
}

#[test]
fn test_new_accepts_whole_grid() {
    for file in 1..=8 {
        for rank in 1..=8 {
            let c = Coordinate::new(file, rank).unwrap();
            assert_eq!(c.file(), file as u8);
            assert_eq!(c.rank(), rank as u8);
        }
    }
}

#[test]
fn test_new_rejects_out_of_range() {
    for (file, rank) in [(0, 1), (1, 0), (9, 4), (4, 9), (-1, 3), (3, -8), (i8::MIN, i8::MAX)] {
        assert_eq!(
            Coordinate::new(file, rank),
            Err(CoordinateError::OutOfBounds {
                file: file as i16,
                rank: rank as i16
            }),
            "({file}, {rank}) should be off the board"
        );
    }
}

#[test]
fn test_index_layout() {
    assert_eq!(sq("a1").index(), 0);
    assert_eq!(sq("h1").index(), 7);
    assert_eq!(sq("a2").index(), 8);
    assert_eq!(sq("e4").index(), 28);
    assert_eq!(sq("h8").index(), 63);

    for index in 0..64 {
        assert_eq!(Coordinate::from_index(index).unwrap().index(), index);
    }
    assert!(Coordinate::from_index(64).is_err());
}

#[test]
fn test_steps_inside_board() {
    let d4 = sq("d4");
    assert_eq!(d4.step_file(1), Ok(sq("e4")));
    assert_eq!(d4.step_file(-3), Ok(sq("a4")));
    assert_eq!(d4.step_rank(4), Ok(sq("d8")));
    assert_eq!(d4.step_rank(-1), Ok(sq("d3")));
    assert_eq!(d4.step_diagonal(1, 1), Ok(sq("e5")));
    assert_eq!(d4.step_diagonal(-3, -3), Ok(sq("a1")));
    assert_eq!(d4.step_diagonal(2, -1), Ok(sq("f3")));
}

#[test]
fn test_steps_never_wrap() {
    // h1 -> one file right must not become a2
    assert_eq!(
        sq("h1").step_file(1),
        Err(CoordinateError::OutOfBounds { file: 9, rank: 1 })
    );
    assert_eq!(
        sq("a1").step_rank(-1),
        Err(CoordinateError::OutOfBounds { file: 1, rank: 0 })
    );
    assert!(sq("h8").step_diagonal(1, 1).is_err());
    assert!(sq("a8").step_diagonal(-1, 1).is_err());
    // Large deltas don't overflow the arithmetic
    assert!(sq("e4").step_file(i8::MAX).is_err());
    assert!(sq("e4").step_rank(i8::MIN).is_err());
}

#[test]
fn test_delta_to() {
    assert_eq!(sq("b1").delta_to(sq("c3")), (1, 2));
    assert_eq!(sq("h1").delta_to(sq("a8")), (-7, 7));
    assert_eq!(sq("e4").delta_to(sq("e4")), (0, 0));
}

#[test]
fn test_square_names() {
    assert_eq!(sq("a1"), Coordinate::new(1, 1).unwrap());
    assert_eq!(sq("h8"), Coordinate::new(8, 8).unwrap());
    assert_eq!(Coordinate::new(5, 4).unwrap().to_string(), "e4");

    for bad in ["", "e", "e44", "i1", "a0", "a9", "E4", "4e"] {
        assert_eq!(
            bad.parse::<Coordinate>(),
            Err(CoordinateError::InvalidSquareName(bad.to_string()))
        );
    }
}

#[test]
fn test_all_is_index_ordered() {
    let all: Vec<Coordinate> = Coordinate::all().collect();
    assert_eq!(all.len(), SQUARE_COUNT);
    for (i, c) in all.iter().enumerate() {
        assert_eq!(c.index(), i);
    }
    assert!(all.windows(2).all(|w| w[0] < w[1]));
}
