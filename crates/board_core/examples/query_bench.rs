//! Legality query benchmark for profiling with cargo-flamegraph.
//!
//! Asks the validator about every (from, to) pair on a few boards, many
//! times over, and reports queries per second.
//!
//! Usage:
//!   cargo flamegraph --example query_bench -p board_core

use board_core::{Board, Coordinate, Piece, PieceKind, Side, can_move};
use std::time::Instant;

const ITERATIONS: usize = 200;

fn open_middle() -> Board {
    let mut board = Board::standard();
    for name in ["d2", "e2", "d7", "e7"] {
        board.remove(name.parse().unwrap());
    }
    board.set("e4".parse().unwrap(), Piece::new(PieceKind::Pawn, Side::Light));
    board.set("d5".parse().unwrap(), Piece::new(PieceKind::Pawn, Side::Dark));
    board
}

fn lone_queens() -> Board {
    [
        ("d4", Piece::new(PieceKind::Queen, Side::Light)),
        ("e5", Piece::new(PieceKind::Queen, Side::Dark)),
        ("a1", Piece::new(PieceKind::King, Side::Light)),
        ("h8", Piece::new(PieceKind::King, Side::Dark)),
    ]
    .into_iter()
    .map(|(name, piece)| (name.parse::<Coordinate>().unwrap(), piece))
    .collect()
}

fn main() {
    println!("=== Move Query Benchmark ===");
    println!("Iterations per board: {ITERATIONS}");
    println!();

    let boards = [
        ("Standard", Board::standard()),
        ("Open middle", open_middle()),
        ("Lone queens", lone_queens()),
        ("Empty", Board::new()),
    ];

    let mut total_queries = 0usize;
    let mut total_time = std::time::Duration::ZERO;

    for (name, board) in &boards {
        print!("{name:.<20}");

        let start = Instant::now();
        let mut legal = 0usize;
        for _ in 0..ITERATIONS {
            for from in Coordinate::all() {
                for to in Coordinate::all() {
                    if can_move(board, from, to) {
                        legal += 1;
                    }
                }
            }
        }
        let elapsed = start.elapsed();

        let queries = ITERATIONS * 64 * 64;
        total_queries += queries;
        total_time += elapsed;

        let qps = if elapsed.as_secs_f64() > 0.0 {
            queries as f64 / elapsed.as_secs_f64()
        } else {
            0.0
        };
        println!(
            " {:>4} legal/pass, {qps:>12.0} queries/sec ({elapsed:>8.3?})",
            legal / ITERATIONS
        );
    }

    println!();
    println!("{:=<70}", "");
    let avg_qps = if total_time.as_secs_f64() > 0.0 {
        total_queries as f64 / total_time.as_secs_f64()
    } else {
        0.0
    };
    println!("TOTAL: {total_queries} queries in {total_time:.3?} ({avg_qps:.0} queries/sec)");
}
