use std::io;

use opgrid::filter::{LoadFromHl, OpcodeFilter, HALT};
use opgrid::grid::{Grid, GridStats, PLACEHOLDER};
use opgrid::opcode::Opcode;

const GOLDEN: &str = include_str!("golden_grid.txt");

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn grid_matches_golden_output() {
    init_logging();

    let mut out = Vec::new();
    let stats = Grid::new(LoadFromHl).write_to(&mut out).unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), GOLDEN);
    assert_eq!(
        stats,
        GridStats {
            matched: 7,
            lines: 16
        }
    );
}

#[test]
fn rendering_twice_is_identical() {
    init_logging();

    let grid = Grid::new(LoadFromHl);
    let (mut first, mut second) = (Vec::new(), Vec::new());
    grid.write_to(&mut first).unwrap();
    grid.write_to(&mut second).unwrap();
    assert_eq!(first, second);
}

#[test]
fn tokens_line_up_with_opcodes() {
    let tokens: Vec<&str> = GOLDEN.split_whitespace().collect();
    assert_eq!(tokens.len(), 256);
    for (opcode, token) in Opcode::all().zip(tokens) {
        let [low, high] = opcode.nibbles();
        let expected = (4..=7).contains(&high) && low % 8 == 6 && opcode != HALT;
        assert_eq!(expected, LoadFromHl.matches(opcode), "{}", opcode);
        if expected {
            assert_eq!(token, opcode.to_string());
        } else {
            assert_eq!(token, PLACEHOLDER, "{}", opcode);
        }
    }
}

#[test]
fn halt_and_nop_are_blank() {
    let tokens: Vec<&str> = GOLDEN.split_whitespace().collect();
    assert_eq!(tokens[0x76], "..");
    assert_eq!(tokens[0x00], "..");
    for op in [0x46, 0x4E, 0x56, 0x5E, 0x66, 0x6E, 0x7E] {
        assert_eq!(tokens[op], format!("{:02x}", op));
    }
}

#[test]
fn list_to_sink_counts_matches() {
    init_logging();

    let stats = Grid::new(LoadFromHl).write_list(io::sink()).unwrap();
    assert_eq!(stats.matched, 7);
}
