use std::fs;
use std::path::PathBuf;
use std::process::Command;

use rand::rngs::StdRng;
use rand::SeedableRng;

use rusty_maze::codec::{read_maze_file, write_maze_file};
use rusty_maze::generator::generate_maze;
use rusty_maze::trace::{write_trace_file, TraceFormat};
use rusty_maze::{solve, Dimensions, TraceMode};

fn scratch_path(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("rusty-maze-{}", std::process::id()));
    fs::create_dir_all(&dir).unwrap();
    dir.join(name)
}

#[test]
fn test_generate_five_by_five_file() {
    let path = scratch_path("five.txt");
    let grid = generate_maze(Dimensions::new(5, 5).unwrap(), &mut StdRng::seed_from_u64(17));
    write_maze_file(&path, &grid).unwrap();

    let content = fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 5);
    for line in lines {
        assert_eq!(line.len(), 5);
        assert!(line.chars().all(|c| c.is_ascii_hexdigit()));
    }
}

#[test]
fn test_solve_hand_written_maze() {
    // (0,0) descend vers (1,0), puis est vers (1,1)
    let maze = scratch_path("two.txt");
    let out = scratch_path("two.out");
    fs::write(&maze, "dd\n6a\n").unwrap();

    let mut grid = read_maze_file(&maze, Dimensions::new(2, 2).unwrap()).unwrap();
    let outcome = solve(&mut grid, (0, 0), (1, 1), TraceMode::Pruned).unwrap();
    write_trace_file(&out, &outcome, TraceFormat::Text).unwrap();

    assert_eq!(fs::read_to_string(&out).unwrap(), "PRUNED\n0, 0\n1, 0\n1, 1\n");
}

#[test]
fn test_walled_maze_writes_tag_only() {
    let maze = scratch_path("walled.txt");
    let out = scratch_path("walled.out");
    fs::write(&maze, "fff\nfff\n").unwrap();

    let mut grid = read_maze_file(&maze, Dimensions::new(2, 3).unwrap()).unwrap();
    let outcome = solve(&mut grid, (0, 0), (1, 2), TraceMode::Pruned).unwrap();
    assert!(!outcome.is_found());
    write_trace_file(&out, &outcome, TraceFormat::Text).unwrap();

    assert_eq!(fs::read_to_string(&out).unwrap(), "PRUNED\n");
}

#[test]
fn test_generated_maze_always_solvable() {
    let maze = scratch_path("solvable.txt");
    let dimensions = Dimensions::new(20, 30).unwrap();
    let grid = generate_maze(dimensions, &mut StdRng::seed_from_u64(123));
    write_maze_file(&maze, &grid).unwrap();

    for mode in [TraceMode::Full, TraceMode::Pruned] {
        let mut grid = read_maze_file(&maze, dimensions).unwrap();
        let outcome = solve(&mut grid, (0, 0), (19, 29), mode).unwrap();
        assert!(outcome.is_found());
        assert_eq!(outcome.path().first(), Some(&(0, 0)));
        assert_eq!(outcome.path().last(), Some(&(19, 29)));
    }
}

#[test]
fn test_binaries_generate_then_solve() {
    let maze = scratch_path("cli.txt");
    let out = scratch_path("cli.out");

    let status = Command::new(env!("CARGO_BIN_EXE_generate"))
        .arg(&maze)
        .args(["6", "8", "--seed", "4"])
        .status()
        .unwrap();
    assert!(status.success());

    let status = Command::new(env!("CARGO_BIN_EXE_solve"))
        .arg(&maze)
        .args(["6", "8"])
        .arg(&out)
        .args(["0", "0", "6", "8", "--full"])
        .status()
        .unwrap();
    assert!(status.success());

    let trace = fs::read_to_string(&out).unwrap();
    let mut lines = trace.lines();
    assert_eq!(lines.next(), Some("FULL"));
    assert_eq!(lines.next(), Some("0, 0"));
    assert_eq!(lines.last(), Some("5, 7"));
}

#[test]
fn test_solve_rejects_bad_start() {
    let maze = scratch_path("bad-start.txt");
    let out = scratch_path("bad-start.out");
    fs::write(&maze, "dd\n6a\n").unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_solve"))
        .arg(&maze)
        .args(["2", "2"])
        .arg(&out)
        .args(["2", "0", "1", "2"])
        .output()
        .unwrap();
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Error with starting row/column"));
}

#[test]
fn test_solve_missing_maze_file_fails() {
    let out = scratch_path("missing.out");
    let output = Command::new(env!("CARGO_BIN_EXE_solve"))
        .arg(scratch_path("does-not-exist.txt"))
        .args(["2", "2"])
        .arg(&out)
        .args(["0", "0", "2", "2"])
        .output()
        .unwrap();
    assert!(!output.status.success());
}
