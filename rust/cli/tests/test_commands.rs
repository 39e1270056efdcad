use pokersquares_cli::run;
use pokersquares_engine::logger::GameRecord;
use serial_test::serial;

const SAMPLE: &str = "AS KS QS JS TS 2H 2D 2C 3H 3D 4C 5C 6C 7C 8C 9H 9D 4H 4D 6H 7S 8S 5H 5D 6D";

fn run_args(args: &[&str]) -> (i32, String, String) {
    let mut out: Vec<u8> = Vec::new();
    let mut err: Vec<u8> = Vec::new();
    let code = run(args, &mut out, &mut err);
    (
        code,
        String::from_utf8_lossy(&out).into_owned(),
        String::from_utf8_lossy(&err).into_owned(),
    )
}

#[test]
#[serial]
fn score_prints_lines_and_total() {
    let (code, stdout, stderr) = run_args(&[
        "pokersquares",
        "score",
        "--system",
        "american",
        "--cards",
        SAMPLE,
    ]);
    assert_eq!(code, 0, "{}", stderr);
    assert!(stdout.contains("Point system: american"));
    assert!(stdout.contains("royal flush"));
    assert!(stdout.contains("Total: 209"));
}

#[test]
#[serial]
fn score_rejects_short_grid() {
    let (code, _, stderr) = run_args(&["pokersquares", "score", "--cards", "AS KS"]);
    assert_eq!(code, 2);
    assert!(stderr.contains("expected 25 cards"));
}

#[test]
#[serial]
fn play_random_player_completes() {
    let (code, stdout, stderr) = run_args(&[
        "pokersquares",
        "play",
        "--player",
        "random",
        "--seed",
        "11",
    ]);
    assert_eq!(code, 0, "{}", stderr);
    assert_eq!(stdout.lines().filter(|l| l.starts_with("Card ")).count(), 25);
    assert!(stdout.contains("Player: RandomPlayer"));
}

#[test]
#[serial]
fn play_rejects_excessive_depth() {
    let (code, _, stderr) = run_args(&["pokersquares", "play", "--depth", "9"]);
    assert_eq!(code, 2);
    assert!(stderr.contains("depth_limit"));
}

#[test]
#[serial]
fn sim_summarizes_and_records() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("sim.jsonl");
    let path_str = path.to_string_lossy().into_owned();
    let (code, stdout, stderr) = run_args(&[
        "pokersquares",
        "sim",
        "--games",
        "5",
        "--player",
        "expectimax",
        "--depth",
        "0",
        "--seed",
        "1",
        "--output",
        path_str.as_str(),
    ]);
    assert_eq!(code, 0, "{}", stderr);
    assert!(stdout.contains("Simulated: 5 games"));
    assert!(stdout.contains("Mean score:"));

    let contents = std::fs::read_to_string(&path).unwrap();
    let records: Vec<GameRecord> = contents
        .lines()
        .filter(|l| !l.trim().is_empty())
        .map(|l| serde_json::from_str(l).unwrap())
        .collect();
    assert_eq!(records.len(), 5);
    assert!(records.iter().all(|r| r.player == "ExpectimaxPlayer"));
    assert_eq!(records[0].meta.as_ref().unwrap()["depth_limit"], 0);
}

#[test]
#[serial]
fn sim_is_reproducible_from_seed() {
    let args = [
        "pokersquares",
        "sim",
        "--games",
        "3",
        "--player",
        "random",
        "--seed",
        "99",
    ];
    let (_, first, _) = run_args(&args);
    let (_, second, _) = run_args(&args);
    assert_eq!(first, second);
}

#[test]
#[serial]
fn eval_reports_both_players() {
    let (code, stdout, stderr) = run_args(&[
        "pokersquares",
        "eval",
        "--player-a",
        "expectimax",
        "--player-b",
        "random",
        "--games",
        "4",
        "--depth",
        "0",
        "--seed",
        "5",
        "--system",
        "american",
    ]);
    assert_eq!(code, 0, "{}", stderr);
    assert!(stdout.contains("A ExpectimaxPlayer"));
    assert!(stdout.contains("B RandomPlayer"));
    assert!(stdout.contains("Ties:"));
}

#[test]
#[serial]
fn missing_required_argument_fails() {
    let (code, _, stderr) = run_args(&["pokersquares", "eval", "--player-a", "random"]);
    assert_eq!(code, 2);
    assert!(stderr.contains("--player-b"));
}
