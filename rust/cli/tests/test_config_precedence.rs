use pokersquares_cli::run;
use serde_json::Value;
use serial_test::serial;
use std::io::Write;

const KEYS: [&str; 6] = [
    "POKERSQUARES_CONFIG",
    "POKERSQUARES_SEED",
    "POKERSQUARES_DEPTH",
    "POKERSQUARES_POINT_SYSTEM",
    "POKERSQUARES_PLAYER",
    "POKERSQUARES_GAME_MILLIS",
];

fn clear_env() {
    for key in KEYS {
        unsafe {
            std::env::remove_var(key);
        }
    }
}

fn set_env(key: &str, value: &str) {
    unsafe {
        std::env::set_var(key, value);
    }
}

fn cfg_json() -> (i32, Option<Value>, String) {
    let mut out: Vec<u8> = Vec::new();
    let mut err: Vec<u8> = Vec::new();
    let code = run(["pokersquares", "cfg"], &mut out, &mut err);
    (
        code,
        serde_json::from_slice(&out).ok(),
        String::from_utf8_lossy(&err).into_owned(),
    )
}

fn config_file(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
#[serial]
fn file_values_override_defaults() {
    clear_env();
    let file = config_file("depth_limit = 2\nplayer = \"random\"\nseed = 7\n");
    set_env("POKERSQUARES_CONFIG", file.path().to_str().unwrap());

    let (code, json, stderr) = cfg_json();
    clear_env();
    assert_eq!(code, 0, "{}", stderr);
    let json = json.unwrap();
    assert_eq!(json["depth_limit"]["value"], 2);
    assert_eq!(json["depth_limit"]["source"], "file");
    assert_eq!(json["player"]["value"], "random");
    assert_eq!(json["seed"]["value"], 7);
    assert_eq!(json["point_system"]["source"], "default");
}

#[test]
#[serial]
fn env_overrides_file() {
    clear_env();
    let file = config_file("seed = 7\npoint_system = \"american\"\n");
    set_env("POKERSQUARES_CONFIG", file.path().to_str().unwrap());
    set_env("POKERSQUARES_SEED", "8");

    let (code, json, _) = cfg_json();
    clear_env();
    assert_eq!(code, 0);
    let json = json.unwrap();
    assert_eq!(json["seed"]["value"], 8);
    assert_eq!(json["seed"]["source"], "env");
    assert_eq!(json["point_system"]["value"], "american");
    assert_eq!(json["point_system"]["source"], "file");
}

#[test]
#[serial]
fn custom_point_table_from_file_scores_grids() {
    clear_env();
    let file = config_file("point_table = [1, 1, 1, 1, 1, 1, 1, 1, 1, 1]\n");
    set_env("POKERSQUARES_CONFIG", file.path().to_str().unwrap());

    let mut out: Vec<u8> = Vec::new();
    let mut err: Vec<u8> = Vec::new();
    let code = run(
        [
            "pokersquares",
            "score",
            "--cards",
            "AS KS QS JS TS 2H 2D 2C 3H 3D 4C 5C 6C 7C 8C 9H 9D 4H 4D 6H 7S 8S 5H 5D 6D",
        ],
        &mut out,
        &mut err,
    );
    clear_env();
    assert_eq!(code, 0);
    let stdout = String::from_utf8_lossy(&out);
    assert!(stdout.contains("Point system: custom"));
    assert!(stdout.contains("Total: 10"));
}

#[test]
#[serial]
fn invalid_env_value_fails() {
    clear_env();
    set_env("POKERSQUARES_SEED", "not-a-number");
    let (code, _, stderr) = cfg_json();
    clear_env();
    assert_eq!(code, 2);
    assert!(stderr.contains("Invalid seed"));
}

#[test]
#[serial]
fn malformed_file_fails() {
    clear_env();
    let file = config_file("depth_limit = \"deep\"\n");
    set_env("POKERSQUARES_CONFIG", file.path().to_str().unwrap());
    let (code, _, stderr) = cfg_json();
    clear_env();
    assert_eq!(code, 2);
    assert!(stderr.contains("cannot parse config file"));
}

#[test]
#[serial]
fn env_point_system_replaces_file_table() {
    clear_env();
    let file = config_file("point_table = [0, 0, 0, 0, 0, 0, 0, 0, 0, 0]\n");
    set_env("POKERSQUARES_CONFIG", file.path().to_str().unwrap());
    set_env("POKERSQUARES_POINT_SYSTEM", "american");

    let (code, json, _) = cfg_json();
    clear_env();
    assert_eq!(code, 0);
    let json = json.unwrap();
    assert!(json["point_table"]["value"].is_null());
    assert_eq!(json["point_system"]["value"], "american");
}
