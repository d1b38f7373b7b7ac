//! CLI Regression Tests
//!
//! Run the built `mudcalc` binary against temporary well plans and check
//! its stdout and exit status.

use std::io::Write;
use std::path::Path;
use std::process::{Command, Output};

use mudcalc::WellPlan;

fn mudcalc(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_mudcalc"))
        .args(args)
        .current_dir(dir)
        .env_remove("MUDCALC_CONFIG")
        .env("RUST_LOG", "info")
        .output()
        .unwrap()
}

fn write_plan(dir: &Path, contents: &str) -> String {
    let path = dir.join("plan.toml");
    let mut file = std::fs::File::create(&path).unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    path.to_string_lossy().into_owned()
}

#[test]
fn print_config_stdout_parses_back_to_same_plan() {
    let dir = tempfile::tempdir().unwrap();
    let out = mudcalc(dir.path(), &["print-config"]);
    assert!(out.status.success());

    let stdout = String::from_utf8(out.stdout).unwrap();
    let plan: WellPlan = toml::from_str(&stdout)
        .unwrap_or_else(|e| panic!("stdout is not a well plan: {e}\n{stdout}"));
    assert_eq!(plan, WellPlan::default());

    // The "no well_plan.toml" notice goes to stderr only.
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("using reference well plan"));
}

#[test]
fn print_config_echoes_overrides_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_plan(dir.path(), "[well]\nname = \"Well-7\"\n");
    let out = mudcalc(dir.path(), &["--config", &path, "print-config"]);
    assert!(out.status.success());

    let plan = WellPlan::from_toml_str(&String::from_utf8(out.stdout).unwrap()).unwrap();
    assert_eq!(plan.well.name, "Well-7");
}

#[test]
fn report_exits_zero_for_reference_plan() {
    let dir = tempfile::tempdir().unwrap();
    let out = mudcalc(dir.path(), &["report"]);
    assert_eq!(out.status.code(), Some(0));
}

#[test]
fn report_exits_one_when_a_formula_fails() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_plan(dir.path(), "[kill]\ntrue_vertical_depth_m = 0.0\n");
    let out = mudcalc(dir.path(), &["--config", &path, "report"]);
    assert_eq!(out.status.code(), Some(1));

    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("true vertical depth"));
}

#[test]
fn missing_explicit_config_is_a_hard_failure() {
    let dir = tempfile::tempdir().unwrap();
    let out = mudcalc(dir.path(), &["--config", "absent.toml", "report"]);
    assert!(!out.status.success());
}
