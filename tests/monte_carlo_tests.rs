use assert_fs::prelude::*;
use predicates::prelude::*;
use std::fs;

fn run_seeded(output_arg: &str) {
    let mut cmd = assert_cmd::cargo_bin_cmd!("hire-payback");
    cmd.args(["monte-carlo", "-n", "50", "--seed", "17", "-o", output_arg]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Monte Carlo Breakeven Report"))
        .stdout(predicate::str::contains("Trials: 50"))
        .stdout(predicate::str::contains("Seed: 17"))
        .stdout(predicate::str::contains("Baseline breakeven: month 25"))
        .stdout(predicate::str::contains(format!("Simulation result written to {output_arg}")));
}

#[test]
fn seeded_monte_carlo_is_reproducible() {
    let first_file = assert_fs::NamedTempFile::new("first.yaml").unwrap();
    let second_file = assert_fs::NamedTempFile::new("second.yaml").unwrap();

    run_seeded(first_file.path().to_str().unwrap());
    run_seeded(second_file.path().to_str().unwrap());

    let first = fs::read_to_string(first_file.path()).unwrap();
    let second = fs::read_to_string(second_file.path()).unwrap();
    assert_eq!(first, second);
    assert!(first.contains("summary:"));
    assert!(first.contains("trial_breakevens:"));
    assert!(first.contains("non_converged_count:"));
    assert!(first.contains("median:"));
    assert!(first.contains("seed: 17"));
}

#[test]
fn monte_carlo_reports_empty_distribution_for_zero_revenue() {
    let mut cmd = assert_cmd::cargo_bin_cmd!("hire-payback");
    cmd.args([
        "monte-carlo",
        "-n",
        "20",
        "--seed",
        "3",
        "--baseline-monthly-billing",
        "0",
        "--horizon-months",
        "24",
    ]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Converged: 0 / 20"))
        .stdout(predicate::str::contains("Not converged: 20"))
        .stdout(predicate::str::contains("No trial reached breakeven within 24 months"));
}

#[test]
fn monte_carlo_rejects_zero_trials() {
    let mut cmd = assert_cmd::cargo_bin_cmd!("hire-payback");
    cmd.args(["monte-carlo", "-n", "0"]);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("monte_carlo_trials"));
}

#[test]
fn monte_carlo_rejects_trials_above_maximum() {
    let mut cmd = assert_cmd::cargo_bin_cmd!("hire-payback");
    cmd.args([
        "monte-carlo",
        "-n",
        "18446744073709551615",
        "--horizon-months",
        "1",
        "--training-months",
        "0",
        "--ojt-months",
        "0",
    ]);

    cmd.assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("monte_carlo_trials must be at most"));
}

#[test]
fn monte_carlo_writes_histogram_png() {
    let histogram_file = assert_fs::NamedTempFile::new("histogram.png").unwrap();
    let histogram_arg = histogram_file.path().to_str().unwrap().to_string();

    let mut cmd = assert_cmd::cargo_bin_cmd!("hire-payback");
    cmd.args([
        "monte-carlo",
        "-n",
        "40",
        "--seed",
        "5",
        "--histogram",
        &histogram_arg,
    ]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains(format!(
            "Simulation histogram written to {histogram_arg}"
        )));

    histogram_file.assert(predicate::path::exists());
    let metadata = fs::metadata(&histogram_arg).unwrap();
    assert!(metadata.len() > 0);
}

#[test]
fn monte_carlo_skips_histogram_without_converged_trials() {
    let histogram_file = assert_fs::NamedTempFile::new("histogram.png").unwrap();

    let mut cmd = assert_cmd::cargo_bin_cmd!("hire-payback");
    cmd.args([
        "monte-carlo",
        "-n",
        "10",
        "--seed",
        "5",
        "--baseline-monthly-billing",
        "0",
        "--histogram",
        histogram_file.path().to_str().unwrap(),
    ]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("No converged trials, histogram not written"));
    histogram_file.assert(predicate::path::missing());
}
