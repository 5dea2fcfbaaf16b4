use assert_fs::prelude::*;
use predicates::prelude::*;
use std::fs;

#[test]
fn plot_rejects_invalid_parameters_without_writing() {
    let output_file = assert_fs::NamedTempFile::new("cash_flow.png").unwrap();

    let mut cmd = assert_cmd::cargo_bin_cmd!("hire-payback");
    cmd.args([
        "plot",
        "-o",
        output_file.path().to_str().unwrap(),
        "--horizon-months",
        "0",
    ]);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("horizon_months"));
    output_file.assert(predicate::path::missing());
}

#[test]
fn plot_requires_output_path() {
    let mut cmd = assert_cmd::cargo_bin_cmd!("hire-payback");
    cmd.arg("plot");

    cmd.assert().failure();
}

#[test]
fn plot_creates_png() {
    let output_file = assert_fs::NamedTempFile::new("cash_flow.png").unwrap();
    let output_arg = output_file.path().to_str().unwrap().to_string();

    let mut cmd = assert_cmd::cargo_bin_cmd!("hire-payback");
    cmd.args(["plot", "-o", &output_arg, "--horizon-months", "36"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains(format!(
            "Cash flow plot written to {output_arg}"
        )));

    let metadata = fs::metadata(&output_arg).unwrap();
    assert!(metadata.len() > 0);
}

#[test]
fn plot_creates_png_without_breakeven() {
    let output_file = assert_fs::NamedTempFile::new("cash_flow.png").unwrap();
    let output_arg = output_file.path().to_str().unwrap().to_string();

    let mut cmd = assert_cmd::cargo_bin_cmd!("hire-payback");
    cmd.args([
        "plot",
        "-o",
        &output_arg,
        "--undiscounted",
        "--annual-discount-rate",
        "0",
        "--utilization-rate",
        "0",
    ]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Cash flow plot written to"));

    let metadata = fs::metadata(&output_arg).unwrap();
    assert!(metadata.len() > 0);
}
