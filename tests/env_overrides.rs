// Threshold read from the environment in a child process.
#![cfg(feature = "parallel")]

use std::process::Command;

#[test]
fn print_threshold() {
    println!("threshold={}", arrayfft::parallel_lane_threshold());
}

fn threshold_with_env(vars: &[(&str, &str)]) -> usize {
    let exe = std::env::current_exe().unwrap();
    let mut cmd = Command::new(&exe);
    cmd.env_remove("ARRAYFFT_PAR_THRESHOLD")
        .env_remove("ARRAYFFT_PAR_PER_CORE_WORK");
    for &(key, value) in vars {
        cmd.env(key, value);
    }
    let output = cmd
        .args(["--exact", "print_threshold", "--nocapture"])
        .output()
        .expect("run threshold test");
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    // libtest may print the test name on the same line
    stdout
        .lines()
        .find_map(|l| l.split_once("threshold=")?.1.trim().parse().ok())
        .unwrap()
}

#[test]
fn env_threshold_is_used() {
    assert_eq!(threshold_with_env(&[("ARRAYFFT_PAR_THRESHOLD", "32")]), 32);
    assert_eq!(threshold_with_env(&[("ARRAYFFT_PAR_THRESHOLD", "64")]), 64);
}

#[test]
fn per_core_work_scales_threshold() {
    let t1 = threshold_with_env(&[("ARRAYFFT_PAR_PER_CORE_WORK", "100")]);
    let t2 = threshold_with_env(&[("ARRAYFFT_PAR_PER_CORE_WORK", "200")]);
    assert_eq!(t2, 2 * t1);
}

#[test]
fn invalid_env_value_falls_back_to_heuristic() {
    let fallback = threshold_with_env(&[("ARRAYFFT_PAR_PER_CORE_WORK", "100")]);
    let t = threshold_with_env(&[
        ("ARRAYFFT_PAR_THRESHOLD", "not-a-number"),
        ("ARRAYFFT_PAR_PER_CORE_WORK", "100"),
    ]);
    assert_eq!(t, fallback);
    let t = threshold_with_env(&[("ARRAYFFT_PAR_PER_CORE_WORK", "-5")]);
    assert_eq!(t, 4096 * (fallback / 100));
}
