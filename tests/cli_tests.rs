// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use rust_decimal::Decimal;
use std::io::Write;
use std::process::Command;
use tempfile::{NamedTempFile, tempdir};

fn config_file() -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{{}}").unwrap();
    file.flush().unwrap();
    file
}

fn solarbooks(args: &[&str]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_solarbooks"))
        .args(args)
        .env("RUST_LOG", "off")
        .output()
        .unwrap()
}

#[test]
fn calculations_ignore_a_missing_snapshot() {
    let cfg = config_file();
    let dir = tempdir().unwrap();
    let missing = dir.path().join("missing.json");
    let cfg_path = cfg.path().to_string_lossy().to_string();
    let snap_path = missing.to_string_lossy().to_string();

    let out = solarbooks(&[
        "--config",
        &cfg_path,
        "--snapshot",
        &snap_path,
        "kw",
        "--watt",
        "540",
        "--qty",
        "20",
    ]);
    assert!(out.status.success());
    assert_eq!(String::from_utf8_lossy(&out.stdout).trim(), "10.8 kW");

    let out = solarbooks(&[
        "--config",
        &cfg_path,
        "--snapshot",
        &snap_path,
        "quote",
        "--value",
        "250000",
        "--supply",
        "80",
        "--json",
    ]);
    assert!(out.status.success());
    let v: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    let total: Decimal = v["final_amount"].as_str().unwrap().parse().unwrap();
    assert_eq!(total, Decimal::from(250000));
}

#[test]
fn record_commands_still_need_the_snapshot() {
    let cfg = config_file();
    let dir = tempdir().unwrap();
    let missing = dir.path().join("missing.json");
    let cfg_path = cfg.path().to_string_lossy().to_string();
    let snap_path = missing.to_string_lossy().to_string();
    let out = solarbooks(&[
        "--config",
        &cfg_path,
        "--snapshot",
        &snap_path,
        "tx",
        "summary",
    ]);
    assert!(!out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("snapshot error"));
}
