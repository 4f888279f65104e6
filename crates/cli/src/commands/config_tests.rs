// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use std::fs;
use tempfile::TempDir;

#[test]
fn init_writes_defaults() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("nested").join("config.toml");

    init_at(&path, false).unwrap();

    assert_eq!(Config::load(&path).unwrap(), Config::default());
}

#[test]
fn init_refuses_existing_file() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("config.toml");
    fs::write(&path, "api_url = \"http://keep.me:1\"\n").unwrap();

    let err = init_at(&path, false).unwrap_err();

    assert!(matches!(err, Error::ConfigExists(_)));
    assert!(fs::read_to_string(&path).unwrap().contains("keep.me"));
}

#[test]
fn init_force_overwrites() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("config.toml");
    fs::write(&path, "api_url = \"http://old:1\"\n").unwrap();

    init_at(&path, true).unwrap();

    assert_eq!(Config::load(&path).unwrap(), Config::default());
}

#[test]
fn to_toml_lists_every_field() {
    let text = to_toml(&Config::default()).unwrap();
    for key in ["api_url", "review_lines", "review_width", "utc"] {
        assert!(text.contains(key), "missing {key}");
    }
}
