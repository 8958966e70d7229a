#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::io::Write;
use tempfile::NamedTempFile;

pub fn fitcalc() -> Command {
    let mut cmd = cargo_bin_cmd!("fitcalc");
    cmd.env_remove("RUST_LOG");
    cmd
}

/// Write `contents` to a temp file that lives as long as the handle.
pub fn input_file(contents: &str) -> NamedTempFile {
    let mut f = NamedTempFile::new().expect("create temp input");
    f.write_all(contents.as_bytes()).expect("write temp input");
    f
}

pub const SWM_LINE: &str = "Type: Swimming; Duration: 1.000 h.; Distance: 0.994 km; \
                            Avg speed: 1.000 km/h; Calories: 336.000.";
pub const RUN_LINE: &str = "Type: Running; Duration: 1.000 h.; Distance: 9.750 km; \
                            Avg speed: 9.750 km/h; Calories: 699.750.";
pub const WLK_LINE: &str = "Type: SportsWalking; Duration: 1.000 h.; Distance: 5.850 km; \
                            Avg speed: 5.850 km/h; Calories: 157.500.";
