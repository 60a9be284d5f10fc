#![allow(dead_code)]

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};
use std::time::{SystemTime, UNIX_EPOCH};

const SCRUBBED_VARS: &[&str] = &[
    "GEMINI_API_KEY",
    "MODEL",
    "MODEL_BASE_URL",
    "MODEL_TEMPERATURE",
    "MODEL_TIMEOUT_SECS",
    "SYSTEM_PROMPT",
    "RUST_LOG",
    "LOG_FORMAT",
    "LOG_OUTPUT",
    "LOG_FILE_PATH",
];

pub fn unique_temp_dir(suffix: &str) -> PathBuf {
    let stamp = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("system clock should be after unix epoch")
        .as_nanos();
    let dir = std::env::temp_dir().join(format!(
        "docqa-it-{suffix}-{stamp}-{}",
        std::process::id()
    ));
    fs::create_dir_all(&dir).expect("failed to create temp directory");
    dir
}

/// Runs the binary from `workdir` with a scrubbed environment plus `envs`,
/// feeding `stdin` and waiting for it to exit.
pub fn run_docqa(workdir: &Path, envs: &[(&str, &str)], stdin: &str) -> Output {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_docqa"));
    cmd.current_dir(workdir)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped());
    for var in SCRUBBED_VARS {
        cmd.env_remove(var);
    }
    for (key, value) in envs {
        cmd.env(key, value);
    }

    let mut child = cmd.spawn().expect("failed to spawn docqa binary");
    {
        let mut pipe = child.stdin.take().expect("stdin should be piped");
        // The binary may exit before reading everything.
        let _ = pipe.write_all(stdin.as_bytes());
    }
    child.wait_with_output().expect("failed to wait for docqa")
}
