// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Collaborator wrapper around the external `ledger` binary. All balance and
//! register computation happens there; this crate only shells out, captures
//! stdout and renders it.

use std::io;
use std::path::{Path, PathBuf};
use std::process::Command;

#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("ledger command not found, please install ledger")]
    NotFound,
    #[error("ledger command failed: {stderr}")]
    Failed { stderr: String },
    #[error("failed to run ledger: {0}")]
    Io(#[from] io::Error),
}

pub struct Engine {
    file: PathBuf,
}

impl Engine {
    pub fn new(file: impl AsRef<Path>) -> Self {
        Engine {
            file: file.as_ref().to_path_buf(),
        }
    }

    /// Run `ledger -f <file> [args...] <command>` and return trimmed stdout.
    pub fn run(&self, command: &str, args: &[&str]) -> Result<String, EngineError> {
        let output = Command::new("ledger")
            .arg("-f")
            .arg(&self.file)
            .args(args)
            .arg(command)
            .output()
            .map_err(|e| {
                if e.kind() == io::ErrorKind::NotFound {
                    EngineError::NotFound
                } else {
                    EngineError::Io(e)
                }
            })?;

        if !output.status.success() {
            return Err(EngineError::Failed {
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }
        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }

    pub fn accounts(&self) -> Result<String, EngineError> {
        self.run("accounts", &[])
    }

    pub fn balance(&self, account: Option<&str>) -> Result<String, EngineError> {
        match account {
            Some(a) => self.run("balance", &[a]),
            None => self.run("balance", &[]),
        }
    }

    pub fn register(&self, account: Option<&str>) -> Result<String, EngineError> {
        match account {
            Some(a) => self.run("register", &[a]),
            None => self.run("register", &[]),
        }
    }
}
