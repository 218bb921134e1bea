// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result};
use directories::BaseDirs;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

const DEFAULT_FILE_NAME: &str = ".ledger.dat";

/// Handle on the journal file. The text file is the only durable state;
/// structured transactions are re-derived from it on every read.
pub struct Store {
    path: PathBuf,
}

pub fn default_path() -> Result<PathBuf> {
    let base = BaseDirs::new().context("Could not determine home directory")?;
    Ok(base.home_dir().join(DEFAULT_FILE_NAME))
}

impl Store {
    pub fn new(path: Option<PathBuf>) -> Result<Self> {
        let path = match path {
            Some(p) => p,
            None => default_path()?,
        };
        Ok(Store { path })
    }

    /// Resolve the journal path from the global `--file` argument.
    pub fn from_matches(matches: &clap::ArgMatches) -> Result<Self> {
        Store::new(matches.get_one::<String>("file").map(PathBuf::from))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Create an empty journal if none exists yet.
    pub fn init(&self) -> Result<()> {
        if !self.path.exists() {
            self.save("")?;
        }
        Ok(())
    }

    /// Read the whole journal. A missing file reads as empty content; any
    /// other failure surfaces as an error.
    pub fn load(&self) -> Result<String> {
        if !self.path.exists() {
            return Ok(String::new());
        }
        fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read journal {}", self.path.display()))
    }

    /// Overwrite the journal atomically: write a sibling temp file, sync it,
    /// then rename over the target so a failed write is never observable.
    pub fn save(&self, content: &str) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create directory {}", parent.display()))?;
            }
        }

        let mut tmp = self.path.clone().into_os_string();
        tmp.push(".tmp");
        let tmp = PathBuf::from(tmp);

        let file = File::create(&tmp)
            .with_context(|| format!("Failed to create temp file {}", tmp.display()))?;
        let mut writer = BufWriter::new(file);
        writer
            .write_all(content.as_bytes())
            .with_context(|| format!("Failed to write journal {}", self.path.display()))?;
        writer.flush().context("Failed to flush journal")?;
        writer
            .get_ref()
            .sync_all()
            .context("Failed to sync journal to disk")?;

        fs::rename(&tmp, &self.path).map_err(|e| {
            let _ = fs::remove_file(&tmp);
            anyhow::anyhow!("Failed to replace {}: {}", self.path.display(), e)
        })?;
        Ok(())
    }
}
