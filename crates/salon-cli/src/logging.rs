// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use crate::config::Config;
use anyhow::{Context, Result, anyhow};
use std::env;
use std::fs::{self, File, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

/// Installs the global subscriber writing to the configured log file.
/// The terminal belongs to the UI, so nothing is written to stdout.
pub fn init(config: &Config) -> Result<PathBuf> {
    let path = config.log_file()?;
    let file = open_log_file(&path)?;
    let rust_log = env::var("RUST_LOG").ok();
    let filter = build_filter(&config.log_level(), rust_log.as_deref())?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Arc::new(file))
        .with_ansi(false)
        .with_target(false)
        .try_init()
        .map_err(|error| anyhow!("install log subscriber: {error}"))?;
    Ok(path)
}

pub fn open_log_file(path: &Path) -> Result<File> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)
            .with_context(|| format!("create log directory {}", parent.display()))?;
    }
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| {
            format!(
                "open log file {} -- set [logging].file to a writable path",
                path.display()
            )
        })
}

/// A non-empty `RUST_LOG` wins over the configured level.
pub fn build_filter(level: &str, env_override: Option<&str>) -> Result<EnvFilter> {
    let directives = match env_override.map(str::trim) {
        Some(value) if !value.is_empty() => value,
        _ => level,
    };
    EnvFilter::try_new(directives).with_context(|| format!("parse log filter {directives:?}"))
}
