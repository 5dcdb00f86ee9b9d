//! Version-control integration.
//!
//! Modeled as a trait so the scaffolder's tests can substitute a fake
//! instead of spawning real processes.

use anyhow::{Context, Result};
use std::path::Path;
use std::process::Command;

pub trait VcsInitializer {
    /// Initialize a repository at `path`, optionally on a named initial
    /// branch, and stage all files.
    ///
    /// Fire-and-forget: the child's exit status is not inspected. Only a
    /// failure to spawn the tool at all surfaces as an error.
    fn init_repo(&self, path: &Path, branch: Option<&str>) -> Result<()>;
}

/// Shells out to the `git` binary.
pub struct GitCli;

impl VcsInitializer for GitCli {
    fn init_repo(&self, path: &Path, branch: Option<&str>) -> Result<()> {
        let mut init = Command::new("git");
        init.arg("init");
        if let Some(branch) = branch {
            init.args(["-b", branch]);
        }
        init.current_dir(path)
            .output()
            .context("Failed to run git init")?;

        Command::new("git")
            .args(["add", "-A"])
            .current_dir(path)
            .output()
            .context("Failed to run git add")?;

        Ok(())
    }
}
