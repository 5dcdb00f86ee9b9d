//! Filesystem materialization: turn rendered text into directories and
//! files under the new project root.
//!
//! Creation is not atomic. A write failure partway through leaves a
//! partially populated directory behind; nothing is rolled back.

use anyhow::{bail, Context, Result};
use colored::*;
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::ResolvedConfig;
use crate::templates;
use crate::vcs::VcsInitializer;

/// Create the project directory in the current working directory.
pub fn create_project(config: &ResolvedConfig, vcs: &dyn VcsInitializer) -> Result<PathBuf> {
    create_project_in(Path::new("."), config, vcs)
}

/// Create `<base>/<name>` and populate it from the resolved configuration.
///
/// The target directory must not pre-exist; nothing is ever overwritten.
/// All templates are rendered before the first directory is created, so a
/// rendering failure has zero filesystem side effects.
pub fn create_project_in(
    base: &Path,
    config: &ResolvedConfig,
    vcs: &dyn VcsInitializer,
) -> Result<PathBuf> {
    let root = base.join(&config.project_name);
    if root.exists() {
        bail!("Project directory already exists: {}", config.project_name);
    }

    let main_source = templates::main_source(config);
    let cmake_lists = templates::cmake_lists(config);
    let presets = templates::cmake_presets(config)?;
    let tasks = if config.vscode_tasks {
        Some(templates::vscode_tasks(config)?)
    } else {
        None
    };
    let readme = templates::readme(config);

    let src_dir = root.join("src");
    fs::create_dir_all(&src_dir)
        .with_context(|| format!("Failed to create {}", src_dir.display()))?;

    let main_name = format!("main.{}", config.language.source_ext());
    write_file(&src_dir.join(main_name), &main_source)?;
    write_file(&root.join("CMakeLists.txt"), &cmake_lists)?;
    write_file(&root.join("CMakePresets.json"), &presets)?;
    write_file(&root.join("README.md"), &readme)?;

    if let Some(tasks) = tasks {
        let vscode_dir = root.join(".vscode");
        fs::create_dir_all(&vscode_dir)
            .with_context(|| format!("Failed to create {}", vscode_dir.display()))?;
        write_file(&vscode_dir.join("tasks.json"), &tasks)?;
    }

    if config.git_init {
        write_file(&root.join(".gitignore"), templates::GITIGNORE)?;
        if let Err(e) = vcs.init_repo(&root, config.git_branch.as_deref()) {
            eprintln!("{}", format!("⚠️  Git initialization skipped: {:#}", e).yellow());
        }
    }

    Ok(root)
}

fn write_file(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content).with_context(|| format!("Failed to write {}", path.display()))?;
    println!("  ✓ {}", path.display());
    Ok(())
}
