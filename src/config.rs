//! Option resolution: built-in defaults, then the user config file, then
//! command-line flags. Later sources override earlier ones.
//!
//! Each layer consumes the previous value and returns a new one, so the
//! merge order is visible at the call site instead of hidden behind
//! in-place mutation.

use anyhow::{bail, Result};
use colored::*;
use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::lang::{parse_language, Language, Standard};

/// Keys accepted in the persisted user config file. All optional; unknown
/// keys are ignored.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    pub lang: Option<String>,
    pub generator: Option<String>,
    pub r#type: Option<String>,
    pub vscode_tasks: Option<bool>,
    pub git: Option<bool>,
    pub git_branch: Option<String>,
    pub branch: Option<String>,
}

impl FileConfig {
    /// Read the config file at `path`. A missing file yields `None`; a
    /// malformed one prints a warning and also yields `None` - a broken
    /// config never aborts a run.
    pub fn load(path: &Path) -> Option<Self> {
        let content = fs::read_to_string(path).ok()?;
        match serde_json::from_str(&content) {
            Ok(config) => Some(config),
            Err(e) => {
                eprintln!(
                    "{}",
                    format!("⚠️  Ignoring malformed config {}: {}", path.display(), e).yellow()
                );
                None
            }
        }
    }

    /// `git_branch` wins over the older `branch` spelling.
    fn initial_branch(&self) -> Option<String> {
        self.git_branch.clone().or_else(|| self.branch.clone())
    }
}

/// Values taken from the command line. `None` / `false` means the flag was
/// not given and the lower layers apply.
#[derive(Debug, Default, Clone)]
pub struct Flags {
    pub lang: Option<String>,
    pub generator: Option<String>,
    pub project_type: Option<String>,
    pub vscode: bool,
    pub git: bool,
}

/// Raw option set before validation. Starts from defaults and is layered
/// with `apply_file` and `apply_flags`.
#[derive(Debug, Clone)]
pub struct Options {
    pub lang: String,
    pub generator: String,
    pub project_type: String,
    pub vscode_tasks: bool,
    pub git_init: bool,
    pub git_branch: Option<String>,
}

impl Options {
    /// Built-in defaults: C++20 executable built with Ninja, no editor
    /// tasks, no git.
    pub fn defaults() -> Self {
        Self {
            lang: "C++20".to_string(),
            generator: "Ninja".to_string(),
            project_type: "exe".to_string(),
            vscode_tasks: false,
            git_init: false,
            git_branch: None,
        }
    }

    /// Overlay values from the user config file, when one was loaded.
    pub fn apply_file(self, file: Option<&FileConfig>) -> Self {
        let Some(file) = file else {
            return self;
        };
        Self {
            lang: file.lang.clone().unwrap_or(self.lang),
            generator: file.generator.clone().unwrap_or(self.generator),
            project_type: file.r#type.clone().unwrap_or(self.project_type),
            vscode_tasks: file.vscode_tasks.unwrap_or(self.vscode_tasks),
            git_init: file.git.unwrap_or(self.git_init),
            git_branch: file.initial_branch().or(self.git_branch),
        }
    }

    /// Overlay command-line flags. Flags win over everything below them;
    /// the boolean flags only ever switch a feature on.
    pub fn apply_flags(self, flags: &Flags) -> Self {
        Self {
            lang: flags.lang.clone().unwrap_or(self.lang),
            generator: flags.generator.clone().unwrap_or(self.generator),
            project_type: flags.project_type.clone().unwrap_or(self.project_type),
            vscode_tasks: self.vscode_tasks || flags.vscode,
            git_init: self.git_init || flags.git,
            git_branch: self.git_branch,
        }
    }

    /// Validate the merged options and freeze them into a `ResolvedConfig`.
    ///
    /// Checks run in a fixed order - project name, language, project type -
    /// and all of them complete before anything touches the filesystem, so
    /// a failure here guarantees zero side effects.
    pub fn resolve(self, project_name: &str) -> Result<ResolvedConfig> {
        if project_name.is_empty() {
            bail!("Project name required");
        }
        if !is_valid_project_name(project_name) {
            bail!("Invalid project name: {}", project_name);
        }

        let (language, standard) = parse_language(&self.lang)?;
        let project_type = ProjectType::parse(&self.project_type)?;

        Ok(ResolvedConfig {
            project_name: project_name.to_string(),
            language,
            standard,
            generator: self.generator,
            project_type,
            vscode_tasks: self.vscode_tasks,
            git_init: self.git_init,
            git_branch: self.git_branch,
        })
    }
}

/// Project names are restricted to `[A-Za-z0-9_-]+` - they become directory
/// names, CMake target names, and C identifiers in the lib template.
pub fn is_valid_project_name(name: &str) -> bool {
    !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
}

/// What kind of CMake target the starter project defines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectType {
    Exe,
    Lib,
}

impl ProjectType {
    /// Map a user-supplied type token (case-insensitive).
    pub fn parse(token: &str) -> Result<Self> {
        match token.to_lowercase().as_str() {
            "exe" => Ok(ProjectType::Exe),
            "lib" => Ok(ProjectType::Lib),
            _ => bail!("Unknown project type: {}", token),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ProjectType::Exe => "exe",
            ProjectType::Lib => "lib",
        }
    }
}

/// The final merged generation options. Built once per run, immutable,
/// consumed directly by the template renderer and the scaffolder.
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub project_name: String,
    pub language: Language,
    pub standard: Option<Standard>,
    pub generator: String,
    pub project_type: ProjectType,
    pub vscode_tasks: bool,
    pub git_init: bool,
    pub git_branch: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    fn write_config(dir: &TempDir, content: &str) -> std::path::PathBuf {
        let path = dir.path().join("cmake-new.json");
        let mut f = fs::File::create(&path).unwrap();
        f.write_all(content.as_bytes()).unwrap();
        path
    }

    #[test]
    fn test_defaults() {
        let opts = Options::defaults();
        assert_eq!(opts.lang, "C++20");
        assert_eq!(opts.generator, "Ninja");
        assert_eq!(opts.project_type, "exe");
        assert!(!opts.vscode_tasks);
        assert!(!opts.git_init);
        assert!(opts.git_branch.is_none());
    }

    #[test]
    fn test_file_overrides_defaults() {
        let file = FileConfig {
            lang: Some("C11".to_string()),
            generator: Some("Unix Makefiles".to_string()),
            git: Some(true),
            git_branch: Some("trunk".to_string()),
            ..Default::default()
        };
        let opts = Options::defaults().apply_file(Some(&file));
        assert_eq!(opts.lang, "C11");
        assert_eq!(opts.generator, "Unix Makefiles");
        assert_eq!(opts.project_type, "exe"); // absent key falls back
        assert!(opts.git_init);
        assert_eq!(opts.git_branch.as_deref(), Some("trunk"));
    }

    #[test]
    fn test_flags_override_file() {
        let file = FileConfig {
            lang: Some("C11".to_string()),
            r#type: Some("lib".to_string()),
            ..Default::default()
        };
        let flags = Flags {
            lang: Some("c++17".to_string()),
            ..Default::default()
        };
        let opts = Options::defaults().apply_file(Some(&file)).apply_flags(&flags);
        assert_eq!(opts.lang, "c++17"); // flag wins
        assert_eq!(opts.project_type, "lib"); // absent flag falls back to file
        assert_eq!(opts.generator, "Ninja"); // absent everywhere: default
    }

    #[test]
    fn test_boolean_flags_only_enable() {
        let file = FileConfig {
            vscode_tasks: Some(true),
            ..Default::default()
        };
        let opts = Options::defaults()
            .apply_file(Some(&file))
            .apply_flags(&Flags::default());
        assert!(opts.vscode_tasks); // absent flag cannot switch it back off

        let opts = Options::defaults().apply_flags(&Flags {
            git: true,
            ..Default::default()
        });
        assert!(opts.git_init);
    }

    #[test]
    fn test_git_branch_wins_over_branch_alias() {
        let file = FileConfig {
            git_branch: Some("main".to_string()),
            branch: Some("develop".to_string()),
            ..Default::default()
        };
        let opts = Options::defaults().apply_file(Some(&file));
        assert_eq!(opts.git_branch.as_deref(), Some("main"));

        let file = FileConfig {
            branch: Some("develop".to_string()),
            ..Default::default()
        };
        let opts = Options::defaults().apply_file(Some(&file));
        assert_eq!(opts.git_branch.as_deref(), Some("develop"));
    }

    #[test]
    fn test_load_missing_file_is_none() {
        let dir = TempDir::new().unwrap();
        assert!(FileConfig::load(&dir.path().join("nope.json")).is_none());
    }

    #[test]
    fn test_load_malformed_file_is_none() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, "{ not json at all");
        // Warning goes to stderr; resolution continues on prior values.
        assert!(FileConfig::load(&path).is_none());
    }

    #[test]
    fn test_load_ignores_unknown_keys() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, r#"{"lang": "c99", "future_key": 42}"#);
        let config = FileConfig::load(&path).unwrap();
        assert_eq!(config.lang.as_deref(), Some("c99"));
    }

    #[test]
    fn test_resolve_happy_path() {
        let config = Options::defaults().resolve("demo").unwrap();
        assert_eq!(config.project_name, "demo");
        assert_eq!(config.language, Language::Cxx);
        assert_eq!(config.standard, Some(Standard::Cxx20));
        assert_eq!(config.project_type, ProjectType::Exe);
    }

    #[test]
    fn test_resolve_is_case_insensitive() {
        let upper = Options {
            lang: "C++20".to_string(),
            ..Options::defaults()
        }
        .resolve("demo")
        .unwrap();
        let lower = Options {
            lang: "c++20".to_string(),
            ..Options::defaults()
        }
        .resolve("demo")
        .unwrap();
        assert_eq!(upper.language, lower.language);
        assert_eq!(upper.standard, lower.standard);
    }

    #[test]
    fn test_resolve_rejects_bad_names() {
        for name in ["", "has space", "semi;colon", "dot.dot", "a/b"] {
            assert!(Options::defaults().resolve(name).is_err(), "name {:?}", name);
        }
        for name in ["demo", "my-tool", "lib_v2", "X"] {
            assert!(Options::defaults().resolve(name).is_ok(), "name {:?}", name);
        }
    }

    #[test]
    fn test_language_error_precedes_type_error() {
        let opts = Options {
            lang: "rust".to_string(),
            project_type: "plugin".to_string(),
            ..Options::defaults()
        };
        let err = opts.resolve("demo").unwrap_err();
        assert!(err.to_string().contains("Unsupported language"));
    }

    #[test]
    fn test_unknown_project_type() {
        let opts = Options {
            project_type: "plugin".to_string(),
            ..Options::defaults()
        };
        let err = opts.resolve("demo").unwrap_err();
        assert!(err.to_string().contains("Unknown project type"));
    }
}
