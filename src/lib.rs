pub mod config;
pub mod lang;
pub mod paths;
pub mod scaffold;
pub mod templates;
pub mod vcs;

// Re-export commonly used types
pub use config::{FileConfig, Flags, Options, ProjectType, ResolvedConfig};
pub use lang::{Language, Standard};
pub use vcs::{GitCli, VcsInitializer};
