use anyhow::Result;
use clap::Parser;
use colored::*;

use cmake_new::config::{FileConfig, Flags, Options};
use cmake_new::paths;
use cmake_new::scaffold;
use cmake_new::vcs::GitCli;

#[derive(Parser)]
#[command(
    name = "cmake-new",
    version = env!("CARGO_PKG_VERSION"),
    about = "Scaffold a new CMake project",
    long_about = None
)]
struct Cli {
    /// Project name (letters, digits, `_`, `-`)
    project: String,

    /// Language (e.g., C, CXX, C++, C++20 (default))
    #[arg(short, long)]
    lang: Option<String>,

    /// CMake generator (e.g., Ninja (default), Unix Makefiles)
    #[arg(short, long)]
    generator: Option<String>,

    /// Project type: exe (default) or lib
    #[arg(short = 't', long = "type")]
    project_type: Option<String>,

    /// Generate VSCode tasks.json
    #[arg(long)]
    vscode: bool,

    /// Initialize a git repository and stage the generated files
    #[arg(long)]
    git: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let file = FileConfig::load(&paths::user_config_path());
    let options = Options::defaults().apply_file(file.as_ref()).apply_flags(&Flags {
        lang: cli.lang,
        generator: cli.generator,
        project_type: cli.project_type,
        vscode: cli.vscode,
        git: cli.git,
    });

    let summary = format!(
        "Project '{}' created with language {}, generator {}, and type {}.",
        cli.project, options.lang, options.generator, options.project_type
    );

    let config = options.resolve(&cli.project)?;
    scaffold::create_project(&config, &GitCli)?;

    println!("\n{}", summary.green());
    println!("\nConfigure, build, and run:");
    println!("  cd {}", cli.project);
    println!("  cmake --preset debug");
    println!("  cmake --build --preset debug");
    println!("  ./build/debug/{}", cli.project);

    Ok(())
}
