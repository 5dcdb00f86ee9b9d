//! Text rendering for every generated file.
//!
//! Pure functions of the resolved configuration - no filesystem access, so
//! a rendering problem aborts the run before any directory is created.

use anyhow::Result;
use serde_json::json;

use crate::config::{ProjectType, ResolvedConfig};
use crate::lang::Language;

/// Starter source file. Four fixed variants over {language x type}, each
/// interpolating only the project name.
pub fn main_source(config: &ResolvedConfig) -> String {
    let name = &config.project_name;
    match (config.project_type, config.language) {
        (ProjectType::Exe, Language::C) => format!(
            "#include <stdio.h>\n\
             \n\
             int main(void) {{\n    printf(\"Hello from {name}\\n\");\n    return 0;\n}}\n"
        ),
        (ProjectType::Exe, Language::Cxx) => format!(
            "#include <iostream>\n\
             \n\
             int main() {{\n    std::cout << \"Hello from {name}\" << std::endl;\n    return 0;\n}}\n"
        ),
        (ProjectType::Lib, Language::C) => format!(
            "#include <stdio.h>\n\
             \n\
             void {name}_hello(void) {{\n    printf(\"Hello from {name} (lib)\\n\");\n}}\n"
        ),
        (ProjectType::Lib, Language::Cxx) => format!(
            "#include <iostream>\n\
             \n\
             void {name}_hello() {{\n    std::cout << \"Hello from {name} (lib)\" << std::endl;\n}}\n"
        ),
    }
}

/// `CMakeLists.txt`: project declaration, recursive source glob, the target,
/// an optional `CXX_STANDARD` pin, and a guarded external/ include.
pub fn cmake_lists(config: &ResolvedConfig) -> String {
    let name = &config.project_name;
    let ext = config.language.source_ext();

    let mut out = format!(
        "cmake_minimum_required(VERSION 3.15)\n\
         project({name} LANGUAGES {lang})\n\
         \n\
         file(GLOB_RECURSE SOURCES CONFIGURE_DEPENDS \"src/*.{ext}\")\n\
         \n",
        lang = config.language.cmake_name(),
    );

    match config.project_type {
        ProjectType::Exe => out.push_str(&format!("add_executable({name} ${{SOURCES}})\n")),
        ProjectType::Lib => out.push_str(&format!("add_library({name} ${{SOURCES}})\n")),
    }

    if config.language == Language::Cxx {
        if let Some(std) = config.standard {
            out.push_str(&format!(
                "set_property(TARGET {name} PROPERTY CXX_STANDARD {})\n",
                std.as_str()
            ));
        }
    }

    out.push_str(
        "\nif(EXISTS \"${CMAKE_CURRENT_SOURCE_DIR}/external/CMakeLists.txt\")\n    \
         add_subdirectory(external)\nendif()\n",
    );

    out
}

/// `CMakePresets.json`: debug and release configure presets carrying the
/// chosen generator, plus the matching build presets.
pub fn cmake_presets(config: &ResolvedConfig) -> Result<String> {
    let preset = |name: &str, display: &str, build_type: &str| {
        json!({
            "name": name,
            "displayName": display,
            "description": format!("Use {display} configuration"),
            "generator": config.generator.clone(),
            "binaryDir": format!("${{sourceDir}}/build/{name}"),
            "cacheVariables": {
                "CMAKE_BUILD_TYPE": build_type
            }
        })
    };

    let presets = json!({
        "version": 3,
        "cmakeMinimumRequired": { "major": 3, "minor": 15, "patch": 0 },
        "configurePresets": [
            preset("debug", "Debug", "Debug"),
            preset("release", "Release", "Release"),
        ],
        "buildPresets": [
            { "name": "debug", "configurePreset": "debug" },
            { "name": "release", "configurePreset": "release" },
        ]
    });

    Ok(serde_json::to_string_pretty(&presets)?)
}

/// `.vscode/tasks.json`: six shell tasks wiring configure -> build -> run
/// for each preset. Configure tasks are hidden, build tasks visible.
pub fn vscode_tasks(config: &ResolvedConfig) -> Result<String> {
    let exe = &config.project_name;

    let triple = |preset: &str, display: &str| {
        vec![
            json!({
                "label": format!("Configure ({display})"),
                "type": "shell",
                "command": format!("cmake --preset {preset}"),
                "hide": true
            }),
            json!({
                "label": format!("Build ({display})"),
                "type": "shell",
                "command": format!("cmake --build --preset {preset}"),
                "dependsOn": [format!("Configure ({display})")],
                "dependsOrder": "sequence",
                "hide": false
            }),
            json!({
                "label": format!("Run ({display})"),
                "type": "shell",
                "command": format!("./build/{preset}/{exe}"),
                "dependsOn": [format!("Build ({display})")],
                "dependsOrder": "sequence"
            }),
        ]
    };

    let mut tasks = triple("debug", "Debug");
    tasks.extend(triple("release", "Release"));

    let document = json!({
        "version": "2.0.0",
        "tasks": tasks
    });

    Ok(serde_json::to_string_pretty(&document)?)
}

/// Project README with the preset-based build instructions.
pub fn readme(config: &ResolvedConfig) -> String {
    let name = &config.project_name;
    format!(
        "# {name}\n\
         \n\
         ## Building\n\
         \n\
         ```sh\n\
         cmake --preset debug\n\
         cmake --build --preset debug\n\
         ./build/debug/{name}\n\
         ```\n\
         \n\
         Use the `release` preset for optimized builds.\n"
    )
}

/// Written only when git initialization is requested.
pub const GITIGNORE: &str = "build/\n.cache/\ncompile_commands.json\n";
