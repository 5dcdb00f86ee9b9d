//! Language token mapping.
//!
//! User-supplied tokens like `c++17` or `C11` collapse into one of two
//! canonical CMake languages plus, for C++, an optional standard level.

use anyhow::{bail, Result};

/// Canonical project language, in CMake's vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    C,
    Cxx,
}

impl Language {
    /// Name as it appears in `project(... LANGUAGES <name>)`.
    pub fn cmake_name(self) -> &'static str {
        match self {
            Language::C => "C",
            Language::Cxx => "CXX",
        }
    }

    /// Extension used for the starter source file.
    pub fn source_ext(self) -> &'static str {
        match self {
            Language::C => "c",
            Language::Cxx => "cpp",
        }
    }
}

/// C++ standard levels the generator knows how to pin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Standard {
    Cxx14,
    Cxx17,
    Cxx20,
}

impl Standard {
    /// Value for the `CXX_STANDARD` target property.
    pub fn as_str(self) -> &'static str {
        match self {
            Standard::Cxx14 => "14",
            Standard::Cxx17 => "17",
            Standard::Cxx20 => "20",
        }
    }
}

/// Map a user-supplied language token (case-insensitive) to a canonical
/// language and optional C++ standard.
///
/// `c`, `c89`, `c99`, `c11` select C with no standard. Anything containing
/// `c++` or `cxx` selects C++; the known suffixed forms pick a standard,
/// everything else leaves it unset. All other tokens are rejected.
pub fn parse_language(token: &str) -> Result<(Language, Option<Standard>)> {
    let lower = token.to_lowercase();

    let language = match lower.as_str() {
        "c" | "c89" | "c99" | "c11" => Language::C,
        _ if lower.contains("c++") || lower.contains("cxx") => Language::Cxx,
        _ => bail!("Unsupported language: {}", token),
    };

    let standard = match (language, lower.as_str()) {
        (Language::Cxx, "c++20" | "cxx20") => Some(Standard::Cxx20),
        (Language::Cxx, "c++17" | "cxx17") => Some(Standard::Cxx17),
        (Language::Cxx, "c++14" | "cxx14" | "c++" | "cxx") => Some(Standard::Cxx14),
        _ => None,
    };

    Ok((language, standard))
}
