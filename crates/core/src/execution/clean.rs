//! In-process removal of generated files
//!
//! Patterns are globs relative to the workspace root. `*` never crosses a path
//! separator, so `EER_XML_Schema/*_transformed.txt` only matches direct
//! children of `EER_XML_Schema`. Use `**` to descend.

use std::collections::VecDeque;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use globset::{GlobBuilder, GlobMatcher};

use crate::types::{ArmeerError, ArmeerResult};

const GLOB_META: &[char] = &['*', '?', '[', '{'];

/// Files matched by one pattern
#[derive(Debug)]
pub struct PatternMatches {
    pub pattern: String,
    pub files: Vec<PathBuf>,
}

/// Resolve every pattern to the files it matches, without touching them
pub fn find_matches(workspace_root: &Path, patterns: &[String]) -> ArmeerResult<Vec<PatternMatches>> {
    patterns
        .iter()
        .map(|pattern| {
            let files = find_pattern_matches(workspace_root, pattern)?;
            Ok(PatternMatches {
                pattern: pattern.clone(),
                files,
            })
        })
        .collect()
}

/// Delete every file matching the patterns.
///
/// Each pattern must match at least one file, otherwise nothing is deleted and
/// [`ArmeerError::NoMatches`] is returned for the first empty pattern.
pub fn remove_matching(workspace_root: &Path, patterns: &[String]) -> ArmeerResult<Vec<PathBuf>> {
    let matches = find_matches(workspace_root, patterns)?;

    if let Some(empty) = matches.iter().find(|m| m.files.is_empty()) {
        return Err(ArmeerError::NoMatches {
            pattern: empty.pattern.clone(),
            root: workspace_root.to_path_buf(),
        });
    }

    let mut files: Vec<PathBuf> = matches.into_iter().flat_map(|m| m.files).collect();
    files.sort();
    files.dedup();

    for file in &files {
        std::fs::remove_file(file).map_err(|e| {
            ArmeerError::Task(format!("Failed to remove {}: {}", file.display(), e))
        })?;
        tracing::debug!(file = %file.display(), "removed");
    }

    Ok(files)
}

fn find_pattern_matches(workspace_root: &Path, pattern: &str) -> ArmeerResult<Vec<PathBuf>> {
    let matcher = compile(pattern)?;
    let (base, remaining) = split_pattern(pattern);

    // Only `**` or a multi-level remainder can match below the base directory
    let descend = remaining.len() > 1 || remaining.contains(&"**");
    let (dir_components, file_component) = match remaining.split_last() {
        Some((last, dirs)) => (dirs, *last),
        None => (&[][..], ""),
    };
    let hidden_files = file_component.starts_with('.');
    let hidden_dirs = dir_components.iter().any(|c| c.starts_with('.'));

    let mut files = Vec::new();
    let mut queue = VecDeque::new();
    queue.push_back(workspace_root.join(base));

    while let Some(current_dir) = queue.pop_front() {
        let entries = match std::fs::read_dir(&current_dir) {
            Ok(entries) => entries,
            Err(e) if e.kind() == ErrorKind::NotFound => continue,
            Err(e) => return Err(read_error(&current_dir, e)),
        };

        for entry in entries {
            let entry = entry.map_err(|e| read_error(&current_dir, e))?;
            let file_type = entry.file_type().map_err(|e| read_error(&current_dir, e))?;
            let hidden = entry.file_name().to_string_lossy().starts_with('.');
            let path = entry.path();

            // `file_type` does not follow symlinks, so linked directories are never entered
            if file_type.is_dir() {
                if descend && (!hidden || hidden_dirs) {
                    queue.push_back(path);
                }
                continue;
            }
            if hidden && !hidden_files {
                continue;
            }

            let relative_path = path.strip_prefix(workspace_root).unwrap_or(&path);
            if matcher.is_match(relative_path) {
                files.push(path);
            }
        }
    }

    files.sort();
    Ok(files)
}

fn read_error(dir: &Path, error: std::io::Error) -> ArmeerError {
    ArmeerError::Task(format!("Failed to read directory {}: {}", dir.display(), error))
}

fn compile(pattern: &str) -> ArmeerResult<GlobMatcher> {
    GlobBuilder::new(pattern)
        .literal_separator(true)
        .build()
        .map(|glob| glob.compile_matcher())
        .map_err(|e| ArmeerError::Config(format!("Invalid pattern '{}': {}", pattern, e)))
}

/// Split `pattern` into its longest leading directory without glob syntax and
/// the components that follow it
fn split_pattern(pattern: &str) -> (PathBuf, Vec<&str>) {
    let components: Vec<&str> = pattern.split('/').filter(|c| !c.is_empty()).collect();
    let directories = components.len().saturating_sub(1);
    let literal = components[..directories]
        .iter()
        .take_while(|component| !component.contains(GLOB_META))
        .count();

    let base = components[..literal].iter().collect();
    (base, components[literal..].to_vec())
}
