//! Flavor Registry
//!
//! Simple in-memory registry of named flavors, filled from the built-in
//! flavor and any user flavor directories.

use std::collections::HashMap;
use std::path::Path;
use std::sync::LazyLock;

use anyhow::{Context, Result};
use regex::Regex;

use super::schema::Flavor;
use crate::error::FlavorError;

static MODELINE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"gcode_flavor\s*=\s*([\w-]+)").expect("valid modeline regex")
});

/// Simple in-memory flavor registry
#[derive(Debug, Clone, Default)]
pub struct FlavorRegistry {
    flavors: HashMap<String, Flavor>,
    active_flavor: Option<String>,
}

impl FlavorRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding only the embedded flavor
    pub fn with_builtin() -> Self {
        let mut registry = Self::new();
        registry.add_flavor(Flavor::builtin());
        registry
    }

    /// Add a flavor, replacing any flavor with the same name
    pub fn add_flavor(&mut self, flavor: Flavor) {
        if self.flavors.contains_key(&flavor.name) {
            log::debug!("Overriding flavor '{}'", flavor.name);
        }
        self.flavors.insert(flavor.name.clone(), flavor);
    }

    /// Set the active flavor, refusing names that are not registered
    pub fn set_active_flavor(&mut self, name: &str) -> bool {
        if self.flavors.contains_key(name) {
            self.active_flavor = Some(name.to_string());
            true
        } else {
            false
        }
    }

    /// Get the currently active flavor
    ///
    /// Looked up by name, so a flavor added later under the same name
    /// replaces the active one.
    pub fn get_active_flavor(&self) -> Option<&Flavor> {
        self.active_flavor
            .as_ref()
            .and_then(|name| self.flavors.get(name))
    }

    pub fn get_flavor(&self, name: &str) -> Option<&Flavor> {
        self.flavors.get(name)
    }

    /// Look up a flavor that must exist
    pub fn require_flavor(&self, name: &str) -> Result<&Flavor, FlavorError> {
        self.get_flavor(name)
            .ok_or_else(|| FlavorError::UnknownFlavor(name.to_string()))
    }

    /// List all available flavors
    pub fn list_flavors(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.flavors.keys().map(|s| s.as_str()).collect();
        names.sort_unstable();
        names
    }

    /// Load every `*.toml` flavor file in `dir`
    ///
    /// A missing directory loads nothing. Files that fail to read or
    /// validate are logged and skipped. Returns the number of flavors loaded.
    pub fn load_directory(&mut self, dir: &Path) -> Result<usize> {
        if !dir.exists() {
            return Ok(0);
        }

        let mut paths = Vec::new();
        for entry in std::fs::read_dir(dir)
            .with_context(|| format!("Failed to read flavor directory: {}", dir.display()))?
        {
            let path = entry?.path();
            if path.extension().and_then(|s| s.to_str()) == Some("toml") {
                paths.push(path);
            }
        }
        paths.sort();

        let mut loaded = 0;
        for path in paths {
            match load_flavor_file(&path) {
                Ok(flavor) => {
                    log::debug!("Loaded flavor '{}' from {}", flavor.name, path.display());
                    self.add_flavor(flavor);
                    loaded += 1;
                }
                Err(e) => log::warn!("Skipping flavor file {}: {:#}", path.display(), e),
            }
        }

        Ok(loaded)
    }

    /// Detect flavor from modeline in document content
    ///
    /// Only the first and last five lines are checked, and only registered
    /// flavors are returned.
    pub fn detect_modeline_flavor(&self, content: &str) -> Option<String> {
        let lines: Vec<&str> = content.lines().collect();
        let check_lines: Vec<&str> = if lines.len() <= 10 {
            lines
        } else {
            let mut check = Vec::new();
            check.extend_from_slice(&lines[0..5]);
            check.extend_from_slice(&lines[lines.len() - 5..]);
            check
        };

        for line in check_lines {
            // ; gcode_flavor=marlin
            if let Some(captures) = MODELINE_RE.captures(line) {
                let name = captures.get(1)?.as_str();
                if self.flavors.contains_key(name) {
                    return Some(name.to_string());
                }
            }
        }

        None
    }
}

fn load_flavor_file(path: &Path) -> Result<Flavor> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read flavor file: {}", path.display()))?;
    Flavor::from_toml(&content)
        .with_context(|| format!("Failed to parse flavor TOML: {}", path.display()))
}
