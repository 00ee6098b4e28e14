//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use tracing::warn;

use crate::domain::value_objects::LayoutMode;
use crate::error::{NavError, NavResult};

use super::types::NavConfig;

/// Project config file name
pub const CONFIG_FILE_NAME: &str = "navmenu.toml";

/// Non-fatal configuration warning (e.g. an unknown key).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> NavResult<(NavConfig, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;
    parse_with_warnings(&content, path)
}

pub(crate) fn parse_with_warnings(content: &str, path: &Path) -> NavResult<(NavConfig, Vec<ConfigWarning>)> {
    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(content);

    let config: NavConfig = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| NavError::InvalidConfig {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Load from project config, user config, or defaults
pub fn load_or_default(project_root: Option<&Path>) -> NavConfig {
    let mut candidates: Vec<PathBuf> = Vec::new();
    if let Some(root) = project_root {
        candidates.push(root.join(CONFIG_FILE_NAME));
    }
    if let Some(user_config_dir) = dirs::config_dir() {
        candidates.push(user_config_dir.join("navmenu").join("config.toml"));
    }

    for candidate in candidates {
        if !candidate.exists() {
            continue;
        }
        match load_with_warnings(&candidate) {
            Ok((config, warnings)) => {
                for warning in &warnings {
                    warn!(
                        key = %warning.key,
                        file = %warning.file.display(),
                        line = ?warning.line,
                        suggestion = ?warning.suggestion,
                        "unknown config key"
                    );
                }
                return with_env_overrides(config);
            }
            Err(error) => {
                warn!(file = %candidate.display(), error = %error, "ignoring unreadable config");
            }
        }
    }

    with_env_overrides(NavConfig::default())
}

/// Apply environment variable overrides (NAVMENU_* prefix)
pub fn with_env_overrides(mut config: NavConfig) -> NavConfig {
    // NAVMENU_NAV_MODE
    if let Ok(mode) = std::env::var("NAVMENU_NAV_MODE") {
        match mode.parse::<LayoutMode>() {
            Ok(mode) => config.layout.nav_mode = mode,
            Err(error) => warn!(error = %error, "ignoring NAVMENU_NAV_MODE"),
        }
    }

    // NAVMENU_SIDEBAR_WIDTH
    if let Some(width) = env_u32("NAVMENU_SIDEBAR_WIDTH") {
        config.sidebar.width = width;
    }

    // NAVMENU_SIDEBAR_COLLAPSED_WIDTH
    if let Some(width) = env_u32("NAVMENU_SIDEBAR_COLLAPSED_WIDTH") {
        config.sidebar.collapsed_width = width;
    }

    config
}

fn env_u32(name: &str) -> Option<u32> {
    let value = std::env::var(name).ok()?;
    match value.trim().parse() {
        Ok(parsed) => Some(parsed),
        Err(_) => {
            warn!(variable = name, value = %value, "ignoring non-numeric override");
            None
        }
    }
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    for (i, line) in content.lines().enumerate() {
        if line.contains(needle) {
            return Some(i + 1);
        }
    }
    None
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "layout",
        "nav_mode",
        "header",
        "height",
        "title",
        "show_breadcrumb",
        "sidebar",
        "width",
        "collapsed_width",
        "tabs",
        "show",
        "footer",
        "menu",
        "builtin_paths",
        "ignore_route_paths",
        "custom",
        "key",
        "label",
        "parent_key",
        "route_path",
        "href",
        "target",
        "order",
        "icon",
        "query",
        "disabled",
    ];

    let mut best: Option<(&str, usize)> = None;
    for &candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = if ac == bc { 0 } else { 1 };
            curr[j + 1] =
                std::cmp::min(std::cmp::min(prev[j + 1] + 1, curr[j] + 1), prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}
