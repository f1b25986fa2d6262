//! CLI configuration.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Top-level glowquiz configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GlowquizConfig {
    /// Quiz file to load instead of the built-in skincare quiz.
    #[serde(default)]
    pub quiz: Option<PathBuf>,
    /// Output directory for saved results.
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
    /// Output format when none is given on the command line.
    #[serde(default = "default_format")]
    pub default_format: String,
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("./glowquiz-results")
}

fn default_format() -> String {
    "text".to_string()
}

impl Default for GlowquizConfig {
    fn default() -> Self {
        Self {
            quiz: None,
            output_dir: default_output_dir(),
            default_format: default_format(),
        }
    }
}

/// Resolve environment variable references like `${VAR_NAME}` in a string.
fn resolve_env_vars(s: &str) -> String {
    let mut result = s.to_string();
    while let Some(start) = result.find("${") {
        if let Some(end) = result[start..].find('}') {
            let var_name = &result[start + 2..start + end];
            let value = std::env::var(var_name).unwrap_or_default();
            result = format!(
                "{}{}{}",
                &result[..start],
                value,
                &result[start + end + 1..]
            );
        } else {
            break;
        }
    }
    result
}

fn resolve_path(p: &Path) -> PathBuf {
    PathBuf::from(resolve_env_vars(&p.to_string_lossy()))
}

/// Load config from an explicit path, or search the default locations.
///
/// Search order:
/// 1. `glowquiz.toml` in the current directory
/// 2. `~/.config/glowquiz/config.toml`
///
/// `GLOWQUIZ_QUIZ` overrides the quiz path from any file.
pub fn load_config_from(path: Option<&Path>) -> Result<GlowquizConfig> {
    let config_path = if let Some(p) = path {
        if p.exists() {
            Some(p.to_path_buf())
        } else {
            anyhow::bail!("config file not found: {}", p.display());
        }
    } else {
        let local = PathBuf::from("glowquiz.toml");
        if local.exists() {
            Some(local)
        } else {
            dirs_path()
                .map(|home| home.join("config.toml"))
                .filter(|global| global.exists())
        }
    };

    let mut config = match config_path {
        Some(path) => {
            tracing::debug!("loading config from {}", path.display());
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read config: {}", path.display()))?;
            toml::from_str::<GlowquizConfig>(&content)
                .with_context(|| format!("failed to parse config: {}", path.display()))?
        }
        None => GlowquizConfig::default(),
    };

    if let Ok(quiz) = std::env::var("GLOWQUIZ_QUIZ") {
        config.quiz = Some(PathBuf::from(quiz));
    }

    config.quiz = config.quiz.as_deref().map(resolve_path);
    config.output_dir = resolve_path(&config.output_dir);

    Ok(config)
}

fn dirs_path() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|h| PathBuf::from(h).join(".config").join("glowquiz"))
}
