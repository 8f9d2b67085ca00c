use std::path::Path;
use std::str::FromStr;

use secrecy::SecretString;
use serde::Deserialize;

use crate::error::RecipeError;

const MAX_CONFIG_FILE_SIZE: u64 = 64 * 1024; // 64 KiB

pub const DEFAULT_MODEL: &str = "gemini-1.5-pro";
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

pub const API_KEY_VAR: &str = "GOOGLE_API_KEY";
pub const CONFIG_PATH_VAR: &str = "RECIPE_ASSISTANT_CONFIG";
pub const MODEL_VAR: &str = "RECIPE_ASSISTANT_MODEL";
pub const BASE_URL_VAR: &str = "RECIPE_ASSISTANT_BASE_URL";

// --- TOML deserialization structs (private, map 1:1 to TOML schema) ---

#[derive(Deserialize, Default)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    #[serde(default)]
    model: ModelSection,
}

#[derive(Deserialize, Default)]
#[serde(deny_unknown_fields)]
struct ModelSection {
    name: Option<String>,
    base_url: Option<String>,
}

/// Settings read from an optional TOML file. Every field may be absent.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct FileSettings {
    pub model: Option<String>,
    pub base_url: Option<String>,
}

impl FromStr for FileSettings {
    type Err = RecipeError;

    fn from_str(content: &str) -> Result<Self, RecipeError> {
        let file: ConfigFile =
            toml::from_str(content).map_err(|e| RecipeError::ConfigLoad(e.to_string()))?;

        Ok(Self {
            model: file.model.name,
            base_url: file.model.base_url,
        })
    }
}

impl FileSettings {
    /// Load settings from a TOML file. Checks file size before reading.
    pub fn load(path: &Path) -> Result<Self, RecipeError> {
        let metadata = std::fs::metadata(path).map_err(|e| {
            RecipeError::ConfigLoad(format!("cannot read {}: {e}", path.display()))
        })?;

        if metadata.len() > MAX_CONFIG_FILE_SIZE {
            return Err(RecipeError::ConfigLoad(format!(
                "config file exceeds {MAX_CONFIG_FILE_SIZE} byte limit"
            )));
        }

        let content = std::fs::read_to_string(path).map_err(|e| {
            RecipeError::ConfigLoad(format!("cannot read {}: {e}", path.display()))
        })?;

        content.parse()
    }
}

/// Resolved runtime configuration.
pub struct Config {
    pub api_key: SecretString,
    pub model: String,
    pub base_url: String,
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl Config {
    /// Build configuration from the process environment, loading `.env` first.
    pub fn from_env() -> Result<Self, RecipeError> {
        dotenv_outcome(dotenvy::dotenv())?;
        Self::resolve(|key| std::env::var(key).ok())
    }

    /// Resolve configuration through `lookup`.
    ///
    /// Precedence, lowest first: built-in defaults, the TOML file named by
    /// `RECIPE_ASSISTANT_CONFIG`, then `RECIPE_ASSISTANT_MODEL` and
    /// `RECIPE_ASSISTANT_BASE_URL`.
    pub fn resolve<F>(lookup: F) -> Result<Self, RecipeError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let present = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let api_key = present(API_KEY_VAR).ok_or(RecipeError::MissingApiKey)?;

        let file = match present(CONFIG_PATH_VAR) {
            Some(path) => FileSettings::load(Path::new(&path))?,
            None => FileSettings::default(),
        };

        let model = present(MODEL_VAR)
            .or(file.model)
            .unwrap_or_else(|| DEFAULT_MODEL.to_owned());
        let base_url = present(BASE_URL_VAR)
            .or(file.base_url)
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_owned());

        validate(&model, &base_url)?;

        Ok(Self {
            api_key: SecretString::from(api_key),
            model,
            base_url: base_url.trim_end_matches('/').to_owned(),
        })
    }
}

/// A missing `.env` is fine; an unreadable or malformed one is a load error.
fn dotenv_outcome<T>(result: Result<T, dotenvy::Error>) -> Result<(), RecipeError> {
    match result {
        Ok(_) => Ok(()),
        Err(e) if e.not_found() => Ok(()),
        Err(e) => Err(RecipeError::ConfigLoad(format!(".env: {e}"))),
    }
}

/// Plain `http://` is only accepted for loopback hosts; the API key travels
/// in a request header.
fn is_loopback_http(base_url: &str) -> bool {
    let Some(rest) = base_url.strip_prefix("http://") else {
        return false;
    };
    let authority = rest.split('/').next().unwrap_or_default();
    let host = match authority.strip_prefix('[') {
        Some(v6) => v6.split(']').next().unwrap_or_default(),
        None => authority.split(':').next().unwrap_or_default(),
    };
    matches!(host, "localhost" | "127.0.0.1" | "::1")
}

fn validate(model: &str, base_url: &str) -> Result<(), RecipeError> {
    if model.trim().is_empty() || model.contains(char::is_whitespace) {
        return Err(RecipeError::ConfigValidation(format!(
            "model name '{model}' must be a single non-empty token"
        )));
    }
    if !(base_url.starts_with("https://") || is_loopback_http(base_url)) {
        return Err(RecipeError::ConfigValidation(format!(
            "base_url '{base_url}' must be https (http is allowed for loopback only)"
        )));
    }
    Ok(())
}
