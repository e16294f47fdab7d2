//! Static display strings keyed by locale.
//!
//! Catalogues are embedded JSON files under `i18n/`. Unknown languages
//! fall back to English.

use anyhow::Context;
use serde::Deserialize;

use crate::shared::error::FetchError;
use crate::shared::Result;

const EN_CATALOG: &str = include_str!("../i18n/en.json");
const ES_CATALOG: &str = include_str!("../i18n/es.json");

/// Supported display languages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Locale {
    #[default]
    En,
    Es,
}

impl Locale {
    /// Resolves a language tag such as `es`, `es-MX` or `es_ES.UTF-8`
    ///
    /// Anything unrecognized falls back to English.
    pub fn from_tag(tag: &str) -> Self {
        let language = tag
            .split(['-', '_', '.'])
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();

        match language.as_str() {
            "es" => Locale::Es,
            _ => Locale::En,
        }
    }

    /// Locale taken from the `LANG` environment variable, if set
    pub fn from_env() -> Option<Self> {
        std::env::var("LANG")
            .ok()
            .filter(|value| !value.trim().is_empty())
            .map(|value| Self::from_tag(&value))
    }

    pub fn code(&self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Es => "es",
        }
    }

    fn source(&self) -> &'static str {
        match self {
            Locale::En => EN_CATALOG,
            Locale::Es => ES_CATALOG,
        }
    }
}

impl std::fmt::Display for Locale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Localized error category messages
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorMessages {
    pub connectivity: String,
    pub not_found: String,
    pub rate_limited: String,
    pub internal_server_error: String,
    pub unavailable: String,
    /// Template with a `{status}` placeholder
    pub server_error: String,
    /// Template with a `{detail}` placeholder
    pub connection_error: String,
}

/// Display strings for one locale
#[derive(Debug, Clone, Deserialize)]
pub struct Catalog {
    pub app_title: String,
    pub footer: String,
    pub loading: String,
    pub load_error: String,
    pub empty_list: String,
    pub no_image: String,
    pub published: String,
    pub warning: String,
    pub details_button: String,
    /// Template with a `{count}` placeholder
    pub record_count: String,
    pub errors: ErrorMessages,
}

impl Catalog {
    /// Loads the embedded catalogue for `locale`
    pub fn load(locale: Locale) -> Result<Self> {
        serde_json::from_str(locale.source())
            .with_context(|| format!("Failed to parse embedded '{}' string catalogue", locale))
    }

    /// Localized user-facing message for a normalized fetch failure
    pub fn describe_error(&self, error: &FetchError) -> String {
        let messages = &self.errors;
        match error {
            FetchError::ConnectivityFailure => messages.connectivity.clone(),
            FetchError::NotFound => messages.not_found.clone(),
            FetchError::RateLimited => messages.rate_limited.clone(),
            FetchError::UpstreamUnavailable => messages.unavailable.clone(),
            FetchError::UpstreamError { status: 500, .. } => {
                messages.internal_server_error.clone()
            }
            FetchError::UpstreamError { status, detail } => {
                let base = messages
                    .server_error
                    .replace("{status}", &status.to_string());
                match detail {
                    Some(detail) => format!("{} - {}", base, detail),
                    None => base,
                }
            }
            FetchError::ClientSideFailure { detail } => {
                messages.connection_error.replace("{detail}", detail)
            }
        }
    }

    pub fn record_count(&self, count: usize) -> String {
        self.record_count.replace("{count}", &count.to_string())
    }
}
