use std::str::FromStr;

use anyhow::{anyhow, Context, Result};

use crate::errors::FitError;
use crate::layout::{Bounds, FitConstraints, FontFamily, LineLimit, LineSpacing, Padding};

/// CLI configuration loaded from environment variables (and `.env` if present).
/// Every variable is optional; unset variables fall back to the defaults below.
#[derive(Debug, Clone)]
pub struct Config {
    pub min_size: u32,
    pub max_size: u32,
    /// Raw line cap; `<= 0` means unlimited.
    pub max_lines: i32,
    pub spacing_mult: f32,
    pub spacing_add: f32,
    pub cache_enabled: bool,
    pub width: f32,
    pub height: f32,
    pub padding: f32,
    pub font: FontFamily,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let font_name = lookup("AUTOFIT_FONT").unwrap_or_else(|| "inter".to_string());
        let font = FontFamily::from_name(&font_name)
            .ok_or_else(|| anyhow!("AUTOFIT_FONT must be 'inter' or 'oswald', got '{font_name}'"))?;

        Ok(Config {
            min_size: parse_or(&lookup, "AUTOFIT_MIN_SIZE", 12)?,
            max_size: parse_or(&lookup, "AUTOFIT_MAX_SIZE", 40)?,
            max_lines: parse_or(&lookup, "AUTOFIT_MAX_LINES", -1)?,
            spacing_mult: parse_or(&lookup, "AUTOFIT_SPACING_MULT", 1.0)?,
            spacing_add: parse_or(&lookup, "AUTOFIT_SPACING_ADD", 0.0)?,
            cache_enabled: parse_or(&lookup, "AUTOFIT_CACHE", true)?,
            width: parse_or(&lookup, "AUTOFIT_WIDTH", 320.0)?,
            height: parse_or(&lookup, "AUTOFIT_HEIGHT", 64.0)?,
            padding: parse_or(&lookup, "AUTOFIT_PADDING", 0.0)?,
            font,
            rust_log: lookup("RUST_LOG").unwrap_or_else(|| "info".to_string()),
        })
    }

    /// Validated fitting constraints.
    pub fn constraints(&self) -> Result<FitConstraints, FitError> {
        FitConstraints::new(
            self.min_size,
            self.max_size,
            LineLimit::from_raw(self.max_lines),
            LineSpacing {
                multiplier: self.spacing_mult,
                extra: self.spacing_add,
            },
        )
    }

    /// Host bounds; both dimensions must be finite and non-negative.
    pub fn bounds(&self) -> Result<Bounds, FitError> {
        let valid = |v: f32| v.is_finite() && v >= 0.0;
        if !valid(self.width) || !valid(self.height) {
            return Err(FitError::InvalidBounds {
                width: self.width,
                height: self.height,
            });
        }
        Ok(Bounds {
            width: self.width,
            height: self.height,
        })
    }

    pub fn padding(&self) -> Padding {
        Padding::uniform(self.padding)
    }
}

fn parse_or<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("{key} has an invalid value '{raw}'")),
        None => Ok(default),
    }
}
