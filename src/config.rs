//! Page variants and their tunables.

#[cfg(feature = "serde")]
use serde::Deserialize;

use crate::error::PageError;

/// The two shipped looks of the page.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Variant {
    /// Edge-to-edge escapes, plain autoplay audio.
    Classic,
    /// 50px margin, muted autoplay unlocked on first gesture.
    #[default]
    Padded,
}

impl Variant {
    pub fn from_name(name: &str) -> Result<Self, PageError> {
        match name.trim().to_ascii_lowercase().as_str() {
            "classic" => Ok(Variant::Classic),
            "padded" | "" => Ok(Variant::Padded),
            other => Err(PageError::Config(format!("unknown variant '{}'", other))),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct PageConfig {
    pub variant: Variant,
    /// Margin the escaping button keeps from the viewport edges.
    pub padding: f64,
    pub heart_count: usize,
    pub particle_count: usize,
    pub audio_src: String,
    pub volume: f64,
}

impl PageConfig {
    pub fn classic() -> Self {
        Self {
            variant: Variant::Classic,
            padding: 0.0,
            heart_count: 20,
            particle_count: 60,
            audio_src: "/audio/audio.mp3".to_string(),
            volume: 0.5,
        }
    }

    pub fn padded() -> Self {
        Self {
            variant: Variant::Padded,
            padding: 50.0,
            heart_count: 25,
            particle_count: 80,
            audio_src: "/audio.mp3".to_string(),
            volume: 0.5,
        }
    }

    pub fn for_variant(variant: Variant) -> Self {
        match variant {
            Variant::Classic => Self::classic(),
            Variant::Padded => Self::padded(),
        }
    }

    /// Parse a JSON override; fields left out keep the variant's defaults.
    #[cfg(feature = "serde_json")]
    pub fn from_json(json: &str) -> Result<Self, PageError> {
        let raw: RawConfig =
            serde_json::from_str(json).map_err(|e| PageError::Config(e.to_string()))?;
        let mut cfg = Self::for_variant(raw.variant.unwrap_or_default());
        if let Some(p) = raw.padding {
            cfg.padding = p.max(0.0);
        }
        if let Some(n) = raw.heart_count {
            cfg.heart_count = n;
        }
        if let Some(n) = raw.particle_count {
            cfg.particle_count = n;
        }
        if let Some(src) = raw.audio_src {
            cfg.audio_src = src;
        }
        if let Some(v) = raw.volume {
            cfg.volume = v.clamp(0.0, 1.0);
        }
        Ok(cfg)
    }
}

impl Default for PageConfig {
    fn default() -> Self {
        Self::padded()
    }
}

#[cfg(feature = "serde_json")]
#[derive(Deserialize, Default)]
#[serde(default, deny_unknown_fields)]
struct RawConfig {
    variant: Option<Variant>,
    padding: Option<f64>,
    heart_count: Option<usize>,
    particle_count: Option<usize>,
    audio_src: Option<String>,
    volume: Option<f64>,
}
