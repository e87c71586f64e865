//! Deck model and TOML loading.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::DeckError;

const BUILTIN_DECK: &str = include_str!("../decks/iot-mental-health.toml");

/// Deck-level metadata, the `[deck]` table.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DeckMeta {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
}

/// A single slide, one `[[slides]]` table.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Slide {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub points: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl Slide {
    /// Title to show for slide `index` (1-based), numbered when untitled.
    pub fn display_title(&self, index: usize) -> String {
        match self.title.as_deref().map(str::trim) {
            Some(t) if !t.is_empty() => t.to_string(),
            _ => format!("Slide {index}"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Deck {
    #[serde(rename = "deck")]
    pub meta: DeckMeta,
    #[serde(default)]
    pub slides: Vec<Slide>,
}

impl Deck {
    /// The bundled 22-slide deck.
    pub fn builtin() -> Self {
        Self::from_toml_str(BUILTIN_DECK, "built-in deck").expect("built-in deck is valid")
    }

    /// Parse a deck. `origin` names the source in error messages.
    pub fn from_toml_str(content: &str, origin: &str) -> Result<Self, DeckError> {
        let deck: Deck = toml::from_str(content).map_err(|source| DeckError::Parse {
            origin: origin.to_string(),
            source,
        })?;
        if deck.slides.is_empty() {
            return Err(DeckError::NoSlides);
        }
        Ok(deck)
    }

    pub fn load(path: &Path) -> Result<Self, DeckError> {
        let content = std::fs::read_to_string(path).map_err(|source| DeckError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let deck = Self::from_toml_str(&content, &path.display().to_string())?;
        tracing::info!(path = %path.display(), slides = deck.len(), "loaded deck");
        Ok(deck)
    }

    /// Load `path` if given, otherwise the built-in deck.
    pub fn load_or_builtin(path: Option<&Path>) -> Result<Self, DeckError> {
        match path {
            Some(p) => Self::load(p),
            None => Ok(Self::builtin()),
        }
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    /// Slide at a 1-based index.
    pub fn slide(&self, index: usize) -> Option<&Slide> {
        index.checked_sub(1).and_then(|i| self.slides.get(i))
    }

    /// Display titles of all slides, in order.
    pub fn titles(&self) -> Vec<String> {
        self.slides
            .iter()
            .enumerate()
            .map(|(i, s)| s.display_title(i + 1))
            .collect()
    }
}
