//! Artwork identifiers used as card face values.
//!
//! Two cards sharing an art form a matching pair. Arts serialize as
//! stable kebab-case string keys so persisted games survive variant
//! reordering.

use serde::{Deserialize, Serialize};

/// One of the artwork styles a card can show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ArtKind {
    ArtDeco,
    Cave,
    Charcoal,
    Childish,
    Cubism,
    Destructured,
    Geometric,
    Gradient,
    Impressionism,
    Mosaic,
    Neon,
    Origami,
    PixelArt,
    PopArt,
    Shadow,
    StainedGlass,
    Steampunk,
    Watercolor,
}

impl ArtKind {
    /// Every art, in declaration order.
    pub const ALL: [ArtKind; 18] = [
        ArtKind::ArtDeco,
        ArtKind::Cave,
        ArtKind::Charcoal,
        ArtKind::Childish,
        ArtKind::Cubism,
        ArtKind::Destructured,
        ArtKind::Geometric,
        ArtKind::Gradient,
        ArtKind::Impressionism,
        ArtKind::Mosaic,
        ArtKind::Neon,
        ArtKind::Origami,
        ArtKind::PixelArt,
        ArtKind::PopArt,
        ArtKind::Shadow,
        ArtKind::StainedGlass,
        ArtKind::Steampunk,
        ArtKind::Watercolor,
    ];

    /// Display name for UI listings.
    pub fn label(self) -> &'static str {
        match self {
            ArtKind::ArtDeco => "Art Deco",
            ArtKind::Cave => "Cave",
            ArtKind::Charcoal => "Charcoal",
            ArtKind::Childish => "Childish",
            ArtKind::Cubism => "Cubism",
            ArtKind::Destructured => "Destructured",
            ArtKind::Geometric => "Geometric",
            ArtKind::Gradient => "Gradient",
            ArtKind::Impressionism => "Impressionism",
            ArtKind::Mosaic => "Mosaic",
            ArtKind::Neon => "Neon",
            ArtKind::Origami => "Origami",
            ArtKind::PixelArt => "Pixel Art",
            ArtKind::PopArt => "Pop Art",
            ArtKind::Shadow => "Shadow",
            ArtKind::StainedGlass => "Stained Glass",
            ArtKind::Steampunk => "Steampunk",
            ArtKind::Watercolor => "Watercolor",
        }
    }

    /// Single-cell glyph drawn on a face-up card.
    pub fn symbol(self) -> &'static str {
        match self {
            ArtKind::ArtDeco => "◆",
            ArtKind::Cave => "◠",
            ArtKind::Charcoal => "▓",
            ArtKind::Childish => "☺",
            ArtKind::Cubism => "◧",
            ArtKind::Destructured => "◍",
            ArtKind::Geometric => "△",
            ArtKind::Gradient => "▤",
            ArtKind::Impressionism => "❀",
            ArtKind::Mosaic => "▦",
            ArtKind::Neon => "◉",
            ArtKind::Origami => "◭",
            ArtKind::PixelArt => "▚",
            ArtKind::PopArt => "✦",
            ArtKind::Shadow => "◐",
            ArtKind::StainedGlass => "◫",
            ArtKind::Steampunk => "⚙",
            ArtKind::Watercolor => "≈",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_as_stable_string_keys() {
        let json = serde_json::to_string(&ArtKind::PixelArt).unwrap();
        assert_eq!(json, "\"pixel-art\"");
        let json = serde_json::to_string(&ArtKind::Cave).unwrap();
        assert_eq!(json, "\"cave\"");
    }

    #[test]
    fn round_trips_every_variant() {
        for art in ArtKind::ALL {
            let json = serde_json::to_string(&art).unwrap();
            let back: ArtKind = serde_json::from_str(&json).unwrap();
            assert_eq!(back, art);
        }
    }

    #[test]
    fn all_is_exhaustive_and_unique() {
        let mut seen = std::collections::BTreeSet::new();
        for art in ArtKind::ALL {
            assert!(seen.insert(art));
        }
        assert_eq!(seen.len(), 18);
    }
}
