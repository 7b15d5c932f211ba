use crate::foundation::core::Rgba;
use crate::foundation::error::{LinefallError, LinefallResult};

/// A named, ordered color set.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Palette {
    /// Display name.
    pub name: String,
    /// Palette colors, in palette order. Never empty.
    pub colors: Vec<Rgba>,
}

impl Palette {
    /// Build a palette; fails on an empty color list.
    pub fn new(name: impl Into<String>, colors: Vec<Rgba>) -> LinefallResult<Self> {
        if colors.is_empty() {
            return Err(LinefallError::invalid_argument(
                "palette colors cannot be empty",
            ));
        }
        Ok(Self {
            name: name.into(),
            colors,
        })
    }

    /// Build a palette from hex color strings.
    pub fn from_hex(name: impl Into<String>, hexes: &[&str]) -> LinefallResult<Self> {
        let colors = hexes
            .iter()
            .map(|h| Rgba::from_hex(h))
            .collect::<LinefallResult<Vec<_>>>()?;
        Self::new(name, colors)
    }
}

// Built-in palette data. Kept as hex literals so the table reads the way
// palettes are published.
const PALETTES: &[(&str, &[&str])] = &[
    ("winter blues", &["#dfebf1", "#a4c0df", "#7a9ec7", "#3e6589", "#052542"]),
    ("winter calm", &["#badaee", "#8cc2e3", "#61879e", "#b7bee1", "#dedede"]),
    ("dark winter", &["#e3d4ed", "#c9c1cd", "#baaac5", "#8f81a7", "#775a90"]),
    ("mindful palette no. 104", &["#f7f4e9", "#ebdbc1", "#7d8778", "#74583e", "#5e4662", "#131210"]),
    ("winter pine forest", &["#2a314b", "#415676", "#637ea1", "#89aacd", "#b7d9f5"]),
    ("winter sunrise", &["#9994d6", "#9fade0", "#aec4ea", "#b9daee", "#c7ecf0"]),
    ("persephone in winter", &["#1c101e", "#3f0d2a", "#610a34", "#930643", "#e8025e"]),
    ("forest frost", &["#6a907f", "#a2c3b1", "#cee4df", "#ebf4f4", "#f5fff7"]),
    ("winter pine", &["#cad3c5", "#84a98c", "#537970", "#344d50", "#2f3e46"]),
    ("cherry, orange, lemon, lime", &["#ff5c5c", "#ffa852", "#ffce5c", "#b8e77e", "#63c57f"]),
    ("costa rican daze", &["#000000", "#444444", "#FFFBFC", "#AC206A", "#3C91E6"]),
    ("garden shadow", &["#000000", "#444444", "#71B340", "#AC206A", "#3C91E6"]),
    ("sunset shadow", &["#000000", "#444444", "#D17A22", "#AC206A", "#3C91E6"]),
    ("deathkiss", &["#000000", "#444444", "#5F5F5F", "#797979", "#AC206A"]),
    ("goth babe", &["#4b5d67", "#1a2626", "#170114", "#331134", "#464057"]),
    ("bring on the neon", &["#ff00a9", "#8000ff", "#f0ff07", "#a5ff0b", "#00ddff"]),
    ("beach belladonna", &["#94dfca", "#435f54", "#120a0a", "#230717", "#260606"]),
    ("ninja ocean", &["#785995", "#4f2597", "#352672", "#1c2d4a", "#073224", "#122a1b"]),
    ("femme concrete", &["#cecfcb", "#babfb8", "#93828f", "#6a4165", "#44063c", "#39052b"]),
    ("california wine sunset", &["#ffa951", "#ff6f4b", "#e13661", "#a11477", "#1e1a75"]),
    ("pastel rainbow", &["#FFADAD", "#FFD6A5", "#FDFFB6", "#CAFFBF", "#9BF6FF", "#A0C4FF", "#BDB2FF", "#FFC6FF", "#FFFFFC"]),
    ("purple and teal", &["#7400B8", "#6930C3", "#5E60CE", "#5390D9", "#4EA8DE", "#48BFE3", "#56CFE1", "#64DFDF", "#72EFDD", "#80FFDB"]),
    ("butterfly palette, no. 1", &["#d5e2ea", "#fcc936", "#12b8a9", "#12828b", "#923367", "#66215a"]),
    ("mindful palette, no. 116", &["#f6f4ef", "#5d1f1e", "#ffe500", "#006ca9", "#301885", "#110044"]),
    ("mindful palette, no. 6", &["#f5f1ea", "#f9a3aa", "#f5576c", "#004953", "#0f282f", "#070d0d"]),
    ("butterfly palette, no. 3", &["#f9fcf3", "#a47299", "#672f58", "#a77c5d", "#7e473f", "#26243e"]),
    ("lava", &["#03071E", "#370617", "#6A040F", "#9D0208", "#D00000", "#DC2F02", "#E85D04", "#F48C06", "#FAA307", "#FFBA08"]),
    ("iceberg", &["#03045E", "#023E8A", "#0077B6", "#0096C7", "#00B4D8", "#48CAE4", "#90E0EF", "#ADE8F4", "#CAF0F8"]),
    ("it's a baby", &["#CDB4DB", "#FFC8DD", "#FFAFCC", "#BDE0FE", "#A2D2FF"]),
    ("coblestone midnight", &["#121212", "#393D3F", "#D3D4D6", "#928E80", "#857C7B", "#334956", "#223843", "#19414D", "#28253A"]),
    ("mardi gras - let the good times roll", &["#cfae29", "#32843b", "#241b20", "#4e2475", "#ffb22b"]),
    ("transgender flag", &["#5BCEFA", "#F5A9B8", "#FFFFFF"]),
    ("bisexual flag", &["#D60270", "#9B4F96", "#0038A8"]),
    ("pride", &["#E40303", "#FF8C00", "#FFED00", "#008026", "#004CFF", "#732982"]),
    ("lavender licorice", &["#000000", "#502F4C", "#70587C", "#C8B8DB", "#F9F4F5"]),
    ("nusery shadow", &["#000000", "#7F95D1", "#FF82A9", "#FFC0BE", "#FFEBE7"]),
    ("sunny ocean sky", &["#003494", "#FFD000", "#D9F0FF", "#A3D5FF", "#83C9F4"]),
    ("nonbinary flag", &["#FCF434", "#FFFFFF", "#9C59D1", "#2C2C2C"]),
    ("miss mayhem too", &["#000000", "#ef6fb5", "#f9f9ea", "#cbacee", "#aaf1ed"]),
];

/// The built-in palette library.
pub fn builtin_palettes() -> LinefallResult<Vec<Palette>> {
    PALETTES
        .iter()
        .map(|(name, hexes)| Palette::from_hex(*name, hexes))
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/color/palette.rs"]
mod tests;
