//! Embed colours and the named colour table.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// An RGB colour for the left border of an embed.
///
/// Discord expects the colour as a single integer packed as
/// `R << 16 | G << 8 | B`.
///
/// # Example
///
/// ```
/// use discord_webhooks::model::EmbedColor;
///
/// let red = EmbedColor::new(255, 0, 0);
/// assert_eq!(red.packed(), 0xFF_00_00);
///
/// let named: EmbedColor = "cornflowerblue".parse().unwrap();
/// assert_eq!(named, EmbedColor::new(100, 149, 237));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct EmbedColor {
    /// Red channel
    pub r: u8,
    /// Green channel
    pub g: u8,
    /// Blue channel
    pub b: u8,
}

impl EmbedColor {
    /// Creates a colour from its channels.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Returns the colour packed into Discord's integer representation.
    #[must_use]
    pub const fn packed(self) -> i32 {
        ((self.r as i32) << 16) | ((self.g as i32) << 8) | self.b as i32
    }

    /// Unpacks a colour from Discord's integer representation.
    ///
    /// Bits above the low 24 are ignored.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub const fn from_packed(value: i32) -> Self {
        Self {
            r: (value >> 16) as u8,
            g: (value >> 8) as u8,
            b: value as u8,
        }
    }

    /// Looks up a CSS/X11 colour name, ignoring ASCII case.
    #[must_use]
    pub fn named(name: &str) -> Option<Self> {
        NAMED_COLORS
            .iter()
            .find(|(candidate, _)| candidate.eq_ignore_ascii_case(name))
            .map(|&(_, color)| color)
    }
}

impl From<(u8, u8, u8)> for EmbedColor {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self::new(r, g, b)
    }
}

impl fmt::Display for EmbedColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

/// Error returned when a colour string is neither a known name nor `#RRGGBB`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown colour '{0}': expected a CSS colour name or #RRGGBB")]
pub struct ParseColorError(pub String);

impl FromStr for EmbedColor {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();

        if let Some(hex) = trimmed.strip_prefix('#') {
            if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
                return Err(ParseColorError(s.to_string()));
            }
            return i32::from_str_radix(hex, 16)
                .map(Self::from_packed)
                .map_err(|_| ParseColorError(s.to_string()));
        }

        Self::named(trimmed).ok_or_else(|| ParseColorError(s.to_string()))
    }
}

/// CSS/X11 named colours.
pub const NAMED_COLORS: &[(&str, EmbedColor)] = &[
    ("AliceBlue", EmbedColor::new(240, 248, 255)),
    ("AntiqueWhite", EmbedColor::new(250, 235, 215)),
    ("Aqua", EmbedColor::new(0, 255, 255)),
    ("Aquamarine", EmbedColor::new(127, 255, 212)),
    ("Azure", EmbedColor::new(240, 255, 255)),
    ("Beige", EmbedColor::new(245, 245, 220)),
    ("Bisque", EmbedColor::new(255, 228, 196)),
    ("Black", EmbedColor::new(0, 0, 0)),
    ("BlanchedAlmond", EmbedColor::new(255, 235, 205)),
    ("Blue", EmbedColor::new(0, 0, 255)),
    ("BlueViolet", EmbedColor::new(138, 43, 226)),
    ("Brown", EmbedColor::new(165, 42, 42)),
    ("BurlyWood", EmbedColor::new(222, 184, 135)),
    ("CadetBlue", EmbedColor::new(95, 158, 160)),
    ("Chartreuse", EmbedColor::new(127, 255, 0)),
    ("Chocolate", EmbedColor::new(210, 105, 30)),
    ("Coral", EmbedColor::new(255, 127, 80)),
    ("CornflowerBlue", EmbedColor::new(100, 149, 237)),
    ("Cornsilk", EmbedColor::new(255, 248, 220)),
    ("Crimson", EmbedColor::new(220, 20, 60)),
    ("Cyan", EmbedColor::new(0, 255, 255)),
    ("DarkBlue", EmbedColor::new(0, 0, 139)),
    ("DarkCyan", EmbedColor::new(0, 139, 139)),
    ("DarkGoldenrod", EmbedColor::new(184, 134, 11)),
    ("DarkGray", EmbedColor::new(169, 169, 169)),
    ("DarkGreen", EmbedColor::new(0, 100, 0)),
    ("DarkKhaki", EmbedColor::new(189, 183, 107)),
    ("DarkMagenta", EmbedColor::new(139, 0, 139)),
    ("DarkOliveGreen", EmbedColor::new(85, 107, 47)),
    ("DarkOrange", EmbedColor::new(255, 140, 0)),
    ("DarkOrchid", EmbedColor::new(153, 50, 204)),
    ("DarkRed", EmbedColor::new(139, 0, 0)),
    ("DarkSalmon", EmbedColor::new(233, 150, 122)),
    ("DarkSeaGreen", EmbedColor::new(143, 188, 143)),
    ("DarkSlateBlue", EmbedColor::new(72, 61, 139)),
    ("DarkSlateGray", EmbedColor::new(47, 79, 79)),
    ("DarkTurquoise", EmbedColor::new(0, 206, 209)),
    ("DarkViolet", EmbedColor::new(148, 0, 211)),
    ("DeepPink", EmbedColor::new(255, 20, 147)),
    ("DeepSkyBlue", EmbedColor::new(0, 191, 255)),
    ("DimGray", EmbedColor::new(105, 105, 105)),
    ("DodgerBlue", EmbedColor::new(30, 144, 255)),
    ("Firebrick", EmbedColor::new(178, 34, 34)),
    ("FloralWhite", EmbedColor::new(255, 250, 240)),
    ("ForestGreen", EmbedColor::new(34, 139, 34)),
    ("Fuchsia", EmbedColor::new(255, 0, 255)),
    ("Gainsboro", EmbedColor::new(220, 220, 220)),
    ("GhostWhite", EmbedColor::new(248, 248, 255)),
    ("Gold", EmbedColor::new(255, 215, 0)),
    ("Goldenrod", EmbedColor::new(218, 165, 32)),
    ("Gray", EmbedColor::new(128, 128, 128)),
    ("Green", EmbedColor::new(0, 128, 0)),
    ("GreenYellow", EmbedColor::new(173, 255, 47)),
    ("Honeydew", EmbedColor::new(240, 255, 240)),
    ("HotPink", EmbedColor::new(255, 105, 180)),
    ("IndianRed", EmbedColor::new(205, 92, 92)),
    ("Indigo", EmbedColor::new(75, 0, 130)),
    ("Ivory", EmbedColor::new(255, 255, 240)),
    ("Khaki", EmbedColor::new(240, 230, 140)),
    ("Lavender", EmbedColor::new(230, 230, 250)),
    ("LavenderBlush", EmbedColor::new(255, 240, 245)),
    ("LawnGreen", EmbedColor::new(124, 252, 0)),
    ("LemonChiffon", EmbedColor::new(255, 250, 205)),
    ("LightBlue", EmbedColor::new(173, 216, 230)),
    ("LightCoral", EmbedColor::new(240, 128, 128)),
    ("LightCyan", EmbedColor::new(224, 255, 255)),
    ("LightGoldenrodYellow", EmbedColor::new(250, 250, 210)),
    ("LightGray", EmbedColor::new(211, 211, 211)),
    ("LightGreen", EmbedColor::new(144, 238, 144)),
    ("LightPink", EmbedColor::new(255, 182, 193)),
    ("LightSalmon", EmbedColor::new(255, 160, 122)),
    ("LightSeaGreen", EmbedColor::new(32, 178, 170)),
    ("LightSkyBlue", EmbedColor::new(135, 206, 250)),
    ("LightSlateGray", EmbedColor::new(119, 136, 153)),
    ("LightSteelBlue", EmbedColor::new(176, 196, 222)),
    ("LightYellow", EmbedColor::new(255, 255, 224)),
    ("Lime", EmbedColor::new(0, 255, 0)),
    ("LimeGreen", EmbedColor::new(50, 205, 50)),
    ("Linen", EmbedColor::new(250, 240, 230)),
    ("Magenta", EmbedColor::new(255, 0, 255)),
    ("Maroon", EmbedColor::new(128, 0, 0)),
    ("MediumAquamarine", EmbedColor::new(102, 205, 170)),
    ("MediumBlue", EmbedColor::new(0, 0, 205)),
    ("MediumOrchid", EmbedColor::new(186, 85, 211)),
    ("MediumPurple", EmbedColor::new(147, 112, 219)),
    ("MediumSeaGreen", EmbedColor::new(60, 179, 113)),
    ("MediumSlateBlue", EmbedColor::new(123, 104, 238)),
    ("MediumSpringGreen", EmbedColor::new(0, 250, 154)),
    ("MediumTurquoise", EmbedColor::new(72, 209, 204)),
    ("MediumVioletRed", EmbedColor::new(199, 21, 133)),
    ("MidnightBlue", EmbedColor::new(25, 25, 112)),
    ("MintCream", EmbedColor::new(245, 255, 250)),
    ("MistyRose", EmbedColor::new(255, 228, 225)),
    ("Moccasin", EmbedColor::new(255, 228, 181)),
    ("NavajoWhite", EmbedColor::new(255, 222, 173)),
    ("Navy", EmbedColor::new(0, 0, 128)),
    ("OldLace", EmbedColor::new(253, 245, 230)),
    ("Olive", EmbedColor::new(128, 128, 0)),
    ("OliveDrab", EmbedColor::new(107, 142, 35)),
    ("Orange", EmbedColor::new(255, 165, 0)),
    ("OrangeRed", EmbedColor::new(255, 69, 0)),
    ("Orchid", EmbedColor::new(218, 112, 214)),
    ("PaleGoldenrod", EmbedColor::new(238, 232, 170)),
    ("PaleGreen", EmbedColor::new(152, 251, 152)),
    ("PaleTurquoise", EmbedColor::new(175, 238, 238)),
    ("PaleVioletRed", EmbedColor::new(219, 112, 147)),
    ("PapayaWhip", EmbedColor::new(255, 239, 213)),
    ("PeachPuff", EmbedColor::new(255, 218, 185)),
    ("Peru", EmbedColor::new(205, 133, 63)),
    ("Pink", EmbedColor::new(255, 192, 203)),
    ("Plum", EmbedColor::new(221, 160, 221)),
    ("PowderBlue", EmbedColor::new(176, 224, 230)),
    ("Purple", EmbedColor::new(128, 0, 128)),
    ("RebeccaPurple", EmbedColor::new(102, 51, 153)),
    ("Red", EmbedColor::new(255, 0, 0)),
    ("RosyBrown", EmbedColor::new(188, 143, 143)),
    ("RoyalBlue", EmbedColor::new(65, 105, 225)),
    ("SaddleBrown", EmbedColor::new(139, 69, 19)),
    ("Salmon", EmbedColor::new(250, 128, 114)),
    ("SandyBrown", EmbedColor::new(244, 164, 96)),
    ("SeaGreen", EmbedColor::new(46, 139, 87)),
    ("SeaShell", EmbedColor::new(255, 245, 238)),
    ("Sienna", EmbedColor::new(160, 82, 45)),
    ("Silver", EmbedColor::new(192, 192, 192)),
    ("SkyBlue", EmbedColor::new(135, 206, 235)),
    ("SlateBlue", EmbedColor::new(106, 90, 205)),
    ("SlateGray", EmbedColor::new(112, 128, 144)),
    ("Snow", EmbedColor::new(255, 250, 250)),
    ("SpringGreen", EmbedColor::new(0, 255, 127)),
    ("SteelBlue", EmbedColor::new(70, 130, 180)),
    ("Tan", EmbedColor::new(210, 180, 140)),
    ("Teal", EmbedColor::new(0, 128, 128)),
    ("Thistle", EmbedColor::new(216, 191, 216)),
    ("Tomato", EmbedColor::new(255, 99, 71)),
    ("Turquoise", EmbedColor::new(64, 224, 208)),
    ("Violet", EmbedColor::new(238, 130, 238)),
    ("Wheat", EmbedColor::new(245, 222, 179)),
    ("White", EmbedColor::new(255, 255, 255)),
    ("WhiteSmoke", EmbedColor::new(245, 245, 245)),
    ("Yellow", EmbedColor::new(255, 255, 0)),
    ("YellowGreen", EmbedColor::new(154, 205, 50)),
];
