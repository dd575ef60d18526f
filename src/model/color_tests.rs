//! Tests for `EmbedColor` and the named colour table.

use super::{EmbedColor, NAMED_COLORS, ParseColorError};

fn lookup(name: &str) -> EmbedColor {
    EmbedColor::named(name).unwrap_or_else(|| panic!("missing colour {name}"))
}

mod packing {
    use super::*;

    #[test]
    fn packs_channels_into_rgb_integer() {
        assert_eq!(EmbedColor::new(255, 0, 0).packed(), 16_711_680);
        assert_eq!(EmbedColor::new(0, 255, 0).packed(), 65_280);
        assert_eq!(EmbedColor::new(0, 0, 255).packed(), 255);
        assert_eq!(EmbedColor::new(18, 52, 86).packed(), 0x12_34_56);
    }

    #[test]
    fn unpacks_integer_into_channels() {
        assert_eq!(EmbedColor::from_packed(0x12_34_56), EmbedColor::new(18, 52, 86));
    }

    #[test]
    fn unpack_ignores_high_bits() {
        assert_eq!(
            EmbedColor::from_packed(0x7F_FF_00_00),
            EmbedColor::new(255, 0, 0)
        );
    }

    #[test]
    fn from_tuple() {
        let color: EmbedColor = (1, 2, 3).into();
        assert_eq!(color, EmbedColor::new(1, 2, 3));
    }

    #[test]
    fn display_as_hex() {
        assert_eq!(EmbedColor::new(100, 149, 237).to_string(), "#6495ED");
        assert_eq!(EmbedColor::default().to_string(), "#000000");
    }
}

mod named_table {
    use super::*;

    #[test]
    fn colours_match_css_values() {
        let expected = [
            ("Aqua", (0, 255, 255)),
            ("Chocolate", (210, 105, 30)),
            ("CornflowerBlue", (100, 149, 237)),
            ("DarkOrange", (255, 140, 0)),
            ("DarkSlateGray", (47, 79, 79)),
            ("Gold", (255, 215, 0)),
            ("Gray", (128, 128, 128)),
            ("Green", (0, 128, 0)),
            ("HotPink", (255, 105, 180)),
            ("Indigo", (75, 0, 130)),
            ("LightGoldenRodYellow", (250, 250, 210)),
            ("Lime", (0, 255, 0)),
            ("Maroon", (128, 0, 0)),
            ("MediumPurple", (147, 112, 219)),
            ("Navy", (0, 0, 128)),
            ("Olive", (128, 128, 0)),
            ("Orange", (255, 165, 0)),
            ("Purple", (128, 0, 128)),
            ("RebeccaPurple", (102, 51, 153)),
            ("SaddleBrown", (139, 69, 19)),
            ("Silver", (192, 192, 192)),
            ("SteelBlue", (70, 130, 180)),
            ("Teal", (0, 128, 128)),
            ("Tomato", (255, 99, 71)),
            ("YellowGreen", (154, 205, 50)),
        ];

        for (name, rgb) in expected {
            assert_eq!(lookup(name), rgb.into(), "{name}");
        }
    }

    #[test]
    fn names_are_unique_ignoring_case() {
        for (i, (a, _)) in NAMED_COLORS.iter().enumerate() {
            for (b, _) in &NAMED_COLORS[i + 1..] {
                assert!(!a.eq_ignore_ascii_case(b), "duplicate colour {a}");
            }
        }
    }

    #[test]
    fn has_no_transparent_entry() {
        assert!(EmbedColor::named("Transparent").is_none());
    }

    #[test]
    fn lookup_is_case_insensitive() {
        assert_eq!(lookup("cornflowerblue"), lookup("CORNFLOWERBLUE"));
    }

    #[test]
    fn unknown_name_is_none() {
        assert!(EmbedColor::named("NotAColour").is_none());
    }
}

mod parsing {
    use super::*;

    #[test]
    fn parses_hex() {
        assert_eq!("#FF8000".parse::<EmbedColor>(), Ok(EmbedColor::new(255, 128, 0)));
        assert_eq!("#ff8000".parse::<EmbedColor>(), Ok(EmbedColor::new(255, 128, 0)));
    }

    #[test]
    fn parses_name_with_whitespace() {
        assert_eq!(" teal ".parse::<EmbedColor>(), Ok(EmbedColor::new(0, 128, 128)));
    }

    #[test]
    fn rejects_short_hex() {
        assert_eq!(
            "#FFF".parse::<EmbedColor>(),
            Err(ParseColorError("#FFF".to_string()))
        );
    }

    #[test]
    fn rejects_signed_hex() {
        assert!("#+FFFFF".parse::<EmbedColor>().is_err());
    }

    #[test]
    fn rejects_unknown_name() {
        let err = "blurple".parse::<EmbedColor>().unwrap_err();
        assert!(err.to_string().contains("blurple"));
    }
}
