//! Tests for the spot palettes

#[cfg(test)]
mod tests {
    use image::Rgba;
    use spotgen::render::palette::{ORDINARY, Palette, SPECIAL};

    // Tests the flag selects the matching palette
    // Verified by inverting the flag
    #[test]
    fn test_for_special() {
        assert_eq!(Palette::for_special(false), ORDINARY);
        assert_eq!(Palette::for_special(true), SPECIAL);
    }

    // Tests the palette colors
    // Verified by swapping fill and border
    #[test]
    fn test_palette_colors() {
        assert_eq!(ORDINARY.fill, Rgba([255, 59, 79, 255]));
        assert_eq!(ORDINARY.border, Rgba([220, 40, 60, 255]));
        assert_eq!(SPECIAL.fill, Rgba([183, 199, 92, 255]));
        assert_eq!(SPECIAL.border, Rgba([150, 170, 70, 255]));
    }

    // Tests borders are darker than fills and fully opaque
    // Verified by lightening the ordinary border
    #[test]
    fn test_border_darker_than_fill() {
        for palette in [ORDINARY, SPECIAL] {
            let fill: u32 = palette.fill.0[..3].iter().map(|&c| u32::from(c)).sum();
            let border: u32 = palette.border.0[..3].iter().map(|&c| u32::from(c)).sum();
            assert!(border < fill);
            assert_eq!(palette.fill.0[3], 255);
            assert_eq!(palette.border.0[3], 255);
        }
    }
}
