/// A fill colour for drawn text, in the RGB or Gray device colour spaces
#[derive(Copy, Clone, PartialEq, Debug)]
pub enum Colour {
    /// DeviceRGB colour; r, g, b range from 0.0 to 1.0
    RGB { r: f32, g: f32, b: f32 },
    /// DeviceGray colour; g ranges from 0.0 (black) to 1.0 (white)
    Grey { g: f32 },
}

impl Default for Colour {
    fn default() -> Self {
        colours::BLACK
    }
}

impl Colour {
    /// Create a new colour in the RGB space from 0-255 components
    pub fn new_rgb_bytes(r: u8, g: u8, b: u8) -> Colour {
        Colour::RGB {
            r: r as f32 / 255.0,
            g: g as f32 / 255.0,
            b: b as f32 / 255.0,
        }
    }

    /// The content stream operator that makes this the current fill colour
    pub(crate) fn fill_operator(&self) -> String {
        match self {
            Colour::RGB { r, g, b } => format!("{r} {g} {b} rg"),
            Colour::Grey { g } => format!("{g} g"),
        }
    }
}

/// Colours used by the CV templates
pub mod colours {
    use super::*;

    pub const BLACK: Colour = Colour::Grey { g: 0.0 };
    pub const DARK_GREY: Colour = Colour::Grey { g: 0.25 };
    pub const ACCENT: Colour = Colour::RGB {
        r: 0.12,
        g: 0.27,
        b: 0.49,
    };
}
