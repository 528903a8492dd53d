mod wheel;

use smart_leds::RGB8;

pub use wheel::wheel;

pub type Rgb = RGB8;

pub const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };
pub const RED: Rgb = Rgb { r: 255, g: 0, b: 0 };
pub const GREEN: Rgb = Rgb { r: 0, g: 255, b: 0 };
pub const BLUE: Rgb = Rgb { r: 0, g: 0, b: 255 };
pub const YELLOW: Rgb = Rgb {
    r: 255,
    g: 255,
    b: 0,
};
pub const CYAN: Rgb = Rgb {
    r: 0,
    g: 255,
    b: 255,
};
pub const MAGENTA: Rgb = Rgb {
    r: 255,
    g: 0,
    b: 255,
};

/// Upper bound of a percent level
pub const FULL_LEVEL: u8 = 100;

/// Scale every channel of `color` by `level / 100`, truncating
///
/// Levels above 100 are treated as 100.
#[allow(clippy::cast_possible_truncation, clippy::cast_lossless)]
pub const fn scale_percent(color: Rgb, level: u8) -> Rgb {
    let level = (if level > FULL_LEVEL { FULL_LEVEL } else { level }) as u16;
    Rgb {
        r: (color.r as u16 * level / FULL_LEVEL as u16) as u8,
        g: (color.g as u16 * level / FULL_LEVEL as u16) as u8,
        b: (color.b as u16 * level / FULL_LEVEL as u16) as u8,
    }
}
