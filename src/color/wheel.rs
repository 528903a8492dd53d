use super::Rgb;

/// Map a hue position (0-255) to a color on the red-green-blue wheel
///
/// The wheel is split into three linear segments:
/// - `0..85`: green fades into red
/// - `85..170`: red fades into blue
/// - `170..=255`: blue fades into green
///
/// Every segment spans at most 85 steps of 3, so no channel can overflow.
pub const fn wheel(pos: u8) -> Rgb {
    if pos < 85 {
        Rgb {
            r: pos * 3,
            g: 255 - pos * 3,
            b: 0,
        }
    } else if pos < 170 {
        let p = pos - 85;
        Rgb {
            r: 255 - p * 3,
            g: 0,
            b: p * 3,
        }
    } else {
        let p = pos - 170;
        Rgb {
            r: 0,
            g: p * 3,
            b: 255 - p * 3,
        }
    }
}
