//! Pixel sink and double-buffered frame output
//!
//! Patterns never talk to the LED hardware directly. They write pixels into
//! a [`PixelSink`] and publish them with an explicit flush. [`FrameBuffer`]
//! is the standard sink: writes land in a back buffer and become visible
//! only when the ring they belong to is flushed.

use smart_leds::SmartLedsWrite;

use crate::OutputDriver;
use crate::color::{BLACK, Rgb};
use crate::error::ConfigError;
use crate::layout::RingLayout;
use crate::math8::scale8;

/// Addressable RGB output organized in rings
pub trait PixelSink {
    /// Error reported when a flush can not reach the LEDs
    type Error;

    /// Ring layout of the output
    fn layout(&self) -> &RingLayout;

    /// Set a pixel of a ring
    ///
    /// The index wraps around the ring length; unknown rings are ignored.
    fn set_pixel(&mut self, ring: usize, index: usize, color: Rgb);

    /// Publish pending writes of a single ring
    fn flush(&mut self, ring: usize) -> Result<(), Self::Error>;

    /// Publish pending writes of every ring
    fn flush_all(&mut self) -> Result<(), Self::Error> {
        for ring in 0..self.layout().ring_count() {
            self.flush(ring)?;
        }
        Ok(())
    }

    /// Total number of pixels over all rings
    fn total_pixels(&self) -> usize {
        self.layout().total()
    }

    /// Set a pixel by its flat index, wrapping around the total pixel count
    fn set(&mut self, pixel: usize, color: Rgb) {
        let total = self.total_pixels();
        if total == 0 {
            return;
        }
        if let Some((ring, index)) = self.layout().locate(pixel % total) {
            self.set_pixel(ring, index, color);
        }
    }

    /// Set every pixel to the same color
    fn fill(&mut self, color: Rgb) {
        for pixel in 0..self.total_pixels() {
            self.set(pixel, color);
        }
    }
}

/// Double-buffered sink over a single LED chain
///
/// `MAX_LEDS` is the capacity of the buffers; the layout total must fit.
pub struct FrameBuffer<D: OutputDriver, const MAX_LEDS: usize> {
    driver: D,
    layout: RingLayout,
    brightness: u8,
    back: [Rgb; MAX_LEDS],
    front: [Rgb; MAX_LEDS],
    output: [Rgb; MAX_LEDS],
}

impl<D: OutputDriver, const MAX_LEDS: usize> FrameBuffer<D, MAX_LEDS> {
    /// Create a frame buffer with every pixel off
    pub fn new(driver: D, layout: RingLayout) -> Result<Self, ConfigError> {
        if layout.total() > MAX_LEDS {
            return Err(ConfigError::LayoutExceedsBuffer {
                total: layout.total(),
                capacity: MAX_LEDS,
            });
        }
        Ok(Self {
            driver,
            layout,
            brightness: u8::MAX,
            back: [BLACK; MAX_LEDS],
            front: [BLACK; MAX_LEDS],
            output: [BLACK; MAX_LEDS],
        })
    }

    /// Set global output brightness (0-255 = 0.0-1.0)
    #[must_use]
    pub fn with_brightness(mut self, brightness: u8) -> Self {
        self.brightness = brightness;
        self
    }

    /// Set global output brightness (0-255 = 0.0-1.0)
    pub fn set_brightness(&mut self, brightness: u8) {
        self.brightness = brightness;
    }

    /// Colors currently published to the LEDs, before brightness scaling
    pub fn published(&self) -> &[Rgb] {
        &self.front[..self.layout.total()]
    }

    /// Colors written but not necessarily flushed yet
    pub fn pending(&self) -> &[Rgb] {
        &self.back[..self.layout.total()]
    }

    /// Get a reference to the output driver
    pub fn driver(&self) -> &D {
        &self.driver
    }

    /// Get a mutable reference to the output driver
    pub fn driver_mut(&mut self) -> &mut D {
        &mut self.driver
    }

    /// Consume the buffer and return the driver
    pub fn into_driver(self) -> D {
        self.driver
    }

    fn write_out(&mut self) -> Result<(), D::Error> {
        let total = self.layout.total();
        for (out, color) in self.output[..total].iter_mut().zip(&self.front[..total]) {
            *out = Rgb {
                r: scale8(color.r, self.brightness),
                g: scale8(color.g, self.brightness),
                b: scale8(color.b, self.brightness),
            };
        }
        self.driver.write(&self.output[..total])
    }
}

impl<D: OutputDriver, const MAX_LEDS: usize> PixelSink for FrameBuffer<D, MAX_LEDS> {
    type Error = D::Error;

    fn layout(&self) -> &RingLayout {
        &self.layout
    }

    fn set_pixel(&mut self, ring: usize, index: usize, color: Rgb) {
        let len = self.layout.ring_len(ring);
        if len == 0 {
            return;
        }
        if let Some(pixel) = self.layout.flat_index(ring, index % len) {
            self.back[pixel] = color;
        }
    }

    fn flush(&mut self, ring: usize) -> Result<(), Self::Error> {
        let Some(range) = self.layout.ring_range(ring) else {
            return Ok(());
        };
        self.front[range.clone()].copy_from_slice(&self.back[range]);
        self.write_out()
    }

    fn flush_all(&mut self) -> Result<(), Self::Error> {
        let total = self.layout.total();
        self.front[..total].copy_from_slice(&self.back[..total]);
        self.write_out()
    }
}

/// [`OutputDriver`] over any `smart-leds` writer
pub struct SmartLedsOutput<W> {
    writer: W,
}

impl<W> SmartLedsOutput<W>
where
    W: SmartLedsWrite<Color = Rgb>,
{
    pub const fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W> OutputDriver for SmartLedsOutput<W>
where
    W: SmartLedsWrite<Color = Rgb>,
{
    type Error = W::Error;

    fn write(&mut self, colors: &[Rgb]) -> Result<(), Self::Error> {
        self.writer.write(colors.iter().copied())
    }
}
