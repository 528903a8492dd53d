#![allow(dead_code)]

use std::cell::Cell;
use std::convert::Infallible;
use std::rc::Rc;

use embedded_hal::digital::{self, ErrorKind, ErrorType, InputPin};
use myrtio_ring_selector::{
    FrameBuffer, OutputDriver, Rgb, RingLayout, color::BLACK, config::REFERENCE_RING_SIZES,
};

pub const MAX_LEDS: usize = 64;

/// Driver that keeps every written frame
#[derive(Debug, Default)]
pub struct RecordingDriver {
    pub frames: Vec<Vec<Rgb>>,
}

impl RecordingDriver {
    pub fn last(&self) -> &[Rgb] {
        self.frames.last().map(Vec::as_slice).unwrap_or(&[])
    }
}

impl OutputDriver for RecordingDriver {
    type Error = Infallible;

    fn write(&mut self, colors: &[Rgb]) -> Result<(), Self::Error> {
        self.frames.push(colors.to_vec());
        Ok(())
    }
}

/// Driver whose hardware is gone
#[derive(Debug, Default)]
pub struct FailingDriver;

impl OutputDriver for FailingDriver {
    type Error = &'static str;

    fn write(&mut self, _colors: &[Rgb]) -> Result<(), Self::Error> {
        Err("chain offline")
    }
}

pub fn reference_buffer() -> FrameBuffer<RecordingDriver, MAX_LEDS> {
    buffer(&REFERENCE_RING_SIZES)
}

pub fn buffer(sizes: &[u16]) -> FrameBuffer<RecordingDriver, MAX_LEDS> {
    let layout = RingLayout::new(sizes).unwrap();
    FrameBuffer::new(RecordingDriver::default(), layout).unwrap()
}

/// Flat indices of pixels that are not black
pub fn lit_pixels(frame: &[Rgb]) -> Vec<usize> {
    frame
        .iter()
        .enumerate()
        .filter(|(_, color)| **color != BLACK)
        .map(|(index, _)| index)
        .collect()
}

/// Input pin driven by the test through a shared flag
#[derive(Debug, Clone, Default)]
pub struct FakePin {
    low: Rc<Cell<bool>>,
}

impl FakePin {
    pub fn handle(&self) -> Rc<Cell<bool>> {
        Rc::clone(&self.low)
    }
}

impl ErrorType for FakePin {
    type Error = Infallible;
}

impl InputPin for FakePin {
    fn is_high(&mut self) -> Result<bool, Self::Error> {
        Ok(!self.low.get())
    }

    fn is_low(&mut self) -> Result<bool, Self::Error> {
        Ok(self.low.get())
    }
}

/// Fresh pins with a handle to pull each of them low
pub fn pins<const N: usize>() -> ([FakePin; N], [Rc<Cell<bool>>; N]) {
    let pins: [FakePin; N] = core::array::from_fn(|_| FakePin::default());
    let handles = core::array::from_fn(|index| pins[index].handle());
    (pins, handles)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PinFault;

impl digital::Error for PinFault {
    fn kind(&self) -> ErrorKind {
        ErrorKind::Other
    }
}

/// Input pin that can not be read
#[derive(Debug, Default)]
pub struct BrokenPin;

impl ErrorType for BrokenPin {
    type Error = PinFault;
}

impl InputPin for BrokenPin {
    fn is_high(&mut self) -> Result<bool, Self::Error> {
        Err(PinFault)
    }

    fn is_low(&mut self) -> Result<bool, Self::Error> {
        Err(PinFault)
    }
}
