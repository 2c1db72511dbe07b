//! Single RGBA pixel and channel addressing.
use serde::{Deserialize, Serialize};
use std::fmt;

/// Channel of an RGBA pixel, in storage order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Channel {
    Red,
    Green,
    Blue,
    Alpha,
}

impl Channel {
    /// Colour channels, excluding alpha.
    pub const COLOR: [Channel; 3] = [Channel::Red, Channel::Green, Channel::Blue];
    pub const ALL: [Channel; 4] = [Channel::Red, Channel::Green, Channel::Blue, Channel::Alpha];

    /// Offset of this channel inside a 4-byte pixel.
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Channel::Red => 0,
            Channel::Green => 1,
            Channel::Blue => 2,
            Channel::Alpha => 3,
        }
    }
}

/// An 8-bit, non-premultiplied RGBA pixel.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgba(pub [u8; 4]);

impl Rgba {
    pub const BLACK: Self = Self([0, 0, 0, 255]);
    pub const WHITE: Self = Self([255, 255, 255, 255]);

    #[inline]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self([r, g, b, a])
    }

    /// Read a pixel from the first four bytes of `bytes`.
    #[inline]
    pub fn from_slice(bytes: &[u8]) -> Self {
        Self([bytes[0], bytes[1], bytes[2], bytes[3]])
    }

    #[inline]
    pub fn channel(self, channel: Channel) -> u8 {
        self.0[channel.index()]
    }

    #[inline]
    pub fn with_channel(mut self, channel: Channel, value: u8) -> Self {
        self.0[channel.index()] = value;
        self
    }

    #[inline]
    pub fn with_alpha(self, a: u8) -> Self {
        self.with_channel(Channel::Alpha, a)
    }

    #[inline]
    pub fn r(self) -> u8 {
        self.0[0]
    }

    #[inline]
    pub fn g(self) -> u8 {
        self.0[1]
    }

    #[inline]
    pub fn b(self) -> u8 {
        self.0[2]
    }

    #[inline]
    pub fn a(self) -> u8 {
        self.0[3]
    }
}

impl From<[u8; 4]> for Rgba {
    fn from(value: [u8; 4]) -> Self {
        Self(value)
    }
}

impl From<Rgba> for [u8; 4] {
    fn from(value: Rgba) -> Self {
        value.0
    }
}

impl fmt::Debug for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "#{:02x}{:02x}{:02x}{:02x}",
            self.r(),
            self.g(),
            self.b(),
            self.a()
        )
    }
}
