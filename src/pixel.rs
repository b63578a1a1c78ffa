/// Channel arrangement of the input buffer.
///
/// Alpha, when present, is always the last channel of a pixel. PGM and PPM
/// have no alpha, so it is dropped on export.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ColorType {
    /// Single gray channel.
    Gray,
    /// Red, green, blue.
    Rgb,
    /// Gray followed by alpha.
    GrayAlpha,
    /// Red, green, blue followed by alpha.
    Rgba,
}

impl ColorType {
    /// Channels per pixel in the input buffer.
    pub fn channels(self) -> usize {
        match self {
            Self::Gray => 1,
            Self::GrayAlpha => 2,
            Self::Rgb => 3,
            Self::Rgba => 4,
        }
    }

    /// Whether the last channel of each pixel is alpha.
    pub fn has_alpha(self) -> bool {
        match self {
            Self::Gray | Self::Rgb => false,
            Self::GrayAlpha | Self::Rgba => true,
        }
    }

    /// Channels per pixel written to the file (alpha removed).
    pub fn output_channels(self) -> usize {
        match self {
            Self::Gray | Self::GrayAlpha => 1,
            Self::Rgb | Self::Rgba => 3,
        }
    }

    /// `true` for the PPM variants, `false` for the PGM ones.
    pub fn is_color(self) -> bool {
        match self {
            Self::Gray | Self::GrayAlpha => false,
            Self::Rgb | Self::Rgba => true,
        }
    }
}

/// Storage size of one sample.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ChannelSize {
    /// One byte per sample, maxval 255.
    Eight,
    /// Two bytes per sample, big-endian, maxval 65535.
    Sixteen,
}

impl ChannelSize {
    /// Bytes per sample.
    pub fn bytes(self) -> usize {
        match self {
            Self::Eight => 1,
            Self::Sixteen => 2,
        }
    }

    /// Largest representable sample, as recorded in the header.
    pub fn maxval(self) -> u16 {
        match self {
            Self::Eight => 255,
            Self::Sixteen => 65535,
        }
    }

    /// Size implied by a header maxval.
    pub(crate) fn for_maxval(maxval: u16) -> Self {
        if maxval > 255 {
            Self::Sixteen
        } else {
            Self::Eight
        }
    }
}
