use alloc::string::String;

/// Caller-chosen identifier echoed back with every selection (lets one listener serve several
/// pickers).
pub type RequestId = i32;

/// A packed `0xAARRGGBB` color.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Color(pub u32);

impl Color {
    pub const TRANSPARENT: Self = Self(0x0000_0000);
    pub const BLACK: Self = Self(0xFF00_0000);
    pub const WHITE: Self = Self(0xFFFF_FFFF);

    pub const fn from_argb(a: u8, r: u8, g: u8, b: u8) -> Self {
        Self((a as u32) << 24 | (r as u32) << 16 | (g as u32) << 8 | b as u32)
    }

    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self::from_argb(0xFF, r, g, b)
    }

    pub const fn alpha(self) -> u8 {
        (self.0 >> 24) as u8
    }

    pub const fn red(self) -> u8 {
        (self.0 >> 16) as u8
    }

    pub const fn green(self) -> u8 {
        (self.0 >> 8) as u8
    }

    pub const fn blue(self) -> u8 {
        self.0 as u8
    }

    /// Channels in `[r, g, b, a]` order, matching `image::Rgba`.
    pub const fn to_rgba(self) -> [u8; 4] {
        [self.red(), self.green(), self.blue(), self.alpha()]
    }
}

/// Which way a far-away row leans.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Tilt {
    /// Rows before the center (`position < center`).
    Below,
    /// Rows after the center.
    Above,
}

/// Discrete visual treatment of a row, derived only from `position - center`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EmphasisTier {
    Center,
    /// `center - 1`
    NearAbove,
    /// `center + 1`
    NearBelow,
    /// `center - 2`
    FarAbove,
    /// `center + 2`
    FarBelow,
    /// Everything further away; the tilt is fixed, not scaled with distance.
    Distant(Tilt),
}

impl EmphasisTier {
    /// The same tier seen from the other side of the center.
    pub fn mirrored(self) -> Self {
        match self {
            Self::Center => Self::Center,
            Self::NearAbove => Self::NearBelow,
            Self::NearBelow => Self::NearAbove,
            Self::FarAbove => Self::FarBelow,
            Self::FarBelow => Self::FarAbove,
            Self::Distant(Tilt::Below) => Self::Distant(Tilt::Above),
            Self::Distant(Tilt::Above) => Self::Distant(Tilt::Below),
        }
    }
}

/// Text style bucket a host maps onto its own fonts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TextAppearance {
    Center,
    NearCenter,
    FarCenter,
    Small,
}

/// A user selection, delivered after the settle delay.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Selection {
    pub request_id: RequestId,
    /// Index in the raw (unpadded) item list.
    pub raw_position: usize,
    pub value: String,
}
