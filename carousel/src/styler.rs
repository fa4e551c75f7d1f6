use crate::{EmphasisTier, TextAppearance, Tilt};

const ROTATION_CENTER: i16 = 0;
const ROTATION_NEAR: i16 = 25;
const ROTATION_FAR: i16 = 50;
const ROTATION_DISTANT: i16 = 55;

const OPACITY_OPAQUE: f32 = 1.0;
const OPACITY_FAR: f32 = 0.7;

/// Maps a padded row index to its emphasis tier relative to `center`.
///
/// Pure function over indexes; it does not care whether `position` is a sentinel row.
pub fn style_for(position: usize, center: usize) -> EmphasisTier {
    if position == center {
        return EmphasisTier::Center;
    }
    if position < center {
        match center - position {
            1 => EmphasisTier::NearAbove,
            2 => EmphasisTier::FarAbove,
            _ => EmphasisTier::Distant(Tilt::Below),
        }
    } else {
        match position - center {
            1 => EmphasisTier::NearBelow,
            2 => EmphasisTier::FarBelow,
            _ => EmphasisTier::Distant(Tilt::Above),
        }
    }
}

/// The fixed (rotation, opacity, appearance) triple of a tier.
///
/// `rotation_x` is in degrees around the horizontal axis; rows before the center lean with a
/// positive angle, rows after it with the mirrored negative one.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RowStyle {
    pub rotation_x: i16,
    pub opacity: f32,
    pub appearance: TextAppearance,
}

impl EmphasisTier {
    pub fn style(self) -> RowStyle {
        let (rotation_x, opacity, appearance) = match self {
            Self::Center => (ROTATION_CENTER, OPACITY_OPAQUE, TextAppearance::Center),
            Self::NearAbove => (ROTATION_NEAR, OPACITY_OPAQUE, TextAppearance::NearCenter),
            Self::NearBelow => (-ROTATION_NEAR, OPACITY_OPAQUE, TextAppearance::NearCenter),
            Self::FarAbove => (ROTATION_FAR, OPACITY_FAR, TextAppearance::FarCenter),
            Self::FarBelow => (-ROTATION_FAR, OPACITY_FAR, TextAppearance::FarCenter),
            Self::Distant(Tilt::Below) => (ROTATION_DISTANT, OPACITY_OPAQUE, TextAppearance::Small),
            Self::Distant(Tilt::Above) => {
                (-ROTATION_DISTANT, OPACITY_OPAQUE, TextAppearance::Small)
            }
        };
        RowStyle {
            rotation_x,
            opacity,
            appearance,
        }
    }

    pub fn is_center(self) -> bool {
        matches!(self, Self::Center)
    }
}
