#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    Error,
    nmea_content::{
        Fields, NOT_PROVIDED, Parsable,
        parse::{optional, required},
    },
};

/// GSA - GPS DOP and active satellites
///
/// <https://gpsd.gitlab.io/gpsd/NMEA.html#_gsa_gps_dop_and_active_satellites>
///
/// ```text
///         1 2 3                        15  16  17
///         | | |                        |   |   |
///  $--GSA,a,a,x,x,x,x,x,x,x,x,x,x,x,x,x.x,x.x,x.x*hh<CR><LF>
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GSA {
    /// Selection mode
    pub selection_mode: SelectionMode,
    /// Fix mode
    pub fix_mode: FixMode,
    /// PRN of the satellite tracked on each of the 12 channels, `None` for an unused channel
    pub channels: [Option<u16>; 12],
    /// Position Dilution of Precision
    pub pdop: f32,
    /// Horizontal Dilution of Precision
    pub hdop: f32,
    /// Vertical Dilution of Precision
    pub vdop: f32,
}

impl GSA {
    /// Channel PRNs with unused channels reported as [`NOT_PROVIDED`].
    pub fn channel_prns_or_sentinel(&self) -> [i32; 12] {
        self.channels
            .map(|channel| channel.map_or(NOT_PROVIDED, i32::from))
    }

    /// PRNs of the satellites used in the fix, in channel order.
    pub fn active_satellites(&self) -> heapless::Vec<u16, 12> {
        self.channels.iter().flatten().copied().collect()
    }
}

impl Parsable for GSA {
    fn parser<'a>(fields: &mut Fields<'a>) -> Result<Self, Error<&'a str>> {
        let selection_mode =
            SelectionMode::from_field(fields.next_field()?).unwrap_or(SelectionMode::Automatic);
        let fix_mode = FixMode::from_field(fields.next_field()?).unwrap_or(FixMode::Fix3D);

        let mut channels = [None; 12];
        for channel in channels.iter_mut() {
            *channel = optional(fields.next_field()?)?;
        }

        let pdop = required(fields.next_field()?)?;
        let hdop = required(fields.next_field()?)?;
        let vdop = required(fields.last_field()?)?;

        Ok(Self {
            selection_mode,
            fix_mode,
            channels,
            pdop,
            hdop,
            vdop,
        })
    }
}

field_enum! {
    /// Satellite selection mode
    ///
    /// Any token other than `M` is read as [`SelectionMode::Automatic`].
    pub enum SelectionMode {
        /// M - Manual, forced to operate in 2D or 3D
        "M" => Manual,
        /// A - Automatic, 2D/3D
        "A" => Automatic,
    }
}

field_enum! {
    /// Fix mode
    ///
    /// Any token other than `1` or `2` is read as [`FixMode::Fix3D`].
    pub enum FixMode {
        /// 1 - Fix not available
        "1" => FixUnavailable,
        /// 2 - 2D fix
        "2" => Fix2D,
        /// 3 - 3D fix
        "3" => Fix3D,
    }
}
