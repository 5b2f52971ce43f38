#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    Error,
    nmea_content::{
        Fields, Location, Parsable,
        parse::{self, time_of_day},
    },
};

/// GLL - Geographic Position - Latitude/Longitude
///
/// <https://gpsd.gitlab.io/gpsd/NMEA.html#_gll_geographic_position_latitudelongitude>
///
/// NMEA 2.3:
/// ```text
///         1       2 3        4 5         6 7
///         |       | |        | |         | |
///  $--GLL,ddmm.mm,a,dddmm.mm,a,hhmmss.ss,a,m*hh<CR><LF>
/// ```
///
/// The mode indicator (7) is required.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GLL {
    /// Latitude in decimal degrees, negative south of the equator
    pub latitude: f64,
    /// Longitude in decimal degrees, negative west of Greenwich
    pub longitude: f64,
    /// Fix time in UTC, seconds since midnight
    pub time: f64,
    /// `true` when the status field is `A`
    pub valid: bool,
    /// Positioning mode indicator
    pub mode: PositionMode,
}

impl GLL {
    pub fn location(&self) -> Location {
        Location {
            latitude: self.latitude,
            longitude: self.longitude,
        }
    }

    pub fn fix_time(&self) -> Option<time::Time> {
        parse::clock_time(self.time)
    }
}

impl Parsable for GLL {
    fn parser<'a>(fields: &mut Fields<'a>) -> Result<Self, Error<&'a str>> {
        let lat = fields.next_field()?;
        let latitude = parse::latitude(lat, fields.next_field()?)?;
        let lon = fields.next_field()?;
        let longitude = parse::longitude(lon, fields.next_field()?)?;

        let time = time_of_day(fields.next_field()?)?;
        let valid = fields.next_field()? == "A";

        let mode = fields.last_field()?;
        let mode = PositionMode::from_field(mode).ok_or(Error::InvalidField(mode))?;

        Ok(Self {
            latitude,
            longitude,
            time,
            valid,
            mode,
        })
    }
}

field_enum! {
    /// Positioning Mode Indicator
    pub enum PositionMode {
        /// A - Autonomous mode
        "A" => Autonomous,
        /// D - Differential mode
        "D" => Dgps,
        /// E - Estimated (dead-reckoning) mode
        "E" => DeadReckoning,
    }
}
