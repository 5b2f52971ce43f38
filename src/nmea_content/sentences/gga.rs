#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    Error,
    nmea_content::{
        Fields, Location, NOT_PROVIDED, Parsable,
        parse::{self, optional, required, time_of_day},
    },
};

/// GGA - Global Positioning System Fix Data
///
/// <https://gpsd.gitlab.io/gpsd/NMEA.html#_gga_global_positioning_system_fix_data>
///
/// ```text
///                                                      11
///         1         2       3 4        5 6 7  8   9  10 |  12 13  14
///         |         |       | |        | | |  |   |   | |   | |   |
///  $--GGA,hhmmss.ss,ddmm.mm,a,dddmm.mm,a,x,xx,x.x,x.x,M,x.x,M,x.x,xxxx*hh<CR><LF>
/// ```
///
/// The unit fields (10 and 12) are skipped. The reference station id (14)
/// must be empty or numeric but is not kept.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GGA {
    /// Fix time in UTC, seconds since midnight
    pub time: f64,
    /// Latitude in decimal degrees, negative south of the equator
    pub latitude: f64,
    /// Longitude in decimal degrees, negative west of Greenwich
    pub longitude: f64,
    /// GPS Quality Indicator
    pub fix_quality: FixQuality,
    /// Number of satellites in use
    pub satellites_used: u8,
    /// Horizontal Dilution of Precision
    pub hdop: f32,
    /// Altitude above/below mean sea level (geoid) in meters
    pub alt_msl: f32,
    /// Geoidal separation in meters, negative when the geoid is below the WGS-84 ellipsoid
    pub geoid_separation: f32,
    /// Age of differential GPS data in seconds, `None` when DGPS is not used
    pub age_of_diff_data: Option<f32>,
}

impl GGA {
    pub fn location(&self) -> Location {
        Location {
            latitude: self.latitude,
            longitude: self.longitude,
        }
    }

    /// Fix time as a clock time, `None` if the reported time is not a valid time of day.
    pub fn fix_time(&self) -> Option<time::Time> {
        parse::clock_time(self.time)
    }

    /// Age of differential data, [`NOT_PROVIDED`] when the field was empty.
    pub fn age_of_diff_data_or_sentinel(&self) -> f32 {
        self.age_of_diff_data.unwrap_or(NOT_PROVIDED as f32)
    }
}

impl Parsable for GGA {
    fn parser<'a>(fields: &mut Fields<'a>) -> Result<Self, Error<&'a str>> {
        let time = time_of_day(fields.next_field()?)?;

        let lat = fields.next_field()?;
        let latitude = parse::latitude(lat, fields.next_field()?)?;
        let lon = fields.next_field()?;
        let longitude = parse::longitude(lon, fields.next_field()?)?;

        let fix_quality = FixQuality::from(required::<u8>(fields.next_field()?)?);
        let satellites_used = required(fields.next_field()?)?;
        let hdop = required(fields.next_field()?)?;

        let alt_msl = required(fields.next_field()?)?;
        fields.skip()?;
        let geoid_separation = required(fields.next_field()?)?;
        fields.skip()?;

        let age_of_diff_data = optional(fields.next_field()?)?;
        let _ref_station_id: Option<u16> = optional(fields.last_field()?)?;

        Ok(Self {
            time,
            latitude,
            longitude,
            fix_quality,
            satellites_used,
            hdop,
            alt_msl,
            geoid_separation,
            age_of_diff_data,
        })
    }
}

/// Quality of the GPS fix
///
/// Values outside `0..=4` are kept as [`FixQuality::Other`].
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FixQuality {
    /// 0 - Fix not available
    Invalid,
    /// 1 - GPS fix
    Fix,
    /// 2 - Differential GPS fix
    DiffFix,
    /// 3 - PPS fix, not supported by this decoder beyond classification
    Unsupported,
    /// 4 - Dead reckoning
    DeadReckoning,
    /// Any other indicator value
    Other(u8),
}

impl From<u8> for FixQuality {
    fn from(value: u8) -> Self {
        match value {
            0 => FixQuality::Invalid,
            1 => FixQuality::Fix,
            2 => FixQuality::DiffFix,
            3 => FixQuality::Unsupported,
            4 => FixQuality::DeadReckoning,
            other => FixQuality::Other(other),
        }
    }
}
