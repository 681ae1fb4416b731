use std::fmt;

use crate::point::Point;

/// Coordinate space a geometry value is expressed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Unit {
    /// WGS84 longitude / latitude
    Degree,
    /// Web Mercator projected meters
    Meter,
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Unit::Degree => write!(f, "DEGREE"),
            Unit::Meter => write!(f, "METER"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Hemisphere {
    North,
    South,
}

impl Hemisphere {
    pub fn from_latitude(latitude: f64) -> Self {
        if latitude >= 0.0 {
            Hemisphere::North
        } else {
            Hemisphere::South
        }
    }

    pub fn from_point(point: &Point) -> Self {
        Self::from_latitude(point.latitude)
    }
}
