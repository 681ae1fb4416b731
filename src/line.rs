use crate::errors::GridError;
use crate::grid_utils::GridUtils;
use crate::point::Point;
use crate::unit::Unit;

/// Two points sharing a unit. Coincident points are allowed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Line {
    point1: Point,
    point2: Point,
}

impl Line {
    pub fn new(point1: Point, point2: Point) -> Result<Self, GridError> {
        Self::validate_units(&point1, &point2)?;
        Ok(Self { point1, point2 })
    }

    /// Caller guarantees both points share a unit.
    pub(crate) fn from_same_unit(point1: Point, point2: Point) -> Self {
        debug_assert_eq!(point1.unit, point2.unit);
        Self { point1, point2 }
    }

    pub fn point1(&self) -> &Point {
        &self.point1
    }

    pub fn point2(&self) -> &Point {
        &self.point2
    }

    pub fn set_point1(&mut self, point1: Point) -> Result<(), GridError> {
        self.set_points(point1, self.point2)
    }

    pub fn set_point2(&mut self, point2: Point) -> Result<(), GridError> {
        self.set_points(self.point1, point2)
    }

    pub fn set_points(&mut self, point1: Point, point2: Point) -> Result<(), GridError> {
        Self::validate_units(&point1, &point2)?;
        self.point1 = point1;
        self.point2 = point2;
        Ok(())
    }

    pub fn unit(&self) -> Unit {
        self.point1.unit
    }

    pub fn is_unit(&self, unit: Unit) -> bool {
        self.point1.is_unit(unit)
    }

    pub fn is_degrees(&self) -> bool {
        self.point1.is_degrees()
    }

    pub fn is_meters(&self) -> bool {
        self.point1.is_meters()
    }

    pub fn to_unit(&self, unit: Unit) -> Line {
        if self.is_unit(unit) {
            *self
        } else {
            Self::from_same_unit(self.point1.to_unit(unit), self.point2.to_unit(unit))
        }
    }

    pub fn to_degrees(&self) -> Line {
        self.to_unit(Unit::Degree)
    }

    pub fn to_meters(&self) -> Line {
        self.to_unit(Unit::Meter)
    }

    /// Intersection of the two infinite lines, in this line's unit.
    pub fn intersection(&self, line: &Line) -> Option<Point> {
        GridUtils::intersection(self, line)
    }

    fn validate_units(point1: &Point, point2: &Point) -> Result<(), GridError> {
        if !point1.is_unit(point2.unit) {
            return Err(GridError::UnitMismatch {
                first: point1.unit,
                second: point2.unit,
            });
        }
        Ok(())
    }
}
