use crate::bounds::Bounds;
use crate::line::Line;
use crate::pixel::Pixel;
use crate::point::Point;

pub struct GridUtils;

impl GridUtils {
    /// Pixel of the point within a `width` x `height` tile covering `bounds`.
    /// Both are projected to meters first.
    pub fn get_pixel(width: u32, height: u32, bounds: &Bounds, point: &Point) -> Pixel {
        let point = point.to_meters();
        let bounds = bounds.to_meters();

        let x = Self::get_x_pixel(width, &bounds, point.longitude);
        let y = Self::get_y_pixel(height, &bounds, point.latitude);
        Pixel::new(x, y)
    }

    /// `longitude` is in meters.
    pub fn get_x_pixel(width: u32, bounds: &Bounds, longitude: f64) -> f32 {
        let bounds = bounds.to_meters();
        let offset = longitude - bounds.min_longitude;
        let percentage = offset / bounds.get_width();
        (percentage * width as f64) as f32
    }

    /// `latitude` is in meters. The vertical axis is inverted.
    pub fn get_y_pixel(height: u32, bounds: &Bounds, latitude: f64) -> f32 {
        let bounds = bounds.to_meters();
        let offset = bounds.max_latitude - latitude;
        let percentage = offset / bounds.get_height();
        (percentage * height as f64) as f32
    }

    /// Rounds down to a multiple of `precision`, toward negative infinity.
    pub fn precision_before(value: f64, precision: f64) -> f64 {
        if value.abs() >= precision {
            value - (((value % precision) + precision) % precision)
        } else if value < 0.0 {
            -precision
        } else {
            0.0
        }
    }

    pub fn precision_after(value: f64, precision: f64) -> f64 {
        Self::precision_before(value + precision, precision)
    }

    pub fn intersection(line1: &Line, line2: &Line) -> Option<Point> {
        Self::intersection_of_points(
            line1.point1(),
            line1.point2(),
            line2.point1(),
            line2.point2(),
        )
    }

    /// Solves both lines in meters; the result is in the unit of `line1_point1`.
    /// Parallel or degenerate lines have no intersection.
    pub fn intersection_of_points(
        line1_point1: &Point,
        line1_point2: &Point,
        line2_point1: &Point,
        line2_point2: &Point,
    ) -> Option<Point> {
        let unit = line1_point1.unit;

        let l1p1 = line1_point1.to_meters();
        let l1p2 = line1_point2.to_meters();
        let l2p1 = line2_point1.to_meters();
        let l2p2 = line2_point2.to_meters();

        let a1 = l1p2.latitude - l1p1.latitude;
        let b1 = l1p1.longitude - l1p2.longitude;
        let c1 = a1 * l1p1.longitude + b1 * l1p1.latitude;

        let a2 = l2p2.latitude - l2p1.latitude;
        let b2 = l2p1.longitude - l2p2.longitude;
        let c2 = a2 * l2p1.longitude + b2 * l2p1.latitude;

        let determinant = a1 * b2 - a2 * b1;
        if determinant == 0.0 {
            return None;
        }

        let x = (b2 * c1 - b1 * c2) / determinant;
        let y = (a1 * c2 - a2 * c1) / determinant;
        Some(Point::meters(x, y).to_unit(unit))
    }
}
