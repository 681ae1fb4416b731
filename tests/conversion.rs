#[cfg(test)]
mod tests {
    use env_logger;
    use mapgrid::{Bounds, GridConstants, GridUtils, Line, MercatorProjection, Point, Unit};
    use tracing::info;

    const H: f64 = GridConstants::WEB_MERCATOR_HALF_WORLD_WIDTH;

    fn init() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    fn approx_equal(a: f64, b: f64, epsilon: f64) -> bool {
        (a - b).abs() < epsilon
    }

    #[test]
    fn test_meters_degrees_round_trip() {
        init();
        let mut latitude = -89.85;
        while latitude < 89.9 {
            for longitude in (-180..=180).step_by(15) {
                let longitude = longitude as f64;
                let meters = MercatorProjection::to_meters(longitude, latitude);
                let degrees = MercatorProjection::to_degrees(meters.longitude, meters.latitude);
                assert!(
                    approx_equal(degrees.longitude, longitude, 1e-9)
                        && approx_equal(degrees.latitude, latitude, 1e-9),
                    "round trip of ({}, {}) gave {:?}",
                    longitude,
                    latitude,
                    degrees
                );
            }
            latitude += 0.35;
        }
    }

    #[test]
    fn test_to_meters_extents() {
        let meters = MercatorProjection::to_meters(-180.0, 85.05112877980659);
        assert!(meters.is_meters());
        assert!(approx_equal(meters.longitude, -H, 1e-6));
        assert!(approx_equal(meters.latitude, H, 1e-3));

        // Not clamped: the pole projects far outside the world square
        let pole = MercatorProjection::to_meters(0.0, 90.0);
        assert!(pole.latitude > 10.0 * H);
    }

    #[test]
    fn test_convert() {
        let same = MercatorProjection::convert(Unit::Meter, 1.0, 2.0, Unit::Meter);
        assert_eq!(same, Point::meters(1.0, 2.0));

        let converted = MercatorProjection::convert(Unit::Degree, 45.0, 0.0, Unit::Meter);
        assert!(approx_equal(converted.longitude, H / 4.0, 1e-6));
        assert_eq!(
            MercatorProjection::to_unit(45.0, 0.0, Unit::Meter),
            converted
        );
    }

    #[test]
    fn test_tile_bounds() {
        init();
        assert_eq!(MercatorProjection::tiles_per_side(0), 1);
        assert_eq!(MercatorProjection::tiles_per_side(10), 1024);
        assert_eq!(MercatorProjection::tile_size(1), 2.0 * H);

        assert_eq!(
            MercatorProjection::tile_bounds(0, 0, 0),
            Bounds::meters(-H, -H, H, H)
        );

        // Past zoom 63 the tile count saturates instead of overflowing
        assert_eq!(MercatorProjection::tiles_per_side(63), 1u64 << 63);
        assert_eq!(MercatorProjection::tiles_per_side(64), u64::MAX);
        assert_eq!(MercatorProjection::tiles_per_side(u8::MAX), u64::MAX);
        let deep = MercatorProjection::tile_bounds(0, 0, 64);
        assert_eq!(deep.min_longitude, -H);
        assert_eq!(deep.max_latitude, H);
        assert!(deep.min_latitude.is_finite() && deep.max_longitude.is_finite());
        assert!(MercatorProjection::tile_bounds(1, 1, u8::MAX).max_longitude.is_finite());

        let bounds = MercatorProjection::tile_bounds(486, 332, 10);
        info!("Tile 486/332/10: {:?}", bounds);
        assert!(approx_equal(bounds.min_longitude, -1017529.7205322683, 1e-6));
        assert!(approx_equal(bounds.min_latitude, 7005300.768279836, 1e-6));
        assert!(approx_equal(bounds.max_longitude, -978393.9620502554, 1e-6));
        assert!(approx_equal(bounds.max_latitude, 7044436.526761845, 1e-6));
    }

    #[test]
    fn test_tile_bounds_partition_world() {
        for zoom in [1u8, 3, 5] {
            let n = MercatorProjection::tiles_per_side(zoom) as u32;
            let mut area = 0.0;
            for x in 0..n {
                for y in 0..n {
                    let tile = MercatorProjection::tile_bounds(x, y, zoom);
                    area += tile.get_width() * tile.get_height();

                    if x + 1 < n {
                        let east = MercatorProjection::tile_bounds(x + 1, y, zoom);
                        assert_eq!(tile.max_longitude, east.min_longitude);
                    } else {
                        assert_eq!(tile.max_longitude, H);
                    }
                    if y + 1 < n {
                        let south = MercatorProjection::tile_bounds(x, y + 1, zoom);
                        assert_eq!(tile.min_latitude, south.max_latitude);
                    } else {
                        assert_eq!(tile.min_latitude, -H);
                    }
                    if x == 0 {
                        assert_eq!(tile.min_longitude, -H);
                    }
                    if y == 0 {
                        assert_eq!(tile.max_latitude, H);
                    }
                }
            }
            let world = 4.0 * H * H;
            assert!(((area - world) / world).abs() < 1e-12);
        }
    }

    #[test]
    fn test_zoom_level() {
        for zoom in 0..=21u8 {
            let bounds = MercatorProjection::tile_bounds(0, 0, zoom);
            assert!(approx_equal(MercatorProjection::zoom_level(&bounds), zoom as f64, 1e-9));
        }

        // The shorter side decides
        let bounds = Bounds::meters(0.0, 0.0, H, H / 2.0);
        assert!(approx_equal(MercatorProjection::zoom_level(&bounds), 2.0, 1e-9));
    }

    #[test]
    fn test_pixel_mapping() {
        let bounds = Bounds::meters(0.0, 0.0, 100.0, 200.0);

        assert_eq!(GridUtils::get_x_pixel(256, &bounds, 25.0), 64.0);
        assert_eq!(GridUtils::get_y_pixel(256, &bounds, 150.0), 64.0);

        let pixel = GridUtils::get_pixel(256, 256, &bounds, &Point::meters(50.0, 0.0));
        assert_eq!(pixel.x, 128.0);
        assert_eq!(pixel.y, 256.0);

        // Outside the bounds maps outside the tile
        let pixel = GridUtils::get_pixel(256, 256, &bounds, &Point::meters(-100.0, 400.0));
        assert_eq!(pixel.x, -256.0);
        assert_eq!(pixel.y, -256.0);
    }

    #[test]
    fn test_precision_before_and_after() {
        assert_eq!(GridUtils::precision_before(-7.5, 5.0), -10.0);
        assert_eq!(GridUtils::precision_before(-15.0, 10.0), -20.0);
        assert_eq!(GridUtils::precision_before(10.0, 10.0), 10.0);
        assert_eq!(GridUtils::precision_after(10.0, 10.0), 20.0);
        assert_eq!(GridUtils::precision_before(0.3, 1.0), 0.0);
        assert_eq!(GridUtils::precision_before(-0.3, 1.0), -1.0);
        assert_eq!(GridUtils::precision_after(-0.3, 1.0), 0.0);
        assert_eq!(GridUtils::precision_before(0.0, 1.0), 0.0);
        assert_eq!(GridUtils::precision_after(0.0, 1.0), 1.0);
    }

    #[test]
    fn test_precision_brackets_value() {
        let precisions = [0.5, 1.0, 6.0, 8.0, 100_000.0];
        let values = [
            -180.0, -97.25, -8.0, -6.0, -0.75, -0.1, 0.0, 0.1, 0.75, 5.999, 42.0, 179.9,
            -4_000_000.5, 1_234_567.0,
        ];
        for &precision in &precisions {
            for &value in &values {
                let before = GridUtils::precision_before(value, precision);
                let after = GridUtils::precision_after(value, precision);
                assert!(
                    before <= value && value <= after,
                    "{} <= {} <= {} for precision {}",
                    before,
                    value,
                    after,
                    precision
                );
                for bound in [before, after] {
                    let multiple = (bound / precision).round() * precision;
                    assert!(approx_equal(bound, multiple, 1e-6));
                }
            }
        }
    }

    #[test]
    fn test_line_intersection() {
        init();
        let line1 = Line::new(Point::meters(0.0, 0.0), Point::meters(10.0, 10.0)).unwrap();
        let line2 = Line::new(Point::meters(0.0, 10.0), Point::meters(10.0, 0.0)).unwrap();
        assert_eq!(line1.intersection(&line2), Some(Point::meters(5.0, 5.0)));

        let parallel1 = Line::new(Point::meters(0.0, 0.0), Point::meters(10.0, 0.0)).unwrap();
        let parallel2 = Line::new(Point::meters(0.0, 5.0), Point::meters(10.0, 5.0)).unwrap();
        assert_eq!(GridUtils::intersection(&parallel1, &parallel2), None);

        let collinear = Line::new(Point::meters(20.0, 0.0), Point::meters(30.0, 0.0)).unwrap();
        assert_eq!(parallel1.intersection(&collinear), None);
    }

    #[test]
    fn test_line_intersection_keeps_first_line_unit() {
        let line1 = Line::new(Point::degrees(-10.0, -10.0), Point::degrees(10.0, 10.0)).unwrap();
        let line2 = Line::new(Point::meters(-1000.0, 1000.0), Point::meters(1000.0, -1000.0)).unwrap();

        let intersection = line1.intersection(&line2).unwrap();
        info!("Intersection: {:?}", intersection);
        assert!(intersection.is_degrees());
        assert!(approx_equal(intersection.longitude, 0.0, 1e-9));
        assert!(approx_equal(intersection.latitude, 0.0, 1e-9));

        let reversed = line2.intersection(&line1).unwrap();
        assert!(reversed.is_meters());
        assert!(approx_equal(reversed.longitude, 0.0, 1e-6));
    }
}
