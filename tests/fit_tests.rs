use tiltfit::prelude::*;

/// Integration tests for fitting bounds into tilted cameras
/// These exercise the public API the way a map view would call it
#[cfg(test)]
mod fit_tests {
    use super::*;

    fn phone() -> (ViewportSize, Padding) {
        (
            ViewportSize::new(375.0, 667.0),
            Padding::new(50.0, 10.0, 100.0, 10.0),
        )
    }

    fn wide_bounds() -> LatLngBounds {
        LatLngBounds::from_coords(48.10, 17.00, 48.20, 17.30)
    }

    fn tall_bounds() -> LatLngBounds {
        LatLngBounds::from_coords(48.10, 17.00, 48.40, 17.05)
    }

    /// A flat camera reproduces the top-down fit exactly
    #[test]
    fn test_zero_tilt_reproduces_untilted_pose() {
        let (size, padding) = phone();
        let options = FitOptions::default();

        for bounds in [wide_bounds(), tall_bounds()] {
            let pose = fit_tilted_bounds(&bounds, &size, 0.0, &padding).unwrap();
            let zoom = zoom_to_fit(&bounds, &size, &padding, &options).unwrap();
            assert_eq!(pose.zoom, zoom);
            assert_eq!(pose.target, bounds.center());
        }
    }

    /// Growing the bounds never allows a closer zoom
    #[test]
    fn test_zoom_to_fit_decreases_as_bounds_grow() {
        let (size, padding) = phone();
        let options = FitOptions::default();

        let mut previous = f64::INFINITY;
        for step in 1..=20 {
            let extent = 0.05 * step as f64;
            let bounds = LatLngBounds::from_coords(48.0, 17.0, 48.0 + extent, 17.0 + extent);
            let zoom = zoom_to_fit(&bounds, &size, &padding, &options).unwrap();
            assert!(zoom <= previous, "zoom rose to {zoom} at extent {extent}");
            previous = zoom;
        }
    }

    /// Growing the viewport never forces a farther zoom
    #[test]
    fn test_zoom_to_fit_increases_as_viewport_grows() {
        let options = FitOptions::default();
        let bounds = wide_bounds();

        let mut previous = f64::NEG_INFINITY;
        for step in 1..=20 {
            let side = 100.0 * step as f64;
            let size = ViewportSize::new(side, side * 1.5);
            let zoom = zoom_to_fit(&bounds, &size, &Padding::uniform(10.0), &options).unwrap();
            assert!(zoom >= previous);
            assert!(zoom.is_finite() && zoom <= 21.0);
            previous = zoom;
        }
    }

    /// Bounds spanning ±180° fit like an ordinary 20 degree box
    #[test]
    fn test_antimeridian_bounds() {
        let size = ViewportSize::new(512.0, 512.0);
        let crossing = LatLngBounds::from_coords(10.0, 170.0, 20.0, -170.0);
        let ordinary = LatLngBounds::from_coords(10.0, -10.0, 20.0, 10.0);

        let options = FitOptions::default();
        let zoom = zoom_to_fit(&crossing, &size, &Padding::zero(), &options).unwrap();
        let expected = zoom_to_fit(&ordinary, &size, &Padding::zero(), &options).unwrap();
        assert!((zoom - expected).abs() < 1e-12);

        let pose = fit_tilted_bounds(&crossing, &size, 30.0, &Padding::zero()).unwrap();
        assert!(pose.target.lng.abs() > 179.0);
        assert!(pose.target.lat > 10.0 && pose.target.lat < 20.0);
        assert!(pose.zoom.is_finite());
    }

    /// Wide bounds lose zoom steadily as the camera tips forward
    #[test]
    fn test_tilt_reduces_zoom_for_wide_bounds() {
        let (size, padding) = phone();
        let fitter = TiltedFitter::new(FitOptions::default());

        let mut previous = fitter.fit(&wide_bounds(), &size, 0.0, &padding).unwrap().zoom;
        for tilt in [15.0, 30.0, 45.0, 60.0] {
            let report = fitter
                .fit_report(&wide_bounds(), &size, tilt, &padding)
                .unwrap();
            assert_eq!(report.correction.constraint, FitConstraint::Width);
            assert!(report.correction.scale_y < 1.0);
            assert!(report.pose.zoom < previous);
            previous = report.pose.zoom;
        }
    }

    /// Tall bounds are limited by their height and may zoom in
    #[test]
    fn test_tall_bounds_zoom_in_under_moderate_tilt() {
        let (size, padding) = phone();
        let report = TiltedFitter::new(FitOptions::default())
            .fit_report(&tall_bounds(), &size, 30.0, &padding)
            .unwrap();

        assert_eq!(report.correction.constraint, FitConstraint::Height);
        assert!(report.pose.zoom > report.untilted_zoom);
        assert!(report.pose.target.lat < tall_bounds().center().lat);
    }

    /// Tall bounds at a steep tilt have no valid height fit
    #[test]
    fn test_unstable_height_fit_is_an_error() {
        let (size, padding) = phone();
        let result = fit_tilted_bounds(&tall_bounds(), &size, 85.0, &padding);
        assert!(matches!(result, Err(FitError::NonFinite(_))));
    }

    /// A weaker perspective leaves less to correct
    #[test]
    fn test_custom_calibration() {
        let (size, padding) = phone();
        let weak = FitOptions::with_profile(CalibrationProfile::Custom(CameraCalibration {
            focal_scale: 1800.0,
            reference_viewport_height: 480.0,
        }));

        let default_zoom = fit_tilted_bounds(&wide_bounds(), &size, 30.0, &padding)
            .unwrap()
            .zoom;
        let weak_report = TiltedFitter::new(weak)
            .fit_report(&wide_bounds(), &size, 30.0, &padding)
            .unwrap();

        assert!(weak_report.pose.zoom > default_zoom);
        assert!(weak_report.pose.zoom < weak_report.untilted_zoom);
    }

    /// Rejecting steep tilts instead of clamping them
    #[test]
    fn test_reject_policy() {
        let (size, padding) = phone();
        let options = FitOptions {
            tilt: TiltLimits {
                max_tilt: 45.0,
                policy: TiltPolicy::Reject,
            },
            ..FitOptions::default()
        };
        let fitter = TiltedFitter::new(options);

        assert!(fitter.fit(&wide_bounds(), &size, 45.0, &padding).is_ok());
        assert!(matches!(
            fitter.fit(&wide_bounds(), &size, 50.0, &padding),
            Err(FitError::InvalidTilt(_))
        ));
    }

    /// Options loaded from JSON drive the fit
    #[test]
    fn test_options_from_json() {
        let (size, padding) = phone();
        let options =
            FitOptions::from_json_str(r#"{ "zoom": { "min_zoom": 0.0, "max_zoom": 8.0 } }"#)
                .unwrap();
        let report = TiltedFitter::new(options)
            .fit_report(&tall_bounds(), &size, 30.0, &padding)
            .unwrap();
        assert_eq!(report.untilted_zoom, 8.0);
        assert!(report.correction.scale_y > 1.0);
        assert_eq!(report.pose.zoom, 8.0);
    }

    /// One fitter can be shared between threads
    #[test]
    fn test_fitter_is_shareable() {
        let (size, padding) = phone();
        let fitter = TiltedFitter::new(FitOptions::default());
        let expected = fitter.fit(&wide_bounds(), &size, 30.0, &padding).unwrap();

        std::thread::scope(|scope| {
            let handles: Vec<_> = (0..4)
                .map(|_| scope.spawn(|| fitter.fit(&wide_bounds(), &size, 30.0, &padding)))
                .collect();
            for handle in handles {
                assert_eq!(handle.join().unwrap().unwrap(), expected);
            }
        });
    }

    /// Reports serialize for logging or debugging overlays
    #[test]
    fn test_report_serializes() {
        let (size, padding) = phone();
        let report = TiltedFitter::new(FitOptions::default())
            .fit_report(&wide_bounds(), &size, 30.0, &padding)
            .unwrap();
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["correction"]["constraint"], "Width");
        assert_eq!(json["pose"]["tilt"], 30.0);
    }
}
