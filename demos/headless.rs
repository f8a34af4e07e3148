use tiltfit::prelude::*;

/// Example of fitting a few regions into a tilted phone-sized map view
fn main() -> tiltfit::Result<()> {
    env_logger::init();

    println!("Tilted camera fits");
    println!("==================");

    // Phone viewport with room for a toolbar and a bottom sheet
    let size = ViewportSize::new(375.0, 667.0);
    let padding = Padding::new(50.0, 10.0, 100.0, 10.0);
    let fitter = TiltedFitter::new(FitOptions::default());

    let regions = [
        ("Wide", LatLngBounds::from_coords(48.10, 17.00, 48.20, 17.30)),
        ("Tall", LatLngBounds::from_coords(48.10, 17.00, 48.40, 17.05)),
        ("Square", LatLngBounds::from_coords(48.10, 17.00, 48.20, 17.15)),
        ("Fiji", LatLngBounds::from_coords(-19.0, 177.0, -16.0, -179.5)),
    ];

    for (name, bounds) in regions {
        println!(
            "\n{name}: SW({:.4}, {:.4}) NE({:.4}, {:.4})",
            bounds.south_west.lat,
            bounds.south_west.lng,
            bounds.north_east.lat,
            bounds.north_east.lng
        );

        for tilt in [0.0, 30.0, 60.0] {
            match fitter.fit_report(&bounds, &size, tilt, &padding) {
                Ok(report) => println!(
                    "   tilt {:>4.1}: zoom {:.3} (untilted {:.3}, {:?}), target {:.6}, {:.6}",
                    tilt,
                    report.pose.zoom,
                    report.untilted_zoom,
                    report.correction.constraint,
                    report.pose.target.lat,
                    report.pose.target.lng
                ),
                Err(e) => println!("   tilt {:>4.1}: no fit ({e})", tilt),
            }
        }
    }

    Ok(())
}
