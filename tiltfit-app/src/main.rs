use anyhow::{bail, Context};
use clap::Parser;
use std::path::PathBuf;
use tiltfit::{FitOptions, LatLng, LatLngBounds, Padding, TiltedFitter, ViewportSize};

/// Compute the camera pose that fits geographic bounds into a tilted map view
#[derive(Clone, Debug, Parser, PartialEq)]
#[clap(version)]
struct Options {
    /// South-west corner as LAT,LNG
    #[clap(long, value_parser = parse_lat_lng, allow_hyphen_values = true)]
    south_west: LatLng,

    /// North-east corner as LAT,LNG
    #[clap(long, value_parser = parse_lat_lng, allow_hyphen_values = true)]
    north_east: LatLng,

    /// Viewport width in pixels
    #[clap(long)]
    width: f64,

    /// Viewport height in pixels
    #[clap(long)]
    height: f64,

    /// Camera tilt in degrees from straight down
    #[clap(long, default_value_t = 30.0)]
    tilt: f64,

    /// Padding as TOP,LEFT,BOTTOM,RIGHT pixels
    #[clap(long, value_parser = parse_padding, default_value = "0,0,0,0")]
    padding: Padding,

    /// JSON file with fit options (zoom limits, tilt limits, calibration)
    #[clap(long)]
    config: Option<PathBuf>,

    /// Print every intermediate value instead of just the pose
    #[clap(long)]
    report: bool,
}

fn parse_numbers<const N: usize>(value: &str) -> anyhow::Result<[f64; N]> {
    let numbers = value
        .split(',')
        .map(|part| {
            part.trim()
                .parse::<f64>()
                .with_context(|| format!("`{part}` is not a number"))
        })
        .collect::<anyhow::Result<Vec<_>>>()?;

    match <[f64; N]>::try_from(numbers) {
        Ok(array) => Ok(array),
        Err(numbers) => bail!("expected {N} comma-separated numbers, got {}", numbers.len()),
    }
}

fn parse_lat_lng(value: &str) -> anyhow::Result<LatLng> {
    let [lat, lng] = parse_numbers::<2>(value)?;
    Ok(LatLng::new(lat, lng))
}

fn parse_padding(value: &str) -> anyhow::Result<Padding> {
    let [top, left, bottom, right] = parse_numbers::<4>(value)?;
    Ok(Padding::new(top, left, bottom, right))
}

fn load_options(path: Option<&PathBuf>) -> anyhow::Result<FitOptions> {
    match path {
        Some(path) => {
            let json = std::fs::read_to_string(path)
                .with_context(|| format!("reading {}", path.display()))?;
            FitOptions::from_json_str(&json).with_context(|| format!("parsing {}", path.display()))
        }
        None => Ok(FitOptions::default()),
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let options = Options::parse();
    let fit_options = load_options(options.config.as_ref())?;

    let bounds = LatLngBounds::new(options.south_west, options.north_east);
    let viewport = ViewportSize::new(options.width, options.height);

    log::info!(
        "Fitting SW({:.6}, {:.6}) - NE({:.6}, {:.6}) into {}x{} at {} degrees",
        bounds.south_west.lat,
        bounds.south_west.lng,
        bounds.north_east.lat,
        bounds.north_east.lng,
        viewport.width,
        viewport.height,
        options.tilt
    );

    let fitter = TiltedFitter::new(fit_options);
    let report = fitter.fit_report(&bounds, &viewport, options.tilt, &options.padding)?;

    let json = if options.report {
        serde_json::to_string_pretty(&report)?
    } else {
        serde_json::to_string_pretty(&report.pose)?
    };
    println!("{json}");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_parse_lat_lng() {
        assert_eq!(parse_lat_lng("48.1, -17.25").unwrap(), LatLng::new(48.1, -17.25));
        assert!(parse_lat_lng("48.1").is_err());
        assert!(parse_lat_lng("north,east").is_err());
    }

    #[test]
    fn test_parse_padding() {
        assert_eq!(
            parse_padding("50,10,100,10").unwrap(),
            Padding::new(50.0, 10.0, 100.0, 10.0)
        );
        assert!(parse_padding("1,2,3").is_err());
    }

    #[test]
    fn test_cli_arguments() {
        let options = Options::try_parse_from([
            "tiltfit-app",
            "--south-west",
            "-10.5,170",
            "--north-east",
            "-5,-170",
            "--width",
            "375",
            "--height",
            "667",
            "--padding",
            "50,10,100,10",
        ])
        .unwrap();

        assert_eq!(options.south_west, LatLng::new(-10.5, 170.0));
        assert_eq!(options.north_east, LatLng::new(-5.0, -170.0));
        assert_eq!(options.tilt, 30.0);
        assert_eq!(options.padding, Padding::new(50.0, 10.0, 100.0, 10.0));
        assert!(!options.report);
    }

    #[test]
    fn test_missing_config_is_default() {
        assert_eq!(load_options(None).unwrap(), FitOptions::default());
    }

    #[test]
    fn test_config_file_is_loaded() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("options.json");
        fs::write(&path, r#"{ "zoom": { "min_zoom": 2.0, "max_zoom": 8.0 } }"#).unwrap();

        let options = load_options(Some(&path)).unwrap();
        assert_eq!(options.zoom.min_zoom, 2.0);
        assert_eq!(options.zoom.max_zoom, 8.0);
    }

    #[test]
    fn test_unreadable_config_names_the_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing.json");

        let message = format!("{:#}", load_options(Some(&path)).unwrap_err());
        assert!(message.starts_with("reading "), "{message}");
        assert!(message.contains("missing.json"), "{message}");
    }

    #[test]
    fn test_malformed_config_names_the_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("broken.json");
        fs::write(&path, "{ not json").unwrap();

        let message = format!("{:#}", load_options(Some(&path)).unwrap_err());
        assert!(message.starts_with("parsing "), "{message}");
        assert!(message.contains("broken.json"), "{message}");
        assert!(message.contains("Configuration error"), "{message}");
    }
}
