use chrono::{Duration, TimeZone, Utc};
use skyview_catalog::StarCatalog;
use skyview_core::constants::PI;
use skyview_core::{GeodeticPosition, Quaternion, Vector3};
use skyview_session::{BodyKind, CenterDetection, Error, SkyBody, ViewConfig, ViewSession};
use skyview_time::FixedClock;
use std::io::Write;
use std::sync::Arc;
use tempfile::NamedTempFile;

const CATALOG: &str = r#"[
    {"Name": "Vega", "Ra": 18.61565, "Dec": 38.78369, "Mag": 0.03},
    {"Name": "Deneb", "Ra": 20.69053, "Dec": 45.28034, "Mag": 1.25},
    {"Name": "Sirius", "Ra": 6.75248, "Dec": -16.71612, "Mag": -1.46},
    {"Name": "Faint", "Ra": 18.65, "Dec": 38.5, "Mag": 6.2}
]"#;

fn catalog_file() -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(CATALOG.as_bytes()).unwrap();
    file
}

fn j2000_noon() -> FixedClock {
    FixedClock::new(Utc.with_ymd_and_hms(2000, 1, 1, 12, 0, 0).unwrap())
}

fn straight_up() -> Quaternion {
    Quaternion::from_axis_angle(Vector3::x_axis(), PI)
}

// Vega culminates at the zenith for this latitude; at J2000 noon on the
// Greenwich meridian the local sidereal time is about 18.70h, so Vega sits
// a degree from the frame center.
fn vega_latitude() -> GeodeticPosition {
    GeodeticPosition::new(38.78369, 0.0, 0.0)
}

fn session(clock: FixedClock) -> ViewSession<FixedClock> {
    let file = catalog_file();
    let catalog = StarCatalog::open(file.path()).unwrap();
    ViewSession::with_clock(Arc::new(catalog), ViewConfig::default(), clock).unwrap()
}

#[test]
fn test_zenith_frame_centers_on_vega() {
    let session = session(j2000_noon());
    let overlay = session.frame(&vega_latitude(), &straight_up(), 1000, 800);

    let center = overlay.center();
    assert!((center.ra_hours() - 280.46061837 / 15.0).abs() < 1e-6);
    assert!((center.dec_degrees() - 38.78369).abs() < 1e-6);
    assert!((center.altitude_degrees() - 90.0).abs() < 1e-9);

    let names: Vec<&str> = overlay.bodies().iter().map(|b| b.body.name.as_str()).collect();
    assert_eq!(names, ["Vega", "Deneb"]);
    assert!(overlay.bodies().iter().all(|b| b.body.kind == BodyKind::Star));

    match overlay.identify_center(session.config().center_square_ratio) {
        CenterDetection::InSquare(body) => assert_eq!(body.body.name, "Vega"),
        other => panic!("expected Vega in the center square, got {other:?}"),
    }
}

#[test]
fn test_later_frame_loses_vega() {
    let later = FixedClock::new(j2000_noon().0 + Duration::hours(6));
    let session = session(later);
    let overlay = session.frame(&vega_latitude(), &straight_up(), 1000, 800);

    // Six hours later the zenith has moved about 90 degrees east in RA.
    let expected_ra = (280.46061837 + 6.0 * 15.0410686) / 15.0 % 24.0;
    assert!((overlay.center().ra_hours() - expected_ra).abs() < 1e-3);
    assert!(overlay.bodies().iter().all(|b| b.body.name != "Vega"));
}

#[test]
fn test_solar_system_bodies_join_the_overlay() {
    let session = session(j2000_noon());
    let extra = vec![
        SkyBody::solar_system("moon", 18.75, 36.0),
        SkyBody::solar_system("sun", 18.75, -23.0),
        SkyBody::solar_system("jupiter", 19.5, 30.0),
    ];
    let overlay = session.frame_with_bodies(&vega_latitude(), &straight_up(), 1000, 800, extra);

    let kinds: Vec<BodyKind> = overlay.bodies().iter().map(|b| b.body.kind).collect();
    assert_eq!(kinds, [BodyKind::Star, BodyKind::Star, BodyKind::Moon, BodyKind::Planet]);
    for placed in overlay.bodies() {
        assert!(placed.pixel.is_within(1000, 800));
    }
}

#[test]
fn test_gnomonic_config_places_same_stars() {
    let file = catalog_file();
    let catalog = Arc::new(StarCatalog::open(file.path()).unwrap());
    let config = ViewConfig {
        projection: skyview_wcs::Projection::Gnomonic,
        ..ViewConfig::default()
    };
    let session = ViewSession::with_clock(catalog, config, j2000_noon()).unwrap();
    let overlay = session.frame(&vega_latitude(), &straight_up(), 1000, 800);

    let names: Vec<&str> = overlay.bodies().iter().map(|b| b.body.name.as_str()).collect();
    assert_eq!(names, ["Vega", "Deneb"]);
}

#[test]
fn test_missing_catalog_path_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let result = ViewSession::from_catalog_path(dir.path().join("stars.json"), ViewConfig::default());
    assert!(matches!(result, Err(Error::Catalog(_))));
}

#[test]
fn test_unloaded_catalog_still_frames() {
    let dir = tempfile::tempdir().unwrap();
    let catalog = StarCatalog::load_or_empty(dir.path().join("stars.json"));
    let session =
        ViewSession::with_clock(Arc::new(catalog), ViewConfig::default(), j2000_noon()).unwrap();

    let overlay = session.frame(&vega_latitude(), &straight_up(), 1000, 800);
    assert!(overlay.is_empty());
    assert!(matches!(overlay.identify_center(0.1), CenterDetection::Nothing));
}
