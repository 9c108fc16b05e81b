//! Qibla bearing: the great-circle initial bearing from a position to the Kaaba.

use serde::Serialize;

use super::ServiceError;

pub const KAABA: Coordinate = Coordinate {
    latitude: 21.4225,
    longitude: 39.8262,
};

/// A device within this many degrees of the bearing counts as facing the Qibla.
pub const ALIGNMENT_TOLERANCE_DEG: f64 = 10.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, ServiceError> {
        if !latitude.is_finite() || !(-90.0..=90.0).contains(&latitude) {
            return Err(ServiceError::Latitude(latitude));
        }
        if !longitude.is_finite() || !(-180.0..=180.0).contains(&longitude) {
            return Err(ServiceError::Longitude(longitude));
        }
        Ok(Self { latitude, longitude })
    }
}

/// Bearing in degrees clockwise from true north, in `[0, 360)`.
pub fn bearing(from: Coordinate) -> f64 {
    let lat1 = from.latitude.to_radians();
    let lat2 = KAABA.latitude.to_radians();
    let delta_lng = (KAABA.longitude - from.longitude).to_radians();

    let y = delta_lng.sin() * lat2.cos();
    let x = lat1.cos() * lat2.sin() - lat1.sin() * lat2.cos() * delta_lng.cos();

    y.atan2(x).to_degrees().rem_euclid(360.0)
}

/// Angle to turn from `heading` to reach `bearing`, in `(-180, 180]`.
/// Positive is clockwise.
pub fn relative_direction(bearing: f64, heading: f64) -> f64 {
    let delta = (bearing - heading).rem_euclid(360.0);
    if delta > 180.0 {
        delta - 360.0
    } else {
        delta
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QiblaDirection {
    pub location: Coordinate,
    pub bearing: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub heading: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub relative: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aligned: Option<bool>,
}

/// Bearing from `from`, plus the turn needed and alignment when the device
/// compass heading is known.
pub fn direction(from: Coordinate, heading: Option<f64>) -> Result<QiblaDirection, ServiceError> {
    if heading.is_some_and(|h| !h.is_finite()) {
        return Err(ServiceError::Heading);
    }

    let bearing = bearing(from);
    let relative = heading.map(|h| relative_direction(bearing, h));

    Ok(QiblaDirection {
        location: from,
        bearing,
        heading,
        relative,
        aligned: relative.map(|r| r.abs() < ALIGNMENT_TOLERANCE_DEG),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 0.1
    }

    #[test]
    fn known_city_bearings() {
        // London: 118.99°, New York: 58.48°, Jakarta: 295.15°
        let london = Coordinate::new(51.5074, -0.1278).unwrap();
        let new_york = Coordinate::new(40.7128, -74.0060).unwrap();
        let jakarta = Coordinate::new(-6.2088, 106.8456).unwrap();

        assert!(close(bearing(london), 118.99), "{}", bearing(london));
        assert!(close(bearing(new_york), 58.48), "{}", bearing(new_york));
        assert!(close(bearing(jakarta), 295.15), "{}", bearing(jakarta));
    }

    #[test]
    fn due_north_of_the_kaaba_points_south() {
        let medina_meridian = Coordinate::new(30.0, KAABA.longitude).unwrap();
        assert!(close(bearing(medina_meridian), 180.0));
    }

    #[test]
    fn relative_direction_wraps() {
        assert_eq!(relative_direction(10.0, 350.0), 20.0);
        assert_eq!(relative_direction(350.0, 10.0), -20.0);
        assert_eq!(relative_direction(180.0, 0.0), 180.0);
        assert_eq!(relative_direction(0.0, 180.0), 180.0);
    }

    #[test]
    fn alignment_needs_heading() {
        let london = Coordinate::new(51.5074, -0.1278).unwrap();

        let without = direction(london, None).unwrap();
        assert_eq!(without.aligned, None);

        let facing = direction(london, Some(115.0)).unwrap();
        assert_eq!(facing.aligned, Some(true));

        let away = direction(london, Some(300.0)).unwrap();
        assert_eq!(away.aligned, Some(false));

        assert_eq!(direction(london, Some(f64::NAN)), Err(ServiceError::Heading));
    }

    #[test]
    fn rejects_impossible_coordinates() {
        assert_eq!(Coordinate::new(91.0, 0.0), Err(ServiceError::Latitude(91.0)));
        assert_eq!(Coordinate::new(0.0, -181.0), Err(ServiceError::Longitude(-181.0)));
        assert!(Coordinate::new(f64::NAN, 0.0).is_err());
    }
}
