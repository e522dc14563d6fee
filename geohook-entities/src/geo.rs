/// A geographic position given in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MapPoint {
    lat: f64,
    lng: f64,
}

impl MapPoint {
    pub const fn from_lat_lng_deg(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    pub const fn lat(&self) -> f64 {
        self.lat
    }

    pub const fn lng(&self) -> f64 {
        self.lng
    }

    pub fn is_valid(&self) -> bool {
        (-90.0..=90.0).contains(&self.lat) && (-180.0..=180.0).contains(&self.lng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_ranges() {
        assert!(MapPoint::from_lat_lng_deg(18.23, 1.23).is_valid());
        assert!(MapPoint::from_lat_lng_deg(-90.0, 180.0).is_valid());
        assert!(!MapPoint::from_lat_lng_deg(90.1, 0.0).is_valid());
        assert!(!MapPoint::from_lat_lng_deg(0.0, -180.5).is_valid());
        assert!(!MapPoint::from_lat_lng_deg(f64::NAN, 0.0).is_valid());
    }
}
