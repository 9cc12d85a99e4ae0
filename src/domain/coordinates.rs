use crate::domain::errors::{IndexError, Parameter};

// Latitude in degrees, finite and within [-90, 90].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Latitude(f64);

impl Latitude {
    pub const MIN: f64 = -90.0;
    pub const MAX: f64 = 90.0;

    pub fn new(degrees: f64) -> Result<Self, IndexError> {
        if degrees.is_finite() && (Self::MIN..=Self::MAX).contains(&degrees) {
            Ok(Self(degrees))
        } else {
            Err(IndexError::InvalidParameter(Parameter::Latitude))
        }
    }

    pub fn parse(raw: &str) -> Result<Self, IndexError> {
        let degrees = raw
            .trim()
            .parse::<f64>()
            .map_err(|_| IndexError::InvalidParameter(Parameter::Latitude))?;
        Self::new(degrees)
    }

    pub fn degrees(self) -> f64 {
        self.0
    }
}

// Longitude in degrees, finite and within [-180, 180].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Longitude(f64);

impl Longitude {
    pub const MIN: f64 = -180.0;
    pub const MAX: f64 = 180.0;

    pub fn new(degrees: f64) -> Result<Self, IndexError> {
        if degrees.is_finite() && (Self::MIN..=Self::MAX).contains(&degrees) {
            Ok(Self(degrees))
        } else {
            Err(IndexError::InvalidParameter(Parameter::Longitude))
        }
    }

    pub fn parse(raw: &str) -> Result<Self, IndexError> {
        let degrees = raw
            .trim()
            .parse::<f64>()
            .map_err(|_| IndexError::InvalidParameter(Parameter::Longitude))?;
        Self::new(degrees)
    }

    pub fn degrees(self) -> f64 {
        self.0
    }
}

// Grid resolution, 0 (coarsest) through 15 (finest).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolution(u8);

impl Resolution {
    pub const MAX: u8 = 15;

    pub fn new(level: u8) -> Result<Self, IndexError> {
        if level <= Self::MAX {
            Ok(Self(level))
        } else {
            Err(IndexError::InvalidParameter(Parameter::Resolution))
        }
    }

    // Strict integer parsing: "9.5", "-1" and "9abc" are rejected.
    pub fn parse(raw: &str) -> Result<Self, IndexError> {
        let level = raw
            .trim()
            .parse::<u8>()
            .map_err(|_| IndexError::InvalidParameter(Parameter::Resolution))?;
        Self::new(level)
    }

    pub fn level(self) -> u8 {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinate {
    pub latitude: Latitude,
    pub longitude: Longitude,
}
