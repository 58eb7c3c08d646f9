use nalgebra::Vector3;

use std::ops::{Add, Mul};

use crate::constants::N_XYZ_COORDINATES;

/// 3-axis reading (acceleration in G or angular rate in deg/s).
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct XYZ(Vector3<f64>);

impl XYZ {
    pub fn new(data: [f64; N_XYZ_COORDINATES]) -> Self {
        Self(Vector3::from(data))
    }

    pub fn inner(&self) -> [f64; N_XYZ_COORDINATES] {
        [self.0.x, self.0.y, self.0.z]
    }

    /// Sum of the absolute values of the three coordinates.
    pub fn l1_norm(&self) -> f64 {
        self.0.lp_norm(1)
    }
}

impl From<XYZ> for [f64; N_XYZ_COORDINATES] {
    fn from(value: XYZ) -> Self {
        value.inner()
    }
}

impl From<[f64; N_XYZ_COORDINATES]> for XYZ {
    fn from(value: [f64; N_XYZ_COORDINATES]) -> Self {
        Self(Vector3::from(value))
    }
}

impl From<XYZ> for Vec<f64> {
    fn from(value: XYZ) -> Self {
        value.inner().to_vec()
    }
}

impl TryFrom<Vec<f64>> for XYZ {
    type Error = &'static str;

    fn try_from(value: Vec<f64>) -> Result<Self, Self::Error> {
        if value.len() != N_XYZ_COORDINATES {
            return Err("Can't convert to XYZ");
        }
        Ok(Self(Vector3::from_vec(value)))
    }
}

impl Add for XYZ {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl Mul<f64> for XYZ {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self::Output {
        Self(self.0 * rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new() {
        let data = [1.0, 2.0, 3.0];
        let xyz = XYZ::new(data);
        assert_eq!(xyz.inner(), data);
    }

    #[test]
    fn test_try_from_vec() {
        assert_eq!(
            XYZ::try_from(vec![1.0, -2.0, 3.0]).unwrap(),
            XYZ::new([1.0, -2.0, 3.0])
        );
        assert!(XYZ::try_from(vec![1.0, 2.0]).is_err());
    }

    #[test]
    fn test_l1_norm() {
        assert_eq!(XYZ::new([0.0, 0.0, 0.0]).l1_norm(), 0.0);
        assert_eq!(XYZ::new([-0.5, 0.25, -0.25]).l1_norm(), 1.0);
        assert_eq!(XYZ::new([1.0, -2.0, 3.0]).l1_norm(), 6.0);
    }

    #[test]
    fn test_add() {
        let xyz1 = XYZ::new([1.0, 2.0, 3.0]);
        let xyz2 = XYZ::new([4.0, 5.0, 6.0]);
        let result = xyz1 + xyz2;
        assert_eq!(result.inner(), [5.0, 7.0, 9.0]);
    }

    #[test]
    fn test_mul() {
        let xyz = XYZ::new([1.0, -2.0, 0.5]);
        assert_eq!((xyz * 2.0).inner(), [2.0, -4.0, 1.0]);
    }
}
