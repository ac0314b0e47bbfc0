//! Rigid displacements (rotation plus translation) locating one coordinate
//! frame relative to another.

use core::fmt;
use nalgebra::{RealField, Rotation3, Vector3};
use std::ops::Mul;

/// A rigid transform between two frames, stored in rotation-matrix form.
///
/// Applying the transform rotates first and translates second:
/// `p' = R * p + t`. Composition via [`Mul`] follows the same convention as
/// homogeneous matrices, i.e. `a * b` applies `b` first.
#[derive(Debug, Clone, PartialEq)]
pub struct Transform<T: RealField> {
    pub rotation: Rotation3<T>,
    pub translation: Vector3<T>,
}

impl<T: RealField> Transform<T> {
    pub fn new(rotation: Rotation3<T>, translation: Vector3<T>) -> Self {
        Transform { rotation, translation }
    }

    /// The neutral element wrt. composition.
    pub fn identity() -> Self {
        Transform {
            rotation: Rotation3::identity(),
            translation: Vector3::zeros(),
        }
    }

    /// A pure translation.
    pub fn from_translation(translation: Vector3<T>) -> Self {
        Transform {
            rotation: Rotation3::identity(),
            translation,
        }
    }

    /// A pure rotation.
    pub fn from_rotation(rotation: Rotation3<T>) -> Self {
        Transform {
            rotation,
            translation: Vector3::zeros(),
        }
    }

    /// Map a point from the local into the reference frame.
    pub fn transform_point(&self, point: &Vector3<T>) -> Vector3<T> {
        &self.rotation * point + &self.translation
    }

    /// Map a point from the reference into the local frame.
    pub fn inverse_transform_point(&self, point: &Vector3<T>) -> Vector3<T> {
        self.rotation.inverse() * (point - &self.translation)
    }

    pub fn inverse(&self) -> Self {
        let rotation = self.rotation.inverse();
        let translation = -(&rotation * &self.translation);
        Transform { rotation, translation }
    }
}

impl<T: RealField> Default for Transform<T> {
    fn default() -> Self {
        Self::identity()
    }
}

impl<T: RealField> Mul for &Transform<T> {
    type Output = Transform<T>;

    fn mul(self, rhs: Self) -> Self::Output {
        Transform {
            rotation: &self.rotation * &rhs.rotation,
            translation: &self.rotation * &rhs.translation + &self.translation,
        }
    }
}

impl<T: RealField> Mul for Transform<T> {
    type Output = Transform<T>;

    fn mul(self, rhs: Self) -> Self::Output {
        &self * &rhs
    }
}

impl<T: RealField + fmt::Display> fmt::Display for Transform<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rotation: {}, translation: {}", self.rotation, self.translation)
    }
}
