//! Bodies (rigid links) of a multibody system and their inertial payload.

use core::fmt;
use nalgebra::{Matrix3, RealField, Vector3};

/// Inertial properties of a [Body], expressed at the body origin.
#[derive(Debug, Clone, PartialEq)]
pub struct Inertia<T: RealField> {
    /// Mass of the body.
    pub mass: T,
    /// Center of mass relative to the body origin.
    pub com: Vector3<T>,
    /// Rotational inertia at the body origin.
    pub moment: Matrix3<T>,
}

impl<T: RealField> Inertia<T> {
    pub fn new(mass: T, com: Vector3<T>, moment: Matrix3<T>) -> Self {
        Inertia { mass, com, moment }
    }

    /// A massless payload, used for placeholder bodies such as a fixed base.
    pub fn zero() -> Self {
        Inertia {
            mass: T::zero(),
            com: Vector3::zeros(),
            moment: Matrix3::zeros(),
        }
    }
}

/// A rigid link of a multibody system.
///
/// Identified by a caller-assigned stable id. The inertial payload is
/// opaque to the tree structure; only dynamics algorithms interpret it.
#[derive(Debug, Clone)]
pub struct Body<T: RealField> {
    id: i32,
    name: String,
    inertia: Inertia<T>,
}

impl<T: RealField> Body<T> {
    pub fn new(id: i32, name: &str, inertia: Inertia<T>) -> Self {
        Body {
            id,
            name: name.to_owned(),
            inertia,
        }
    }

    pub fn id(&self) -> i32 {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn inertia(&self) -> &Inertia<T> {
        &self.inertia
    }
}

/// Bodies compare by id; the payload does not take part in equality.
impl<T: RealField> PartialEq for Body<T> {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl<T: RealField> Eq for Body<T> {}

impl<T: RealField> fmt::Display for Body<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}
