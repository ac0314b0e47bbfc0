//! Joints of a multibody system and their degree-of-freedom arithmetic.

use core::fmt;
use nalgebra::RealField;

/// The kind of articulation a [Joint] realizes.
///
/// Each kind fixes how many degrees of freedom the joint permits and how
/// large a slice of the configuration vector it consumes. The two differ for
/// quaternion-parameterized kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JointKind {
    /// One rotational degree of freedom.
    Revolute,
    /// One translational degree of freedom.
    Prismatic,
    /// Three rotational degrees of freedom, quaternion parameterized.
    Spherical,
    /// Two translational and one rotational degree of freedom in a plane.
    Planar,
    /// Coupled rotation and translation about one axis.
    Cylindrical,
    /// An unconstrained joint, quaternion parameterized.
    Free,
    /// A rigid attachment.
    Fixed,
}

impl JointKind {
    /// Number of degrees of freedom the joint kind permits.
    pub fn dof(&self) -> usize {
        match self {
            JointKind::Revolute | JointKind::Prismatic => 1,
            JointKind::Spherical | JointKind::Planar => 3,
            JointKind::Cylindrical => 2,
            JointKind::Free => 6,
            JointKind::Fixed => 0,
        }
    }

    /// Size of the configuration-vector slice the joint kind consumes.
    pub fn params(&self) -> usize {
        match self {
            JointKind::Revolute | JointKind::Prismatic => 1,
            JointKind::Spherical => 4,
            JointKind::Planar => 3,
            JointKind::Cylindrical => 2,
            JointKind::Free => 7,
            JointKind::Fixed => 0,
        }
    }
}

/// A joint connecting a predecessor body to a successor body in a
/// [MultiBody](crate::MultiBody).
///
/// The joint knows its articulation kind and carries the caller-assigned,
/// stable id it can be looked up by. Which bodies it connects is stored in
/// the tree, not in the joint.
#[derive(Debug, Clone)]
pub struct Joint {
    kind: JointKind,
    id: i32,
    name: String,
}

impl Joint {
    pub fn new(kind: JointKind, id: i32, name: &str) -> Self {
        Joint {
            kind,
            id,
            name: name.to_owned(),
        }
    }

    pub fn kind(&self) -> JointKind {
        self.kind
    }

    pub fn id(&self) -> i32 {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of degrees of freedom.
    pub fn dof(&self) -> usize {
        self.kind.dof()
    }

    /// Number of configuration parameters.
    pub fn params(&self) -> usize {
        self.kind.params()
    }

    /// The identity configuration of the joint: a unit quaternion (`w`
    /// leading) for the quaternion-parameterized kinds, zeros everywhere
    /// else.
    pub fn neutral_params<T: RealField>(&self) -> Vec<T> {
        let mut params = vec![T::zero(); self.params()];
        if matches!(self.kind, JointKind::Spherical | JointKind::Free) {
            params[0] = T::one();
        }
        params
    }
}

/// Joints compare by id; two joints with the same id denote the same slot.
impl PartialEq for Joint {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Joint {}

impl fmt::Display for Joint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dof_params_arithmetic() {
        let table = [
            (JointKind::Revolute, 1, 1),
            (JointKind::Prismatic, 1, 1),
            (JointKind::Spherical, 3, 4),
            (JointKind::Planar, 3, 3),
            (JointKind::Cylindrical, 2, 2),
            (JointKind::Free, 6, 7),
            (JointKind::Fixed, 0, 0),
        ];
        for (kind, dof, params) in table {
            assert_eq!(kind.dof(), dof);
            assert_eq!(kind.params(), params);
        }
    }

    #[test]
    fn test_neutral_params() {
        let free = Joint::new(JointKind::Free, 0, "root");
        assert_eq!(free.neutral_params::<f64>(), vec![1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0]);

        let elbow = Joint::new(JointKind::Revolute, 1, "elbow");
        assert_eq!(elbow.neutral_params::<f64>(), vec![0.0]);

        let weld = Joint::new(JointKind::Fixed, 2, "weld");
        assert!(weld.neutral_params::<f64>().is_empty());
    }
}
