//! Kinematic tree of a multibody system.
//!
//! The representation follows Featherstone's indexed parallel arrays, except
//! that joint 0 is a real joint slot reserved for the root attachment instead
//! of a virtual joint. The tree is assembled once from finished collections
//! and served read-only afterwards; consistency of the topology is the
//! builder's responsibility (see [MultiBody::check_consistency]).

use crate::{Body, Joint, MultibodyError, Transform};
use itertools::{izip, Itertools};
use nalgebra::RealField;
use std::collections::HashMap;
use tracing::{debug, trace};

/// Kinematic tree of a multibody system.
///
/// Bodies and joints live in contiguous, insertion-ordered sequences and are
/// addressed by their dense position. Joint `i` connects the bodies
/// `predecessor(i)` and `successor(i)` (the predecessor lying closer to the
/// root) and carries the rigid transforms locating the joint frame relative
/// to both body centers. Redundantly, `parent(b)` holds each body's
/// structural parent; the root body has no parent. A separate hashed lookup
/// maps the caller-assigned stable ids of bodies and joints back to their
/// dense indices.
///
/// All accessors come in two tiers: a trusted one that indexes directly and
/// panics when its documented precondition is violated, for inner loops where
/// the caller guarantees validity, and a checked `try_` twin returning a
/// [MultibodyError] for boundary-facing call sites.
///
/// The structure is immutable after construction, so any number of readers
/// may query it concurrently.
pub struct MultiBody<T: RealField> {
    bodies: Vec<Body<T>>,
    joints: Vec<Joint>,

    pred: Vec<usize>,
    succ: Vec<usize>,
    parent: Vec<Option<usize>>,
    /// Transformation from the center of the predecessor body
    transforms_from: Vec<Transform<T>>,
    /// Transformation to the center of the successor body
    transforms_to: Vec<Transform<T>>,

    body_id_to_index: HashMap<i32, usize>,
    joint_id_to_index: HashMap<i32, usize>,

    nr_params: usize,
    nr_dof: usize,
}

impl<T: RealField> MultiBody<T> {
    /// Assembles a multibody from its parallel collections.
    ///
    /// `pred` and `succ` give the body indices each joint connects,
    /// `parent` the structural parent of each body (`None` for the root),
    /// and `transforms_from`/`transforms_to` locate each joint frame
    /// relative to the predecessor and successor body centers.
    ///
    /// The id lookup tables and the total parameter/DoF counts are derived
    /// here once. Beyond the length checks below, the topology is *not*
    /// validated; a builder handing over dangling indices gets a structure
    /// whose trusted queries may panic later. Run [Self::check_consistency]
    /// to verify a finished tree explicitly.
    ///
    /// # Panics
    ///
    /// If the collection lengths disagree: one parent entry per body, and
    /// one predecessor, successor and transform pair per joint.
    pub fn new(
        bodies: Vec<Body<T>>,
        joints: Vec<Joint>,
        pred: Vec<usize>,
        succ: Vec<usize>,
        parent: Vec<Option<usize>>,
        transforms_from: Vec<Transform<T>>,
        transforms_to: Vec<Transform<T>>,
    ) -> Self {
        assert_eq!(bodies.len(), parent.len(), "one parent entry per body");
        assert_eq!(joints.len(), pred.len(), "one predecessor entry per joint");
        assert_eq!(joints.len(), succ.len(), "one successor entry per joint");
        assert_eq!(joints.len(), transforms_from.len(), "one predecessor transform per joint");
        assert_eq!(joints.len(), transforms_to.len(), "one successor transform per joint");

        let body_id_to_index = bodies.iter().enumerate().map(|(index, body)| (body.id(), index)).collect();
        let joint_id_to_index = joints
            .iter()
            .enumerate()
            .map(|(index, joint)| (joint.id(), index))
            .collect();

        let nr_params = joints.iter().map(Joint::params).sum();
        let nr_dof = joints.iter().map(Joint::dof).sum();

        debug!(
            bodies = bodies.len(),
            joints = joints.len(),
            nr_dof,
            nr_params,
            "assembled multibody"
        );

        MultiBody {
            bodies,
            joints,
            pred,
            succ,
            parent,
            transforms_from,
            transforms_to,
            body_id_to_index,
            joint_id_to_index,
            nr_params,
            nr_dof,
        }
    }

    /// Number of bodies.
    pub fn nr_bodies(&self) -> usize {
        self.bodies.len()
    }

    /// Number of joints.
    pub fn nr_joints(&self) -> usize {
        self.joints.len()
    }

    /// Bodies of the multibody system.
    pub fn bodies(&self) -> &[Body<T>] {
        &self.bodies
    }

    /// Joints of the multibody system.
    pub fn joints(&self) -> &[Joint] {
        &self.joints
    }

    /// Body at position `num` in the body list.
    ///
    /// Trusted accessor; panics if `num` is out of bound.
    pub fn body(&self, num: usize) -> &Body<T> {
        &self.bodies[num]
    }

    /// Checked version of [Self::body].
    pub fn try_body(&self, num: usize) -> Result<&Body<T>, MultibodyError> {
        self.bodies.get(num).ok_or(MultibodyError::BodyIndexOutOfBound(num))
    }

    /// Joint at position `num` in the joint list.
    ///
    /// Trusted accessor; panics if `num` is out of bound.
    pub fn joint(&self, num: usize) -> &Joint {
        &self.joints[num]
    }

    /// Checked version of [Self::joint].
    pub fn try_joint(&self, num: usize) -> Result<&Joint, MultibodyError> {
        self.joints.get(num).ok_or(MultibodyError::JointIndexOutOfBound(num))
    }

    /// Predecessor body index of each joint.
    pub fn predecessors(&self) -> &[usize] {
        &self.pred
    }

    /// Predecessor body index of joint `num`.
    ///
    /// Trusted accessor; panics if `num` is out of bound.
    pub fn predecessor(&self, num: usize) -> usize {
        self.pred[num]
    }

    /// Checked version of [Self::predecessor].
    pub fn try_predecessor(&self, num: usize) -> Result<usize, MultibodyError> {
        self.pred
            .get(num)
            .copied()
            .ok_or(MultibodyError::JointIndexOutOfBound(num))
    }

    /// Successor body index of each joint.
    pub fn successors(&self) -> &[usize] {
        &self.succ
    }

    /// Successor body index of joint `num`.
    ///
    /// Trusted accessor; panics if `num` is out of bound.
    pub fn successor(&self, num: usize) -> usize {
        self.succ[num]
    }

    /// Checked version of [Self::successor].
    pub fn try_successor(&self, num: usize) -> Result<usize, MultibodyError> {
        self.succ
            .get(num)
            .copied()
            .ok_or(MultibodyError::JointIndexOutOfBound(num))
    }

    /// Parent body index of each body; the root body has none.
    pub fn parents(&self) -> &[Option<usize>] {
        &self.parent
    }

    /// Parent body index of body `num`, `None` for the root.
    ///
    /// Trusted accessor; panics if `num` is out of bound.
    pub fn parent(&self, num: usize) -> Option<usize> {
        self.parent[num]
    }

    /// Checked version of [Self::parent].
    pub fn try_parent(&self, num: usize) -> Result<Option<usize>, MultibodyError> {
        self.parent
            .get(num)
            .copied()
            .ok_or(MultibodyError::BodyIndexOutOfBound(num))
    }

    /// Transformations from the centers of the predecessor bodies.
    pub fn transforms_from(&self) -> &[Transform<T>] {
        &self.transforms_from
    }

    /// Transformation from the center of the predecessor body of joint `num`.
    ///
    /// Trusted accessor; panics if `num` is out of bound.
    pub fn transform_from(&self, num: usize) -> &Transform<T> {
        &self.transforms_from[num]
    }

    /// Checked version of [Self::transform_from].
    pub fn try_transform_from(&self, num: usize) -> Result<&Transform<T>, MultibodyError> {
        self.transforms_from
            .get(num)
            .ok_or(MultibodyError::JointIndexOutOfBound(num))
    }

    /// Transformations to the centers of the successor bodies.
    pub fn transforms_to(&self) -> &[Transform<T>] {
        &self.transforms_to
    }

    /// Transformation to the center of the successor body of joint `num`.
    ///
    /// Trusted accessor; panics if `num` is out of bound.
    pub fn transform_to(&self, num: usize) -> &Transform<T> {
        &self.transforms_to[num]
    }

    /// Checked version of [Self::transform_to].
    pub fn try_transform_to(&self, num: usize) -> Result<&Transform<T>, MultibodyError> {
        self.transforms_to
            .get(num)
            .ok_or(MultibodyError::JointIndexOutOfBound(num))
    }

    /// Index of the body with id `id`.
    ///
    /// Trusted accessor; panics if no body carries the id.
    pub fn body_index_by_id(&self, id: i32) -> usize {
        self.body_id_to_index[&id]
    }

    /// Checked version of [Self::body_index_by_id].
    pub fn try_body_index_by_id(&self, id: i32) -> Result<usize, MultibodyError> {
        self.body_id_to_index
            .get(&id)
            .copied()
            .ok_or(MultibodyError::UnknownBodyId(id))
    }

    /// Index of the joint with id `id`.
    ///
    /// Trusted accessor; panics if no joint carries the id.
    pub fn joint_index_by_id(&self, id: i32) -> usize {
        self.joint_id_to_index[&id]
    }

    /// Checked version of [Self::joint_index_by_id].
    pub fn try_joint_index_by_id(&self, id: i32) -> Result<usize, MultibodyError> {
        self.joint_id_to_index
            .get(&id)
            .copied()
            .ok_or(MultibodyError::UnknownJointId(id))
    }

    /// Total number of configuration parameters, cached at construction.
    pub fn nr_params(&self) -> usize {
        self.nr_params
    }

    /// Total number of degrees of freedom, cached at construction.
    pub fn nr_dof(&self) -> usize {
        self.nr_dof
    }

    /// Verifies the structural invariants the constructor trusts the builder
    /// with: all stored indices in range, ids unique within their id space,
    /// every non-root body the successor of exactly one joint whose
    /// predecessor is the body's parent, and all parent walks terminating at
    /// the root.
    ///
    /// Returns the first violation found. The check is linear in the number
    /// of bodies and joints except for the parent/edge match, which scans the
    /// joints per body.
    pub fn check_consistency(&self) -> Result<(), MultibodyError> {
        let nr_bodies = self.nr_bodies();

        for &index in self.pred.iter().chain(&self.succ) {
            if index >= nr_bodies {
                return Err(MultibodyError::BodyIndexOutOfBound(index));
            }
        }
        for &parent in self.parent.iter().flatten() {
            if parent >= nr_bodies {
                return Err(MultibodyError::BodyIndexOutOfBound(parent));
            }
        }

        if let Some(id) = self.bodies.iter().map(|body| body.id()).duplicates().next() {
            return Err(MultibodyError::DuplicateBodyId(id));
        }
        if let Some(id) = self.joints.iter().map(|joint| joint.id()).duplicates().next() {
            return Err(MultibodyError::DuplicateJointId(id));
        }

        // The parent array is redundant with the joint edges; both views of
        // the topology have to agree.
        for (body, &parent) in self.parent.iter().enumerate() {
            let Some(parent) = parent else {
                continue;
            };
            let incoming = self.succ.iter().filter(|&&succ| succ == body).count();
            let matching = izip!(&self.pred, &self.succ)
                .filter(|&(&pred, &succ)| succ == body && pred == parent)
                .count();
            if incoming != 1 || matching != 1 {
                return Err(MultibodyError::InconsistentParent(body));
            }
        }

        // A parent walk longer than the body count must have revisited a body.
        for body in 0..nr_bodies {
            let mut current = body;
            let mut depth = 0;
            while let Some(parent) = self.parent[current] {
                current = parent;
                depth += 1;
                if depth > nr_bodies {
                    return Err(MultibodyError::CyclicTopology(body));
                }
            }
            trace!(body, depth, "parent walk terminated");
        }

        Ok(())
    }
}

/// The empty placeholder instance used before a real tree is assigned.
impl<T: RealField> Default for MultiBody<T> {
    fn default() -> Self {
        MultiBody::new(vec![], vec![], vec![], vec![], vec![], vec![], vec![])
    }
}
