//! ## About
//!
//! This crate contains the topology and geometry representation of an
//! articulated rigid-body system ("multibody"): an indexed kinematic tree of
//! [bodies](Body) connected by [joints](Joint), annotated with the
//! [rigid transforms](Transform) locating each joint relative to the bodies
//! it connects. Kinematics and dynamics algorithms (forward kinematics,
//! Jacobians, equations of motion) consume the structure read-only; they are
//! not part of this crate, and neither are builders that assemble a tree
//! from a description language.
//!
//! See the [MultiBody] struct to get started.
//!
//! ## Conventions
//! * Bodies and joints live in dense, insertion-ordered sequences and are
//!   addressed by position; a hashed lookup maps their caller-assigned
//!   stable ids back to positions.
//! * Joint 0 is the root joint: a real joint slot holding the root
//!   attachment, unlike formulations where joint 0 is virtual.
//! * Accessors come in a trusted tier (direct indexing, documented
//!   preconditions) and a checked `try_` tier returning [MultibodyError].

pub mod body;
pub mod errors;
pub mod joint;
pub mod multibody;
pub mod transform;

pub use body::{Body, Inertia};
pub use errors::MultibodyError;
pub use joint::{Joint, JointKind};
pub use multibody::MultiBody;
pub use transform::Transform;
