//! Provides the error type used throughout this crate.

use thiserror::Error;

/// The error type used throughout this crate.
///
/// Checked accessors only ever produce the out-of-bound and unknown-id
/// variants. The structural variants are reported exclusively by
/// [`MultiBody::check_consistency`](crate::MultiBody::check_consistency).
/// No error invalidates the structure; it stays queryable afterwards.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum MultibodyError {
    // Query errors
    #[error("Body index {0} is out of bound")]
    BodyIndexOutOfBound(usize),
    #[error("Joint index {0} is out of bound")]
    JointIndexOutOfBound(usize),
    #[error("No body with id {0}")]
    UnknownBodyId(i32),
    #[error("No joint with id {0}")]
    UnknownJointId(i32),
    // Structural errors found by the consistency check
    #[error("Body id {0} is not unique")]
    DuplicateBodyId(i32),
    #[error("Joint id {0} is not unique")]
    DuplicateJointId(i32),
    #[error("Parent of body {0} does not match the joint topology")]
    InconsistentParent(usize),
    #[error("Parent walk from body {0} does not terminate")]
    CyclicTopology(usize),
}
