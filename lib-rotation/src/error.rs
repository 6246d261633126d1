use core::{error::Error, fmt};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RotationError
{
    /// All four components are zero, there is no direction to normalize to.
    ZeroNorm,
    /// At least one component is NaN or infinite.
    NonFinite,
}

impl Error for RotationError {}

impl fmt::Display for RotationError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::ZeroNorm => write!(f, "Cannot normalize a quaternion with zero magnitude"),
            Self::NonFinite => write!(f, "Cannot normalize a quaternion with non-finite components"),
        }
    }
}
