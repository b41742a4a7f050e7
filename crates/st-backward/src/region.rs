//! Region and subregion tags for (p, h) inputs.

use std::fmt;

/// IF97 region a (p, h) pair falls in.
///
/// `R4` (two-phase) is part of the vocabulary but never produced by
/// [`classify`](crate::classify::classify): below 4000 kJ/kg every state above the
/// saturated-liquid line is tagged `R2`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PhRegion {
    R1,
    R2,
    R3,
    R4,
    R5,
    Invalid,
}

impl PhRegion {
    /// IF97 region number, `None` for `Invalid`.
    pub fn number(self) -> Option<u8> {
        match self {
            PhRegion::R1 => Some(1),
            PhRegion::R2 => Some(2),
            PhRegion::R3 => Some(3),
            PhRegion::R4 => Some(4),
            PhRegion::R5 => Some(5),
            PhRegion::Invalid => None,
        }
    }
}

impl fmt::Display for PhRegion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.number() {
            Some(n) => write!(f, "region {n}"),
            None => write!(f, "invalid"),
        }
    }
}

/// Subregions of region 2 for T(p, h).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region2Subregion {
    A,
    B,
    C,
}

/// Subregions of region 3 for T(p, h) and v(p, h).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region3Subregion {
    A,
    B,
}

impl fmt::Display for Region2Subregion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = match self {
            Region2Subregion::A => "2a",
            Region2Subregion::B => "2b",
            Region2Subregion::C => "2c",
        };
        f.write_str(tag)
    }
}

impl fmt::Display for Region3Subregion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = match self {
            Region3Subregion::A => "3a",
            Region3Subregion::B => "3b",
        };
        f.write_str(tag)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display() {
        assert_eq!(PhRegion::R1.to_string(), "region 1");
        assert_eq!(PhRegion::Invalid.to_string(), "invalid");
        assert_eq!(Region2Subregion::C.to_string(), "2c");
        assert_eq!(Region3Subregion::A.to_string(), "3a");
    }

    #[test]
    fn region_numbers() {
        assert_eq!(PhRegion::R4.number(), Some(4));
        assert_eq!(PhRegion::Invalid.number(), None);
    }
}
