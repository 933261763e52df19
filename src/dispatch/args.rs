//! Positional calling convention for handlers.
//!
//! Up to [`SPREAD_LIMIT`] values are passed to a handler as discrete
//! arguments. Six or more are packed into a single sequence argument.
//! Existing handlers depend on this boundary, so it is fixed.

use std::ops::Deref;

/// One positional value; `None` for a token in an unmatched optional group.
pub type Param = Option<String>;

/// Largest argument count delivered as discrete arguments.
pub const SPREAD_LIMIT: usize = 5;

/// Positional values in the shape the handler receives them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Args {
    /// 0 to 5 values, one per argument.
    Spread(Vec<Param>),
    /// 6 or more values in one sequence argument.
    Packed(Vec<Param>),
}

impl Args {
    pub fn from_values(values: Vec<Param>) -> Self {
        if values.len() > SPREAD_LIMIT {
            Args::Packed(values)
        } else {
            Args::Spread(values)
        }
    }

    pub fn is_packed(&self) -> bool {
        matches!(self, Args::Packed(_))
    }

    pub fn as_slice(&self) -> &[Param] {
        match self {
            Args::Spread(values) | Args::Packed(values) => values,
        }
    }

    pub fn into_vec(self) -> Vec<Param> {
        match self {
            Args::Spread(values) | Args::Packed(values) => values,
        }
    }

    pub fn len(&self) -> usize {
        self.as_slice().len()
    }

    pub fn is_empty(&self) -> bool {
        self.as_slice().is_empty()
    }
}

/// The single sequence argument a handler receives for 6+ values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Packed(pub Vec<Param>);

impl Packed {
    /// Value at `index` as a string slice, if present and matched.
    pub fn str(&self, index: usize) -> Option<&str> {
        self.0.get(index).and_then(|v| v.as_deref())
    }
}

impl Deref for Packed {
    type Target = [Param];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values(n: usize) -> Vec<Param> {
        (0..n).map(|i| Some(i.to_string())).collect()
    }

    #[test]
    fn test_packing_boundary() {
        for n in 0..=5 {
            assert!(!Args::from_values(values(n)).is_packed(), "{} values", n);
        }
        assert!(Args::from_values(values(6)).is_packed());
        assert!(Args::from_values(values(9)).is_packed());
    }

    #[test]
    fn test_packed_access() {
        let packed = Packed(vec![Some("a".into()), None]);
        assert_eq!(packed.str(0), Some("a"));
        assert_eq!(packed.str(1), None);
        assert_eq!(packed.str(2), None);
        assert_eq!(packed.len(), 2);
    }
}
