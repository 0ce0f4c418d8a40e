//! Explicitly tagged bounded/unbounded amounts.

use std::cmp::Ordering;
use std::fmt;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A profit, loss, or ratio that is either a finite dollar amount or
/// explicitly unbounded.
///
/// Using a raw `f64::INFINITY` sentinel silently corrupts downstream
/// arithmetic (`finite / INFINITY` collapsing to `0`, `INFINITY - INFINITY`
/// producing `NaN`); `Unbounded` never participates in arithmetic, callers
/// must match on the variant.
///
/// Serialises as a bare number for `Bounded` and the string `"unbounded"`
/// for `Unbounded`, so JSON consumers can always tell the two apart.
///
/// # Examples
/// ```
/// use strat_core::types::Bound;
///
/// let loss = Bound::Bounded(250.0);
/// assert_eq!(loss.scale(3.0), Bound::Bounded(750.0));
/// assert_eq!(Bound::Unbounded.scale(3.0), Bound::Unbounded);
///
/// assert_eq!(serde_json::to_string(&Bound::Unbounded).unwrap(), "\"unbounded\"");
/// assert_eq!(serde_json::to_string(&loss).unwrap(), "250.0");
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Bound {
    /// A finite amount.
    Bounded(f64),
    /// No finite bound (e.g. the upside of a long call).
    Unbounded,
}

impl Bound {
    /// Returns the finite amount, or `None` for `Unbounded`.
    #[inline]
    pub fn bounded(&self) -> Option<f64> {
        match self {
            Bound::Bounded(v) => Some(*v),
            Bound::Unbounded => None,
        }
    }

    /// Whether this value is `Unbounded`.
    #[inline]
    pub fn is_unbounded(&self) -> bool {
        matches!(self, Bound::Unbounded)
    }

    /// Multiplies a `Bounded` amount by `factor`; `Unbounded` is unchanged.
    #[inline]
    pub fn scale(&self, factor: f64) -> Bound {
        match self {
            Bound::Bounded(v) => Bound::Bounded(v * factor),
            Bound::Unbounded => Bound::Unbounded,
        }
    }

    /// Total ordering with `Unbounded` greater than every finite amount.
    ///
    /// Finite amounts compare via `f64::total_cmp`.
    pub fn total_cmp(&self, other: &Bound) -> Ordering {
        match (self, other) {
            (Bound::Unbounded, Bound::Unbounded) => Ordering::Equal,
            (Bound::Unbounded, Bound::Bounded(_)) => Ordering::Greater,
            (Bound::Bounded(_), Bound::Unbounded) => Ordering::Less,
            (Bound::Bounded(a), Bound::Bounded(b)) => a.total_cmp(b),
        }
    }
}

impl fmt::Display for Bound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Bound::Bounded(v) => write!(f, "{}", v),
            Bound::Unbounded => write!(f, "unbounded"),
        }
    }
}

impl Serialize for Bound {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Bound::Bounded(v) => serializer.serialize_f64(*v),
            Bound::Unbounded => serializer.serialize_str("unbounded"),
        }
    }
}

struct BoundVisitor;

impl Visitor<'_> for BoundVisitor {
    type Value = Bound;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a finite number or the string \"unbounded\"")
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Bound, E> {
        if v.is_finite() {
            Ok(Bound::Bounded(v))
        } else {
            Err(E::custom("non-finite number for Bound"))
        }
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Bound, E> {
        Ok(Bound::Bounded(v as f64))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Bound, E> {
        Ok(Bound::Bounded(v as f64))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Bound, E> {
        if v == "unbounded" {
            Ok(Bound::Unbounded)
        } else {
            Err(E::custom(format!("unknown Bound literal: {v:?}")))
        }
    }
}

impl<'de> Deserialize<'de> for Bound {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Bound, D::Error> {
        deserializer.deserialize_any(BoundVisitor)
    }
}
