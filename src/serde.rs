// This file is part of grow-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `serde` support for [`GrowVec`](crate::GrowVec).
//!
//! - **Serialize**: as a sequence of the live elements (length `len`).
//! - **Deserialize**: from any sequence, pushing one element at a time, so the
//!   resulting capacity follows the usual doubling policy.
//!
//! ### Trait bounds
//!
//! - In the default (safe) backend, `GrowVec<T>: Deserialize` requires
//!   `T: Deserialize<'de> + Default`, because `push` fills fresh slots with
//!   `T::default()`.
//! - With the `unsafe-maybe-uninit` feature enabled, `T: Deserialize<'de>` is
//!   enough.
//!
//! An allocation failure while growing is reported through
//! [`de::Error::custom`].

// Crate imports
use crate::vec::GrowVec;

// Core imports
use core::{fmt, marker::PhantomData};

// External imports - serde
use serde::{de, ser, Deserialize, Deserializer, Serialize, Serializer};

impl<T: Serialize> Serialize for GrowVec<T> {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        use ser::SerializeSeq;
        let sl = self.as_slice();
        let mut seq = s.serialize_seq(Some(sl.len()))?;
        for item in sl {
            seq.serialize_element(item)?;
        }
        seq.end()
    }
}

struct VecVisitor<T>(PhantomData<T>);

#[cfg(not(feature = "unsafe-maybe-uninit"))]
impl<'de, T> de::Visitor<'de> for VecVisitor<T>
where
    T: Deserialize<'de> + Default,
{
    type Value = GrowVec<T>;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("array or sequence")
    }

    fn visit_seq<A: de::SeqAccess<'de>>(self, a: A) -> Result<Self::Value, A::Error> {
        visit_elements(a)
    }
}

#[cfg(feature = "unsafe-maybe-uninit")]
impl<'de, T> de::Visitor<'de> for VecVisitor<T>
where
    T: Deserialize<'de>,
{
    type Value = GrowVec<T>;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("array or sequence")
    }

    fn visit_seq<A: de::SeqAccess<'de>>(self, a: A) -> Result<Self::Value, A::Error> {
        visit_elements(a)
    }
}

#[cfg(not(feature = "unsafe-maybe-uninit"))]
fn visit_elements<'de, T, A>(mut a: A) -> Result<GrowVec<T>, A::Error>
where
    T: Deserialize<'de> + Default,
    A: de::SeqAccess<'de>,
{
    let mut out = GrowVec::new();
    while let Some(elem) = a.next_element::<T>()? {
        out.push(elem).map_err(de::Error::custom)?;
    }
    Ok(out)
}

#[cfg(feature = "unsafe-maybe-uninit")]
fn visit_elements<'de, T, A>(mut a: A) -> Result<GrowVec<T>, A::Error>
where
    T: Deserialize<'de>,
    A: de::SeqAccess<'de>,
{
    let mut out = GrowVec::new();
    while let Some(elem) = a.next_element::<T>()? {
        out.push(elem).map_err(de::Error::custom)?;
    }
    Ok(out)
}

#[cfg(not(feature = "unsafe-maybe-uninit"))]
impl<'de, T> Deserialize<'de> for GrowVec<T>
where
    T: Deserialize<'de> + Default,
{
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        d.deserialize_seq(VecVisitor::<T>(PhantomData))
    }
}

#[cfg(feature = "unsafe-maybe-uninit")]
impl<'de, T> Deserialize<'de> for GrowVec<T>
where
    T: Deserialize<'de>,
{
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        d.deserialize_seq(VecVisitor::<T>(PhantomData))
    }
}

#[cfg(test)]
mod tests {
    // Imports
    use super::GrowVec;

    fn from_values(values: &[i32]) -> GrowVec<i32> {
        let mut v = GrowVec::new();
        for &x in values {
            v.push(x).unwrap();
        }
        v
    }

    #[test]
    fn test_serde_roundtrip_json() {
        let v = from_values(&[1, 2, 3]);
        let s = serde_json::to_string(&v).unwrap();
        assert_eq!(s, "[1,2,3]");
        let back: GrowVec<i32> = serde_json::from_str(&s).unwrap();
        assert_eq!(back.as_slice(), &[1, 2, 3]);
        assert_eq!(back.capacity(), 4);
    }

    #[test]
    fn test_serialize_skips_spare_capacity() {
        let mut v = from_values(&[1, 2, 3, 4, 5]);
        v.pop();
        v.pop();
        assert_eq!(v.capacity(), 8);
        assert_eq!(serde_json::to_string(&v).unwrap(), "[1,2,3]");
    }

    #[test]
    fn test_serde_roundtrip_empty_json() {
        let v: GrowVec<i32> = GrowVec::new();
        let s = serde_json::to_string(&v).unwrap();
        assert_eq!(s, "[]");
        let back: GrowVec<i32> = serde_json::from_str(&s).unwrap();
        assert!(back.is_empty());
        assert_eq!(back.capacity(), 0);
    }

    #[test]
    fn test_visitor_expecting_message() {
        let err = serde_json::from_str::<GrowVec<i32>>(r#"{"not":"an array"}"#).unwrap_err();
        let msg = err.to_string();
        assert!(
            msg.contains("array or sequence"),
            "unexpected error message: {msg}"
        );
    }

    #[cfg(feature = "unsafe-maybe-uninit")]
    #[test]
    fn test_deserialize_non_default_type_in_maybe_uninit_backend() {
        use serde::{Deserialize, Serialize};

        #[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
        struct NoDefault(i32);

        let v: GrowVec<NoDefault> =
            serde_json::from_str("[1,2,3]").expect("should deserialize under maybe_uninit backend");
        assert_eq!(v.as_slice(), &[NoDefault(1), NoDefault(2), NoDefault(3)]);
    }
}
