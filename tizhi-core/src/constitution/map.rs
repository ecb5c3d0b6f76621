use std::fmt;
use std::ops::{Index, IndexMut};

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::dimension::Constitution;
use super::score::Score;
use super::tendency::Tendency;

/// Per-dimension converted scores, one entry per constitution.
pub type ScoreVector = DimensionMap<Score>;

/// Per-dimension tendency labels, one entry per constitution.
pub type TendencyMap = DimensionMap<Tendency>;

/// Fixed-shape record keyed by the nine-constant constitution enum.
///
/// Serializes as a mapping with exactly nine keys in canonical order;
/// deserialization rejects missing, duplicate, or unknown keys.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DimensionMap<T>([T; 9]);

impl<T> DimensionMap<T> {
    /// Build a map by evaluating `f` for every dimension in canonical order.
    pub fn from_fn(mut f: impl FnMut(Constitution) -> T) -> Self {
        Self(Constitution::ALL.map(&mut f))
    }

    /// Iterate entries in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (Constitution, &T)> {
        Constitution::ALL.iter().copied().zip(self.0.iter())
    }

    /// Iterate values in canonical order.
    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.0.iter()
    }
}

impl<T: Default + Copy> Default for DimensionMap<T> {
    fn default() -> Self {
        Self([T::default(); 9])
    }
}

impl<T> Index<Constitution> for DimensionMap<T> {
    type Output = T;

    fn index(&self, dim: Constitution) -> &T {
        &self.0[dim.index()]
    }
}

impl<T> IndexMut<Constitution> for DimensionMap<T> {
    fn index_mut(&mut self, dim: Constitution) -> &mut T {
        &mut self.0[dim.index()]
    }
}

impl<T: Serialize> Serialize for DimensionMap<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(9))?;
        for (dim, value) in self.iter() {
            map.serialize_entry(&dim, value)?;
        }
        map.end()
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for DimensionMap<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct MapVisitor<T>(std::marker::PhantomData<T>);

        impl<'de, T: Deserialize<'de>> Visitor<'de> for MapVisitor<T> {
            type Value = DimensionMap<T>;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a mapping with one entry per constitution dimension")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut slots: [Option<T>; 9] = [(); 9].map(|_| None);
                while let Some(dim) = access.next_key::<Constitution>()? {
                    if slots[dim.index()].is_some() {
                        return Err(serde::de::Error::custom(format!(
                            "duplicate dimension key: {dim}"
                        )));
                    }
                    slots[dim.index()] = Some(access.next_value()?);
                }
                let mut missing = None;
                for dim in Constitution::ALL {
                    if slots[dim.index()].is_none() {
                        missing = Some(dim);
                        break;
                    }
                }
                if let Some(dim) = missing {
                    return Err(serde::de::Error::custom(format!(
                        "missing dimension key: {dim}"
                    )));
                }
                Ok(DimensionMap(slots.map(|s| s.expect("checked above"))))
            }
        }

        deserializer.deserialize_map(MapVisitor(std::marker::PhantomData))
    }
}
