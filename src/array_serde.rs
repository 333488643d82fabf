// Copyright 2021 bluss and rdarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use std::fmt;
use std::marker::PhantomData;

use serde::de::{self, MapAccess, SeqAccess, Visitor};
use serde::ser::SerializeStruct;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::extent::{Extent, Ix};
use crate::simple::SimpleArray;

/// Version number of the array serialization format.
const ARRAY_FORMAT_VERSION: u8 = 1;

static ARRAY_FIELDS: &[&str] = &["v", "dim", "data"];

/// Verifies that the version of the deserialized array matches the
/// current `ARRAY_FORMAT_VERSION`.
fn verify_version<E>(v: u8) -> Result<(), E>
where
    E: de::Error,
{
    if v != ARRAY_FORMAT_VERSION {
        return Err(de::Error::custom(format_args!(
            "unknown array version: {}",
            v
        )));
    }
    Ok(())
}

/// **Requires crate feature `"serde"`**
impl Serialize for Extent {
    fn serialize<Se>(&self, serializer: Se) -> Result<Se::Ok, Se::Error>
    where
        Se: Serializer,
    {
        self.slice().serialize(serializer)
    }
}

/// **Requires crate feature `"serde"`**
impl<'de> Deserialize<'de> for Extent {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Vec::<Ix>::deserialize(deserializer).map(Extent::from)
    }
}

/// **Requires crate feature `"serde"`**
impl<A> Serialize for SimpleArray<A>
where
    A: Serialize,
{
    fn serialize<Se>(&self, serializer: Se) -> Result<Se::Ok, Se::Error>
    where
        Se: Serializer,
    {
        let mut state = serializer.serialize_struct("SimpleArray", 3)?;
        state.serialize_field("v", &ARRAY_FORMAT_VERSION)?;
        state.serialize_field("dim", &Extent::from(self.shape()))?;
        state.serialize_field("data", self.as_slice())?;
        state.end()
    }
}

enum ArrayField {
    V,
    Dim,
    Data,
}

impl<'de> Deserialize<'de> for ArrayField {
    fn deserialize<D>(deserializer: D) -> Result<ArrayField, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct ArrayFieldVisitor;

        impl<'de> Visitor<'de> for ArrayFieldVisitor {
            type Value = ArrayField;

            fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
                formatter.write_str(r#""v", "dim", or "data""#)
            }

            fn visit_str<E>(self, value: &str) -> Result<ArrayField, E>
            where
                E: de::Error,
            {
                match value {
                    "v" => Ok(ArrayField::V),
                    "dim" => Ok(ArrayField::Dim),
                    "data" => Ok(ArrayField::Data),
                    other => Err(de::Error::unknown_field(other, ARRAY_FIELDS)),
                }
            }

            fn visit_bytes<E>(self, value: &[u8]) -> Result<ArrayField, E>
            where
                E: de::Error,
            {
                match value {
                    b"v" => Ok(ArrayField::V),
                    b"dim" => Ok(ArrayField::Dim),
                    b"data" => Ok(ArrayField::Data),
                    other => Err(de::Error::unknown_field(
                        &String::from_utf8_lossy(other),
                        ARRAY_FIELDS,
                    )),
                }
            }
        }

        deserializer.deserialize_identifier(ArrayFieldVisitor)
    }
}

struct ArrayVisitor<A> {
    marker: PhantomData<A>,
}

impl<A> ArrayVisitor<A> {
    fn new() -> Self {
        ArrayVisitor {
            marker: PhantomData,
        }
    }
}

/// **Requires crate feature `"serde"`**
impl<'de, A> Deserialize<'de> for SimpleArray<A>
where
    A: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<SimpleArray<A>, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_struct("SimpleArray", ARRAY_FIELDS, ArrayVisitor::new())
    }
}

impl<'de, A> Visitor<'de> for ArrayVisitor<A>
where
    A: Deserialize<'de>,
{
    type Value = SimpleArray<A>;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("rdarray representation")
    }

    fn visit_seq<V>(self, mut visitor: V) -> Result<SimpleArray<A>, V::Error>
    where
        V: SeqAccess<'de>,
    {
        let v: u8 = visitor
            .next_element()?
            .ok_or_else(|| de::Error::invalid_length(0, &self))?;
        verify_version(v)?;
        let dim: Extent = visitor
            .next_element()?
            .ok_or_else(|| de::Error::invalid_length(1, &self))?;
        let data: Vec<A> = visitor
            .next_element()?
            .ok_or_else(|| de::Error::invalid_length(2, &self))?;
        SimpleArray::from_shape_vec(dim, data)
            .map_err(|_| de::Error::custom("data and dimension must match in size"))
    }

    fn visit_map<V>(self, mut visitor: V) -> Result<SimpleArray<A>, V::Error>
    where
        V: MapAccess<'de>,
    {
        let mut v: Option<u8> = None;
        let mut dim: Option<Extent> = None;
        let mut data: Option<Vec<A>> = None;
        while let Some(key) = visitor.next_key()? {
            match key {
                ArrayField::V => v = Some(visitor.next_value()?),
                ArrayField::Dim => dim = Some(visitor.next_value()?),
                ArrayField::Data => data = Some(visitor.next_value()?),
            }
        }
        let v = v.ok_or_else(|| de::Error::missing_field("v"))?;
        verify_version(v)?;
        let dim = dim.ok_or_else(|| de::Error::missing_field("dim"))?;
        let data = data.ok_or_else(|| de::Error::missing_field("data"))?;
        SimpleArray::from_shape_vec(dim, data)
            .map_err(|_| de::Error::custom("data and dimension must match in size"))
    }
}
