//! An owned NBT tree that keeps compound children in the order they were
//! read.
//!
//! This mirrors [`fastnbt::Value`] but stores compounds in an [`IndexMap`],
//! so a residue re-encodes its tags in source order. It reads and writes
//! through fastnbt's serde support like any other type:
//!
//! ```no_run
//! # use fastinv::Value;
//! # fn main() -> fastnbt::error::Result<()> {
//! # let buf: Vec<u8> = vec![];
//! let root: Value = fastnbt::from_bytes(&buf)?;
//! let bytes = fastnbt::to_bytes(&root)?;
//! # Ok(())
//! # }
//! ```

use std::fmt;

use byteorder::{BigEndian, ReadBytesExt};
use fastnbt::{ByteArray, IntArray, LongArray};
use indexmap::IndexMap;
use serde::{
    de::{self, DeserializeSeed, MapAccess, SeqAccess, Visitor},
    Deserialize, Deserializer, Serialize, Serializer,
};
use serde_bytes::ByteBuf;

// Field names fastnbt uses to carry the array tags through serde.
const BYTE_ARRAY_TOKEN: &str = "__fastnbt_byte_array";
const INT_ARRAY_TOKEN: &str = "__fastnbt_int_array";
const LONG_ARRAY_TOKEN: &str = "__fastnbt_long_array";

#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Byte(i8),
    Short(i16),
    Int(i32),
    Long(i64),
    Float(f32),
    Double(f64),
    String(String),
    ByteArray(ByteArray),
    IntArray(IntArray),
    LongArray(LongArray),
    List(Vec<Value>),
    Compound(IndexMap<String, Value>),
}

impl Value {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }
}

impl Serialize for Value {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Value::Byte(v) => serializer.serialize_i8(*v),
            Value::Short(v) => serializer.serialize_i16(*v),
            Value::Int(v) => serializer.serialize_i32(*v),
            Value::Long(v) => serializer.serialize_i64(*v),
            Value::Float(v) => serializer.serialize_f32(*v),
            Value::Double(v) => serializer.serialize_f64(*v),
            Value::String(v) => serializer.serialize_str(v),
            Value::ByteArray(v) => v.serialize(serializer),
            Value::IntArray(v) => v.serialize(serializer),
            Value::LongArray(v) => v.serialize(serializer),
            Value::List(v) => v.serialize(serializer),
            Value::Compound(v) => v.serialize(serializer),
        }
    }
}

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(ValueVisitor)
    }
}

struct ValueVisitor;

impl<'de> Visitor<'de> for ValueVisitor {
    type Value = Value;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("valid NBT")
    }

    fn visit_i8<E: de::Error>(self, v: i8) -> Result<Value, E> {
        Ok(Value::Byte(v))
    }

    fn visit_i16<E: de::Error>(self, v: i16) -> Result<Value, E> {
        Ok(Value::Short(v))
    }

    fn visit_i32<E: de::Error>(self, v: i32) -> Result<Value, E> {
        Ok(Value::Int(v))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Value, E> {
        Ok(Value::Long(v))
    }

    fn visit_f32<E: de::Error>(self, v: f32) -> Result<Value, E> {
        Ok(Value::Float(v))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Value, E> {
        Ok(Value::Double(v))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Value, E> {
        Ok(Value::String(v.to_owned()))
    }

    fn visit_string<E: de::Error>(self, v: String) -> Result<Value, E> {
        Ok(Value::String(v))
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Value, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let mut items = Vec::with_capacity(seq.size_hint().unwrap_or(0));
        while let Some(item) = seq.next_element()? {
            items.push(item);
        }
        Ok(Value::List(items))
    }

    fn visit_map<A>(self, mut map: A) -> Result<Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        match map.next_key_seed(KeyClassifier)? {
            Some(KeyClass::Compound(first)) => {
                let mut compound = IndexMap::with_capacity(map.size_hint().unwrap_or(0) + 1);
                compound.insert(first, map.next_value()?);
                while let Some((key, value)) = map.next_entry()? {
                    compound.insert(key, value);
                }
                Ok(Value::Compound(compound))
            }
            Some(KeyClass::ByteArray) => {
                let data = map.next_value::<ByteBuf>()?;
                let data = data.into_vec().into_iter().map(|b| b as i8).collect();
                Ok(Value::ByteArray(ByteArray::new(data)))
            }
            Some(KeyClass::IntArray) => {
                let data = map.next_value::<ByteBuf>()?;
                let data = data
                    .chunks_exact(4)
                    .map(|mut bs| bs.read_i32::<BigEndian>())
                    .collect::<std::io::Result<Vec<_>>>()
                    .map_err(|_| de::Error::custom("could not read int array"))?;
                Ok(Value::IntArray(IntArray::new(data)))
            }
            Some(KeyClass::LongArray) => {
                let data = map.next_value::<ByteBuf>()?;
                let data = data
                    .chunks_exact(8)
                    .map(|mut bs| bs.read_i64::<BigEndian>())
                    .collect::<std::io::Result<Vec<_>>>()
                    .map_err(|_| de::Error::custom("could not read long array"))?;
                Ok(Value::LongArray(LongArray::new(data)))
            }
            // No keys just means an empty compound.
            None => Ok(Value::Compound(IndexMap::new())),
        }
    }
}

/// Tells the first key of a map apart: a compound field name, or one of the
/// tokens fastnbt wraps array payloads in.
struct KeyClassifier;

enum KeyClass {
    Compound(String),
    ByteArray,
    IntArray,
    LongArray,
}

impl KeyClass {
    fn of(key: &str) -> Self {
        match key {
            BYTE_ARRAY_TOKEN => KeyClass::ByteArray,
            INT_ARRAY_TOKEN => KeyClass::IntArray,
            LONG_ARRAY_TOKEN => KeyClass::LongArray,
            _ => KeyClass::Compound(key.to_owned()),
        }
    }
}

impl<'de> DeserializeSeed<'de> for KeyClassifier {
    type Value = KeyClass;

    fn deserialize<D>(self, deserializer: D) -> Result<KeyClass, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_str(self)
    }
}

impl<'de> Visitor<'de> for KeyClassifier {
    type Value = KeyClass;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("an nbt field string")
    }

    fn visit_str<E: de::Error>(self, s: &str) -> Result<KeyClass, E> {
        Ok(KeyClass::of(s))
    }
}
