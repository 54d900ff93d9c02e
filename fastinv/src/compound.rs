//! A borrowed, read-only view over an NBT compound.
//!
//! The converter never mutates the tag tree it is given. Every serializer
//! reads through [`Compound`], which wraps a `&Value` known to be a
//! `Value::Compound` and offers typed lookups that turn absent or mistyped
//! tags into descriptive [`Error`]s.

use crate::value::Value;

use crate::error::{Error, Result};

#[derive(Debug, Clone, Copy)]
pub struct Compound<'a> {
    value: &'a Value,
}

impl<'a> Compound<'a> {
    /// View `value` as a compound, or `None` if it is any other kind of tag.
    pub fn new(value: &'a Value) -> Option<Self> {
        match value {
            Value::Compound(_) => Some(Self { value }),
            _ => None,
        }
    }

    /// Like [`Compound::new`] but reports a type error naming `field`.
    pub fn of(value: &'a Value, field: &str) -> Result<Self> {
        Self::new(value).ok_or_else(|| Error::wrong_type(field, "a compound"))
    }

    pub fn value(&self) -> &'a Value {
        self.value
    }

    pub fn get(&self, name: &str) -> Option<&'a Value> {
        match self.value {
            Value::Compound(map) => map.get(name),
            _ => None,
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn len(&self) -> usize {
        match self.value {
            Value::Compound(map) => map.len(),
            _ => 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Direct children in source order.
    pub fn iter(&self) -> impl Iterator<Item = (&'a str, &'a Value)> + 'a {
        let map = match self.value {
            Value::Compound(map) => Some(map),
            _ => None,
        };
        map.into_iter()
            .flat_map(|map| map.iter())
            .map(|(name, value)| (name.as_str(), value))
    }

    /// Integer tag of any width.
    pub fn int(&self, name: &str) -> Result<Option<i64>> {
        self.get(name).map(|v| as_int(v, name)).transpose()
    }

    /// Floating tag of either width. Integer tags are widened.
    pub fn float(&self, name: &str) -> Result<Option<f64>> {
        self.get(name).map(|v| as_float(v, name)).transpose()
    }

    pub fn string(&self, name: &str) -> Result<Option<&'a str>> {
        self.get(name).map(|v| as_str(v, name)).transpose()
    }

    /// A byte (or any integer) interpreted as a boolean.
    pub fn flag(&self, name: &str) -> Result<Option<bool>> {
        Ok(self.int(name)?.map(|v| v != 0))
    }

    pub fn compound(&self, name: &str) -> Result<Option<Compound<'a>>> {
        self.get(name).map(|v| Compound::of(v, name)).transpose()
    }

    pub fn list(&self, name: &str) -> Result<Option<&'a [Value]>> {
        self.get(name).map(|v| as_list(v, name)).transpose()
    }

    /// Either an IntArray or a List of integers.
    pub fn ints(&self, name: &str) -> Result<Option<Vec<i64>>> {
        let value = match self.get(name) {
            Some(value) => value,
            None => return Ok(None),
        };
        match value {
            Value::IntArray(arr) => Ok(Some(arr.iter().map(|&i| i as i64).collect())),
            Value::List(items) => items
                .iter()
                .map(|v| as_int(v, name))
                .collect::<Result<Vec<_>>>()
                .map(Some),
            _ => Err(Error::wrong_type(name, "an int array")),
        }
    }

    pub fn require_int(&self, name: &str) -> Result<i64> {
        self.int(name)?.ok_or_else(|| Error::missing(name))
    }

    pub fn require_float(&self, name: &str) -> Result<f64> {
        self.float(name)?.ok_or_else(|| Error::missing(name))
    }

    pub fn require_str(&self, name: &str) -> Result<&'a str> {
        self.string(name)?.ok_or_else(|| Error::missing(name))
    }

    pub fn require_flag(&self, name: &str) -> Result<bool> {
        self.flag(name)?.ok_or_else(|| Error::missing(name))
    }

    pub fn require_compound(&self, name: &str) -> Result<Compound<'a>> {
        self.compound(name)?.ok_or_else(|| Error::missing(name))
    }

    pub fn require_list(&self, name: &str) -> Result<&'a [Value]> {
        self.list(name)?.ok_or_else(|| Error::missing(name))
    }

    pub fn require_ints(&self, name: &str) -> Result<Vec<i64>> {
        self.ints(name)?.ok_or_else(|| Error::missing(name))
    }
}

pub(crate) fn as_int(value: &Value, field: &str) -> Result<i64> {
    match *value {
        Value::Byte(v) => Ok(v as i64),
        Value::Short(v) => Ok(v as i64),
        Value::Int(v) => Ok(v as i64),
        Value::Long(v) => Ok(v),
        _ => Err(Error::wrong_type(field, "an integer")),
    }
}

pub(crate) fn as_float(value: &Value, field: &str) -> Result<f64> {
    match *value {
        Value::Float(v) => Ok(v as f64),
        Value::Double(v) => Ok(v),
        _ => as_int(value, field)
            .map(|v| v as f64)
            .map_err(|_| Error::wrong_type(field, "a number")),
    }
}

pub(crate) fn as_str<'a>(value: &'a Value, field: &str) -> Result<&'a str> {
    value
        .as_str()
        .ok_or_else(|| Error::wrong_type(field, "a string"))
}

pub(crate) fn as_list<'a>(value: &'a Value, field: &str) -> Result<&'a [Value]> {
    match value {
        Value::List(items) => Ok(items.as_slice()),
        _ => Err(Error::wrong_type(field, "a list")),
    }
}

/// Every element of a list as a string.
pub(crate) fn strings(items: &[Value], field: &str) -> Result<Vec<String>> {
    items
        .iter()
        .map(|v| as_str(v, field).map(str::to_owned))
        .collect()
}

/// Every element of a list as a compound.
pub(crate) fn compounds<'a>(items: &'a [Value], field: &str) -> Result<Vec<Compound<'a>>> {
    items.iter().map(|v| Compound::of(v, field)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test::{compound, list};

    #[test]
    fn typed_lookups() {
        let v = compound([
            ("b", Value::Byte(1)),
            ("s", Value::String("hi".into())),
            ("f", Value::Float(0.5)),
            ("l", list([Value::Int(3), Value::Int(4)])),
        ]);
        let c = Compound::new(&v).unwrap();

        assert_eq!(c.int("b").unwrap(), Some(1));
        assert_eq!(c.flag("b").unwrap(), Some(true));
        assert_eq!(c.string("s").unwrap(), Some("hi"));
        assert_eq!(c.float("f").unwrap(), Some(0.5));
        assert_eq!(c.ints("l").unwrap(), Some(vec![3, 4]));
        assert_eq!(c.int("missing").unwrap(), None);
    }

    #[test]
    fn wrong_kind_is_an_error() {
        let v = compound([("s", Value::String("hi".into()))]);
        let c = Compound::new(&v).unwrap();

        match c.int("s") {
            Err(Error::WrongType { field, .. }) => assert_eq!(field, "s"),
            other => panic!("expected type error, got {:?}", other),
        }
    }

    #[test]
    fn required_tag_missing() {
        let v = compound([]);
        let c = Compound::new(&v).unwrap();

        match c.require_str("id") {
            Err(Error::MissingField(field)) => assert_eq!(field, "id"),
            other => panic!("expected missing field, got {:?}", other),
        }
    }

    #[test]
    fn iterates_in_source_order() {
        let v = compound([
            ("z", Value::Int(1)),
            ("a", Value::Int(2)),
            ("m", Value::Int(3)),
        ]);
        let c = Compound::new(&v).unwrap();
        let names: Vec<_> = c.iter().map(|(name, _)| name).collect();
        assert_eq!(names, ["z", "a", "m"]);
    }

    #[test]
    fn non_compound_has_no_view() {
        assert!(Compound::new(&Value::Int(3)).is_none());
    }
}
