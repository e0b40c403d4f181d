//! Decode encoded requests back into their map entries, in wire order.

#![allow(dead_code)]

use std::fmt;

use serde::de::{Deserialize, Deserializer, MapAccess, Visitor};
use serde_cbor::Value;

/// Map entries as they appear on the wire (a `BTreeMap` would sort them).
#[derive(Debug)]
pub struct Entries(pub Vec<(String, Value)>);

impl Entries {
    pub fn keys(&self) -> Vec<&str> {
        self.0.iter().map(|(key, _)| key.as_str()).collect()
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.iter().find(|(k, _)| k == key).map(|(_, value)| value)
    }
}

impl<'de> Deserialize<'de> for Entries {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct EntriesVisitor;

        impl<'de> Visitor<'de> for EntriesVisitor {
            type Value = Entries;

            fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
                formatter.write_str("a map with text keys")
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut entries = Vec::new();
                while let Some(entry) = map.next_entry::<String, Value>()? {
                    entries.push(entry);
                }
                Ok(Entries(entries))
            }
        }
        deserializer.deserialize_map(EntriesVisitor)
    }
}

pub fn decode(bytes: &[u8]) -> Entries {
    serde_cbor::from_slice(bytes).expect("encoded request is valid CBOR")
}

pub fn text(value: &Value) -> &str {
    match value {
        Value::Text(text) => text.as_str(),
        other => panic!("expected text, got {:?}", other),
    }
}

pub fn texts(value: &Value) -> Vec<&str> {
    match value {
        Value::Array(items) => items.iter().map(text).collect(),
        other => panic!("expected array, got {:?}", other),
    }
}
