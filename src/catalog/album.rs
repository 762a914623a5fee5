use std::fmt;

use serde::de::{self, Deserializer, IgnoredAny, MapAccess, SeqAccess, Visitor};
use serde::{Deserialize, Serialize, Serializer};
use serde_json::Value;

/// A single catalog record. The id is caller-supplied and never checked for
/// uniqueness or format.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Album {
    pub id: String,
    pub title: String,
    pub artist: String,
    #[serde(serialize_with = "serialize_price")]
    pub price: f64,
}

impl Album {
    pub fn new(id: &str, title: &str, artist: &str, price: f64) -> Self {
        Album {
            id: id.to_string(),
            title: title.to_string(),
            artist: artist.to_string(),
            price,
        }
    }

    /// Bind a raw request body into an album.
    ///
    /// Only the first JSON value in the body is read; anything after it is
    /// ignored. A top-level `null` binds to an all-zero album. Object keys
    /// match field names case-insensitively and, when several keys hit the
    /// same field, the last one wins. `null` members leave the field as it
    /// was and unknown members are ignored. Every mistyped member is
    /// reported, not only the first one.
    pub fn from_json_body(body: &[u8]) -> Result<Album, Vec<String>> {
        let first = serde_json::Deserializer::from_slice(body)
            .into_iter::<Body>()
            .next();

        let members = match first {
            None => return Err(vec!["empty request body".to_string()]),
            Some(Err(e)) => return Err(vec![format!("invalid JSON: {e}")]),
            Some(Ok(Body::Null)) => return Ok(Album::default()),
            Some(Ok(Body::Other(kind))) => {
                return Err(vec![format!("expected a JSON object, found {kind}")])
            }
            Some(Ok(Body::Object(members))) => members,
        };

        let mut album = Album::default();
        let mut errors = Vec::new();
        for (key, value) in &members {
            if value.is_null() {
                continue;
            }
            match key.to_ascii_lowercase().as_str() {
                "id" => bind_string(&mut album.id, key, value, &mut errors),
                "title" => bind_string(&mut album.title, key, value, &mut errors),
                "artist" => bind_string(&mut album.artist, key, value, &mut errors),
                "price" => bind_number(&mut album.price, key, value, &mut errors),
                _ => {}
            }
        }

        if errors.is_empty() {
            Ok(album)
        } else {
            Err(errors)
        }
    }
}

/// The three records every fresh process starts with, in order.
pub fn seed_albums() -> Vec<Album> {
    vec![
        Album::new("1", "Blue train", "John Coltrane", 56.99),
        Album::new("2", "Jeru", "Gerry Mulligan", 17.99),
        Album::new("3", "Sarah Vaughan and Clifford Brown", "Sarah Vaughan", 39.99),
    ]
}

/// Whole prices go out as `10`, not `10.0`.
fn serialize_price<S: Serializer>(price: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    if price.fract() == 0.0 && price.abs() < 1e15 {
        serializer.serialize_i64(*price as i64)
    } else {
        serializer.serialize_f64(*price)
    }
}

/// First value of a request body. Object members keep document order,
/// duplicates included.
enum Body {
    Null,
    Object(Vec<(String, Value)>),
    Other(&'static str),
}

impl<'de> Deserialize<'de> for Body {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(BodyVisitor)
    }
}

struct BodyVisitor;

impl<'de> Visitor<'de> for BodyVisitor {
    type Value = Body;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a JSON value")
    }

    fn visit_unit<E: de::Error>(self) -> Result<Body, E> {
        Ok(Body::Null)
    }

    fn visit_none<E: de::Error>(self) -> Result<Body, E> {
        Ok(Body::Null)
    }

    fn visit_bool<E: de::Error>(self, _: bool) -> Result<Body, E> {
        Ok(Body::Other("boolean"))
    }

    fn visit_i64<E: de::Error>(self, _: i64) -> Result<Body, E> {
        Ok(Body::Other("number"))
    }

    fn visit_u64<E: de::Error>(self, _: u64) -> Result<Body, E> {
        Ok(Body::Other("number"))
    }

    fn visit_f64<E: de::Error>(self, _: f64) -> Result<Body, E> {
        Ok(Body::Other("number"))
    }

    fn visit_str<E: de::Error>(self, _: &str) -> Result<Body, E> {
        Ok(Body::Other("string"))
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Body, A::Error> {
        while seq.next_element::<IgnoredAny>()?.is_some() {}
        Ok(Body::Other("array"))
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Body, A::Error> {
        let mut members = Vec::new();
        while let Some(member) = map.next_entry::<String, Value>()? {
            members.push(member);
        }
        Ok(Body::Object(members))
    }
}

fn bind_string(field: &mut String, key: &str, value: &Value, errors: &mut Vec<String>) {
    match value {
        Value::String(s) => *field = s.clone(),
        other => errors.push(format!("field `{key}`: expected a string, found {}", kind_of(other))),
    }
}

fn bind_number(field: &mut f64, key: &str, value: &Value, errors: &mut Vec<String>) {
    match value {
        Value::Number(n) => match n.as_f64() {
            Some(f) => *field = f,
            None => errors.push(format!("field `{key}`: {n} does not fit in a 64-bit float")),
        },
        other => errors.push(format!("field `{key}`: expected a number, found {}", kind_of(other))),
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
