//! Protocol module - JSON message types for the solve endpoint
//!
//! Request: `{"scramble": "R U R' U'"}`
//!
//! Response (success):
//!
//! ```text
//! {
//!   "solution": "U R U' R'",
//!   "scrambled_cube": {"U": ["white", ...9], "L": [...], ...},
//!   "solved_cube":    {"U": ["white", ...9], ...}
//! }
//! ```
//!
//! Response (failure, usually HTTP 400): `{"error": "Invalid scramble sequence"}`
//!
//! Decoding is lenient about face snapshots: a snapshot that is not an
//! object is treated as absent, unknown face keys are skipped, unknown or
//! non-string sticker values decode as unknown stickers, and faces with the
//! wrong number of entries are padded or truncated to nine. Any snapshot
//! that is absent means "no update". Fields the client does not use
//! (the server also sends an `animation` list) are ignored.

use std::fmt;

use serde::de::{self, Deserializer, IgnoredAny, MapAccess, SeqAccess, Visitor};
use serde::{Deserialize, Serialize};

use crate::core::{CubePatch, FaceStickers, SolveError, SolveOutcome, UNKNOWN_FACE};
use crate::types::{Color, Face, Sticker, FACE_STICKERS};

/// Body of `POST /solve`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolveRequest {
    pub scramble: String,
}

/// Body of any answer from the solve endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct SolveResponse {
    #[serde(default)]
    pub solution: Option<String>,
    #[serde(default, deserialize_with = "lenient_cube")]
    pub scrambled_cube: Option<WireCube>,
    #[serde(default, deserialize_with = "lenient_cube")]
    pub solved_cube: Option<WireCube>,
    #[serde(default)]
    pub error: Option<String>,
}

impl SolveResponse {
    /// The server's error text, verbatim, unless it is blank.
    pub fn error_text(&self) -> Option<&str> {
        self.error.as_deref().filter(|s| !s.trim().is_empty())
    }

    /// Convert a successful body into an outcome.
    ///
    /// A body that carries an error text is a service error even when the
    /// HTTP status was 2xx.
    pub fn into_outcome(self) -> Result<SolveOutcome, SolveError> {
        if let Some(text) = self.error_text() {
            return Err(SolveError::Service(text.to_string()));
        }
        Ok(SolveOutcome {
            solution: self.solution,
            scrambled: self.scrambled_cube.map(|c| c.0),
            solved: self.solved_cube.map(|c| c.0),
        })
    }
}

/// A face-keyed cube snapshot, decoded straight into a [`CubePatch`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WireCube(pub CubePatch);

impl<'de> Deserialize<'de> for WireCube {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer
            .deserialize_map(CubeVisitor)?
            .map(WireCube)
            .ok_or_else(|| de::Error::custom("expected a map of face keys"))
    }
}

/// Snapshot field decoder: anything that is not a map means "no snapshot".
fn lenient_cube<'de, D>(deserializer: D) -> Result<Option<WireCube>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(deserializer.deserialize_any(CubeVisitor)?.map(WireCube))
}

/// Decodes a face-keyed map into a patch; other shapes yield `None`.
struct CubeVisitor;

impl<'de> Visitor<'de> for CubeVisitor {
    type Value = Option<CubePatch>;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "a map of face keys to sticker color lists")
    }

    fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut patch = CubePatch::new();
        while let Some(key) = map.next_key::<String>()? {
            match Face::from_str(&key) {
                Some(face) => {
                    if let WireFace(Some(stickers)) = map.next_value::<WireFace>()? {
                        patch.set(face, stickers);
                    }
                }
                None => {
                    map.next_value::<IgnoredAny>()?;
                }
            }
        }
        Ok(Some(patch))
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: SeqAccess<'de>,
    {
        while seq.next_element::<IgnoredAny>()?.is_some() {}
        Ok(None)
    }

    fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(None)
    }

    fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(None)
    }

    fn visit_str<E: de::Error>(self, _: &str) -> Result<Self::Value, E> {
        Ok(None)
    }

    fn visit_bool<E: de::Error>(self, _: bool) -> Result<Self::Value, E> {
        Ok(None)
    }

    fn visit_i64<E: de::Error>(self, _: i64) -> Result<Self::Value, E> {
        Ok(None)
    }

    fn visit_u64<E: de::Error>(self, _: u64) -> Result<Self::Value, E> {
        Ok(None)
    }

    fn visit_f64<E: de::Error>(self, _: f64) -> Result<Self::Value, E> {
        Ok(None)
    }
}

impl Serialize for WireCube {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeMap;
        let mut map = serializer.serialize_map(Some(self.0.face_count()))?;
        for face in Face::ALL {
            if let Some(stickers) = self.0.get(face) {
                let names: Vec<&str> = stickers
                    .iter()
                    .map(|s| s.map(|c| c.as_str()).unwrap_or("unknown"))
                    .collect();
                map.serialize_entry(face.as_str(), &names)?;
            }
        }
        map.end()
    }
}

/// One face's sticker list; `None` when the value is not a list at all.
struct WireFace(Option<FaceStickers>);

impl<'de> Deserialize<'de> for WireFace {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct V;
        impl<'de> Visitor<'de> for V {
            type Value = WireFace;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                write!(f, "a list of sticker colors")
            }

            fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
            where
                A: SeqAccess<'de>,
            {
                let mut stickers = UNKNOWN_FACE;
                let mut i = 0usize;
                while let Some(WireSticker(sticker)) = seq.next_element::<WireSticker>()? {
                    if i < FACE_STICKERS {
                        stickers[i] = sticker;
                    }
                    i += 1;
                }
                Ok(WireFace(Some(stickers)))
            }

            fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
                Ok(WireFace(None))
            }

            fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
                Ok(WireFace(None))
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                while map.next_entry::<IgnoredAny, IgnoredAny>()?.is_some() {}
                Ok(WireFace(None))
            }

            fn visit_str<E: de::Error>(self, _: &str) -> Result<Self::Value, E> {
                Ok(WireFace(None))
            }

            fn visit_bool<E: de::Error>(self, _: bool) -> Result<Self::Value, E> {
                Ok(WireFace(None))
            }

            fn visit_i64<E: de::Error>(self, _: i64) -> Result<Self::Value, E> {
                Ok(WireFace(None))
            }

            fn visit_u64<E: de::Error>(self, _: u64) -> Result<Self::Value, E> {
                Ok(WireFace(None))
            }

            fn visit_f64<E: de::Error>(self, _: f64) -> Result<Self::Value, E> {
                Ok(WireFace(None))
            }
        }

        deserializer.deserialize_any(V)
    }
}

/// One sticker; anything that is not a known color name decodes to unknown.
struct WireSticker(Sticker);

impl<'de> Deserialize<'de> for WireSticker {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct V;
        impl<'de> Visitor<'de> for V {
            type Value = WireSticker;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                write!(f, "a sticker color name")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
                Ok(WireSticker(Color::from_str(v)))
            }

            fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
                Ok(WireSticker(None))
            }

            fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
                Ok(WireSticker(None))
            }

            fn visit_bool<E: de::Error>(self, _: bool) -> Result<Self::Value, E> {
                Ok(WireSticker(None))
            }

            fn visit_i64<E: de::Error>(self, _: i64) -> Result<Self::Value, E> {
                Ok(WireSticker(None))
            }

            fn visit_u64<E: de::Error>(self, _: u64) -> Result<Self::Value, E> {
                Ok(WireSticker(None))
            }

            fn visit_f64<E: de::Error>(self, _: f64) -> Result<Self::Value, E> {
                Ok(WireSticker(None))
            }

            fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
            where
                A: SeqAccess<'de>,
            {
                while seq.next_element::<IgnoredAny>()?.is_some() {}
                Ok(WireSticker(None))
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                while map.next_entry::<IgnoredAny, IgnoredAny>()?.is_some() {}
                Ok(WireSticker(None))
            }
        }

        deserializer.deserialize_any(V)
    }
}
