//! Image references
//!
//! The API has historically sent images as arrays, single objects, or bare
//! strings, and as either absolute URLs or storage paths. All of those wire
//! shapes are normalized here, once, into `ImageRef`; nothing downstream
//! re-discovers the shape.

use serde::{Deserialize, Serialize, Serializer};

/// A normalized reference to a hosted image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageRef {
    /// Fully qualified URL, usable as-is.
    Url(String),
    /// Path relative to the configured image host.
    StoragePath(String),
}

impl ImageRef {
    /// Resolve to a fetchable URL.
    ///
    /// Storage paths are joined onto `image_base`; when no base is
    /// configured, only already-fully-qualified references resolve. Empty
    /// references resolve to `None` so callers can fall back to a
    /// placeholder instead of issuing a doomed request.
    pub fn resolve(&self, image_base: Option<&str>) -> Option<String> {
        match self {
            ImageRef::Url(url) => {
                let url = url.trim();
                (!url.is_empty()).then(|| url.to_string())
            }
            ImageRef::StoragePath(path) => {
                let path = path.trim();
                if path.is_empty() {
                    return None;
                }
                if path.starts_with("http://") || path.starts_with("https://") {
                    return Some(path.to_string());
                }
                image_base.map(|base| {
                    format!("{}/{}", base.trim_end_matches('/'), path.trim_start_matches('/'))
                })
            }
        }
    }

    /// Whether the reference points at anything at all.
    pub fn is_empty(&self) -> bool {
        match self {
            ImageRef::Url(s) | ImageRef::StoragePath(s) => s.trim().is_empty(),
        }
    }
}

// Wire shapes the API has been observed to send for a single image.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ImageWire {
    Linked {
        url: String,
        #[serde(default)]
        path: String,
    },
    Stored {
        path: String,
    },
    Bare(String),
}

impl From<ImageWire> for ImageRef {
    fn from(wire: ImageWire) -> Self {
        match wire {
            ImageWire::Linked { url, path } => {
                if url.trim().is_empty() {
                    ImageRef::StoragePath(path)
                } else {
                    ImageRef::Url(url)
                }
            }
            ImageWire::Stored { path } => ImageRef::StoragePath(path),
            ImageWire::Bare(s) => {
                if s.starts_with("http://") || s.starts_with("https://") {
                    ImageRef::Url(s)
                } else {
                    ImageRef::StoragePath(s)
                }
            }
        }
    }
}

impl<'de> Deserialize<'de> for ImageRef {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        ImageWire::deserialize(deserializer).map(Into::into)
    }
}

impl Serialize for ImageRef {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        use serde::ser::SerializeStruct;
        let mut s = serializer.serialize_struct("ImageRef", 2)?;
        match self {
            ImageRef::Url(url) => {
                s.serialize_field("url", url)?;
                s.serialize_field("path", "")?;
            }
            ImageRef::StoragePath(path) => {
                s.serialize_field("url", "")?;
                s.serialize_field("path", path)?;
            }
        }
        s.end()
    }
}

/// Set of images attached to a resource.
///
/// Accepts both a bare array and a single image on the wire.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ImageSet(pub Vec<ImageRef>);

impl ImageSet {
    /// First usable image, for table thumbnails.
    pub fn primary(&self) -> Option<&ImageRef> {
        self.0.iter().find(|i| !i.is_empty())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ImageSetWire {
    Many(Vec<ImageRef>),
    One(ImageRef),
}

impl<'de> Deserialize<'de> for ImageSet {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        Ok(match ImageSetWire::deserialize(deserializer)? {
            ImageSetWire::Many(images) => ImageSet(images),
            ImageSetWire::One(image) => ImageSet(vec![image]),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalizes_all_wire_shapes() {
        let linked: ImageRef = serde_json::from_str(r#"{"url":"https://img.host/a.webp","path":"all/a.webp"}"#).unwrap();
        assert_eq!(linked, ImageRef::Url("https://img.host/a.webp".into()));

        let stored: ImageRef = serde_json::from_str(r#"{"path":"all/b.webp"}"#).unwrap();
        assert_eq!(stored, ImageRef::StoragePath("all/b.webp".into()));

        let bare: ImageRef = serde_json::from_str(r#""all/c.webp""#).unwrap();
        assert_eq!(bare, ImageRef::StoragePath("all/c.webp".into()));

        let bare_url: ImageRef = serde_json::from_str(r#""https://img.host/d.webp""#).unwrap();
        assert_eq!(bare_url, ImageRef::Url("https://img.host/d.webp".into()));
    }

    #[test]
    fn image_set_accepts_single_and_array() {
        let many: ImageSet = serde_json::from_str(r#"[{"path":"a"},{"path":"b"}]"#).unwrap();
        assert_eq!(many.len(), 2);

        let one: ImageSet = serde_json::from_str(r#"{"path":"a"}"#).unwrap();
        assert_eq!(one.len(), 1);
    }

    #[test]
    fn resolves_against_base() {
        let path = ImageRef::StoragePath("all/a.webp".into());
        assert_eq!(
            path.resolve(Some("https://img.host/images/")),
            Some("https://img.host/images/all/a.webp".into())
        );
        assert_eq!(path.resolve(None), None);

        let absolute = ImageRef::StoragePath("https://cdn.example/a.webp".into());
        assert_eq!(absolute.resolve(None), Some("https://cdn.example/a.webp".into()));
    }

    #[test]
    fn empty_reference_resolves_to_none() {
        assert_eq!(ImageRef::Url("  ".into()).resolve(None), None);
        assert_eq!(ImageRef::StoragePath(String::new()).resolve(Some("https://img.host")), None);
    }
}
