use std::fmt;

use crate::error::{Error, Result};

/// A validated album name.
///
/// Albums exist in the store only as the key prefix `"<name>/"`, so the
/// name itself must be non-empty and must not contain a path separator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Album(String);

impl Album {
    pub fn new(name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        if name.is_empty() {
            return Err(Error::Validation("Album name is required".to_string()));
        }
        if name.contains('/') {
            return Err(Error::Validation(format!(
                "Album name '{name}' must not contain '/'"
            )));
        }
        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The key prefix shared by every photo in this album.
    pub fn prefix(&self) -> String {
        format!("{}/", self.0)
    }

    /// The object key for a photo with the given filename.
    pub fn key_for(&self, filename: &str) -> String {
        format!("{}/{}", self.0, filename)
    }

    /// Strips this album's prefix from a key, yielding the photo filename.
    ///
    /// Returns `None` for keys outside the album and for the bare
    /// `"<name>/"` placeholder key some stores create for empty prefixes.
    pub fn photo_name<'a>(&self, key: &'a str) -> Option<&'a str> {
        match key.strip_prefix(&self.prefix()) {
            Some("") | None => None,
            Some(name) => Some(name),
        }
    }
}

impl fmt::Display for Album {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Whether a filename looks like a photo we manage (.jpg/.jpeg, any case).
pub fn is_photo_file(filename: &str) -> bool {
    let lower = filename.to_ascii_lowercase();
    lower.ends_with(".jpg") || lower.ends_with(".jpeg")
}

/// Derives album names from a full key listing: the distinct first path
/// segments of every key containing `/`, in order of first appearance.
pub fn albums_from_keys<S: AsRef<str>>(keys: &[S]) -> Vec<String> {
    let mut albums: Vec<String> = Vec::new();
    for key in keys {
        if let Some((first, _)) = key.as_ref().split_once('/') {
            if !first.is_empty() && !albums.iter().any(|a| a == first) {
                albums.push(first.to_string());
            }
        }
    }
    albums
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_empty_name() {
        assert!(matches!(Album::new(""), Err(Error::Validation(_))));
    }

    #[test]
    fn rejects_path_separator() {
        assert!(matches!(Album::new("a/b"), Err(Error::Validation(_))));
    }

    #[test]
    fn builds_prefix_and_keys() {
        let album = Album::new("vacation").unwrap();
        assert_eq!(album.prefix(), "vacation/");
        assert_eq!(album.key_for("beach.jpg"), "vacation/beach.jpg");
    }

    #[test]
    fn photo_name_strips_prefix() {
        let album = Album::new("vacation").unwrap();
        assert_eq!(album.photo_name("vacation/beach.jpg"), Some("beach.jpg"));
        assert_eq!(album.photo_name("vacation/"), None);
        assert_eq!(album.photo_name("other/beach.jpg"), None);
    }

    #[test]
    fn photo_name_requires_full_segment_match() {
        let album = Album::new("a").unwrap();
        assert_eq!(album.photo_name("album2/beach.jpg"), None);
    }

    #[test]
    fn detects_photo_extensions() {
        assert!(is_photo_file("beach.jpg"));
        assert!(is_photo_file("BEACH.JPEG"));
        assert!(is_photo_file("mixed.JpG"));
        assert!(!is_photo_file("notes.txt"));
        assert!(!is_photo_file("jpg"));
    }

    #[test]
    fn derives_albums_in_first_appearance_order() {
        let keys = [
            "winter/a.jpg",
            "summer/b.jpg",
            "winter/c.jpg",
            "index.html",
        ];
        assert_eq!(albums_from_keys(&keys), vec!["winter", "summer"]);
    }

    #[test]
    fn ignores_keys_without_separator() {
        let keys = ["index.html", "error.html"];
        assert!(albums_from_keys(&keys).is_empty());
    }
}
