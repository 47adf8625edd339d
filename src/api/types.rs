use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// Caption used when an image carries no breed metadata.
pub const UNKNOWN_BREED: &str = "Unknown Breed";

/// Top-level animal category; selects which API host is queried.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum AnimalType {
    #[default]
    Cat,
    Dog,
}

impl AnimalType {
    pub const ALL: [AnimalType; 2] = [AnimalType::Cat, AnimalType::Dog];

    pub fn as_str(&self) -> &'static str {
        match self {
            AnimalType::Cat => "cat",
            AnimalType::Dog => "dog",
        }
    }

    /// Label shown in the animal selector.
    pub fn label(&self) -> &'static str {
        match self {
            AnimalType::Cat => "Cats",
            AnimalType::Dog => "Dogs",
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            AnimalType::Cat => AnimalType::Dog,
            AnimalType::Dog => AnimalType::Cat,
        }
    }
}

impl fmt::Display for AnimalType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A breed as returned by `/v1/breeds` or embedded in an image.
///
/// Only `id` and `name` are interpreted. Every other field (temperament,
/// origin, weight, ...) is kept verbatim in `extra`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Breed {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    pub name: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Breed {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            extra: Map::new(),
        }
    }
}

/// One entry of `/v1/images/search`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnimalImage {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    pub url: String,
    #[serde(default)]
    pub breeds: Vec<Breed>,
    #[serde(default)]
    pub width: Option<u32>,
    #[serde(default)]
    pub height: Option<u32>,
}

impl AnimalImage {
    pub fn new(id: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            url: url.into(),
            breeds: Vec::new(),
            width: None,
            height: None,
        }
    }

    /// Name of the first embedded breed, or [`UNKNOWN_BREED`].
    pub fn breed_name(&self) -> &str {
        self.breeds
            .first()
            .map(|breed| breed.name.as_str())
            .unwrap_or(UNKNOWN_BREED)
    }

    /// Alternative text for the card, e.g. `cat - Bengal`.
    pub fn caption(&self, animal: AnimalType) -> String {
        format!("{} - {}", animal, self.breed_name())
    }
}

// The dog API uses integer ids, the cat API short strings.
fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Id {
        Text(String),
        Number(i64),
    }

    Ok(match Id::deserialize(deserializer)? {
        Id::Text(text) => text,
        Id::Number(number) => number.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cat_breed_keeps_unknown_fields() {
        let breed: Breed = serde_json::from_str(
            r#"{"id":"beng","name":"Bengal","origin":"United States","weight":{"metric":"3 - 7"}}"#,
        )
        .unwrap();
        assert_eq!(breed.id, "beng");
        assert_eq!(breed.name, "Bengal");
        assert_eq!(breed.extra["origin"], "United States");
        assert_eq!(breed.extra["weight"]["metric"], "3 - 7");
    }

    #[test]
    fn dog_breed_numeric_id_becomes_string() {
        let breed: Breed = serde_json::from_str(r#"{"id":1,"name":"Affenpinscher"}"#).unwrap();
        assert_eq!(breed.id, "1");
    }

    #[test]
    fn image_without_breeds_field_has_empty_breeds() {
        let image: AnimalImage =
            serde_json::from_str(r#"{"id":"abc","url":"https://cdn/abc.jpg","width":500}"#)
                .unwrap();
        assert!(image.breeds.is_empty());
        assert_eq!(image.width, Some(500));
        assert_eq!(image.height, None);
        assert_eq!(image.breed_name(), UNKNOWN_BREED);
    }

    #[test]
    fn caption_uses_first_breed() {
        let mut image = AnimalImage::new("x", "https://cdn/x.jpg");
        image.breeds = vec![Breed::new("beng", "Bengal"), Breed::new("abys", "Abyssinian")];
        assert_eq!(image.caption(AnimalType::Cat), "cat - Bengal");
    }

    #[test]
    fn animal_type_round_trips_lowercase() {
        assert_eq!(serde_json::to_string(&AnimalType::Dog).unwrap(), r#""dog""#);
        let parsed: AnimalType = serde_json::from_str(r#""cat""#).unwrap();
        assert_eq!(parsed, AnimalType::Cat);
        assert_eq!(AnimalType::Cat.toggled(), AnimalType::Dog);
        assert_eq!(AnimalType::Dog.label(), "Dogs");
    }
}
