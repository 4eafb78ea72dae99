//! The normalized meal record.
//!
//! The service describes a meal as a flat JSON object with dozens of `str*`
//! keys. Only the identifier, name, instructions and thumbnail are consumed;
//! missing or `null` values are replaced with defaults when the [`Meal`] is
//! built, so consumers never see a partially populated record.

use serde_json::{Map, Value};

/// A single recipe entry.
///
/// `Meal` is an immutable value. All fields are normalized at construction time:
/// the name and instructions fall back to [`Meal::DEFAULT_NAME`] and
/// [`Meal::DEFAULT_INSTRUCTIONS`], and an empty thumbnail URL is stored as `None`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Meal {
    id: String,
    name: String,
    instructions: String,
    thumbnail_url: Option<String>,
}

impl Meal {
    /// Name used when the service omits `strMeal`.
    pub const DEFAULT_NAME: &'static str = "Unknown Meal";
    /// Instructions used when the service omits `strInstructions`.
    pub const DEFAULT_INSTRUCTIONS: &'static str = "No instructions available.";

    /// Creates a meal from already-extracted fields, applying the default rules.
    ///
    /// # Examples
    ///
    /// ```
    /// use mealviewer_core::Meal;
    ///
    /// let meal = Meal::new("52772", None, Some("Cook it."), Some(""));
    /// assert_eq!(meal.name(), Meal::DEFAULT_NAME);
    /// assert_eq!(meal.instructions(), "Cook it.");
    /// assert_eq!(meal.thumbnail_url(), None);
    /// ```
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        name: Option<&str>,
        instructions: Option<&str>,
        thumbnail_url: Option<&str>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.unwrap_or(Self::DEFAULT_NAME).to_owned(),
            instructions: instructions
                .unwrap_or(Self::DEFAULT_INSTRUCTIONS)
                .to_owned(),
            thumbnail_url: thumbnail_url
                .filter(|url| !url.is_empty())
                .map(str::to_owned),
        }
    }

    /// Builds a meal from one entry of a `meals` array.
    ///
    /// Returns `None` unless `value` is a JSON object. Keys other than `idMeal`,
    /// `strMeal`, `strInstructions` and `strMealThumb` are ignored; values of the
    /// wrong type are treated as absent.
    #[must_use]
    pub fn from_json(value: &Value) -> Option<Self> {
        let object = value.as_object()?;
        Some(Self::from_object(object))
    }

    fn from_object(object: &Map<String, Value>) -> Self {
        let id = match object.get("idMeal") {
            Some(Value::String(id)) => id.clone(),
            Some(Value::Number(id)) => id.to_string(),
            _ => String::new(),
        };
        Self::new(
            id,
            string_field(object, "strMeal"),
            string_field(object, "strInstructions"),
            string_field(object, "strMealThumb"),
        )
    }

    /// Opaque identifier assigned by the service. Empty if the service omitted it.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Free-text preparation instructions.
    #[must_use]
    pub fn instructions(&self) -> &str {
        &self.instructions
    }

    /// Thumbnail image URL, if the service provided a non-empty one.
    #[must_use]
    pub fn thumbnail_url(&self) -> Option<&str> {
        self.thumbnail_url.as_deref()
    }
}

fn string_field<'a>(object: &'a Map<String, Value>, key: &str) -> Option<&'a str> {
    object.get(key).and_then(Value::as_str)
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use serde_json::{Map, Value, json};

    use super::Meal;

    #[test]
    fn full_object_is_copied_verbatim() {
        let meal = Meal::from_json(&json!({
            "idMeal": "52795",
            "strMeal": "Chicken Handi",
            "strInstructions": "Cook it.",
            "strMealThumb": "https://example.test/handi.jpg",
            "strArea": "Indian",
        }))
        .unwrap();

        assert_eq!(meal.id(), "52795");
        assert_eq!(meal.name(), "Chicken Handi");
        assert_eq!(meal.instructions(), "Cook it.");
        assert_eq!(meal.thumbnail_url(), Some("https://example.test/handi.jpg"));
    }

    #[test]
    fn missing_and_null_fields_use_defaults() {
        let meal = Meal::from_json(&json!({ "strInstructions": null })).unwrap();

        assert_eq!(meal.id(), "");
        assert_eq!(meal.name(), Meal::DEFAULT_NAME);
        assert_eq!(meal.instructions(), Meal::DEFAULT_INSTRUCTIONS);
        assert_eq!(meal.thumbnail_url(), None);
    }

    #[test]
    fn empty_thumbnail_means_no_image() {
        let meal = Meal::from_json(&json!({ "strMeal": "Soup", "strMealThumb": "" })).unwrap();
        assert_eq!(meal.thumbnail_url(), None);
    }

    #[test]
    fn numeric_id_is_stringified() {
        let meal = Meal::from_json(&json!({ "idMeal": 52772 })).unwrap();
        assert_eq!(meal.id(), "52772");
    }

    #[test]
    fn non_objects_are_rejected() {
        assert!(Meal::from_json(&Value::Null).is_none());
        assert!(Meal::from_json(&json!("Chicken Handi")).is_none());
        assert!(Meal::from_json(&json!([{ "strMeal": "Soup" }])).is_none());
    }

    fn other_field() -> impl Strategy<Value = (String, Value)> {
        let key = prop_oneof![
            Just("idMeal".to_owned()),
            Just("strMeal".to_owned()),
            Just("strMealThumb".to_owned()),
            Just("strArea".to_owned()),
            "[a-zA-Z]{1,12}".prop_filter("instructions key is excluded", |key| {
                key != "strInstructions"
            }),
        ];
        let value = prop_oneof![
            Just(Value::Null),
            any::<String>().prop_map(Value::String),
            any::<i64>().prop_map(Value::from),
            any::<bool>().prop_map(Value::Bool),
        ];
        (key, value)
    }

    proptest! {
        #[test]
        fn instructions_default_when_key_missing(fields in prop::collection::vec(other_field(), 0..8)) {
            let object: Map<String, Value> = fields.into_iter().collect();
            let meal = Meal::from_json(&Value::Object(object)).unwrap();
            prop_assert_eq!(meal.instructions(), Meal::DEFAULT_INSTRUCTIONS);
        }
    }
}
