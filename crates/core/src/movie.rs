//! Movie request validation.
//!
//! Validation runs in two stages. [`validate_fields`] checks that every field
//! is present and that the rating is a decimal; only when that passes does
//! [`validate_rating`] check the rating against [`ALLOWED_RATINGS`].

use serde::{Deserialize, Deserializer};
use utoipa::ToSchema;

use crate::validation::{is_blank, require_not_blank, trim_padding, FieldError};

/// Ratings are half points from 0.5 to 5.0, compared by exact equality.
pub const ALLOWED_RATINGS: [f32; 10] = [0.5, 1.0, 1.5, 2.0, 2.5, 3.0, 3.5, 4.0, 4.5, 5.0];

/// Message reported when a rating parses but is not one of [`ALLOWED_RATINGS`].
pub const RATING_RANGE_MESSAGE: &str = "Allowed rating 0.5,1.0,1.5,2.0,2.5,3.0,3.5,4.0,4.5,5";

pub const TITLE_BLANK: &str = "Title cannot be blank";
pub const CATEGORY_BLANK: &str = "Category cannot be blank";
pub const RATING_BLANK: &str = "Rating cannot be blank";
pub const RATING_NOT_DECIMAL: &str = "Rating must be a decimal number";

/// Raw create/update body. Every field is optional so that missing values
/// surface as validation errors rather than deserialization failures.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct MovieRequest {
    #[serde(default)]
    #[schema(example = "test create")]
    pub title: Option<String>,
    #[serde(default)]
    #[schema(example = "romance")]
    pub category: Option<String>,
    /// Accepts a JSON string or number; numbers are kept as their decimal text.
    #[serde(default, deserialize_with = "text_or_number")]
    #[schema(value_type = Option<String>, example = "4.5")]
    pub rating: Option<String>,
}

/// A request that passed both validation stages.
#[derive(Debug, Clone, PartialEq)]
pub struct MovieFields {
    pub title: String,
    pub category: String,
    pub rating: f32,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum TextOrNumber {
    Text(String),
    Number(serde_json::Number),
}

fn text_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<TextOrNumber>::deserialize(deserializer)?;
    Ok(value.map(|v| match v {
        TextOrNumber::Text(s) => s,
        TextOrNumber::Number(n) => n.to_string(),
    }))
}

/// Parse a rating string as a finite single-precision decimal.
pub fn parse_rating(raw: &str) -> Option<f32> {
    trim_padding(raw).parse::<f32>().ok().filter(|v| v.is_finite())
}

/// The three fields of a request that passed the presence check.
#[derive(Debug, Clone, Copy)]
pub struct PresentFields<'a> {
    pub title: &'a str,
    pub category: &'a str,
    pub rating: &'a str,
}

/// Check field presence. Violations are reported together, in field order.
pub fn validate_fields(request: &MovieRequest) -> Result<PresentFields<'_>, Vec<FieldError>> {
    let mut errors = Vec::new();

    require_not_blank(&mut errors, "title", request.title.as_deref(), TITLE_BLANK);
    require_not_blank(
        &mut errors,
        "category",
        request.category.as_deref(),
        CATEGORY_BLANK,
    );
    require_not_blank(&mut errors, "rating", request.rating.as_deref(), RATING_BLANK);

    if let Some(raw) = request.rating.as_deref() {
        if !is_blank(Some(raw)) && parse_rating(raw).is_none() {
            errors.push(FieldError::new("rating", RATING_NOT_DECIMAL));
        }
    }

    match (
        request.title.as_deref(),
        request.category.as_deref(),
        request.rating.as_deref(),
    ) {
        (Some(title), Some(category), Some(rating)) if errors.is_empty() => Ok(PresentFields {
            title,
            category,
            rating,
        }),
        _ => Err(errors),
    }
}

/// Check that `raw` is exactly one of [`ALLOWED_RATINGS`], returning the
/// parsed value.
pub fn validate_rating(raw: &str) -> Result<f32, Vec<FieldError>> {
    match parse_rating(raw) {
        Some(rating) if ALLOWED_RATINGS.contains(&rating) => Ok(rating),
        _ => Err(vec![FieldError::new("rating", RATING_RANGE_MESSAGE)]),
    }
}

/// Run both validation stages and produce the fields to persist.
pub fn validate_movie(request: &MovieRequest) -> Result<MovieFields, Vec<FieldError>> {
    let present = validate_fields(request)?;
    let rating = validate_rating(present.rating)?;

    Ok(MovieFields {
        title: present.title.to_string(),
        category: present.category.to_string(),
        rating,
    })
}
