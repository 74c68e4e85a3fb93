//! Data Transfer Objects - request/response types for the API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::{Validate, ValidationError};

/// Body of `POST /api/posts` and `PUT /api/posts/{id}`.
///
/// Missing or `null` string fields deserialize as empty so they surface as
/// field-level validation messages instead of a body parse error.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PostRequest {
    #[serde(default, deserialize_with = "null_as_empty")]
    #[validate(
        custom(function = "not_blank", message = "Name is required"),
        length(max = 200, message = "Name cannot exceed 200 characters")
    )]
    #[schema(max_length = 200, example = "Autumn in Kyoto")]
    pub name: String,

    #[serde(default, deserialize_with = "null_as_empty")]
    #[validate(
        custom(function = "not_blank", message = "Description is required"),
        length(max = 2000, message = "Description cannot exceed 2000 characters")
    )]
    #[schema(max_length = 2000)]
    pub description: String,

    #[validate(custom(function = "web_url", message = "Image must be a valid URL"))]
    #[schema(example = "https://example.com/kyoto.jpg")]
    pub image: Option<String>,
}

/// A stored post as returned to clients.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PostResponse {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub image: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Query string of `GET /api/posts`.
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct ListPostsQuery {
    /// Substring to look for in post names (case-insensitive).
    pub search: Option<String>,
    /// `asc`/`a-z` (default) or `desc`/`z-a`.
    pub sort_order: Option<String>,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("required"));
    }
    Ok(())
}

/// Absolute web URL: http, https or ftp with a host.
fn web_url(value: &str) -> Result<(), ValidationError> {
    match url::Url::parse(value) {
        Ok(parsed)
            if matches!(parsed.scheme(), "http" | "https" | "ftp") && parsed.has_host() =>
        {
            Ok(())
        }
        _ => Err(ValidationError::new("url")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(name: &str, description: &str, image: Option<&str>) -> PostRequest {
        PostRequest {
            name: name.to_string(),
            description: description.to_string(),
            image: image.map(String::from),
        }
    }

    fn failing_fields(req: &PostRequest) -> Vec<String> {
        let mut fields: Vec<String> = req
            .validate()
            .err()
            .map(|errors| {
                errors
                    .field_errors()
                    .keys()
                    .map(|k| k.to_string())
                    .collect()
            })
            .unwrap_or_default();
        fields.sort();
        fields
    }

    #[test]
    fn test_valid_request_without_image() {
        assert!(request("Post", "Body", None).validate().is_ok());
    }

    #[test]
    fn test_name_length_limit_counts_characters() {
        let at_limit = "é".repeat(200);
        assert!(request(&at_limit, "Body", None).validate().is_ok());

        let over = "a".repeat(201);
        assert_eq!(failing_fields(&request(&over, "Body", None)), vec!["name"]);
    }

    #[test]
    fn test_description_length_limit() {
        let over = "d".repeat(2001);
        assert_eq!(
            failing_fields(&request("Post", &over, None)),
            vec!["description"]
        );
    }

    #[test]
    fn test_blank_fields_are_required() {
        assert_eq!(
            failing_fields(&request("   ", "", None)),
            vec!["description", "name"]
        );
    }

    #[test]
    fn test_image_must_be_web_url() {
        assert_eq!(
            failing_fields(&request("Post", "Body", Some("not-a-url"))),
            vec!["image"]
        );
        assert_eq!(
            failing_fields(&request("Post", "Body", Some("mailto:a@b.c"))),
            vec!["image"]
        );
        assert!(
            request("Post", "Body", Some("https://cdn.example.com/a.png"))
                .validate()
                .is_ok()
        );
    }

    #[test]
    fn test_missing_fields_deserialize_as_empty() {
        let req: PostRequest = serde_json::from_str(r#"{"image":null}"#).unwrap();
        assert_eq!(req.name, "");
        assert!(req.image.is_none());
        assert_eq!(failing_fields(&req), vec!["description", "name"]);
    }

    #[test]
    fn test_null_fields_deserialize_as_empty() {
        let req: PostRequest =
            serde_json::from_str(r#"{"name":null,"description":null}"#).unwrap();
        assert_eq!(req.name, "");
        assert_eq!(req.description, "");
        assert_eq!(failing_fields(&req), vec!["description", "name"]);
    }

    #[test]
    fn test_response_uses_camel_case() {
        let response = PostResponse {
            id: 7,
            name: "Post".to_string(),
            description: "Body".to_string(),
            image: None,
            created_at: Utc::now(),
        };
        let json = serde_json::to_value(&response).unwrap();
        assert!(json.get("createdAt").is_some());
        assert!(json["image"].is_null());
    }
}
