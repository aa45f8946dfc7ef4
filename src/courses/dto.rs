use serde::{Deserialize, Serialize};

use crate::courses::repo::{CourseInput, CourseWithOwner};

/// Request body for course create and update. Unknown fields (including a
/// client-supplied owner) are dropped at deserialization.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseBody {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub estimated_time: Option<String>,
    #[serde(default)]
    pub materials_needed: Option<String>,
}

impl From<CourseBody> for CourseInput {
    fn from(body: CourseBody) -> Self {
        Self {
            title: body.title,
            description: body.description,
            estimated_time: body.estimated_time,
            materials_needed: body.materials_needed,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseOwner {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub email_address: String,
}

/// A course with its owner's public fields, as returned by the read
/// endpoints.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseDetails {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub estimated_time: Option<String>,
    pub materials_needed: Option<String>,
    pub user: CourseOwner,
}

impl From<CourseWithOwner> for CourseDetails {
    fn from(row: CourseWithOwner) -> Self {
        Self {
            id: row.id,
            title: row.title,
            description: row.description,
            estimated_time: row.estimated_time,
            materials_needed: row.materials_needed,
            user: CourseOwner {
                id: row.user_id,
                first_name: row.first_name,
                last_name: row.last_name,
                email_address: row.email_address,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn details_serialize_with_nested_owner() {
        let details = CourseDetails::from(CourseWithOwner {
            id: 3,
            title: "Learn How to Program".into(),
            description: "Fundamentals of programming".into(),
            estimated_time: Some("12 hours".into()),
            materials_needed: None,
            user_id: 1,
            first_name: "Joe".into(),
            last_name: "Smith".into(),
            email_address: "joe@smith.com".into(),
        });

        let json = serde_json::to_value(&details).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "id": 3,
                "title": "Learn How to Program",
                "description": "Fundamentals of programming",
                "estimatedTime": "12 hours",
                "materialsNeeded": null,
                "user": {
                    "id": 1,
                    "firstName": "Joe",
                    "lastName": "Smith",
                    "emailAddress": "joe@smith.com",
                },
            })
        );
        assert!(!json.to_string().to_lowercase().contains("password"));
    }

    #[test]
    fn body_ignores_client_supplied_ownership() {
        let body: CourseBody = serde_json::from_str(
            r#"{"title": "T", "description": "D", "userId": 42, "id": 9}"#,
        )
        .unwrap();
        assert_eq!(body.title.as_deref(), Some("T"));
        assert_eq!(body.description.as_deref(), Some("D"));
    }

    #[test]
    fn body_tolerates_missing_fields() {
        let body: CourseBody = serde_json::from_str("{}").unwrap();
        assert!(body.title.is_none());
        assert!(body.estimated_time.is_none());
    }
}
