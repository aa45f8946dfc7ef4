use serde::{Deserialize, Serialize};

use crate::courses::repo::Course;
use crate::users::repo::User;

/// Request body for user creation. Every field is optional at the wire
/// level so the validator can report all missing fields at once.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserRequest {
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub email_address: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
}

/// Public part of a user. The password hash has no field here.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub email_address: String,
}

impl From<User> for UserProfile {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            first_name: user.first_name,
            last_name: user.last_name,
            email_address: user.email_address,
        }
    }
}

/// A course as listed under its owner; the owner is not echoed back.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OwnedCourse {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub estimated_time: Option<String>,
    pub materials_needed: Option<String>,
}

impl From<Course> for OwnedCourse {
    fn from(course: Course) -> Self {
        Self {
            id: course.id,
            title: course.title,
            description: course.description,
            estimated_time: course.estimated_time,
            materials_needed: course.materials_needed,
        }
    }
}

/// Response for GET /api/users.
#[derive(Debug, Serialize)]
pub struct ProfileResponse {
    pub user: UserProfile,
    pub courses: Vec<OwnedCourse>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profile_serializes_camel_case_without_password() {
        let profile = UserProfile {
            id: 7,
            first_name: "Joe".into(),
            last_name: "Smith".into(),
            email_address: "joe@smith.com".into(),
        };

        let json = serde_json::to_value(&profile).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "id": 7,
                "firstName": "Joe",
                "lastName": "Smith",
                "emailAddress": "joe@smith.com",
            })
        );
        assert!(!json.to_string().to_lowercase().contains("password"));
    }

    #[test]
    fn create_request_tolerates_missing_fields() {
        let body: CreateUserRequest = serde_json::from_str("{}").unwrap();
        assert!(body.first_name.is_none());
        assert!(body.password.is_none());
    }

    #[test]
    fn create_request_ignores_unknown_fields() {
        let body: CreateUserRequest =
            serde_json::from_str(r#"{"firstName": "Joe", "id": 999}"#).unwrap();
        assert_eq!(body.first_name.as_deref(), Some("Joe"));
    }
}
