//! Persisted entity models. Serialized field names follow the wire shape the
//! site frontend already speaks: `_id` plus camelCase keys.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Admin {
    #[serde(rename = "_id")]
    pub id: String,
    pub username: String,
    pub password: String,
    pub email: Option<String>,
    pub created_at: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Gallery {
    #[serde(rename = "_id")]
    pub id: String,
    pub image_url: String,
    pub category: String,
    /// Weak back-reference to the admin who uploaded the image. Lookup only;
    /// deleting the admin leaves this dangling.
    pub uploaded_by: Option<String>,
    pub created_at: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeroSlide {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub image_url: String,
    pub display_order: Option<i64>,
    pub created_at: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Faculty {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub department: Option<String>,
    pub position: Option<String>,
    pub image_url: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub created_at: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    #[serde(rename = "_id")]
    pub id: String,
    pub class_name: String,
    pub teacher_name: Option<String>,
    pub student_count: i64,
    pub created_at: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Admission {
    #[serde(rename = "_id")]
    pub id: String,
    pub student_name: String,
    pub parent_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub class: Option<String>,
    pub status: String,
    pub created_at: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub message: Option<String>,
    pub status: String,
    pub created_at: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notice {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    pub content: String,
    pub priority: String,
    pub image_url: Option<String>,
    /// Visibility flag, not deletion. Inactive notices stay in the store.
    pub is_active: bool,
    pub created_at: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub date: String,
    pub time: Option<String>,
    pub created_at: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub rating: i64,
    pub review: String,
    pub is_approved: bool,
    pub created_at: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gallery_serializes_to_frontend_wire_shape() {
        let record = Gallery {
            id: "abc".into(),
            image_url: "/uploads/1.png".into(),
            category: "All".into(),
            uploaded_by: None,
            created_at: "2026-01-01 00:00:00".into(),
        };

        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["_id"], "abc");
        assert_eq!(json["imageUrl"], "/uploads/1.png");
        assert_eq!(json["createdAt"], "2026-01-01 00:00:00");
        assert!(json.get("image_url").is_none());
    }

    #[test]
    fn notice_flags_use_camel_case() {
        let notice = Notice {
            id: "n1".into(),
            title: "Exams".into(),
            content: "Schedule attached".into(),
            priority: "Normal".into(),
            image_url: None,
            is_active: true,
            created_at: "2026-01-01 00:00:00".into(),
        };

        let json = serde_json::to_value(&notice).unwrap();
        assert_eq!(json["isActive"], true);
        assert_eq!(json["imageUrl"], serde_json::Value::Null);
    }
}
