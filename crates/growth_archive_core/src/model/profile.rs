//! Child profile and class information.

use serde::{Deserialize, Serialize};

/// The child whose archive is being browsed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub name: String,
    /// Avatar image URL. Carried as-is, never fetched.
    pub avatar: String,
    pub class_name: String,
    #[serde(default)]
    pub birth_date: Option<String>,
    #[serde(default)]
    pub enroll_date: Option<String>,
}

/// Semester and class staffing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BasicInfo {
    pub semester: String,
    pub class_name: String,
    pub head_teacher: String,
    #[serde(default)]
    pub assistant_teacher: Option<String>,
}
