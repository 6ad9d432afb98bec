use database::entities::degrees;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Serialize, ToSchema)]
pub struct DegreeResponse {
    pub degree_id: i32,
    pub title: String,
    pub level: String,
    #[serde(rename = "type")]
    pub degree_type: String,
    pub concentration: Option<String>,
    pub department: String,
    pub description: Option<String>,
    pub course_id: Option<String>,
}

impl From<degrees::Model> for DegreeResponse {
    fn from(degree: degrees::Model) -> Self {
        Self {
            degree_id: degree.degree_id,
            title: degree.title,
            level: degree.level,
            degree_type: degree.degree_type,
            concentration: degree.concentration,
            department: degree.department,
            description: degree.description,
            course_id: degree.course_id,
        }
    }
}

#[derive(Debug, Deserialize, ToSchema, IntoParams)]
pub struct DegreeQueryParams {
    pub department: Option<String>,
    pub level: Option<String>,
    #[serde(rename = "type")]
    pub degree_type: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema, IntoParams)]
pub struct DegreeSearchParams {
    #[serde(rename = "type")]
    pub degree_type: Option<String>,
    pub title: Option<String>,
    pub department: Option<String>,
    pub level: Option<String>,
    pub concentration: Option<String>,
}
