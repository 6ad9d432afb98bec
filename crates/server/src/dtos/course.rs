use database::entities::{course_requisites, courses};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Serialize, ToSchema)]
pub struct CourseResponse {
    pub course_id: String,
    pub prefix: String,
    pub course: i32,
    pub credits: i32,
    pub title: String,
    pub description: Option<String>,
    pub prereq_notes: Option<String>,
    pub coreq_notes: Option<String>,
    pub prereq_id: Option<String>,
    pub coreq_id: Option<String>,
    pub degree_id: Option<i32>,
}

impl From<courses::Model> for CourseResponse {
    fn from(course: courses::Model) -> Self {
        Self {
            course_id: course.course_id,
            prefix: course.prefix,
            course: course.course,
            credits: course.credits,
            title: course.title,
            description: course.description,
            prereq_notes: course.prereq_notes,
            coreq_notes: course.coreq_notes,
            prereq_id: course.prereq_id,
            coreq_id: course.coreq_id,
            degree_id: course.degree_id,
        }
    }
}

/// One requisite edge of a course; either slot may be null.
#[derive(Debug, Serialize, ToSchema)]
pub struct CourseRequisitesResponse {
    pub course_id: String,
    pub prereq_id: Option<String>,
    pub coreq_id: Option<String>,
}

impl From<course_requisites::Model> for CourseRequisitesResponse {
    fn from(requisite: course_requisites::Model) -> Self {
        Self {
            course_id: requisite.course_id,
            prereq_id: requisite.prereq_id,
            coreq_id: requisite.coreq_id,
        }
    }
}

#[derive(Debug, Deserialize, ToSchema, IntoParams)]
pub struct CourseQueryParams {
    pub id: Option<String>,
    pub title: Option<String>,
    pub prefix: Option<String>,
    pub credits: Option<i32>,
    pub degree_id: Option<i32>,
}
