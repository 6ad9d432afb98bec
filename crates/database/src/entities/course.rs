use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "courses")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub course_id: String,
    pub prefix: String,
    pub course: i32, // catalog number
    pub credits: i32,
    pub title: String,
    pub description: Option<String>,
    pub prereq_notes: Option<String>,
    pub coreq_notes: Option<String>,
    // Requisite references are plain course ids resolved by explicit
    // lookup, never an in-memory object graph.
    pub prereq_id: Option<String>,
    pub coreq_id: Option<String>,
    pub degree_id: Option<i32>, // owning degree, if any
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::course_requisite::Entity")]
    CourseRequisites,
    #[sea_orm(has_many = "super::degree_course::Entity")]
    DegreeCourses,
}

impl Related<super::course_requisite::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CourseRequisites.def()
    }
}

impl Related<super::degree_course::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::DegreeCourses.def()
    }
}

// Many-to-many relationship with degrees
impl Related<super::degree::Entity> for Entity {
    fn to() -> RelationDef {
        super::degree_course::Relation::Degree.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::degree_course::Relation::Course.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
