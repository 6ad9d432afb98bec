use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "degrees")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub degree_id: i32,
    pub title: String,
    pub level: String,
    pub degree_type: String, // serialized as "type" at the API boundary
    pub concentration: Option<String>,
    pub department: String,
    pub description: Option<String>,
    pub course_id: Option<String>, // representative course, if any
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::degree_course::Entity")]
    DegreeCourses,
}

impl Related<super::degree_course::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::DegreeCourses.def()
    }
}

// Many-to-many relationship with courses
impl Related<super::course::Entity> for Entity {
    fn to() -> RelationDef {
        super::degree_course::Relation::Course.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::degree_course::Relation::Degree.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
