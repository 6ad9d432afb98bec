use crate::entities::{course_requisites, courses};
use crate::services::contains_ci;
use sea_orm::{
    ColumnTrait, Condition, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder,
};

pub struct CourseService;

impl CourseService {
    /// Query courses, combining any supplied filters with logical AND.
    ///
    /// `id`, `title` and `prefix` are case-insensitive substring matches;
    /// `credits` and `degree_id` are exact. Results are ordered by course
    /// id so repeated queries are deterministic.
    pub async fn get_courses(
        db: &DatabaseConnection,
        id: Option<String>,
        title: Option<String>,
        prefix: Option<String>,
        credits: Option<i32>,
        degree_id: Option<i32>,
    ) -> Result<Vec<courses::Model>, DbErr> {
        let mut condition = Condition::all();

        if let Some(id) = id {
            condition = condition.add(contains_ci(courses::Column::CourseId, &id));
        }

        if let Some(title) = title {
            condition = condition.add(contains_ci(courses::Column::Title, &title));
        }

        if let Some(prefix) = prefix {
            condition = condition.add(contains_ci(courses::Column::Prefix, &prefix));
        }

        if let Some(credits) = credits {
            condition = condition.add(courses::Column::Credits.eq(credits));
        }

        if let Some(degree_id) = degree_id {
            condition = condition.add(courses::Column::DegreeId.eq(degree_id));
        }

        courses::Entity::find()
            .filter(condition)
            .order_by_asc(courses::Column::CourseId)
            .all(db)
            .await
    }

    /// Get a single course by its primary key
    pub async fn get_course_by_id(
        db: &DatabaseConnection,
        course_id: &str,
    ) -> Result<Option<courses::Model>, DbErr> {
        courses::Entity::find_by_id(course_id).one(db).await
    }

    /// Get all requisite rows for a course; empty when it has none
    pub async fn get_requisites(
        db: &DatabaseConnection,
        course_id: &str,
    ) -> Result<Vec<course_requisites::Model>, DbErr> {
        course_requisites::Entity::find()
            .filter(course_requisites::Column::CourseId.eq(course_id))
            .all(db)
            .await
    }

    /// Project the prerequisite course ids out of the requisite rows
    pub async fn get_prerequisites(
        db: &DatabaseConnection,
        course_id: &str,
    ) -> Result<Vec<String>, DbErr> {
        let requisites = Self::get_requisites(db, course_id).await?;

        Ok(requisites.into_iter().filter_map(|r| r.prereq_id).collect())
    }

    /// Project the corequisite course ids out of the requisite rows
    pub async fn get_corequisites(
        db: &DatabaseConnection,
        course_id: &str,
    ) -> Result<Vec<String>, DbErr> {
        let requisites = Self::get_requisites(db, course_id).await?;

        Ok(requisites.into_iter().filter_map(|r| r.coreq_id).collect())
    }
}
