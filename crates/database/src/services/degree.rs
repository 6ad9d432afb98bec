use crate::entities::{courses, degree_courses, degrees};
use crate::services::contains_ci;
use sea_orm::{
    ColumnTrait, Condition, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder,
};

pub struct DegreeService;

impl DegreeService {
    /// Query degrees, combining any supplied filters with logical AND.
    /// All filters are case-insensitive substring matches.
    pub async fn get_degrees(
        db: &DatabaseConnection,
        department: Option<String>,
        level: Option<String>,
        degree_type: Option<String>,
    ) -> Result<Vec<degrees::Model>, DbErr> {
        let mut condition = Condition::all();

        if let Some(department) = department {
            condition = condition.add(contains_ci(degrees::Column::Department, &department));
        }

        if let Some(level) = level {
            condition = condition.add(contains_ci(degrees::Column::Level, &level));
        }

        if let Some(degree_type) = degree_type {
            condition = condition.add(contains_ci(degrees::Column::DegreeType, &degree_type));
        }

        degrees::Entity::find()
            .filter(condition)
            .order_by_asc(degrees::Column::DegreeId)
            .all(db)
            .await
    }

    /// Search degrees across five fields with the same conjunctive,
    /// case-insensitive substring semantics as [`Self::get_degrees`].
    pub async fn search_degrees(
        db: &DatabaseConnection,
        degree_type: Option<String>,
        title: Option<String>,
        department: Option<String>,
        level: Option<String>,
        concentration: Option<String>,
    ) -> Result<Vec<degrees::Model>, DbErr> {
        let mut condition = Condition::all();

        if let Some(degree_type) = degree_type {
            condition = condition.add(contains_ci(degrees::Column::DegreeType, &degree_type));
        }

        if let Some(title) = title {
            condition = condition.add(contains_ci(degrees::Column::Title, &title));
        }

        if let Some(department) = department {
            condition = condition.add(contains_ci(degrees::Column::Department, &department));
        }

        if let Some(level) = level {
            condition = condition.add(contains_ci(degrees::Column::Level, &level));
        }

        if let Some(concentration) = concentration {
            condition = condition.add(contains_ci(degrees::Column::Concentration, &concentration));
        }

        degrees::Entity::find()
            .filter(condition)
            .order_by_asc(degrees::Column::DegreeId)
            .all(db)
            .await
    }

    /// Get a single degree by its primary key
    pub async fn get_degree_by_id(
        db: &DatabaseConnection,
        degree_id: i32,
    ) -> Result<Option<degrees::Model>, DbErr> {
        degrees::Entity::find_by_id(degree_id).one(db).await
    }

    /// Get the member courses of a degree.
    ///
    /// Two-step join in application code: fetch the association rows for
    /// the degree, project the course ids, then fetch the matching courses.
    pub async fn get_courses_for_degree(
        db: &DatabaseConnection,
        degree_id: i32,
    ) -> Result<Vec<courses::Model>, DbErr> {
        let links = degree_courses::Entity::find()
            .filter(degree_courses::Column::DegreeId.eq(degree_id))
            .all(db)
            .await?;

        let course_ids: Vec<String> = links.into_iter().map(|link| link.course_id).collect();

        if course_ids.is_empty() {
            return Ok(vec![]);
        }

        courses::Entity::find()
            .filter(courses::Column::CourseId.is_in(course_ids))
            .order_by_asc(courses::Column::CourseId)
            .all(db)
            .await
    }

    /// Get the degrees a course belongs to; symmetric to
    /// [`Self::get_courses_for_degree`].
    pub async fn get_degrees_for_course(
        db: &DatabaseConnection,
        course_id: &str,
    ) -> Result<Vec<degrees::Model>, DbErr> {
        let links = degree_courses::Entity::find()
            .filter(degree_courses::Column::CourseId.eq(course_id))
            .all(db)
            .await?;

        let degree_ids: Vec<i32> = links.into_iter().map(|link| link.degree_id).collect();

        if degree_ids.is_empty() {
            return Ok(vec![]);
        }

        degrees::Entity::find()
            .filter(degrees::Column::DegreeId.is_in(degree_ids))
            .order_by_asc(degrees::Column::DegreeId)
            .all(db)
            .await
    }
}
