use database::entities::{course_requisites, courses, degree_courses, degrees};
use sea_orm::ActiveValue::Set;
use sea_orm::{
    ConnectOptions, ConnectionTrait, Database, DatabaseConnection, DbBackend, EntityTrait, Schema,
};
use uuid::Uuid;

/// In-memory SQLite database with the schema derived from the entities.
/// A single pooled connection keeps every statement on the same database.
pub async fn setup() -> DatabaseConnection {
    let mut opts = ConnectOptions::new("sqlite::memory:");
    opts.max_connections(1);

    let db = Database::connect(opts).await.expect("sqlite connect");

    let schema = Schema::new(DbBackend::Sqlite);
    for stmt in [
        schema.create_table_from_entity(courses::Entity),
        schema.create_table_from_entity(course_requisites::Entity),
        schema.create_table_from_entity(degrees::Entity),
        schema.create_table_from_entity(degree_courses::Entity),
    ] {
        db.execute(db.get_database_backend().build(&stmt))
            .await
            .expect("create table");
    }

    db
}

pub async fn insert_course(
    db: &DatabaseConnection,
    course_id: &str,
    prefix: &str,
    number: i32,
    credits: i32,
    title: &str,
) {
    courses::Entity::insert(courses::ActiveModel {
        course_id: Set(course_id.to_owned()),
        prefix: Set(prefix.to_owned()),
        course: Set(number),
        credits: Set(credits),
        title: Set(title.to_owned()),
        ..Default::default()
    })
    .exec(db)
    .await
    .expect("insert course");
}

pub async fn insert_degree(
    db: &DatabaseConnection,
    degree_id: i32,
    title: &str,
    level: &str,
    degree_type: &str,
    department: &str,
) {
    degrees::Entity::insert(degrees::ActiveModel {
        degree_id: Set(degree_id),
        title: Set(title.to_owned()),
        level: Set(level.to_owned()),
        degree_type: Set(degree_type.to_owned()),
        department: Set(department.to_owned()),
        ..Default::default()
    })
    .exec(db)
    .await
    .expect("insert degree");
}

pub async fn insert_degree_course(db: &DatabaseConnection, degree_id: i32, course_id: &str) {
    degree_courses::Entity::insert(degree_courses::ActiveModel {
        degree_id: Set(degree_id),
        course_id: Set(course_id.to_owned()),
    })
    .exec(db)
    .await
    .expect("insert degree course");
}

pub async fn insert_requisite(
    db: &DatabaseConnection,
    course_id: &str,
    prereq_id: Option<&str>,
    coreq_id: Option<&str>,
) {
    course_requisites::Entity::insert(course_requisites::ActiveModel {
        id: Set(Uuid::new_v4()),
        course_id: Set(course_id.to_owned()),
        prereq_id: Set(prereq_id.map(str::to_owned)),
        coreq_id: Set(coreq_id.map(str::to_owned)),
    })
    .exec(db)
    .await
    .expect("insert requisite");
}
