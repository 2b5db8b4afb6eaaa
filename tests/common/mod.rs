#![allow(dead_code)]

use sqlx::PgPool;
use uuid::Uuid;

/// Generate a unique course name so tests can share a database.
pub fn unique_course_name() -> String {
    format!("Course {}", Uuid::new_v4())
}

pub fn unique_email() -> String {
    format!("student-{}@example.com", Uuid::new_v4())
}

pub async fn seed_course(pool: &PgPool, name: &str, description: Option<&str>) -> Uuid {
    sqlx::query_scalar::<_, Uuid>(
        "INSERT INTO courses (name, description) VALUES ($1, $2) RETURNING id",
    )
    .bind(name)
    .bind(description)
    .fetch_one(pool)
    .await
    .unwrap()
}

pub async fn seed_discipline(pool: &PgPool, course_id: Uuid, name: &str) -> Uuid {
    sqlx::query_scalar::<_, Uuid>(
        "INSERT INTO disciplines (name, course_id) VALUES ($1, $2) RETURNING id",
    )
    .bind(name)
    .bind(course_id)
    .fetch_one(pool)
    .await
    .unwrap()
}

pub async fn seed_class(pool: &PgPool, discipline_id: Uuid, code: &str) -> Uuid {
    sqlx::query_scalar::<_, Uuid>(
        "INSERT INTO classes (code, discipline_id) VALUES ($1, $2) RETURNING id",
    )
    .bind(code)
    .bind(discipline_id)
    .fetch_one(pool)
    .await
    .unwrap()
}

pub async fn seed_student(pool: &PgPool, name: &str, email: &str) -> Uuid {
    sqlx::query_scalar::<_, Uuid>("INSERT INTO students (name, email) VALUES ($1, $2) RETURNING id")
        .bind(name)
        .bind(email)
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn seed_enrollment(
    pool: &PgPool,
    student_id: Option<Uuid>,
    class_id: Option<Uuid>,
) -> Uuid {
    sqlx::query_scalar::<_, Uuid>(
        "INSERT INTO enrollments (student_id, class_id) VALUES ($1, $2) RETURNING id",
    )
    .bind(student_id)
    .bind(class_id)
    .fetch_one(pool)
    .await
    .unwrap()
}
