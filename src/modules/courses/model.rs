use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Course {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A course extended with counts over its owned subtree and enrollments.
#[derive(Debug, Serialize, ToSchema)]
pub struct CourseWithStats {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub students_count: i64,
    pub disciplines_count: i64,
    pub classes_count: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// One distinct student of a course, annotated with the first enrollment
/// seen for them and, when known, the class it points at.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct CourseStudent {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    /// Id of the first enrollment encountered for this student.
    pub enrollment: Uuid,
    pub status: String,
    pub class_id: Option<Uuid>,
    pub class_code: Option<String>,
}

/// Raw enrollment row joined with its student and class, as returned by the
/// students-of-course query. Student columns are nullable because the
/// enrollment's student reference may be missing.
#[derive(Debug, FromRow)]
pub struct CourseStudentRow {
    pub enrollment_id: Uuid,
    pub student_id: Option<Uuid>,
    pub student_name: Option<String>,
    pub student_email: Option<String>,
    pub class_id: Option<Uuid>,
    pub class_code: Option<String>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateCourseDto {
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    pub description: Option<String>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateCourseDto {
    #[validate(length(min = 1, max = 100))]
    pub name: Option<String>,
    pub description: Option<String>,
}
