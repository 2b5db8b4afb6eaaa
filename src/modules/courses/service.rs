use std::collections::HashMap;
use std::collections::hash_map::Entry;

use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use crate::modules::courses::model::{
    Course, CourseStudent, CourseStudentRow, CourseWithStats, CreateCourseDto, UpdateCourseDto,
};
use crate::utils::errors::AppError;

pub struct CourseService;

impl CourseService {
    /// Create a new course. Course names are a business key: creation is
    /// rejected with a conflict when the name is already taken.
    #[instrument(skip(db))]
    pub async fn create_course(db: &PgPool, dto: CreateCourseDto) -> Result<Course, AppError> {
        let existing = sqlx::query_scalar::<_, Uuid>("SELECT id FROM courses WHERE name = $1")
            .bind(&dto.name)
            .fetch_optional(db)
            .await?;

        if existing.is_some() {
            return Err(AppError::conflict(anyhow::anyhow!(
                "A course named '{}' already exists",
                dto.name
            )));
        }

        let course = sqlx::query_as::<_, Course>(
            r#"INSERT INTO courses (name, description)
               VALUES ($1, $2)
               RETURNING id, name, description, created_at, updated_at"#,
        )
        .bind(&dto.name)
        .bind(&dto.description)
        .fetch_one(db)
        .await?;

        Ok(course)
    }

    #[instrument(skip(db))]
    pub async fn get_courses(db: &PgPool) -> Result<Vec<Course>, AppError> {
        let courses = sqlx::query_as::<_, Course>(
            "SELECT id, name, description, created_at, updated_at FROM courses",
        )
        .fetch_all(db)
        .await?;

        Ok(courses)
    }

    /// Fetch a course together with its aggregate counts: distinct enrolled
    /// students, owned disciplines, and classes across those disciplines.
    #[instrument(skip(db))]
    pub async fn get_course_by_id(
        db: &PgPool,
        course_id: Uuid,
    ) -> Result<CourseWithStats, AppError> {
        let course = sqlx::query_as::<_, Course>(
            "SELECT id, name, description, created_at, updated_at FROM courses WHERE id = $1",
        )
        .bind(course_id)
        .fetch_optional(db)
        .await?
        .ok_or_else(|| {
            AppError::not_found(anyhow::anyhow!("Course with id '{}' not found", course_id))
        })?;

        let students = Self::find_students_by_course_id(db, course_id).await?;

        let disciplines_count =
            sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM disciplines WHERE course_id = $1")
                .bind(course_id)
                .fetch_one(db)
                .await?;

        let classes_count = sqlx::query_scalar::<_, i64>(
            r#"SELECT COUNT(*)
               FROM classes c
               JOIN disciplines d ON d.id = c.discipline_id
               WHERE d.course_id = $1"#,
        )
        .bind(course_id)
        .fetch_one(db)
        .await?;

        Ok(CourseWithStats {
            id: course.id,
            name: course.name,
            description: course.description,
            students_count: students.len() as i64,
            disciplines_count,
            classes_count,
            created_at: course.created_at,
            updated_at: course.updated_at,
        })
    }

    /// Resolve the distinct students of a course through the
    /// `Enrollment → Class → Discipline → Course` chain.
    ///
    /// Each student appears once, in first-seen order, annotated with the id
    /// of the first enrollment encountered for them. See [`collect_students`]
    /// for the dedup rules.
    #[instrument(skip(db))]
    pub async fn find_students_by_course_id(
        db: &PgPool,
        course_id: Uuid,
    ) -> Result<Vec<CourseStudent>, AppError> {
        let exists =
            sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM courses WHERE id = $1)")
                .bind(course_id)
                .fetch_one(db)
                .await?;

        if !exists {
            return Err(AppError::not_found(anyhow::anyhow!(
                "Course with id '{}' not found",
                course_id
            )));
        }

        // No ORDER BY: result order is whatever the store returns, and the
        // fold below keeps first-seen order among students.
        let rows = sqlx::query_as::<_, CourseStudentRow>(
            r#"SELECT
                e.id AS enrollment_id,
                s.id AS student_id,
                s.name AS student_name,
                s.email AS student_email,
                c.id AS class_id,
                c.code AS class_code
               FROM enrollments e
               JOIN classes c ON c.id = e.class_id
               JOIN disciplines d ON d.id = c.discipline_id
               LEFT JOIN students s ON s.id = e.student_id
               WHERE d.course_id = $1"#,
        )
        .bind(course_id)
        .fetch_all(db)
        .await?;

        Ok(collect_students(rows))
    }

    /// Partially update a course: load the existing row, overlay only the
    /// fields present in the DTO, persist the merged result.
    #[instrument(skip(db))]
    pub async fn update_course(
        db: &PgPool,
        course_id: Uuid,
        dto: UpdateCourseDto,
    ) -> Result<Course, AppError> {
        let existing = sqlx::query_as::<_, Course>(
            "SELECT id, name, description, created_at, updated_at FROM courses WHERE id = $1",
        )
        .bind(course_id)
        .fetch_optional(db)
        .await?
        .ok_or_else(|| {
            AppError::not_found(anyhow::anyhow!("Course with id '{}' not found", course_id))
        })?;

        let name = dto.name.unwrap_or(existing.name);
        let description = if dto.description.is_some() {
            dto.description
        } else {
            existing.description
        };

        // Renaming onto a taken name is not pre-checked here; the unique
        // constraint surfaces it as a storage error instead of a 409.
        // Whether update should mirror create's conflict check is an open
        // product question.
        let course = sqlx::query_as::<_, Course>(
            r#"UPDATE courses
               SET name = $1, description = $2, updated_at = NOW()
               WHERE id = $3
               RETURNING id, name, description, created_at, updated_at"#,
        )
        .bind(&name)
        .bind(&description)
        .bind(course_id)
        .fetch_one(db)
        .await?;

        Ok(course)
    }

    /// Delete a course. Disciplines and classes under it go with it via the
    /// schema's cascade rules.
    #[instrument(skip(db))]
    pub async fn delete_course(db: &PgPool, course_id: Uuid) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM courses WHERE id = $1")
            .bind(course_id)
            .execute(db)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(anyhow::anyhow!(
                "Course with id '{}' not found",
                course_id
            )));
        }

        Ok(())
    }
}

/// Fold joined enrollment rows into one record per distinct student.
///
/// Rules:
/// - rows without a student are skipped
/// - the first row seen for a student fixes `enrollment` (later rows never
///   overwrite it) and result position
/// - a later row only patches `class_id`/`class_code` into a record that has
///   no class yet
pub(crate) fn collect_students(rows: Vec<CourseStudentRow>) -> Vec<CourseStudent> {
    let mut order: Vec<Uuid> = Vec::new();
    let mut by_student: HashMap<Uuid, CourseStudent> = HashMap::new();

    for row in rows {
        let (Some(student_id), Some(name), Some(email)) =
            (row.student_id, row.student_name, row.student_email)
        else {
            continue;
        };

        match by_student.entry(student_id) {
            Entry::Vacant(slot) => {
                order.push(student_id);
                slot.insert(CourseStudent {
                    id: student_id,
                    name,
                    email,
                    enrollment: row.enrollment_id,
                    status: "active".to_string(),
                    class_id: row.class_id,
                    class_code: row.class_code,
                });
            }
            Entry::Occupied(mut slot) => {
                let known = slot.get_mut();
                if known.class_id.is_none() && row.class_id.is_some() {
                    known.class_id = row.class_id;
                    known.class_code = row.class_code;
                }
            }
        }
    }

    order
        .into_iter()
        .filter_map(|id| by_student.remove(&id))
        .collect()
}
