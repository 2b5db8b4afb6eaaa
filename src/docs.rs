use utoipa::OpenApi;

use crate::modules::courses::model::{
    Course, CourseStudent, CourseWithStats, CreateCourseDto, UpdateCourseDto,
};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::modules::courses::controller::create_course,
        crate::modules::courses::controller::get_courses,
        crate::modules::courses::controller::get_course_by_id,
        crate::modules::courses::controller::get_course_students,
        crate::modules::courses::controller::update_course,
        crate::modules::courses::controller::delete_course,
    ),
    components(
        schemas(
            Course,
            CourseWithStats,
            CourseStudent,
            CreateCourseDto,
            UpdateCourseDto,
        )
    ),
    tags(
        (name = "Courses", description = "Course directory: CRUD and enrollment views")
    ),
    info(
        title = "Acadex API",
        description = "Student records API: courses, disciplines, classes, and enrollments",
        version = "0.1.0"
    )
)]
pub struct ApiDoc;
