use axum::{Router, routing::get, routing::post};

use crate::state::AppState;

use super::controller::{
    create_course, delete_course, get_course_by_id, get_course_students, get_courses,
    update_course,
};

pub fn init_courses_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_course).get(get_courses))
        .route(
            "/{id}",
            get(get_course_by_id)
                .patch(update_course)
                .delete(delete_course),
        )
        .route("/{id}/students", get(get_course_students))
}
