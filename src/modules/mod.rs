pub mod courses;

pub use self::courses::model::Course;
