pub mod course;
pub mod course_requisite;
pub mod degree;
pub mod degree_course;

pub use self::course as courses;
pub use self::course_requisite as course_requisites;
pub use self::degree as degrees;
pub use self::degree_course as degree_courses;
