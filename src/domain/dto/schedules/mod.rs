//! 근무 일정 관련 DTO

mod request;

pub use request::*;
