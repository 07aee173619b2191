//! 휴가 신청 관련 DTO

mod request;

pub use request::*;
