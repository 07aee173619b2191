//! 첨부 파일 관련 DTO

mod request;

pub use request::*;
