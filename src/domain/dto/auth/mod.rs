//! 인증 관련 DTO

mod request;

pub use request::*;
