//! 청구서 관련 DTO

mod request;

pub use request::*;
