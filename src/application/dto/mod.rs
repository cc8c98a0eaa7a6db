mod submit_dto;

pub use submit_dto::{SubmitRequest, SubmitResponse};
