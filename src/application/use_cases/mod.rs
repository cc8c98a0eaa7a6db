mod submit_login_use_case;

pub use submit_login_use_case::SubmitLoginUseCase;
