use thiserror::Error;

#[derive(Error, Debug)]
pub enum TestError {
    #[error(transparent)]
    ApiError(#[from] lumidex_api::Error),
}
