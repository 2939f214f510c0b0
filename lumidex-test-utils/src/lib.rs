pub mod constant;
pub mod context;
pub mod error;
pub mod fixtures;

pub use context::TestContext;
pub use error::TestError;

pub mod prelude {
    pub use crate::{fixtures::dex::factory, TestContext, TestError};
}
