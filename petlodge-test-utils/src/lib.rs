pub mod constant;
pub mod error;
pub mod fixtures;
pub mod setup;

pub use error::TestError;
pub use setup::{TestAppState, TestSetup};

pub mod prelude {
    pub use crate::{
        constant::{TEST_EMAIL, TEST_PASSWORD},
        test_setup_with_app_tables, test_setup_with_tables, TestError, TestSetup,
    };
}
