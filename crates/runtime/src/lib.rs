mod config;
pub mod history;
pub mod logging;

pub use config::{
    BASE_DIR_ENV, DEFAULT_THRESHOLD_DAYS, DESTINATION_DIR_NAME, FROM_LOG_FILE_NAME, PROGRAM_NAME,
    SOURCE_DIR_NAME, SUCCESS_MESSAGE, TO_LOG_FILE_NAME, default_base_dir,
};
