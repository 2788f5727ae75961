//! Settings for the generator.
//!
//! Settings control the comment prefix, directive tags, README heading
//! pattern and modifier tokens. They are loaded once and then passed
//! explicitly to every stage of the pipeline.
//!
//! # Precedence
//!
//! 1. Environment variables (`CHARTDOC_*`)
//! 2. Settings file (`config.json` next to the executable unless given)
//! 3. Built-in defaults
//!
//! # Examples
//!
//! ```
//! use chartdoc::config::{Settings, SettingsBuilder};
//!
//! let mut custom = Settings::default();
//! custom.comments.format = "#".to_string();
//!
//! let settings = SettingsBuilder::new()
//!     .with_settings(custom)
//!     .skip_env()
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(settings.comments.format, "#");
//! ```

pub mod builder;
pub mod environment;
pub mod loader;
pub mod schema;
pub mod validator;

pub use builder::SettingsBuilder;
pub use environment::{EnvironmentSettings, COMMENT_FORMAT_ENV, PARAMS_SECTION_TITLE_ENV};
pub use loader::{SettingsFormat, SettingsLoader, DEFAULT_SETTINGS_FILE};
pub use schema::{
    CommentSettings, ModifierSettings, RegexpSettings, Settings, TagSettings,
    DEFAULT_COMMENT_FORMAT, DEFAULT_PARAMS_SECTION_TITLE,
};
pub use validator::SettingsValidator;
