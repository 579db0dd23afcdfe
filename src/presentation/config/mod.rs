mod environment;
mod settings;

pub use environment::Environment;
pub use settings::{
    DEFAULT_QUIZ_COUNT, GenerationSettings, LlmProvider, LlmSettings, LoggingSettings,
    ServerSettings, Settings,
};
