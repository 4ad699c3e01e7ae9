use log::LevelFilter;
use log4rs::{
    Config,
    append::{
        console::{ConsoleAppender, Target},
        rolling_file::{
            RollingFileAppender,
            policy::compound::{
                CompoundPolicy, roll::fixed_window::FixedWindowRoller, trigger::size::SizeTrigger,
            },
        },
    },
    config::{Appender, Root},
    encode::pattern::PatternEncoder,
    filter::threshold::ThresholdFilter,
};
use thiserror::Error;

const LOG_SIZE_LIMIT: u64 = 10 * 1024 * 1024; // 10 MB

const LOG_FILE_COUNT: u32 = 3;

#[derive(Debug, Error)]
pub enum LogInitError {
    #[error("failed to set up log file: {0}")]
    File(String),

    #[error("invalid logger configuration: {0}")]
    Config(String),

    #[error(transparent)]
    SetLogger(#[from] log::SetLoggerError),
}

/// Logs INFO and above to stderr. When `LOG_FILE_PATH` and
/// `LOG_ARCHIVE_PATTERN` are both set, DEBUG and above also go to a
/// size-rolled file.
pub fn init_logger() -> Result<(), LogInitError> {
    let stderr_level = LevelFilter::Info;
    let file_level = LevelFilter::Debug;

    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new("{d} {l} {t} - {m}{n}")))
        .build();

    let mut config = Config::builder().appender(
        Appender::builder()
            .filter(Box::new(ThresholdFilter::new(stderr_level)))
            .build("stderr", Box::new(stderr)),
    );
    let mut root = Root::builder().appender("stderr");

    let file_path = std::env::var("LOG_FILE_PATH").ok();
    let archive_pattern = std::env::var("LOG_ARCHIVE_PATTERN").ok();
    if let (Some(file_path), Some(archive_pattern)) = (file_path, archive_pattern) {
        let trigger = SizeTrigger::new(LOG_SIZE_LIMIT);
        let roller = FixedWindowRoller::builder()
            .build(&archive_pattern, LOG_FILE_COUNT)
            .map_err(|e| LogInitError::File(e.to_string()))?;
        let policy = CompoundPolicy::new(Box::new(trigger), Box::new(roller));

        let logfile = RollingFileAppender::builder()
            .encoder(Box::new(PatternEncoder::new("{d} {l} {t} - {m}{n}")))
            .build(file_path, Box::new(policy))
            .map_err(|e| LogInitError::File(e.to_string()))?;

        config = config.appender(
            Appender::builder()
                .filter(Box::new(ThresholdFilter::new(file_level)))
                .build("logfile", Box::new(logfile)),
        );
        root = root.appender("logfile");
    }

    let config = config
        .build(root.build(LevelFilter::Debug))
        .map_err(|e| LogInitError::Config(e.to_string()))?;

    let _handle = log4rs::init_config(config)?;
    Ok(())
}
