use fern::Dispatch;

use crate::modules::helpers::config::Config;

pub fn setup_logging(config: &Config) -> Result<(), fern::InitError> {
    let base_config = Dispatch::new()
        .level(config.logging_level)
        .format(|out, message, record| {
            out.finish(format_args!(
                "{} [{}][{}] {}",
                chrono::Local::now().format("[%Y-%m-%d][%H:%M:%S]"),
                record.target(),
                record.level(),
                message
            ))
        });

    let file_logger_config = Dispatch::new().chain(fern::log_file(&config.log_file)?);

    base_config
        .chain(std::io::stderr())
        .chain(file_logger_config)
        .apply()?;

    Ok(())
}
