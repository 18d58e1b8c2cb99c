// Copyright (C) 2020-2026 Andy Kurnia.

use super::error;
use flexi_logger::{Cleanup, Criterion, Duplicate, FileSpec, Logger, LoggerHandle, Naming, opt_format};

// Level comes from RUST_LOG, else `default_level`. Logs go to stderr, or to
// rotated files under `log_dir` (errors still echoed to stderr).
// Keep the handle alive for as long as logging is wanted.
pub fn init(default_level: &str, log_dir: Option<&str>) -> error::Returns<LoggerHandle> {
    let logger = Logger::try_with_env_or_str(default_level)?.format(opt_format);
    let logger = match log_dir {
        Some(dir) => logger
            .log_to_file(FileSpec::default().directory(dir))
            .rotate(
                Criterion::Size(10 * 1024 * 1024),
                Naming::Numbers,
                Cleanup::KeepLogFiles(3),
            )
            .duplicate_to_stderr(Duplicate::Error),
        None => logger.log_to_stderr(),
    };
    Ok(logger.start()?)
}
