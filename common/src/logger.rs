use std::fmt;
use std::sync::OnceLock;
use chrono::Local;

static LOGGER: OnceLock<Logger> = OnceLock::new();

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Info,
    Error,
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Level::Info => write!(f, "INFO"),
            Level::Error => write!(f, "ERROR"),
        }
    }
}

pub struct Logger {
    prefix: Option<String>,
}

impl Logger {
    fn new(prefix: Option<String>) -> Self {
        Self { prefix }
    }

    pub fn format_line(&self, level: Level, file: &str, line: u32, message: &str) -> String {
        let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S");
        let file_name = file.rsplit(['/', '\\']).next().unwrap_or(file);
        match self.prefix {
            Some(ref prefix) => format!(
                "[{}][{}][{}][{}:{}] {}",
                timestamp, level, prefix, file_name, line, message
            ),
            None => format!("[{}][{}][{}:{}] {}", timestamp, level, file_name, line, message),
        }
    }

    pub fn log(&self, level: Level, file: &str, line: u32, message: &str) {
        let formatted = self.format_line(level, file, line, message);
        match level {
            Level::Info => println!("{}", formatted),
            Level::Error => eprintln!("{}", formatted),
        }
    }
}

pub fn init_logger(prefix: Option<String>) {
    LOGGER.get_or_init(|| Logger::new(prefix));
}

pub fn log(level: Level, file: &str, line: u32, message: &str) {
    if let Some(logger) = LOGGER.get() {
        logger.log(level, file, line, message);
    } else {
        eprintln!("Logger not initialized! Call init_logger() first.");
    }
}

#[macro_export]
macro_rules! log {
    ($($arg:tt)*) => {
        $crate::logger::log($crate::logger::Level::Info, file!(), line!(), &format!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_error {
    ($($arg:tt)*) => {
        $crate::logger::log($crate::logger::Level::Error, file!(), line!(), &format!($($arg)*))
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_line_strips_directories() {
        let logger = Logger::new(None);

        let line = logger.format_line(Level::Info, "src/games/tictactoe/minimax.rs", 42, "hello");

        assert!(line.ends_with("[INFO][minimax.rs:42] hello"));
    }

    #[test]
    fn test_format_line_includes_prefix() {
        let logger = Logger::new(Some("Server".to_string()));

        let line = logger.format_line(Level::Error, "C:\\src\\main.rs", 7, "boom");

        assert!(line.ends_with("[ERROR][Server][main.rs:7] boom"));
    }
}
