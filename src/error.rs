use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Failed to write pipeline output: {0}")]
    Output(#[from] std::io::Error),

    #[error("Invalid log filter '{directive}'")]
    LogFilter {
        directive: String,
        #[source]
        source: tracing_subscriber::filter::ParseError,
    },

    #[error("Failed to install log subscriber: {0}")]
    Subscriber(String),
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_output_error_from_io() {
        let error: Error = io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed").into();
        let display = format!("{}", error);
        assert!(display.contains("write pipeline output"));
        assert!(display.contains("pipe closed"));
    }

    #[test]
    fn test_subscriber_error_display() {
        let error = Error::Subscriber("already set".to_string());
        assert_eq!(error.to_string(), "Failed to install log subscriber: already set");
    }
}
