use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    #[error("no source sequence was supplied")]
    MissingSource,
    #[error("a key selector is required for keyed ordering")]
    MissingKeySelector,
    #[error("environment variable {var} has unexpected value '{value}'")]
    InvalidConfig { var: &'static str, value: String },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_source_message() {
        assert_eq!(
            Error::MissingSource.to_string(),
            "no source sequence was supplied"
        );
    }

    #[test]
    fn invalid_config_names_variable_and_value() {
        let err = Error::InvalidConfig {
            var: "PRIORITY_SORT_INSERTION_THRESHOLD",
            value: "ten".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("PRIORITY_SORT_INSERTION_THRESHOLD"));
        assert!(msg.contains("'ten'"));
    }
}
