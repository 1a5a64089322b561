//! Configuration and argument validation logic.

use chrono::NaiveDateTime;
use regex::Regex;

use crate::config::loader::Config;
use crate::error::{Error, Result};

/// Accepted time formats, most specific first.
const DATETIME_FORMATS: [&str; 6] = [
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y%m%d%H%M%S",
    "%Y%m%d%H%M",
];

/// Validate the entire configuration.
pub fn validate_config(config: &Config) -> Result<()> {
    validate_account(config.account.mail.as_deref(), config.account.password.as_deref())?;

    if config.http.timeout_secs == 0 {
        return Err(Error::ConfigValidation {
            field: "http.timeout_secs".to_string(),
            message: "Timeout must be at least 1 second".to_string(),
        });
    }

    if let Some(key) = &config.auth.auth_key {
        if key.is_empty() {
            return Err(Error::ConfigValidation {
                field: "auth.auth_key".to_string(),
                message: "Key material must not be empty".to_string(),
            });
        }
    }

    Ok(())
}

/// Validate premium credentials: both or neither, with a plausible mail address.
pub fn validate_account(mail: Option<&str>, password: Option<&str>) -> Result<()> {
    match (mail, password) {
        (None, None) => Ok(()),
        (Some(_), None) => Err(Error::MissingConfig(
            "account.password (required when account.mail is set)".to_string(),
        )),
        (None, Some(_)) => Err(Error::MissingConfig(
            "account.mail (required when account.password is set)".to_string(),
        )),
        (Some(mail), Some(password)) => {
            let mail_pattern = Regex::new(r"^[^@\s]+@[^@\s]+$").unwrap();
            if !mail_pattern.is_match(mail) {
                return Err(Error::ConfigValidation {
                    field: "account.mail".to_string(),
                    message: format!("'{}' is not a mail address", mail),
                });
            }
            if password.is_empty() {
                return Err(Error::ConfigValidation {
                    field: "account.password".to_string(),
                    message: "Password must not be empty".to_string(),
                });
            }
            Ok(())
        }
    }
}

/// Validate a radiko station id such as `TBS` or `FMJ`.
pub fn validate_station_id(station_id: &str) -> Result<String> {
    let station_id = station_id.trim();
    let pattern = Regex::new(r"^[A-Za-z0-9_-]{2,32}$").unwrap();

    if !pattern.is_match(station_id) {
        return Err(Error::Validation(format!(
            "Invalid station id: '{}'. Use the id shown by radiko, e.g. TBS.",
            station_id
        )));
    }

    Ok(station_id.to_string())
}

/// Parse a local date-time such as `2025-12-22T10:00:00` or `202512221000`.
pub fn parse_datetime(input: &str) -> Result<NaiveDateTime> {
    let input = input.trim();

    DATETIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(input, format).ok())
        .ok_or_else(|| {
            Error::Validation(format!(
                "Invalid date-time: '{}'. Expected e.g. 2025-12-22T10:00:00 or 202512221000.",
                input
            ))
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_datetime_formats() {
        let expected =
            NaiveDateTime::parse_from_str("2025-12-22 10:05:00", "%Y-%m-%d %H:%M:%S").unwrap();
        for input in [
            "2025-12-22T10:05:00",
            "2025-12-22T10:05",
            "2025-12-22 10:05:00",
            "2025-12-22 10:05",
            "20251222100500",
            "202512221005",
            "  2025-12-22T10:05:00 ",
        ] {
            assert_eq!(parse_datetime(input).unwrap(), expected, "{}", input);
        }
    }

    #[test]
    fn test_parse_datetime_invalid() {
        assert!(parse_datetime("yesterday").is_err());
        assert!(parse_datetime("2025-13-01T00:00:00").is_err());
        assert!(parse_datetime("").is_err());
    }

    #[test]
    fn test_validate_station_id() {
        assert_eq!(validate_station_id(" TBS ").unwrap(), "TBS");
        assert_eq!(validate_station_id("JOAK-FM").unwrap(), "JOAK-FM");
        assert!(validate_station_id("").is_err());
        assert!(validate_station_id("T").is_err());
        assert!(validate_station_id("TBS&l=1").is_err());
    }

    #[test]
    fn test_validate_account() {
        assert!(validate_account(None, None).is_ok());
        assert!(validate_account(Some("a@b.jp"), Some("pw")).is_ok());
        assert!(validate_account(Some("a@b.jp"), None).is_err());
        assert!(validate_account(None, Some("pw")).is_err());
        assert!(validate_account(Some("not-a-mail"), Some("pw")).is_err());
        assert!(validate_account(Some("a@b.jp"), Some("")).is_err());
    }

    #[test]
    fn test_validate_config() {
        let mut config = Config::default();
        assert!(validate_config(&config).is_ok());

        config.http.timeout_secs = 0;
        assert!(matches!(
            validate_config(&config),
            Err(Error::ConfigValidation { .. })
        ));

        config.http.timeout_secs = 30;
        config.auth.auth_key = Some(String::new());
        assert!(validate_config(&config).is_err());
    }
}
