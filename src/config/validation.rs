use crate::error::AppError;
use std::path::Path;

/// Validates the configuration settings
///
/// # Arguments
/// * `api_host` - The upstream API host to validate
/// * `log_file_path` - Optional log file path to validate
///
/// # Returns
/// * `Ok(())` - Configuration is valid
/// * `Err(AppError)` - Configuration validation failed
///
/// # Validation Rules
/// - API host cannot be empty
/// - API host must be a valid URL or domain name
/// - The credential is deliberately NOT validated here; a missing key means
///   disabled mode, not a configuration error
/// - If log file path is provided, it cannot be empty
/// - Log file path parent directory must exist or be creatable
pub fn validate_config(api_host: &str, log_file_path: &Option<String>) -> Result<(), AppError> {
    // Validate API host
    if api_host.is_empty() {
        return Err(AppError::config_error("API host cannot be empty"));
    }

    // Check if API host looks like a valid URL or domain
    if !api_host.starts_with("http://") && !api_host.starts_with("https://") {
        // If it doesn't start with protocol, it should at least look like a domain
        if !api_host.contains('.') && !api_host.starts_with("localhost") {
            return Err(AppError::config_error(
                "API host must be a valid URL or domain name",
            ));
        }
    }

    // Validate log file path if provided
    if let Some(log_path) = log_file_path {
        if log_path.is_empty() {
            return Err(AppError::config_error("Log file path cannot be empty"));
        }

        // Check if parent directory exists or can be created
        if let Some(parent) = Path::new(log_path).parent()
            && !parent.exists()
        {
            // Try to create the directory to validate the path
            std::fs::create_dir_all(parent).map_err(|e| {
                AppError::config_error(format!(
                    "Cannot create log directory '{}': {}",
                    parent.display(),
                    e
                ))
            })?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_host_rejected() {
        assert!(validate_config("", &None).is_err());
    }

    #[test]
    fn test_host_without_scheme_needs_domain_shape() {
        assert!(validate_config("not-a-domain", &None).is_err());
        assert!(validate_config("cricbuzz-cricket.p.rapidapi.com", &None).is_ok());
        assert!(validate_config("localhost:8080", &None).is_ok());
    }

    #[test]
    fn test_host_with_scheme_accepted() {
        assert!(validate_config("https://cricbuzz-cricket.p.rapidapi.com", &None).is_ok());
        assert!(validate_config("http://127.0.0.1:9000", &None).is_ok());
    }

    #[test]
    fn test_empty_log_path_rejected() {
        assert!(validate_config("https://api.example.com", &Some(String::new())).is_err());
    }
}
