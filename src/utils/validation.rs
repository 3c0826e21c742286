use crate::utils::error::{Result, StorekeeperError};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(StorekeeperError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(StorekeeperError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

/// A data file name must name a file, not a directory.
pub fn validate_file_name(field_name: &str, name: &str) -> Result<()> {
    validate_path(field_name, name)?;

    if name.trim().is_empty() || name.ends_with('/') || name.ends_with('\\') {
        return Err(StorekeeperError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: name.to_string(),
            reason: "Value must name a file".to_string(),
        });
    }

    Ok(())
}
