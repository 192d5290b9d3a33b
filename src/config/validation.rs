use crate::config::request::OperationRequest;
use crate::config::schema::{GlobalConfig, Settings};
use crate::core::error::{Result, VenvPipError};

pub fn validate_env_dir_name(name: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(VenvPipError::Config(
            "venv.dir_name cannot be empty".to_string(),
        ));
    }

    if name.chars().any(|c| c == '/' || c == '\\') {
        return Err(VenvPipError::Config(
            "venv.dir_name must be a directory name (no path separators)".to_string(),
        ));
    }

    if name == "." || name == ".." {
        return Err(VenvPipError::Config(format!(
            "venv.dir_name cannot be '{}'",
            name
        )));
    }

    Ok(())
}

fn validate_interpreter(interpreter: &str) -> Result<()> {
    if interpreter.trim().is_empty() {
        return Err(VenvPipError::Config(
            "python.interpreter cannot be empty".to_string(),
        ));
    }
    Ok(())
}

pub fn validate_global_config(config: &GlobalConfig) -> Result<()> {
    validate_env_dir_name(&config.venv.dir_name)?;

    if let Some(interpreter) = config.python.interpreter.as_deref() {
        validate_interpreter(interpreter)?;
    }

    Ok(())
}

// The interpreter can also arrive from --python or VENV_PIP_PYTHON, which bypass the file checks.
pub fn validate_settings(settings: &Settings) -> Result<()> {
    validate_interpreter(&settings.interpreter)?;
    validate_env_dir_name(&settings.env_dir_name)
}

pub fn validate_request(request: &OperationRequest) -> Result<()> {
    if request.verb.trim().is_empty() {
        return Err(VenvPipError::InvalidRequest(
            "pip command cannot be empty".to_string(),
        ));
    }

    if request.verb.starts_with('-') {
        return Err(VenvPipError::InvalidRequest(format!(
            "pip command '{}' looks like an option; pass options as parameters",
            request.verb
        )));
    }

    if request.packages.iter().any(|p| p.trim().is_empty()) {
        return Err(VenvPipError::InvalidRequest(
            "package names cannot contain empty entries".to_string(),
        ));
    }

    if request.params.iter().any(|p| p.trim().is_empty()) {
        return Err(VenvPipError::InvalidRequest(
            "pip parameters cannot contain empty entries".to_string(),
        ));
    }

    if request.target.as_os_str().is_empty() {
        return Err(VenvPipError::InvalidRequest(
            "repository path cannot be empty".to_string(),
        ));
    }

    Ok(())
}
