use bundlegen::canonicalize_tag;
use std::path::Path;

/// Validation context for the `gen` and `check` commands
pub struct ValidationContext {
    pub bundle_dir: Option<String>,
    pub output_dir: Option<String>,
    pub language_code: Option<String>,
}

impl Default for ValidationContext {
    fn default() -> Self {
        Self::new()
    }
}

impl ValidationContext {
    pub fn new() -> Self {
        Self {
            bundle_dir: None,
            output_dir: None,
            language_code: None,
        }
    }

    pub fn with_bundle_dir(mut self, dir: String) -> Self {
        self.bundle_dir = Some(dir);
        self
    }

    pub fn with_output_dir(mut self, dir: String) -> Self {
        self.output_dir = Some(dir);
        self
    }

    pub fn with_language_code(mut self, lang: String) -> Self {
        self.language_code = Some(lang);
        self
    }
}

/// Validate bundle directory exists and is a directory
pub fn validate_bundle_dir(path: &str) -> Result<(), String> {
    let path_obj = Path::new(path);

    if !path_obj.exists() {
        return Err(format!("Bundle directory does not exist: {}", path));
    }

    if !path_obj.is_dir() {
        return Err(format!("Bundle path is not a directory: {}", path));
    }

    Ok(())
}

/// Validate output path is a directory if it already exists
///
/// The directory itself is created only once the bundle has been validated.
pub fn validate_output_dir(path: &str) -> Result<(), String> {
    let path_obj = Path::new(path);

    if path_obj.exists() && !path_obj.is_dir() {
        return Err(format!("Output path is not a directory: {}", path));
    }

    Ok(())
}

/// Validate language code format, using the same canonicalization as the engine
pub fn validate_language_code(lang: &str) -> Result<(), String> {
    if lang.trim().is_empty() {
        return Err("Language code cannot be empty".to_string());
    }

    match canonicalize_tag(lang) {
        Some(_) => Ok(()),
        None => Err(format!(
            "Invalid language code format: {}. Expected valid BCP 47 language identifier",
            lang
        )),
    }
}

/// Validate a complete validation context
pub fn validate_context(context: &ValidationContext) -> Result<(), String> {
    if let Some(ref dir) = context.bundle_dir {
        validate_bundle_dir(dir).map_err(|e| format!("Bundle validation failed: {}", e))?;
    }

    if let Some(ref lang) = context.language_code {
        validate_language_code(lang)
            .map_err(|e| format!("Language code validation failed: {}", e))?;
    }

    if let Some(ref dir) = context.output_dir {
        validate_output_dir(dir).map_err(|e| format!("Output validation failed: {}", e))?;
    }

    Ok(())
}
