use crate::domain::ports::GenerationPolicy;
use crate::utils::error::{Result, RteGenError};
use crate::utils::validation::{self, Validate};
use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Optional settings file, e.g. `rte-gen.toml`:
///
/// ```toml
/// [generator]
/// input = "components/door.yaml"
/// output = "${BUILD_DIR}/Rte_Door.c"
/// policy = "strict"
/// runtime_header = "include/Rte.h"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub generator: GeneratorSection,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorSection {
    pub input: Option<String>,
    pub output: Option<String>,
    pub policy: Option<String>,
    pub component_name: Option<String>,
    pub runtime_header: Option<String>,
}

impl TomlConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| RteGenError::ReadError {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| RteGenError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with the environment value. Unset variables are
    /// left as written.
    fn substitute_env_vars(content: &str) -> String {
        let re = env_var_pattern();
        re.replace_all(content, |caps: &Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        })
        .into_owned()
    }

    /// Parsed policy, if the file sets one.
    pub fn policy(&self) -> Result<Option<GenerationPolicy>> {
        match self.generator.policy.as_deref() {
            None => Ok(None),
            Some(name) => GenerationPolicy::from_name(name).map(Some).ok_or_else(|| {
                RteGenError::InvalidConfigValueError {
                    field: "generator.policy".to_string(),
                    value: name.to_string(),
                    reason: format!("Valid values: {}", GenerationPolicy::VALUES.join(", ")),
                }
            }),
        }
    }
}

fn env_var_pattern() -> Regex {
    Regex::new(r"\$\{([^}]+)\}").expect("env var pattern is a valid regex")
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        let generator = &self.generator;
        if let Some(input) = &generator.input {
            validation::validate_path("generator.input", input)?;
        }
        if let Some(output) = &generator.output {
            validation::validate_path("generator.output", output)?;
        }
        if let Some(policy) = &generator.policy {
            validation::validate_one_of("generator.policy", policy, &GenerationPolicy::VALUES)?;
        }
        if let Some(header) = &generator.runtime_header {
            validation::validate_non_empty_string("generator.runtime_header", header)?;
        }
        Ok(())
    }
}
