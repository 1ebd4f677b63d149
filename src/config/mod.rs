#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::core::emit::DEFAULT_RUNTIME_HEADER;
use crate::domain::ports::{ConfigProvider, GenerationPolicy};
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use std::path::{Path, PathBuf};
use toml_config::TomlConfig;

pub const DEFAULT_INPUT: &str = "component.yaml";
pub const DEFAULT_OUTPUT: &str = "Rte_Component.c";

/// Fully resolved settings for one generation run.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratorConfig {
    pub input: PathBuf,
    pub output: PathBuf,
    pub policy: GenerationPolicy,
    pub runtime_header: String,
    pub component_name: Option<String>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self::new(DEFAULT_INPUT, DEFAULT_OUTPUT)
    }
}

impl GeneratorConfig {
    pub fn new(input: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            output: output.into(),
            policy: GenerationPolicy::default(),
            runtime_header: DEFAULT_RUNTIME_HEADER.to_string(),
            component_name: None,
        }
    }

    pub fn with_policy(mut self, policy: GenerationPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn with_component_name(mut self, name: impl Into<String>) -> Self {
        self.component_name = Some(name.into());
        self
    }

    /// Layers a settings file over the current values. Only keys present in
    /// the file change anything.
    pub fn apply_settings(mut self, settings: &TomlConfig) -> Result<Self> {
        let generator = &settings.generator;
        if let Some(input) = &generator.input {
            self.input = PathBuf::from(input);
        }
        if let Some(output) = &generator.output {
            self.output = PathBuf::from(output);
        }
        if let Some(policy) = settings.policy()? {
            self.policy = policy;
        }
        if let Some(header) = &generator.runtime_header {
            self.runtime_header = header.clone();
        }
        if let Some(name) = &generator.component_name {
            self.component_name = Some(name.clone());
        }
        Ok(self)
    }
}

impl ConfigProvider for GeneratorConfig {
    fn input_path(&self) -> &Path {
        &self.input
    }

    fn output_path(&self) -> &Path {
        &self.output
    }

    fn policy(&self) -> GenerationPolicy {
        self.policy
    }

    fn runtime_header(&self) -> &str {
        &self.runtime_header
    }

    fn component_name(&self) -> Option<&str> {
        self.component_name.as_deref()
    }
}

impl Validate for GeneratorConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_path("input", &self.input.to_string_lossy())?;
        validation::validate_path("output", &self.output.to_string_lossy())?;
        validation::validate_non_empty_string("runtime_header", &self.runtime_header)?;
        if let Some(name) = &self.component_name {
            validation::validate_non_empty_string("component_name", name)?;
        }
        Ok(())
    }
}
