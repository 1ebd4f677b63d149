use crate::config::toml_config::TomlConfig;
use crate::config::{GeneratorConfig, DEFAULT_INPUT, DEFAULT_OUTPUT};
use crate::domain::ports::GenerationPolicy;
use crate::utils::error::Result;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "rte-gen")]
#[command(about = "Generate an RTE read/write access layer in C from a component description")]
pub struct CliConfig {
    /// Component description (YAML, JSON or TOML) [default: component.yaml]
    pub input: Option<PathBuf>,

    /// Generated C file, overwritten if it exists [default: Rte_Component.c]
    pub output: Option<PathBuf>,

    /// TOML settings file with a [generator] table
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Fail on incomplete or dangling model entries instead of skipping them
    #[arg(long)]
    pub strict: bool,

    /// Component name used in the header comment and the component include
    #[arg(long)]
    pub component: Option<String>,

    /// Include path of the generic RTE declarations
    #[arg(long)]
    pub runtime_header: Option<String>,

    /// Print the generated code to stdout instead of writing it
    #[arg(long)]
    pub dry_run: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Emit logs as JSON lines
    #[arg(long)]
    pub json_logs: bool,
}

impl CliConfig {
    /// Resolves the run configuration: flags beat the settings file, which
    /// beats the built-in defaults.
    pub fn resolve(&self, settings: Option<&TomlConfig>) -> Result<GeneratorConfig> {
        let mut config = GeneratorConfig::new(DEFAULT_INPUT, DEFAULT_OUTPUT);
        if let Some(settings) = settings {
            config = config.apply_settings(settings)?;
        }

        if let Some(input) = &self.input {
            config.input = input.clone();
        }
        if let Some(output) = &self.output {
            config.output = output.clone();
        }
        if self.strict {
            config.policy = GenerationPolicy::Strict;
        }
        if let Some(name) = &self.component {
            config.component_name = Some(name.clone());
        }
        if let Some(header) = &self.runtime_header {
            config.runtime_header = header.clone();
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_arguments_uses_defaults() {
        let cli = CliConfig::parse_from(["rte-gen"]);
        let config = cli.resolve(None).unwrap();
        assert_eq!(config, GeneratorConfig::default());
        assert!(!cli.dry_run);
    }

    #[test]
    fn test_flags_override_settings() {
        let settings = TomlConfig::from_toml_str(
            "[generator]\ninput = \"from-file.yaml\"\noutput = \"from-file.c\"\ncomponent_name = \"FileName\"\n",
        )
        .unwrap();
        let cli = CliConfig::parse_from([
            "rte-gen",
            "door.yaml",
            "--strict",
            "--component",
            "Door",
            "--runtime-header",
            "rte/Rte.h",
        ]);
        let config = cli.resolve(Some(&settings)).unwrap();

        assert_eq!(config.input, PathBuf::from("door.yaml"));
        assert_eq!(config.output, PathBuf::from("from-file.c"));
        assert_eq!(config.policy, GenerationPolicy::Strict);
        assert_eq!(config.component_name.as_deref(), Some("Door"));
        assert_eq!(config.runtime_header, "rte/Rte.h");
    }
}
