use crate::adapters::loader::parse_document;
use crate::core::emit::{plan, RteUnit, SYMBOL_PREFIX};
use crate::core::extract::{extract_component, Extraction};
use crate::core::render::render;
use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
use crate::utils::error::{Result, RteGenError};
use std::path::Path;

/// Name used when neither the configuration, the model nor the output file
/// provides one.
pub const FALLBACK_COMPONENT_NAME: &str = "component";

/// Load, extract, emit and write for one component description.
pub struct RtePipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
}

impl<S: Storage, C: ConfigProvider> RtePipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self { storage, config }
    }

    /// Configured name first, then the model's `name`, then the output file
    /// name without its `Rte_` prefix.
    pub fn component_name(&self, model_name: Option<&str>) -> String {
        self.config
            .component_name()
            .or(model_name)
            .map(str::to_string)
            .unwrap_or_else(|| component_name_from_output(self.config.output_path()))
    }
}

pub fn component_name_from_output(path: &Path) -> String {
    let stem = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or(FALLBACK_COMPONENT_NAME);
    let name = stem.strip_prefix(SYMBOL_PREFIX).unwrap_or(stem);
    if name.is_empty() {
        FALLBACK_COMPONENT_NAME.to_string()
    } else {
        name.to_string()
    }
}

impl<S: Storage, C: ConfigProvider> Pipeline for RtePipeline<S, C> {
    fn extract(&self) -> Result<Extraction> {
        let path = self.config.input_path();
        tracing::debug!("Reading component description from {}", path.display());

        let bytes = self.storage.read_file(path)?;
        let content = String::from_utf8(bytes).map_err(|e| RteGenError::ParseError {
            path: path.to_path_buf(),
            format: "UTF-8 text".to_string(),
            message: e.to_string(),
        })?;
        let doc = parse_document(path, &content)?;
        extract_component(&doc)
    }

    fn transform(&self, extraction: Extraction) -> Result<RteUnit> {
        let policy = self.config.policy();
        let mut absorbed = 0;
        for gap in extraction.gaps {
            policy.absorb(gap)?;
            absorbed += 1;
        }

        let component = extraction.component;
        let name = self.component_name(component.name.as_deref());
        tracing::debug!("Generating RTE for component {} ({:?})", name, policy);

        let mut unit = plan(&name, self.config.runtime_header(), &component, policy)?;
        unit.absorbed_gaps += absorbed;
        Ok(unit)
    }

    fn load(&self, unit: &RteUnit) -> Result<String> {
        let output_path = self.config.output_path();
        let text = render(unit);

        tracing::debug!("Writing {} bytes to {}", text.len(), output_path.display());
        self.storage.write_file(output_path, text.as_bytes())?;

        Ok(output_path.display().to_string())
    }
}
