use crate::core::emit::RteUnit;
use crate::core::extract::Extraction;
use crate::domain::model::ModelGap;
use crate::utils::error::{Result, RteGenError};
use std::path::Path;

/// Generation policy for gaps in the component model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GenerationPolicy {
    /// Absorb gaps with a warning and keep generating.
    #[default]
    Permissive,
    /// Treat every gap as a fatal model error.
    Strict,
}

impl GenerationPolicy {
    pub const VALUES: [&'static str; 2] = ["permissive", "strict"];

    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "permissive" => Some(Self::Permissive),
            "strict" => Some(Self::Strict),
            _ => None,
        }
    }

    /// Applies the policy to one gap: a warning when permissive, an error
    /// when strict.
    pub fn absorb(&self, gap: ModelGap) -> Result<()> {
        match self {
            Self::Permissive => {
                tracing::warn!("⚠️  Skipping: {}", gap);
                Ok(())
            }
            Self::Strict => Err(RteGenError::model(gap.to_string())),
        }
    }
}

pub trait Storage {
    fn read_file(&self, path: &Path) -> Result<Vec<u8>>;
    fn write_file(&self, path: &Path, data: &[u8]) -> Result<()>;
}

pub trait ConfigProvider {
    fn input_path(&self) -> &Path;
    fn output_path(&self) -> &Path;
    fn policy(&self) -> GenerationPolicy;
    fn runtime_header(&self) -> &str;
    /// Explicit component name that wins over the model and the file name.
    fn component_name(&self) -> Option<&str>;
}

pub trait Pipeline {
    fn extract(&self) -> Result<Extraction>;
    fn transform(&self, extraction: Extraction) -> Result<RteUnit>;
    fn load(&self, unit: &RteUnit) -> Result<String>;
}
