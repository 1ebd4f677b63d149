pub mod emit;
pub mod engine;
pub mod extract;
pub mod pipeline;
pub mod render;
pub mod types;

pub use crate::domain::model::{Component, DataElement, Interface, ModelGap, Port, PortDirection};
pub use crate::domain::ports::{ConfigProvider, GenerationPolicy, Pipeline, Storage};
pub use crate::utils::error::Result;
