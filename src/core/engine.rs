use crate::core::render::render;
use crate::domain::ports::Pipeline;
use crate::utils::error::Result;
use std::io::{self, Write};

/// Outcome of one generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationReport {
    pub component: String,
    /// Where the artifact was written; `None` on a dry run.
    pub output_path: Option<String>,
    /// The artifact itself, only kept on a dry run.
    pub rendered: Option<String>,
    pub buffers: usize,
    pub accessors: usize,
    pub absorbed_gaps: usize,
}

impl GenerationReport {
    /// Writes what the user sees on stdout: the generated file on a dry run,
    /// otherwise a one-line summary.
    pub fn write_to<W: Write>(&self, input: &str, output: &str, out: &mut W) -> io::Result<()> {
        match &self.rendered {
            Some(text) => write!(out, "{}", text),
            None => writeln!(out, "Generated {} from {}", output, input),
        }
    }
}

pub struct RteEngine<P: Pipeline> {
    pipeline: P,
    dry_run: bool,
}

impl<P: Pipeline> RteEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self::new_with_dry_run(pipeline, false)
    }

    pub fn new_with_dry_run(pipeline: P, dry_run: bool) -> Self {
        Self { pipeline, dry_run }
    }

    pub fn run(&self) -> Result<GenerationReport> {
        tracing::info!("Loading component description...");
        let extraction = self.pipeline.extract()?;
        tracing::info!(
            "Extracted {} interfaces and {} ports",
            extraction.component.interfaces.len(),
            extraction.component.ports.len()
        );

        let unit = self.pipeline.transform(extraction)?;
        tracing::info!(
            "Planned {} buffers and {} accessors for component {}",
            unit.buffer_count(),
            unit.accessors.len(),
            unit.component
        );
        if unit.absorbed_gaps > 0 {
            tracing::warn!("⚠️  {} model entries were skipped", unit.absorbed_gaps);
        }

        let mut report = GenerationReport {
            component: unit.component.clone(),
            output_path: None,
            rendered: None,
            buffers: unit.buffer_count(),
            accessors: unit.accessors.len(),
            absorbed_gaps: unit.absorbed_gaps,
        };

        if self.dry_run {
            tracing::info!("🔍 Dry run, nothing is written");
            report.rendered = Some(render(&unit));
        } else {
            let output_path = self.pipeline.load(&unit)?;
            tracing::info!("📁 Output saved to: {}", output_path);
            report.output_path = Some(output_path);
        }

        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(rendered: Option<&str>) -> GenerationReport {
        GenerationReport {
            component: "Door".to_string(),
            output_path: rendered.is_none().then(|| "gen/Rte_Door.c".to_string()),
            rendered: rendered.map(str::to_string),
            buffers: 2,
            accessors: 2,
            absorbed_gaps: 0,
        }
    }

    #[test]
    fn test_summary_line_after_writing() {
        let mut out = Vec::new();
        report(None)
            .write_to("door.yaml", "gen/Rte_Door.c", &mut out)
            .unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "Generated gen/Rte_Door.c from door.yaml\n");
    }

    #[test]
    fn test_dry_run_prints_the_file_only() {
        let text = "/* Auto-generated RTE file for component: Door */\n#include \"include/Rte.h\"\n";
        let mut out = Vec::new();
        report(Some(text))
            .write_to("door.yaml", "gen/Rte_Door.c", &mut out)
            .unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), text);
    }
}
