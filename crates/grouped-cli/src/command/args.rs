use std::path::PathBuf;

use anyhow::Context;

use crate::{input, util};

#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, derive_more::FromStr)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Where observations come from
#[derive(Debug, Clone, clap::Args)]
pub(crate) struct InputArg {
    /// Observations separated by commas or whitespace (read from stdin when omitted)
    #[arg(allow_negative_numbers = true)]
    pub values: Vec<String>,
    /// Read observations from this file instead
    #[arg(long, conflicts_with = "values")]
    pub file: Option<PathBuf>,
    /// Minimum number of observations required
    #[arg(long, default_value_t = input::MIN_OBSERVATIONS)]
    pub min_observations: usize,
}

impl Default for InputArg {
    fn default() -> Self {
        Self {
            values: vec![],
            file: None,
            min_observations: input::MIN_OBSERVATIONS,
        }
    }
}

impl InputArg {
    pub fn read_observations(&self) -> anyhow::Result<Vec<f64>> {
        let (text, source) = if self.values.is_empty() {
            let text = util::read_input_text(self.file.as_deref())?;
            let source = self
                .file
                .as_ref()
                .map_or_else(|| "stdin".to_owned(), |path| path.display().to_string());
            (text, source)
        } else {
            (self.values.join(" "), "command line".to_owned())
        };

        let observations = input::parse_observations(&text, self.min_observations)
            .with_context(|| format!("Invalid observations from {source}"))?;
        tracing::info!("Read {} observations from {source}", observations.len());
        Ok(observations)
    }
}

/// How and where the report is written
#[derive(Debug, Clone, clap::Args)]
pub(crate) struct OutputArg {
    /// Report format (text or json)
    #[arg(long, default_value = "text")]
    pub format: OutputFormat,
    /// Output file path (stdout when omitted)
    #[arg(long)]
    pub output: Option<PathBuf>,
    /// Decimal places in the text report
    #[arg(long, default_value_t = 2)]
    pub precision: usize,
}

impl Default for OutputArg {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            output: None,
            precision: 2,
        }
    }
}
