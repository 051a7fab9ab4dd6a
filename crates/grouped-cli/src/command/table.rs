use std::io::Write as _;

use anyhow::Context;
use grouped_stats::frequency::FrequencyDistribution;

use super::args::{InputArg, OutputArg, OutputFormat};
use crate::{report, schema::TableReport, util::Output};

#[derive(Default, Debug, Clone, clap::Args)]
pub(crate) struct TableArg {
    #[clap(flatten)]
    pub input: InputArg,
    #[clap(flatten)]
    pub output: OutputArg,
}

pub(crate) fn run(arg: &TableArg) -> anyhow::Result<()> {
    let observations = arg.input.read_observations()?;
    let distribution = FrequencyDistribution::new(observations)
        .context("Failed to build frequency table")?;

    let mut output = Output::open(arg.output.output.as_deref())?;
    match arg.output.format {
        OutputFormat::Text => {
            report::write_distribution(&mut output, &distribution, arg.output.precision)
                .with_context(|| format!("Failed to write table to {}", output.display_path()))?;
        }
        OutputFormat::Json => output.write_json(&TableReport::new(&distribution))?,
    }
    output
        .flush()
        .with_context(|| format!("Failed to flush output to {}", output.display_path()))?;
    tracing::info!("Table written to {}", output.display_path());
    Ok(())
}
