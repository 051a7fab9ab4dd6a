use std::io::Write as _;

use anyhow::Context;
use grouped_stats::analysis::{self, AnalysisResult};

use super::args::{InputArg, OutputArg, OutputFormat};
use crate::{report, schema::AnalysisReport, util::Output};

#[derive(Default, Debug, Clone, clap::Args)]
pub(crate) struct AnalyzeArg {
    #[clap(flatten)]
    pub input: InputArg,
    #[clap(flatten)]
    pub output: OutputArg,
}

pub(crate) fn run(arg: &AnalyzeArg) -> anyhow::Result<()> {
    let observations = arg.input.read_observations()?;
    let result =
        analysis::analyze(observations).context("Failed to analyze observations")?;
    warn_degenerate(&result);

    let mut output = Output::open(arg.output.output.as_deref())?;
    match arg.output.format {
        OutputFormat::Text => {
            report::write_report(&mut output, &result, arg.output.precision)
                .with_context(|| format!("Failed to write report to {}", output.display_path()))?;
        }
        OutputFormat::Json => output.write_json(&AnalysisReport::new(&result))?,
    }
    output
        .flush()
        .with_context(|| format!("Failed to flush output to {}", output.display_path()))?;
    tracing::info!("Report written to {}", output.display_path());
    Ok(())
}

fn warn_degenerate(result: &AnalysisResult) {
    let preliminaries = result.preliminaries();
    if preliminaries.range == 0.0 {
        tracing::warn!(
            "All observations are equal ({}); using class width {}",
            preliminaries.x_min,
            preliminaries.class_width
        );
    }
    let empty = result
        .table()
        .intervals()
        .iter()
        .filter(|class| class.absolute_frequency == 0)
        .count();
    if empty > 0 {
        tracing::info!("{empty} of {} classes are empty", result.table().num_classes());
    }
}
