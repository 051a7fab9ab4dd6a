//! Plain-text analysis report
//!
//! Renders the preliminaries, the frequency table (with its TOTAL row) and
//! every derivation trail in the order the steps are worked out by hand.

use std::io::{self, Write};

use grouped_stats::{
    analysis::{AnalysisResult, Section},
    frequency::{FrequencyDistribution, FrequencyTable},
    trail::{DerivationTrail, StepValue, WorkTable},
};

const NAME_WIDTH: usize = 20;
const SHEET_COL_WIDTH: usize = 16;

fn statistic_title(name: &str) -> &str {
    match name {
        "mean" => "Mean (x̄)",
        "median" => "Median (Me)",
        "mode" => "Mode (Mo)",
        "mean_deviation" => "Mean deviation (DM)",
        "standard_deviation" => "Standard deviation (σ)",
        other => other,
    }
}

fn write_heading<W>(out: &mut W, title: &str) -> io::Result<()>
where
    W: Write,
{
    writeln!(out, "{title}")?;
    writeln!(out, "{}", "=".repeat(title.chars().count()))
}

/// Write the full report: preliminaries, frequency table, every measure and a summary
pub fn write_report<W>(out: &mut W, result: &AnalysisResult, precision: usize) -> io::Result<()>
where
    W: Write,
{
    write_heading(
        out,
        &format!(
            "Grouped Statistics Report (n = {})",
            result.table().total_count()
        ),
    )?;
    writeln!(out)?;

    write_distribution(out, &result.distribution, precision)?;

    let mut current_section = None;
    for (section, name, stat) in result.statistics() {
        if current_section != Some(section) {
            writeln!(out)?;
            write_heading(out, &section.to_string())?;
            current_section = Some(section);
        }
        writeln!(out)?;
        writeln!(out, "{}", statistic_title(name))?;
        write_trail(out, &stat.trail, precision)?;
    }

    writeln!(out)?;
    write_heading(out, "Summary")?;
    for (_, name, stat) in result.statistics() {
        writeln!(
            out,
            "  {:<28} {:>12.precision$}",
            statistic_title(name),
            stat.value
        )?;
    }
    writeln!(
        out,
        "  {:<28} {:>12.precision$}",
        "Variance (σ²)", result.dispersion.variance
    )?;
    Ok(())
}

/// Write the preliminary steps followed by the frequency table
pub fn write_distribution<W>(
    out: &mut W,
    distribution: &FrequencyDistribution,
    precision: usize,
) -> io::Result<()>
where
    W: Write,
{
    write_heading(out, &Section::Preliminaries.to_string())?;
    write_trail(out, &distribution.preliminaries.trail, precision)?;
    writeln!(out)?;
    write_heading(out, "Frequency table")?;
    write_frequency_table(out, &distribution.table, precision)
}

fn write_frequency_table<W>(out: &mut W, table: &FrequencyTable, precision: usize) -> io::Result<()>
where
    W: Write,
{
    let rel_precision = precision + 2;
    writeln!(
        out,
        "  {:<20} {:>10} {:>10} {:>10} {:>6} {:>6} {:>10} {:>10}",
        "Interval", "Li", "Ls", "xi", "fi", "Fi", "hi", "hi%",
    )?;
    // interval(20) + 3 × bound(10) + 2 × count(6) + 2 × rel(10) + spaces(7)
    let separator = "-".repeat(99);
    writeln!(out, "  {separator}")?;

    for class in table.intervals() {
        writeln!(
            out,
            "  {:<20} {:>10.precision$} {:>10.precision$} {:>10.precision$} {:>6} {:>6} {:>10.rel_precision$} {:>10.precision$}",
            class.label(),
            class.lower_bound,
            class.upper_bound,
            class.class_mark,
            class.absolute_frequency,
            class.cumulative_frequency,
            class.relative_frequency,
            class.relative_frequency_percent,
        )?;
    }

    let totals = table.totals();
    writeln!(out, "  {separator}")?;
    writeln!(
        out,
        "  {:<20} {:>10} {:>10} {:>10} {:>6} {:>6} {:>10.rel_precision$} {:>10.precision$}",
        "TOTAL", "", "", "", totals.absolute, "", totals.relative, totals.percent,
    )
}

fn write_trail<W>(out: &mut W, trail: &DerivationTrail, precision: usize) -> io::Result<()>
where
    W: Write,
{
    for step in trail {
        let name = step.name;
        match &step.value {
            StepValue::Number(value) => {
                writeln!(out, "  {name:<NAME_WIDTH$} {value:.precision$}")?;
            }
            StepValue::Count(count) => writeln!(out, "  {name:<NAME_WIDTH$} {count}")?,
            StepValue::Text(text) => writeln!(out, "  {name:<NAME_WIDTH$} {text}")?,
            StepValue::Series(values) => {
                let joined = values
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join(", ");
                writeln!(out, "  {name:<NAME_WIDTH$} {joined}")?;
            }
            StepValue::Table(sheet) => write_work_table(out, sheet, precision)?,
        }
    }
    Ok(())
}

fn write_work_table<W>(out: &mut W, sheet: &WorkTable, precision: usize) -> io::Result<()>
where
    W: Write,
{
    let header = sheet
        .columns
        .iter()
        .map(|c| format!("{c:>SHEET_COL_WIDTH$}"))
        .collect::<String>();
    writeln!(out, "  {header}")?;
    for row in &sheet.rows {
        let line = row
            .iter()
            .map(|v| format!("{v:>SHEET_COL_WIDTH$.precision$}"))
            .collect::<String>();
        writeln!(out, "  {line}")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use grouped_stats::analysis::analyze;

    use super::*;

    const SAMPLE: [f64; 10] = [12.0, 15.0, 18.0, 20.0, 22.0, 25.0, 28.0, 30.0, 32.0, 35.0];

    fn render(precision: usize) -> String {
        let result = analyze(SAMPLE).unwrap();
        let mut buf = Vec::new();
        write_report(&mut buf, &result, precision).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_report_sections_in_order() {
        let text = render(2);
        let positions = [
            "Preliminaries",
            "Frequency table",
            "Central tendency",
            "Mean (x̄)",
            "Median (Me)",
            "Mode (Mo)",
            "Dispersion",
            "Mean deviation (DM)",
            "Standard deviation (σ)",
            "Summary",
        ]
        .map(|heading| text.find(heading).unwrap());
        assert!(positions.is_sorted());
    }

    #[test]
    fn test_report_contains_table_and_formulas() {
        let text = render(2);
        assert!(text.contains("[12.00 - 17.00)"));
        assert!(text.contains("[32.00 - 37.00]"));
        assert!(text.contains("TOTAL"));
        assert!(text.contains("R = Xmax - Xmin = 35 - 12 = 23"));
        assert!(text.contains("x̄ = Σ(xi × fi) / n = 245.0000 / 10 = 24.50"));
        assert!(text.contains("Me = 24.50"));
        assert!(text.contains("Mo = 17.00"));
        assert!(text.contains("DM = 60.0000 / 10 = 6.00"));
        assert!(text.contains("σ = √50.0000 = 7.07"));
    }

    #[test]
    fn test_precision_applies_to_table() {
        let text = render(3);
        assert!(text.contains("14.500"));
        assert!(text.contains("0.20000"));
    }

    #[test]
    fn test_distribution_only() {
        let result = analyze(SAMPLE).unwrap();
        let mut buf = Vec::new();
        write_distribution(&mut buf, &result.distribution, 2).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.contains("Frequency table"));
        assert!(!text.contains("Median (Me)"));
    }
}
