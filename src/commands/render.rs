//! Render command: prints the relative phrase for each date given on the command line.

use anyhow::Context;
use chrono::{DateTime, Utc};
use owo_colors::{OwoColorize, Stream::Stdout};
use reltime::config::Config;
use reltime::{
    Clock, DurationUnit, FixedClock, FormatRelative, IntoInstant, Rendered, Renderer, SystemClock,
};

use crate::cli::Cli;

/// Render every date in `cli.dates`.
///
/// Settings come from the config file and are overridden by flags. One date
/// prints just the phrase, several dates print a table, `--json` prints one
/// object per line. The first unparseable date aborts the command.
pub fn run_render(cli: &Cli) -> anyhow::Result<()> {
    use comfy_table::{Cell, Color, Table};

    // ── 1. Resolve settings ──────────────────────────────────────────────
    let file = reltime::config::load_config()?;
    let settings = Config {
        locale: cli.locale.unwrap_or(file.locale),
        numeric: cli.numeric.unwrap_or(file.numeric),
        smallest: cli.smallest.unwrap_or(file.smallest),
    };
    let smallest = settings.smallest;
    let formatter = settings.formatter()?;

    if cli.dates.is_empty() {
        println!(
            "{}",
            "No dates given. Try: reltime 2024-01-10T10:00:00Z"
                .if_supports_color(Stdout, |t| t.yellow())
        );
        return Ok(());
    }

    // ── 2. Render against the pinned or the system clock ────────────────
    let rendered = match cli.now.as_deref() {
        Some(now) => {
            let now = parse_date_arg(now).context("Invalid --now value")?;
            render_all(&Renderer::new(FixedClock(now), formatter), &cli.dates, smallest)?
        }
        None => render_all(&Renderer::new(SystemClock, formatter), &cli.dates, smallest)?,
    };

    // ── 3. Output ────────────────────────────────────────────────────────
    if cli.json {
        for (_, r) in &rendered {
            println!("{}", serde_json::to_string(r)?);
        }
        return Ok(());
    }

    if let [(_, only)] = rendered.as_slice() {
        println!("{}", only.text);
        return Ok(());
    }

    let mut table = Table::new();
    table.set_header(vec!["Date", "Unit", "Count", "Relative"]);
    for (arg, r) in &rendered {
        let relative = if r.difference_ms < 0 {
            Cell::new(&r.text).fg(Color::Cyan)
        } else {
            Cell::new(&r.text)
        };
        table.add_row(vec![
            Cell::new(arg),
            Cell::new(r.selection.unit),
            Cell::new(r.selection.magnitude.unsigned_abs()),
            relative,
        ]);
    }
    println!("{table}");

    Ok(())
}

fn render_all<C: Clock, F: FormatRelative>(
    renderer: &Renderer<C, F>,
    dates: &[String],
    smallest: DurationUnit,
) -> anyhow::Result<Vec<(String, Rendered)>> {
    dates
        .iter()
        .map(|arg| {
            let target = parse_date_arg(arg)?;
            let rendered = renderer
                .describe(target, smallest)
                .with_context(|| format!("Cannot render '{arg}'"))?;
            Ok((arg.clone(), rendered))
        })
        .collect()
}

/// All-digit arguments (optionally signed) are epoch milliseconds, anything else is a date string.
fn parse_date_arg(arg: &str) -> anyhow::Result<DateTime<Utc>> {
    let trimmed = arg.trim();
    let instant = match trimmed.parse::<i64>() {
        Ok(millis) => millis.into_instant(),
        Err(_) => trimmed.into_instant(),
    };
    instant.with_context(|| format!("Cannot parse '{arg}' as a date"))
}
