use crate::commands::Context;
use crate::error::invalid_input;
use crate::util::cell_text;
use anyhow::{Context as _, Result};
use clap::Args;
use salesphone_core::NormalizeError;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::PathBuf;
use tracing::{debug, info};

#[derive(Debug, Args)]
pub struct BatchArgs {
    #[arg(long)]
    pub input: Option<PathBuf>,
    #[arg(long)]
    pub summary: bool,
}

#[derive(Debug, Deserialize)]
struct BatchRecord {
    phone: Option<Value>,
    country: Option<Value>,
    city: Option<Value>,
}

#[derive(Debug, Serialize)]
struct BatchRow {
    line: usize,
    phone: Option<String>,
    country: Option<String>,
    city: Option<String>,
    e164: String,
    error: Option<&'static str>,
}

#[derive(Debug, Default, Serialize)]
struct BatchSummary {
    total: usize,
    normalized: usize,
    failed: BTreeMap<&'static str, usize>,
}

impl BatchSummary {
    fn record(&mut self, outcome: &Result<String, NormalizeError>) {
        self.total += 1;
        match outcome {
            Ok(_) => self.normalized += 1,
            Err(err) => *self.failed.entry(err.as_str()).or_default() += 1,
        }
    }

    fn failed_total(&self) -> usize {
        self.failed.values().sum()
    }
}

pub fn batch(ctx: &Context<'_>, args: BatchArgs) -> Result<()> {
    let reader: Box<dyn BufRead> = match &args.input {
        Some(path) => {
            let file =
                File::open(path).with_context(|| format!("open input {}", path.display()))?;
            Box::new(BufReader::new(file))
        }
        None => Box::new(io::stdin().lock()),
    };

    let normalizer = ctx.normalizer();
    let mut stdout = BufWriter::new(io::stdout().lock());
    let mut summary = BatchSummary::default();

    for (index, line) in reader.lines().enumerate() {
        let line_no = index + 1;
        let line = line.with_context(|| format!("read line {}", line_no))?;
        if line.trim().is_empty() {
            continue;
        }

        let record: BatchRecord = serde_json::from_str(&line)
            .map_err(|err| invalid_input(format!("line {}: {}", line_no, err)))?;
        let phone = field(record.phone.as_ref(), "phone", line_no)?;
        let country = field(record.country.as_ref(), "country", line_no)?;
        let city = field(record.city.as_ref(), "city", line_no)?;

        let outcome =
            normalizer.try_normalize(phone.as_deref(), country.as_deref(), city.as_deref());
        if let Err(err) = &outcome {
            debug!(line = line_no, reason = err.as_str(), "phone not normalized");
        }
        summary.record(&outcome);

        let row = BatchRow {
            line: line_no,
            phone,
            country,
            city,
            error: outcome.as_ref().err().map(|err| err.as_str()),
            e164: outcome.unwrap_or_default(),
        };
        serde_json::to_writer(&mut stdout, &row)?;
        writeln!(stdout)?;
    }
    stdout.flush()?;

    info!(
        total = summary.total,
        normalized = summary.normalized,
        failed = summary.failed_total(),
        "batch complete"
    );

    if args.summary {
        if ctx.json {
            eprintln!("{}", serde_json::to_string(&summary)?);
        } else {
            eprintln!(
                "{} rows, {} normalized, {} failed",
                summary.total,
                summary.normalized,
                summary.failed_total()
            );
            for (reason, count) in &summary.failed {
                eprintln!("  {}: {}", reason, count);
            }
        }
    }
    Ok(())
}

fn field(value: Option<&Value>, name: &str, line_no: usize) -> Result<Option<String>> {
    cell_text(value).map_err(|err| invalid_input(format!("line {} {}: {}", line_no, name, err)))
}
