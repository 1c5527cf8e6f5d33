use anyhow::Result;
use salesphone_config::AppConfig;
use salesphone_core::Normalizer;
use serde::Serialize;
use std::io::{self, Write};

pub mod batch;
pub mod completions;
pub mod countries;
pub mod normalize;

pub struct Context<'a> {
    pub json: bool,
    pub config: &'a AppConfig,
}

impl<'a> Context<'a> {
    pub fn normalizer(&self) -> Normalizer<'a> {
        Normalizer::new(&self.config.knowledge_base)
    }
}

pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let mut stdout = io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, value)?;
    writeln!(stdout)?;
    Ok(())
}
