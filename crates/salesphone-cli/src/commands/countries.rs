use crate::commands::{print_json, Context};
use crate::error::not_found;
use anyhow::Result;
use clap::Args;
use salesphone_core::{CountryInfo, TrunkRule};
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug, Args)]
pub struct CountriesArgs {
    pub name: Option<String>,
}

#[derive(Debug, Serialize)]
struct CountrySummaryDto<'a> {
    name: &'a str,
    calling_code: &'a str,
    trunk_rule: TrunkRule,
    cities: usize,
}

#[derive(Debug, Serialize)]
struct CountryDetailDto<'a> {
    name: &'a str,
    calling_code: &'a str,
    trunk_rule: TrunkRule,
    cities: BTreeMap<&'a str, &'a str>,
}

pub fn countries(ctx: &Context<'_>, args: CountriesArgs) -> Result<()> {
    let kb = &ctx.config.knowledge_base;

    if let Some(name) = args.name {
        let name = name.trim();
        let info = kb
            .country(name)
            .ok_or_else(|| not_found(format!("country {}", name)))?;
        return show_country(ctx, name, info);
    }

    let items: Vec<CountrySummaryDto<'_>> = kb
        .countries()
        .map(|(name, info)| CountrySummaryDto {
            name,
            calling_code: info.country_code(),
            trunk_rule: info.trunk_rule(),
            cities: info.city_count(),
        })
        .collect();

    if ctx.json {
        return print_json(&items);
    }

    for item in items {
        println!(
            "{:<14} +{:<4} {:<15} {} cities",
            item.name,
            item.calling_code,
            item.trunk_rule.as_str(),
            item.cities
        );
    }
    Ok(())
}

fn show_country(ctx: &Context<'_>, name: &str, info: &CountryInfo) -> Result<()> {
    let detail = CountryDetailDto {
        name,
        calling_code: info.country_code(),
        trunk_rule: info.trunk_rule(),
        cities: info.cities().collect(),
    };

    if ctx.json {
        return print_json(&detail);
    }

    println!("country: {}", detail.name);
    println!("calling code: +{}", detail.calling_code);
    println!("trunk rule: {}", detail.trunk_rule);
    for (city, area_code) in &detail.cities {
        if area_code.is_empty() {
            println!("  {}: (none)", city);
        } else {
            println!("  {}: {}", city, area_code);
        }
    }
    Ok(())
}
