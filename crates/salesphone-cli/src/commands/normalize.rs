use crate::commands::{print_json, Context};
use anyhow::Result;
use clap::Args;
use serde::Serialize;
use tracing::debug;

#[derive(Debug, Args)]
pub struct NormalizeArgs {
    pub phone: String,
    #[arg(long)]
    pub country: Option<String>,
    #[arg(long)]
    pub city: Option<String>,
}

#[derive(Debug, Serialize)]
struct NormalizeDto<'a> {
    input: &'a str,
    country: Option<&'a str>,
    city: Option<&'a str>,
    e164: String,
    error: Option<&'static str>,
}

pub fn normalize(ctx: &Context<'_>, args: NormalizeArgs) -> Result<()> {
    let country = args.country.as_deref();
    let city = args.city.as_deref();
    let result = ctx
        .normalizer()
        .try_normalize(Some(args.phone.as_str()), country, city);

    if let Err(err) = &result {
        debug!(reason = err.as_str(), input = %args.phone, "phone not normalized");
    }

    let error = result.as_ref().err().map(|err| err.as_str());
    let e164 = result.unwrap_or_default();

    if ctx.json {
        return print_json(&NormalizeDto {
            input: &args.phone,
            country,
            city,
            e164,
            error,
        });
    }

    println!("{}", e164);
    Ok(())
}
