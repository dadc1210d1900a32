use crate::config::load_generator;
use anyhow::anyhow;
use clap::Args;
use reqid_core::{RequestId, RequestParts};
use std::path::PathBuf;

#[derive(Args, Debug)]
pub struct IdArgs {
    /// Path to the HCL config file; the default preset when omitted
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Request method
    #[arg(long, default_value = "GET")]
    pub method: String,

    /// Request path, not percent-escaped
    #[arg(long, default_value = "/")]
    pub path: String,

    /// Header as 'Name: value' (repeatable)
    #[arg(long = "header", short = 'H', value_parser = parse_header)]
    pub headers: Vec<(String, String)>,

    /// Query parameter as 'key=value' (repeatable)
    #[arg(long = "query", short = 'q', value_parser = parse_pair)]
    pub query: Vec<(String, String)>,

    /// Cookie as 'name=value' (repeatable)
    #[arg(long = "cookie", short = 'c', value_parser = parse_pair)]
    pub cookies: Vec<(String, String)>,
}

#[derive(Debug, PartialEq, Eq)]
pub enum IdOutcome {
    Included(RequestId),
    Excluded,
}

pub fn run(args: &IdArgs) -> anyhow::Result<IdOutcome> {
    let generator = load_generator(args.config.as_deref())?;

    let request = RequestParts {
        method: args.method.clone(),
        path: args.path.clone(),
        headers: args.headers.clone(),
        query: args.query.clone(),
        cookies: args.cookies.clone(),
    };

    Ok(match generator.identify(&request) {
        Some(id) => IdOutcome::Included(id),
        None => IdOutcome::Excluded,
    })
}

pub fn parse_header(s: &str) -> anyhow::Result<(String, String)> {
    let (name, value) = s
        .split_once(':')
        .ok_or_else(|| anyhow!("expected 'Name: value', got '{s}'"))?;

    let name = name.trim();
    if name.is_empty() {
        return Err(anyhow!("header name is empty in '{s}'"));
    }

    Ok((name.to_owned(), value.trim().to_owned()))
}

/// `key=value`; a bare `key` means an empty value.
pub fn parse_pair(s: &str) -> anyhow::Result<(String, String)> {
    let (key, value) = s.split_once('=').unwrap_or((s, ""));
    if key.is_empty() {
        return Err(anyhow!("key is empty in '{s}'"));
    }

    Ok((key.to_owned(), value.to_owned()))
}
