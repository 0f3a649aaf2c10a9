//! `clausecheck review`: analyse a clause, expand the requested cards and
//! fetch their explanations.

use std::io::Read;
use std::time::Duration;

use anyhow::{Context, bail};
use chrono::{DateTime, Utc};
use clausecheck_core::{Analysis, Catalog, ClauseSession, ExplainRequest, FoundError, Review};
use clausecheck_explain::{ExplainClient, fetch_all};
use serde::Serialize;

use crate::ReviewArgs;
use crate::display;

pub async fn run(catalog: Catalog, args: &ReviewArgs) -> anyhow::Result<()> {
    let clause = read_clause(args)?;

    let mut session = ClauseSession::new(catalog);
    session.set_input(clause);
    let analysis = session.analyse().clone();
    let mut review = Review::new(session.input(), &analysis);

    let requests = if args.explain {
        review.expand_all()
    } else {
        expand_selected(&mut review, &args.expand)?
    };

    if !requests.is_empty() {
        let client = ExplainClient::with_timeout(
            args.endpoint.clone(),
            Duration::from_secs(args.timeout),
        )?;
        for (index, outcome) in fetch_all(&client, requests).await {
            review.resolve(index, outcome);
        }
    }

    if args.json {
        let report = ReviewReport::new(&analysis, &review);
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        display::print_review(&analysis, &review, !args.no_color);
    }
    Ok(())
}

fn read_clause(args: &ReviewArgs) -> anyhow::Result<String> {
    match &args.file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("reading clause from {}", path.display())),
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("reading clause from stdin")?;
            Ok(buf)
        }
    }
}

/// Expand the 1-based card numbers given on the command line.
fn expand_selected(
    review: &mut Review,
    numbers: &[usize],
) -> anyhow::Result<Vec<(usize, ExplainRequest)>> {
    let count = review.cards().len();
    let mut requests = Vec::new();
    for &n in numbers {
        if n == 0 || n > count {
            bail!("no item {n}: the review has {count} item(s)");
        }
        if let Some(req) = review.expand(n - 1) {
            requests.push((n - 1, req));
        }
    }
    Ok(requests)
}

#[derive(Serialize)]
struct ItemReport<'a> {
    #[serde(flatten)]
    item: &'a clausecheck_core::ReviewItem,
    open: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    explanation: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    suggestion: Option<&'a str>,
}

#[derive(Serialize)]
struct ReviewReport<'a> {
    analysed_at: DateTime<Utc>,
    title: String,
    total_errors: usize,
    institution_found: bool,
    institutions: &'a [String],
    found_errors: &'a [FoundError],
    highlights: &'a [String],
    items: Vec<ItemReport<'a>>,
}

impl<'a> ReviewReport<'a> {
    fn new(analysis: &'a Analysis, review: &'a Review) -> Self {
        let items = review
            .cards()
            .iter()
            .map(|card| {
                let (text, suggestion) = card.body();
                let open = card.is_open();
                ItemReport {
                    item: card.item(),
                    open,
                    explanation: (open && suggestion.is_some()).then_some(text),
                    suggestion,
                }
            })
            .collect();
        Self {
            analysed_at: Utc::now(),
            title: review.title(),
            total_errors: review.total_errors(),
            institution_found: analysis.institution_found(),
            institutions: &analysis.institutions,
            found_errors: &analysis.found_errors,
            highlights: &analysis.highlights,
            items,
        }
    }
}
