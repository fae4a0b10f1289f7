//! Sort command

use clap::Args;
use shiptrack_core::{ShipmentField, SortDirection};

use crate::output::format_rows;
use crate::AppContext;

#[derive(Args)]
pub struct SortArgs {
    /// Sort descending
    #[arg(long)]
    pub desc: bool,

    /// Sort ascending (overrides the configured default)
    #[arg(long, conflicts_with = "desc")]
    pub asc: bool,

    /// Field to sort by as text, e.g. "Number" or order-number
    #[arg(short, long)]
    pub by: Option<String>,
}

/// How a `sort` invocation maps onto the ledger's sort operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortPlan {
    /// Days ago shipped, compared as numbers, ascending
    DaysAgoNumeric,
    /// Days ago shipped, compared as text
    DaysAgoText(SortDirection),
    /// Any field, compared as text
    Field(SortDirection, ShipmentField),
}

impl SortPlan {
    pub fn from_args(args: &SortArgs, default_descending: bool) -> anyhow::Result<Self> {
        let explicit = if args.desc {
            Some(SortDirection::Descending)
        } else if args.asc {
            Some(SortDirection::Ascending)
        } else {
            None
        };

        let plan = match (&args.by, explicit) {
            (None, None) => Self::DaysAgoNumeric,
            (None, Some(direction)) => Self::DaysAgoText(direction),
            (Some(field), direction) => Self::Field(
                direction.unwrap_or(SortDirection::from_descending(default_descending)),
                field.parse()?,
            ),
        };
        Ok(plan)
    }
}

pub fn run(args: &SortArgs, ctx: &AppContext) -> anyhow::Result<()> {
    let plan = SortPlan::from_args(args, ctx.config.descending)?;
    tracing::debug!("Sort plan: {:?}", plan);

    let shipments = match plan {
        SortPlan::DaysAgoNumeric => ctx.ledger.sort_by_days_ago(),
        SortPlan::DaysAgoText(direction) => ctx.ledger.sort_by_days_ago_toggle(direction),
        SortPlan::Field(direction, field) => ctx.ledger.sort_by_field(direction, field),
    };
    println!("{}", format_rows(&shipments, ctx.format)?);
    Ok(())
}
