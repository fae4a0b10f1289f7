//! Shipment lookup commands

use clap::Args;

use crate::output::format_rows;
use crate::AppContext;

#[derive(Args)]
pub struct GetArgs {
    /// Shipment number
    pub number: String,

    /// Include full name and days ago shipped
    #[arg(short, long)]
    pub computed: bool,
}

#[derive(Args)]
pub struct OrderArgs {
    /// Order number
    pub order_number: String,
}

#[derive(Args)]
pub struct RootArgs {
    /// Shipment number to start from
    pub number: String,

    /// Print every shipment in the chain, ending with the root
    #[arg(long)]
    pub lineage: bool,
}

#[derive(Args)]
pub struct ChildrenArgs {
    /// Parent shipment number
    pub number: String,
}

pub fn run_list(ctx: &AppContext) -> anyhow::Result<()> {
    let records = ctx.ledger.records();
    if records.is_empty() {
        tracing::info!("No shipments loaded");
        return Ok(());
    }
    println!("{}", format_rows(records, ctx.format)?);
    Ok(())
}

pub fn run_get(args: &GetArgs, ctx: &AppContext) -> anyhow::Result<()> {
    let out = if args.computed {
        let shipment = ctx.ledger.find_computed_by_number(&args.number)?;
        format_rows(&[shipment], ctx.format)?
    } else {
        let shipment = ctx.ledger.find_by_number(&args.number)?;
        format_rows(&[shipment], ctx.format)?
    };
    println!("{}", out);
    Ok(())
}

pub fn run_order(args: &OrderArgs, ctx: &AppContext) -> anyhow::Result<()> {
    let shipments = ctx
        .ledger
        .find_all_computed_by_order_number(&args.order_number)?;
    tracing::info!(
        "Order {} has {} shipments",
        args.order_number,
        shipments.len()
    );
    println!("{}", format_rows(&shipments, ctx.format)?);
    Ok(())
}

pub fn run_root(args: &RootArgs, ctx: &AppContext) -> anyhow::Result<()> {
    if args.lineage {
        let chain = ctx.ledger.lineage(&args.number)?;
        println!("{}", format_rows(&chain, ctx.format)?);
    } else {
        let root = ctx.ledger.resolve_root(&args.number)?;
        println!("{}", format_rows(&[root], ctx.format)?);
    }
    Ok(())
}

pub fn run_children(args: &ChildrenArgs, ctx: &AppContext) -> anyhow::Result<()> {
    let children = ctx.ledger.children_of(&args.number)?;
    if children.is_empty() {
        println!("Shipment {} has no child shipments", args.number);
        return Ok(());
    }
    println!("{}", format_rows(&children, ctx.format)?);
    Ok(())
}
