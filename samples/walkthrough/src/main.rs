//! viewset-walkthrough - prints the three traversals of a ViewSet
//!
//! Usage:
//!   viewset-walkthrough 7 3 2 9 4 --remove 3
//!
//! With no values, the set {7, 3, 2, 9, 4} is used.

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use viewset::{Cursor, View, ViewSet};

const DEFAULT_VALUES: [i64; 5] = [7, 3, 2, 9, 4];

#[derive(Parser)]
#[command(name = "viewset-walkthrough")]
#[command(about = "Builds a ViewSet and prints its ascending, side-cross and prime traversals")]
struct Cli {
    /// Values to add, in order
    #[arg(allow_negative_numbers = true)]
    values: Vec<i64>,

    /// Values to remove after all additions
    #[arg(long = "remove", value_name = "VALUE", allow_negative_numbers = true)]
    removals: Vec<i64>,

    /// Print the container as JSON after the traversals
    #[arg(long)]
    json: bool,
}

/// Walks a cursor from `begin()` to `end()`, reading each value.
fn traverse<V: View>(begin: &Cursor<V>) -> anyhow::Result<Vec<i64>> {
    let mut cursor = begin.begin();
    let end = begin.end();
    let mut visited = Vec::new();
    while cursor.try_ne(&end)? {
        visited.push(cursor.value()?);
        cursor.advance()?;
    }
    Ok(visited)
}

fn print_traversal<V: View>(begin: &Cursor<V>) -> anyhow::Result<()> {
    let values = traverse(begin).with_context(|| format!("walking the {} view", begin.kind()))?;
    println!("{:>10}: {values:?}", begin.kind());
    Ok(())
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "viewset=info,viewset_walkthrough=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();
    let values = if cli.values.is_empty() {
        DEFAULT_VALUES.to_vec()
    } else {
        cli.values
    };

    let mut set = ViewSet::with_capacity(values.len());
    set.extend(values);
    tracing::info!(size = set.size(), "container built");

    for value in cli.removals {
        set.remove_element(value)
            .with_context(|| format!("removing {value}"))?;
    }

    println!("{:>10}: {}", "size", set.size());
    print_traversal(&set.ascending())?;
    print_traversal(&set.side_cross())?;
    print_traversal(&set.prime())?;

    if cli.json {
        println!("{}", serde_json::to_string(&set)?);
    }

    Ok(())
}
