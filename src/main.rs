//! Console front end: builds trees from the command line and prints their traversals, or sorts and
//! searches a list of numbers.

use std::io;
use std::process;

use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use tracing::debug;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

use classic_ds::{search, sort, BinaryTree, Order, OrderedTree};

/// Build trees and search sorted arrays from the command line
#[derive(Parser, Debug)]
#[command(name = "classic-ds")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Log more (-d info, -dd debug, -ddd trace). RUST_LOG takes precedence
    #[arg(short, long, action = ArgAction::Count, global = true)]
    debug: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Build a tree, remove some values again, and print a traversal
    Tree {
        /// Which kind of tree to build
        #[arg(short, long, value_enum, default_value_t = Kind::Ordered)]
        kind: Kind,

        /// Traversal to print
        #[arg(short, long, value_enum, default_value_t = Traversal::In)]
        order: Traversal,

        /// Value to remove once every value has been inserted (repeatable)
        #[arg(short, long, value_name = "VALUE", allow_negative_numbers = true)]
        remove: Vec<i64>,

        /// Values to insert, in order
        #[arg(allow_negative_numbers = true)]
        values: Vec<i64>,
    },
    /// Selection sort the values, then binary search them for a key
    Search {
        /// Value to look for
        #[arg(short, long, allow_negative_numbers = true)]
        key: i64,

        /// First index to search (default: 0)
        #[arg(long)]
        start: Option<usize>,

        /// One past the last index to search (default: number of values)
        #[arg(long)]
        end: Option<usize>,

        /// Values to sort and search
        #[arg(allow_negative_numbers = true)]
        values: Vec<i64>,
    },
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum Kind {
    /// Binary search tree, duplicates ignored
    Ordered,
    /// Level-order binary tree, duplicates kept
    Plain,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum Traversal {
    In,
    Pre,
    Post,
    Level,
}

impl From<Traversal> for Order {
    fn from(traversal: Traversal) -> Self {
        match traversal {
            Traversal::In => Order::InOrder,
            Traversal::Pre => Order::PreOrder,
            Traversal::Post => Order::PostOrder,
            Traversal::Level => Order::LevelOrder,
        }
    }
}

fn main() {
    let cli = Cli::parse();
    setup_logging(cli.debug);

    if let Err(e) = run(cli.command) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn setup_logging(verbosity: u8) {
    let level = match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };
    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(true)
        .init();
}

fn run(command: Command) -> classic_ds::Result<()> {
    match command {
        Command::Tree {
            kind,
            order,
            remove,
            values,
        } => {
            debug!(
                ?kind,
                ?order,
                inserts = values.len(),
                removes = remove.len(),
                "building tree"
            );
            let (rendered, size) = build_tree(kind, order.into(), values, &remove);
            println!("{}", rendered.join(" "));
            println!("size={size}");
        }
        Command::Search {
            key,
            start,
            end,
            mut values,
        } => {
            sort::selection_sort(&mut values);
            let range = start.unwrap_or(0)..end.unwrap_or(values.len());
            debug!(?range, len = values.len(), "searching sorted values");

            let rendered: Vec<_> = values.iter().map(i64::to_string).collect();
            println!("{}", rendered.join(" "));
            match search::find_in(&values, &key, range)? {
                Some(index) => println!("index={index}"),
                None => println!("not found"),
            }
        }
    }
    Ok(())
}

/// Inserts `values`, removes `remove`, and returns the traversal (as strings) and the final size.
fn build_tree(
    kind: Kind,
    order: Order,
    values: Vec<i64>,
    remove: &[i64],
) -> (Vec<String>, usize) {
    let mut rendered = Vec::new();
    let size = match kind {
        Kind::Ordered => {
            let mut tree: OrderedTree<_> = values.into_iter().collect();
            for value in remove {
                tree.remove(value);
            }
            tree.traverse(order, |v| rendered.push(v.to_string()));
            tree.size()
        }
        Kind::Plain => {
            let mut tree: BinaryTree<_> = values.into_iter().collect();
            for value in remove {
                tree.remove(value);
            }
            tree.traverse(order, |v| rendered.push(v.to_string()));
            tree.size()
        }
    };
    (rendered, size)
}
