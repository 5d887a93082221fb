use anyhow::Result;

use crate::ledger::Ledger;
use crate::models::{Filter, RecordType};
use crate::ui::app::App;
use crate::ui::util::{format_money, truncate};
use crate::ui::view::{ListItem, ListView, ViewModel};

pub(crate) fn as_cli(args: &[String], ledger: Ledger) -> Result<()> {
    match args[1].as_str() {
        "add" | "a" => cli_add(&args[2..], ledger),
        "list" | "ls" => cli_list(&args[2..], &ledger),
        "delete" | "rm" => cli_delete(&args[2..], ledger),
        "summary" | "s" => cli_summary(&ledger),
        "categories" => {
            cli_categories();
            Ok(())
        }
        "--help" | "-h" | "help" => {
            print_usage();
            Ok(())
        }
        "--version" | "-V" | "version" => {
            println!("ledgerui {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        other => {
            print_usage();
            anyhow::bail!("Unknown command: {other}");
        }
    }
}

fn print_usage() {
    println!("LedgerUI — local-only income/expense ledger");
    println!();
    println!("Usage: ledgerui [--memory] [command]");
    println!();
    println!("Commands:");
    println!("  (none)                        Launch interactive TUI");
    println!("  add <amount>                  Record an expense (or income with --income)");
    println!("    --income | --expense        Record type (default: expense)");
    println!("    --type <income|expense>     Same as above");
    println!("    --category <name>           Category (default: first for the type)");
    println!("    --note <text>               Free-text note");
    println!("    --date <YYYY-MM-DD>         Date (default: today)");
    println!("  list [all|income|expense]     List records, newest first");
    println!("  delete <id>                   Delete a record by id");
    println!("  summary                       Print income, expense and balance");
    println!("  categories                    List categories by type");
    println!("  --memory                      Use a throwaway in-memory ledger");
    println!("  --help, -h                    Show this help");
    println!("  --version, -V                 Show version");
}

fn flag_value<'a>(args: &'a [String], flag: &str) -> Option<&'a str> {
    args.windows(2)
        .find(|w| w[0] == flag)
        .map(|w| w[1].as_str())
}

fn cli_add(args: &[String], ledger: Ledger) -> Result<()> {
    // The amount is the first argument that is neither a flag nor a flag's value.
    let mut amount = None;
    let mut skip_next = false;
    for arg in args {
        if skip_next {
            skip_next = false;
            continue;
        }
        match arg.as_str() {
            "--category" | "--note" | "--date" | "--type" => skip_next = true,
            "--income" | "--expense" => {}
            other => {
                if amount.is_none() {
                    amount = Some(other);
                }
            }
        }
    }
    let Some(amount) = amount else {
        anyhow::bail!("Usage: ledgerui add <amount> [--income] [--category <name>] [--note <text>] [--date <YYYY-MM-DD>]");
    };

    let kind = if let Some(t) = flag_value(args, "--type") {
        RecordType::parse(t).ok_or_else(|| anyhow::anyhow!("Unknown type '{t}' (use income or expense)"))?
    } else if args.iter().any(|a| a == "--income") {
        RecordType::Income
    } else {
        RecordType::Expense
    };

    let mut app = App::new(ledger);
    app.form.set_kind(kind);
    app.form.amount = amount.to_string();
    if let Some(category) = flag_value(args, "--category") {
        if !app.form.select_category(category) {
            let allowed = kind.categories().join(", ");
            anyhow::bail!("'{category}' is not one of the {kind} categories: {allowed}");
        }
    }
    if let Some(note) = flag_value(args, "--note") {
        app.form.note = note.to_string();
    }
    if let Some(date) = flag_value(args, "--date") {
        app.form.date = date.to_string();
    }

    let record = app.submit()?;
    println!(
        "Added {} {}{} {} on {}",
        record.id,
        record.kind.sign(),
        format_money(record.amount),
        record.category,
        record.date
    );
    Ok(())
}

fn cli_list(args: &[String], ledger: &Ledger) -> Result<()> {
    let filter = match args.first() {
        Some(arg) => Filter::parse(arg)
            .ok_or_else(|| anyhow::anyhow!("Unknown filter '{arg}' (use all, income or expense)"))?,
        None => Filter::All,
    };

    let view = ViewModel::build(ledger.all(), filter);
    let items = match &view.list {
        ListView::Empty => {
            println!("No records");
            return Ok(());
        }
        ListView::Items(items) => items,
    };

    println!("{:<26} {:<24} {:<28} {:>14}", "ID", "Title", "Category · Date", "Amount");
    println!("{}", "─".repeat(95));
    for item in items {
        println!(
            "{:<26} {:<24} {:<28} {:>14}",
            item.id,
            truncate(&item.title, 24),
            item.meta,
            item.amount
        );
    }
    Ok(())
}

fn cli_delete(args: &[String], mut ledger: Ledger) -> Result<()> {
    let Some(id) = args.first() else {
        anyhow::bail!("Usage: ledgerui delete <id>");
    };
    let title = ledger.get(id).map(|r| ListItem::from(r).title);

    ledger.delete(id)?;
    match title {
        Some(title) => println!("Deleted {id} ({title})"),
        None => println!("No record with id {id}"),
    }
    Ok(())
}

fn cli_summary(ledger: &Ledger) -> Result<()> {
    if ledger.is_empty() {
        println!("No records");
        return Ok(());
    }
    let view = ViewModel::build(ledger.all(), Filter::All);
    println!("LedgerUI — {} records", ledger.len());
    println!("{}", "─".repeat(40));
    println!("  Income:     {:>16}", view.summary.income);
    println!("  Expense:    {:>16}", view.summary.expense);
    println!("  Balance:    {:>16}", view.summary.balance);
    Ok(())
}

fn cli_categories() {
    for kind in [RecordType::Income, RecordType::Expense] {
        println!("{kind}:");
        for label in kind.categories() {
            println!("  {label}");
        }
    }
}
