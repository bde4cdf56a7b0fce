use std::{error::Error, path::PathBuf};

use clap::{Args, Parser, Subcommand};
use engine::{
    Account, AccountsBoard, Category, Report, ReportsBoard, Role, Selector, export, seed,
};

#[derive(Parser, Debug)]
#[command(name = "jumantik_admin")]
#[command(about = "Non-interactive access to Jumantik reports and accounts")]
struct Cli {
    /// JSON dataset to use instead of the built-in demo data.
    #[arg(long, env = "JUMANTIK_SEED_PATH")]
    seed: Option<PathBuf>,

    /// Log level for stderr output.
    #[arg(long, env = "JUMANTIK_LOG_LEVEL", default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    Reports(Reports),
    Accounts(Accounts),
}

#[derive(Args, Debug)]
struct Reports {
    #[command(subcommand)]
    command: ReportsCommand,
}

#[derive(Subcommand, Debug)]
enum ReportsCommand {
    /// Print the reports that pass the filter.
    List(ReportsListArgs),
    /// Write every report to `laporan.csv`, ignoring any filter.
    Export(ExportArgs),
}

#[derive(Args, Debug)]
struct ReportsListArgs {
    #[arg(long, default_value = "")]
    query: String,
    /// `All`, `Berpotensi` or `Tidak Berpotensi`.
    #[arg(long, default_value = "All")]
    category: String,
}

#[derive(Args, Debug)]
struct ExportArgs {
    /// Directory the file is written to.
    #[arg(long, env = "JUMANTIK_EXPORT_DIR", default_value = ".")]
    out: PathBuf,
    /// Print the CSV instead of writing a file.
    #[arg(long)]
    stdout: bool,
}

#[derive(Args, Debug)]
struct Accounts {
    #[command(subcommand)]
    command: AccountsCommand,
}

#[derive(Subcommand, Debug)]
enum AccountsCommand {
    /// Print the accounts that pass the filter.
    List(AccountsListArgs),
}

#[derive(Args, Debug)]
struct AccountsListArgs {
    #[arg(long, default_value = "")]
    query: String,
    /// `All`, `Warga`, `Petugas` or `Admin`.
    #[arg(long, default_value = "All")]
    role: String,
}

fn report_line(report: &Report) -> String {
    format!(
        "{}\t{}\tRT {}/RW {}\t{}\t{}\t{}",
        report.id,
        report.date,
        report.rt,
        report.rw,
        report.address,
        report.category,
        report.reporter
    )
}

fn account_line(position: usize, account: &Account) -> String {
    let unit = if account.has_unit() {
        format!("RT {}/RW {}", account.rt, account.rw)
    } else {
        "-".to_string()
    };
    format!("{position}\t{}\t{unit}\t{}", account.name, account.role)
}

fn list_reports(
    reports: Vec<Report>,
    args: ReportsListArgs,
) -> Result<(), Box<dyn Error + Send + Sync>> {
    let mut board = ReportsBoard::new(reports);
    board.set_selector(Selector::<Category>::parse(&args.category)?);
    board.set_query(args.query);

    let visible = board.visible();
    tracing::debug!(
        shown = visible.len(),
        total = board.records().len(),
        "reports filtered"
    );
    for report in visible {
        println!("{}", report_line(report));
    }
    Ok(())
}

fn list_accounts(
    accounts: Vec<Account>,
    args: AccountsListArgs,
) -> Result<(), Box<dyn Error + Send + Sync>> {
    let mut board = AccountsBoard::new(accounts);
    board.set_selector(Selector::<Role>::parse(&args.role)?);
    board.set_query(args.query);

    for (i, account) in board.visible().into_iter().enumerate() {
        println!("{}", account_line(i + 1, account));
    }
    Ok(())
}

fn export_reports(
    reports: &[Report],
    args: ExportArgs,
) -> Result<(), Box<dyn Error + Send + Sync>> {
    if args.stdout {
        println!("{}", export::reports_csv(reports)?);
        return Ok(());
    }
    let path = export::write_reports(&args.out, reports)?;
    println!("exported {} reports: {}", reports.len(), path.display());
    Ok(())
}

fn main() -> Result<(), Box<dyn Error + Send + Sync>> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(format!(
            "jumantik_admin={level},engine={level}",
            level = cli.log_level
        ))
        .with_writer(std::io::stderr)
        .init();

    let dataset = seed::load_or_builtin(cli.seed.as_deref())?;

    match cli.command {
        Command::Reports(Reports {
            command: ReportsCommand::List(args),
        }) => list_reports(dataset.reports, args)?,
        Command::Reports(Reports {
            command: ReportsCommand::Export(args),
        }) => export_reports(&dataset.reports, args)?,
        Command::Accounts(Accounts {
            command: AccountsCommand::List(args),
        }) => list_accounts(dataset.accounts, args)?,
    }

    Ok(())
}
