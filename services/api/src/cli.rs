use crate::commands::{run_analysis_export, run_detail_export, run_table_export};
use crate::server;
use clap::{Args, Parser, Subcommand};
use export_engine::error::AppError;
use export_engine::exports::ExportFormat;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "Export Engine",
    about = "Compose CSV, spreadsheet, print and analysis report exports",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Compose an export from JSON input and write it to the output directory
    Export {
        #[command(subcommand)]
        command: ExportCommand,
    },
}

#[derive(Subcommand, Debug)]
enum ExportCommand {
    /// Export a batch of records as CSV, Excel markup or a print table
    Table(TableArgs),
    /// Export one record as a sectioned print document
    Detail(DetailArgs),
    /// Export a digital analysis report
    Analysis(AnalysisArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

#[derive(Args, Debug)]
pub(crate) struct TableArgs {
    /// JSON file holding an array of records
    #[arg(long)]
    pub(crate) input: PathBuf,
    /// Column list as `key=Header,key=Header`
    #[arg(long)]
    pub(crate) columns: String,
    /// Output format: csv, xls or print
    #[arg(long, default_value = "csv", value_parser = crate::infra::parse_format)]
    pub(crate) format: ExportFormat,
    /// Document title, also used for the file name
    #[arg(long, default_value = "Export")]
    pub(crate) title: String,
    /// Override the configured output directory
    #[arg(long)]
    pub(crate) out: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub(crate) struct DetailArgs {
    /// JSON file holding a single record
    #[arg(long)]
    pub(crate) input: PathBuf,
    /// JSON file holding the section layout
    #[arg(long)]
    pub(crate) sections: PathBuf,
    /// Document title, also used for the file name
    #[arg(long)]
    pub(crate) title: String,
    /// Override the configured output directory
    #[arg(long)]
    pub(crate) out: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub(crate) struct AnalysisArgs {
    /// JSON file holding the analysis result
    #[arg(long)]
    pub(crate) input: PathBuf,
    /// Business name shown in the report title
    #[arg(long)]
    pub(crate) subject: String,
    /// Website shown under the title
    #[arg(long)]
    pub(crate) url: Option<String>,
    /// Overall score shown in the ring; the ring is omitted without it
    #[arg(long)]
    pub(crate) score: Option<f64>,
    /// Override the configured output directory
    #[arg(long)]
    pub(crate) out: Option<PathBuf>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Export { command } => match command {
            ExportCommand::Table(args) => run_table_export(args),
            ExportCommand::Detail(args) => run_detail_export(args),
            ExportCommand::Analysis(args) => run_analysis_export(args),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_serve_without_a_subcommand() {
        let cli = Cli::try_parse_from(["export-engine-api"]).expect("parses");
        assert!(cli.command.is_none());
    }

    #[test]
    fn parses_table_export_arguments() {
        let cli = Cli::try_parse_from([
            "export-engine-api",
            "export",
            "table",
            "--input",
            "leads.json",
            "--columns",
            "name=Name,email=E-mail",
            "--format",
            "xls",
            "--title",
            "Leads",
        ])
        .expect("parses");

        match cli.command {
            Some(Command::Export {
                command: ExportCommand::Table(args),
            }) => {
                assert_eq!(args.format, ExportFormat::Spreadsheet);
                assert_eq!(args.title, "Leads");
                assert!(args.out.is_none());
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn rejects_unknown_formats() {
        let result = Cli::try_parse_from([
            "export-engine-api",
            "export",
            "table",
            "--input",
            "leads.json",
            "--columns",
            "name",
            "--format",
            "docx",
        ]);
        assert!(result.is_err());
    }
}
