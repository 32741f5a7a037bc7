use crate::cli::{AnalysisArgs, DetailArgs, TableArgs};
use crate::infra::read_json;
use export_engine::config::AppConfig;
use export_engine::error::AppError;
use export_engine::exports::{
    parse_column_list, AnalysisExportRequest, DetailExportRequest, DetailSectionSpec,
    ExportNotice, ExportService, FilesystemSurface, NoticeLevel, Record, TableExportRequest,
};
use export_engine::telemetry;
use std::path::{Path, PathBuf};
use std::sync::Arc;

fn export_service(out: Option<PathBuf>) -> Result<(ExportService, PathBuf), AppError> {
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;

    let output_dir = out.unwrap_or(config.export.output_dir);
    let surface = Arc::new(FilesystemSurface::new(output_dir.clone()));
    Ok((ExportService::new(surface, config.export.brand), output_dir))
}

pub(crate) fn run_table_export(args: TableArgs) -> Result<(), AppError> {
    let TableArgs {
        input,
        columns,
        format,
        title,
        out,
    } = args;

    let records: Vec<Record> = read_json(&input)?;
    let (service, output_dir) = export_service(out)?;
    let notice = service.export_table(&TableExportRequest {
        format,
        title,
        columns: parse_column_list(&columns),
        records,
    });
    report_notice(&notice, &output_dir)
}

pub(crate) fn run_detail_export(args: DetailArgs) -> Result<(), AppError> {
    let DetailArgs {
        input,
        sections,
        title,
        out,
    } = args;

    let record: Record = read_json(&input)?;
    let sections: Vec<DetailSectionSpec> = read_json(&sections)?;
    let (service, output_dir) = export_service(out)?;
    let notice = service.export_detail(&DetailExportRequest {
        title,
        record,
        sections,
    });
    report_notice(&notice, &output_dir)
}

pub(crate) fn run_analysis_export(args: AnalysisArgs) -> Result<(), AppError> {
    let AnalysisArgs {
        input,
        subject,
        url,
        score,
        out,
    } = args;

    let result = read_json(&input)?;
    let (service, output_dir) = export_service(out)?;
    let notice = service.export_analysis(&AnalysisExportRequest {
        subject_name: subject,
        subject_url: url,
        overall_score: score,
        result,
    });
    report_notice(&notice, &output_dir)
}

/// Prints the notice; an error-level notice fails the command.
fn report_notice(notice: &ExportNotice, output_dir: &Path) -> Result<(), AppError> {
    match (notice.level, &notice.filename) {
        (NoticeLevel::Success, Some(filename)) => {
            println!("{}: {}", notice.message, output_dir.join(filename).display());
        }
        (NoticeLevel::Success, None) => println!("{}", notice.message),
        (NoticeLevel::Warning, _) => println!("warning: {}", notice.message),
        (NoticeLevel::Error, _) => return Err(AppError::Failed(notice.message.clone())),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn notice(level: NoticeLevel, filename: Option<&str>) -> ExportNotice {
        ExportNotice {
            level,
            message: "Export failed: render error".to_string(),
            filename: filename.map(str::to_string),
        }
    }

    #[test]
    fn error_notice_fails_the_command() {
        let err = report_notice(&notice(NoticeLevel::Error, None), Path::new("exports"))
            .expect_err("error notice must fail");
        assert!(matches!(err, AppError::Failed(ref message) if message == "Export failed: render error"));
    }

    #[test]
    fn success_and_warning_notices_succeed() {
        let out = Path::new("exports");
        report_notice(&notice(NoticeLevel::Success, Some("leads_2025-01-01.csv")), out)
            .expect("success is ok");
        report_notice(&notice(NoticeLevel::Warning, None), out).expect("warning is ok");
    }
}
