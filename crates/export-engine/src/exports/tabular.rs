use std::fmt::{self, Write as _};
use tracing::debug;

use super::document::{export_filename, ExportDocument, ExportFormat};
use super::error::ExportError;
use super::markup::{escape_html, PageShell, RenderContext};
use super::schema::{Column, Record};
use super::value::{display_value, Rendering};

/// Lets spreadsheet tools detect UTF-8 in delimited text.
pub const BYTE_ORDER_MARK: char = '\u{feff}';

const MAX_SHEET_NAME_CHARS: usize = 31;

const SPREADSHEET_STYLES: &str = r#"
table{border-collapse:collapse;font-family:Calibri,Arial,sans-serif;font-size:11pt}
th{background:#4f46e5;color:#ffffff;font-weight:bold;border:1px solid #c7d2fe;padding:6px 10px;text-align:left}
td{border:1px solid #e5e7eb;padding:4px 10px;mso-number-format:"\@";vertical-align:top}
"#;

const ZEBRA_ROW_STYLE: &str = " style=\"background:#f3f4f6\"";

/// Compose a tabular export in the requested representation.
pub fn export_table(
    context: &RenderContext,
    format: ExportFormat,
    records: &[Record],
    columns: &[Column],
    title: &str,
) -> Result<ExportDocument, ExportError> {
    match format {
        ExportFormat::Csv => to_delimited_text(context, records, columns, title),
        ExportFormat::Spreadsheet => to_spreadsheet_markup(context, records, columns, title),
        ExportFormat::Print => to_print_document(context, records, columns, title),
    }
}

pub fn to_delimited_text(
    context: &RenderContext,
    records: &[Record],
    columns: &[Column],
    base_name: &str,
) -> Result<ExportDocument, ExportError> {
    ensure_records(records)?;

    let buffer = BYTE_ORDER_MARK.to_string().into_bytes();
    let mut writer = csv::WriterBuilder::new()
        .quote_style(csv::QuoteStyle::Always)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(buffer);

    writer.write_record(columns.iter().map(|column| column.header.as_str()))?;
    for record in records {
        writer.write_record(
            columns
                .iter()
                .map(|column| display_value(column.lookup(record), Rendering::Tabular)),
        )?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|err| ExportError::Buffer(err.into_error()))?;
    let mut content = String::from_utf8(bytes)?;
    if content.ends_with('\n') {
        content.pop();
    }

    debug!(
        rows = records.len(),
        columns = columns.len(),
        "composed delimited text export"
    );

    Ok(ExportDocument::new(
        content,
        export_filename(base_name, ExportFormat::Csv.extension(), context.generated_at.date()),
        ExportFormat::Csv.mime_type(),
    ))
}

pub fn to_spreadsheet_markup(
    context: &RenderContext,
    records: &[Record],
    columns: &[Column],
    sheet_name: &str,
) -> Result<ExportDocument, ExportError> {
    ensure_records(records)?;

    let sheet = worksheet_name(sheet_name);
    let mut html = String::new();
    writeln!(
        html,
        r#"<html xmlns:o="urn:schemas-microsoft-com:office:office" xmlns:x="urn:schemas-microsoft-com:office:excel" xmlns="http://www.w3.org/TR/REC-html40">"#
    )?;
    writeln!(
        html,
        r#"<head><meta http-equiv="Content-Type" content="text/html; charset=UTF-8">"#
    )?;
    writeln!(
        html,
        "<!--[if gte mso 9]><xml><x:ExcelWorkbook><x:ExcelWorksheets><x:ExcelWorksheet><x:Name>{}</x:Name><x:WorksheetOptions><x:DisplayGridlines/></x:WorksheetOptions></x:ExcelWorksheet></x:ExcelWorksheets></x:ExcelWorkbook></xml><![endif]-->",
        escape_html(&sheet)
    )?;
    writeln!(html, "<style>{SPREADSHEET_STYLES}</style></head><body>")?;
    write_table(&mut html, records, columns, Rendering::Tabular, ZEBRA_ROW_STYLE)?;
    write!(html, "</body></html>")?;

    debug!(
        rows = records.len(),
        columns = columns.len(),
        sheet = %sheet,
        "composed spreadsheet export"
    );

    Ok(ExportDocument::new(
        html,
        export_filename(
            sheet_name,
            ExportFormat::Spreadsheet.extension(),
            context.generated_at.date(),
        ),
        ExportFormat::Spreadsheet.mime_type(),
    ))
}

pub fn to_print_document(
    context: &RenderContext,
    records: &[Record],
    columns: &[Column],
    title: &str,
) -> Result<ExportDocument, ExportError> {
    ensure_records(records)?;

    let shell = PageShell {
        context,
        title,
        subtitle: Some(format!("Total records: {}", records.len())),
        extra_styles: "",
    };
    let html = shell.render(|out| write_table(out, records, columns, Rendering::Document, ""))?;

    debug!(
        rows = records.len(),
        columns = columns.len(),
        "composed print table export"
    );

    Ok(ExportDocument::new(
        html,
        export_filename(title, ExportFormat::Print.extension(), context.generated_at.date()),
        ExportFormat::Print.mime_type(),
    ))
}

fn ensure_records(records: &[Record]) -> Result<(), ExportError> {
    if records.is_empty() {
        return Err(ExportError::NothingToExport);
    }
    Ok(())
}

fn write_table(
    out: &mut String,
    records: &[Record],
    columns: &[Column],
    rendering: Rendering,
    zebra_style: &str,
) -> fmt::Result {
    out.push_str("<table><thead><tr>");
    for column in columns {
        write!(out, "<th>{}</th>", escape_html(&column.header))?;
    }
    out.push_str("</tr></thead><tbody>\n");

    for (index, record) in records.iter().enumerate() {
        let style = if index % 2 == 1 { zebra_style } else { "" };
        write!(out, "<tr{style}>")?;
        for column in columns {
            let value = display_value(column.lookup(record), rendering);
            write!(out, "<td>{}</td>", escape_html(&value))?;
        }
        out.push_str("</tr>\n");
    }

    out.push_str("</tbody></table>\n");
    Ok(())
}

/// Excel rejects sheet names longer than 31 characters or containing `[]:*?/\`.
fn worksheet_name(raw: &str) -> String {
    let cleaned: String = raw
        .chars()
        .filter(|c| !matches!(c, '[' | ']' | ':' | '*' | '?' | '/' | '\\'))
        .take(MAX_SHEET_NAME_CHARS)
        .collect();
    let cleaned = cleaned.trim();
    if cleaned.is_empty() {
        "Sheet1".to_string()
    } else {
        cleaned.to_string()
    }
}
