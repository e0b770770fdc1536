//! `alma list` command.

use crate::context::ServiceContext;
use crate::records::RecordKind;
use crate::store::RecordStore;

/// Execute the `list` command.
///
/// Prints every stored record of `kind` as a table, or as pretty JSON when
/// `json` is set.
///
/// # Errors
///
/// Returns an error string if the store cannot be read or JSON encoding fails.
pub fn run(ctx: &ServiceContext, kind: RecordKind, json: bool) -> Result<(), String> {
    print!("{}", render(ctx, kind, json)?);
    Ok(())
}

fn render(ctx: &ServiceContext, kind: RecordKind, json: bool) -> Result<String, String> {
    let store = RecordStore::new(ctx);
    match kind {
        RecordKind::Request => {
            let repo = store.load_requests()?;
            if json {
                return to_json(repo.as_slice());
            }
            let rows = repo
                .iter()
                .map(|r| {
                    vec![
                        r.id.clone(),
                        r.item.clone(),
                        r.quantity.to_string(),
                        r.requester.clone(),
                        r.status.to_string(),
                    ]
                })
                .collect();
            Ok(table(&["ID", "ITEM", "QTY", "REQUESTER", "STATUS"], rows))
        }
        RecordKind::Loss => {
            let repo = store.load_losses()?;
            if json {
                return to_json(repo.as_slice());
            }
            let rows = repo
                .iter()
                .map(|r| {
                    vec![
                        r.id.clone(),
                        r.item.clone(),
                        r.quantity.to_string(),
                        r.reason.clone(),
                        r.reported_by.clone(),
                    ]
                })
                .collect();
            Ok(table(&["ID", "ITEM", "QTY", "REASON", "REPORTED BY"], rows))
        }
    }
}

fn to_json<T: serde::Serialize>(records: &[T]) -> Result<String, String> {
    serde_json::to_string_pretty(records)
        .map(|s| s + "\n")
        .map_err(|e| format!("Failed to encode records as JSON: {e}"))
}

fn table(headers: &[&str], rows: Vec<Vec<String>>) -> String {
    if rows.is_empty() {
        return "No records found.\n".to_string();
    }

    // Column widths fit the widest cell or the header.
    let widths: Vec<usize> = headers
        .iter()
        .enumerate()
        .map(|(i, h)| rows.iter().map(|r| r[i].len()).max().unwrap_or(0).max(h.len()))
        .collect();

    let mut out = String::new();
    let line = |cells: Vec<String>| {
        let padded: Vec<String> =
            cells.iter().zip(&widths).map(|(c, &w)| format!("{c:<w$}")).collect();
        padded.join("  ").trim_end().to_string() + "\n"
    };
    out.push_str(&line(headers.iter().map(|h| (*h).to_string()).collect()));
    out.push_str(&line(widths.iter().map(|w| "-".repeat(*w)).collect()));
    let total = rows.len();
    for row in rows {
        out.push_str(&line(row));
    }
    out.push_str(&format!("\n{total} record(s) total.\n"));
    out
}
