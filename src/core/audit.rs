use crate::db::Db;
use crate::errors::AppResult;
use ansi_term::Colour;

fn strip_ansi(s: &str) -> String {
    let re = regex::Regex::new(r"\x1B\[[0-9;]*[mK]").unwrap();
    re.replace_all(s, "").into_owned()
}

/// Restituisce il colore ANSI in base all'operazione
fn color_for_operation(op: &str) -> Colour {
    match op {
        "set" => Colour::Green,
        "permit" => Colour::Cyan,
        "clear" => Colour::Red,
        "default" => Colour::Yellow,
        "export" => Colour::Blue,
        "init" => Colour::RGB(255, 153, 51), // arancione
        _ => Colour::White,
    }
}

pub struct AuditLogic;

impl AuditLogic {
    pub fn print_log(db: &Db) -> AppResult<()> {
        let entries = crate::db::log::read_log(db)?;

        if entries.is_empty() {
            println!("No audit entries yet.");
            return Ok(());
        }

        let id_w = entries
            .iter()
            .map(|e| e.id.to_string().len())
            .max()
            .unwrap_or(2);
        let date_w = entries.iter().map(|e| e.date.len()).max().unwrap_or(10);
        let op_w = entries
            .iter()
            .map(|e| {
                if e.target.is_empty() {
                    e.operation.len()
                } else {
                    e.operation.len() + e.target.len() + 3
                }
            })
            .max()
            .unwrap_or(10)
            .min(40);

        println!("📜 Audit log:\n");

        for e in entries {
            let color = color_for_operation(&e.operation);
            let op_target = if e.target.is_empty() {
                e.operation.clone()
            } else {
                format!("{} ({})", e.operation, e.target)
            };
            let painted = color.paint(op_target.as_str()).to_string();
            // Pad on the stripped width: the ANSI bytes don't take columns.
            let pad = op_w.saturating_sub(strip_ansi(&painted).len());

            println!(
                "{:>id_w$}  {:<date_w$}  {}{}  {}",
                e.id,
                e.date,
                painted,
                " ".repeat(pad),
                e.message,
            );
        }

        Ok(())
    }
}
