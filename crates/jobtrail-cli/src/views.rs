use jobtrail_store::Summary;
use jobtrail_types::{Record, date};

/// Plain aligned table, stdout only.
pub fn print_rows(rows: &[Record]) {
    let company_width = rows
        .iter()
        .map(|r| r.company.len())
        .chain(["Company".len()])
        .max()
        .unwrap_or(0);
    let status_width = rows
        .iter()
        .map(|r| r.status.len())
        .chain(["Status".len()])
        .max()
        .unwrap_or(0);

    println!(
        "{:<cw$}  {:<sw$}  {:>8}  {}",
        "Company",
        "Status",
        "Quantity",
        "Date",
        cw = company_width,
        sw = status_width
    );
    for row in rows {
        println!(
            "{:<cw$}  {:<sw$}  {:>8}  {}",
            row.company,
            row.status,
            row.quantity,
            date::encode(row.date),
            cw = company_width,
            sw = status_width
        );
    }
}

pub fn print_summary(summary: &Summary) {
    println!("{}", "=".repeat(60));
    if !summary.todays_rows.is_empty() {
        println!("Today's applications:");
        print_rows(&summary.todays_rows);
    }
    println!("Applications today: {}", summary.today);
    println!("Applications total: {}", summary.total);
}
