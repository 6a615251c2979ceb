//! Money and label formatting for the POS screen

/// Bolivianos with two decimals, e.g. `Bs. 17.00`.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(format_bs(8.5), "Bs. 8.50");
/// ```
pub fn format_bs(value: f64) -> String {
    // -0.00 would otherwise show up after subtracting floats
    let value = if value.abs() < 0.005 { 0.0 } else { value };
    format!("Bs. {:.2}", value)
}

/// Header label for the order being built, e.g. `Ticket N°58`.
pub fn ticket_label(number: u64) -> String {
    format!("Ticket N°{}", number)
}
