//! Date display

use jiff::civil::DateTime;

/// Render a server timestamp as a day-first calendar date (`dd/mm/yyyy`).
#[must_use]
pub fn format_date(value: DateTime) -> String {
    value.strftime("%d/%m/%Y").to_string()
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;

    use super::*;

    #[test]
    fn dates_are_day_first() {
        let value = date(2024, 3, 7).at(15, 30, 0, 0);

        assert_eq!(format_date(value), "07/03/2024");
    }
}
