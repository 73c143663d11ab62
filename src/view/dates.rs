use time::format_description::BorrowedFormatItem;
use time::format_description::well_known::Rfc3339;
use time::macros::format_description;
use time::{Date, OffsetDateTime, PrimitiveDateTime, Time, UtcOffset};

const DATE_TIME_FORMATS: &[&[BorrowedFormatItem<'static>]] = &[
    format_description!("[year]-[month]-[day]T[hour]:[minute]:[second]"),
    format_description!("[year]-[month]-[day]T[hour]:[minute]"),
    format_description!("[year]-[month]-[day] [hour]:[minute]:[second]"),
    format_description!("[year]-[month]-[day] [hour]:[minute]"),
];

const DATE_FORMATS: &[&[BorrowedFormatItem<'static>]] = &[
    format_description!("[year]-[month]-[day]"),
    format_description!(
        "[month repr:long case_sensitive:false] [day padding:none], [year]"
    ),
    format_description!(
        "[month repr:short case_sensitive:false] [day padding:none], [year]"
    ),
];

/// Parse a record's `dateObj` into a comparable timestamp. Offsets are
/// normalized to UTC; values without a time of day sort at midnight.
pub fn parse_date_obj(raw: &str) -> Option<PrimitiveDateTime> {
    let raw = raw.trim();

    if let Ok(ts) = OffsetDateTime::parse(raw, &Rfc3339) {
        let ts = ts.to_offset(UtcOffset::UTC);
        return Some(PrimitiveDateTime::new(ts.date(), ts.time()));
    }

    for fmt in DATE_TIME_FORMATS {
        if let Ok(ts) = PrimitiveDateTime::parse(raw, fmt) {
            return Some(ts);
        }
    }

    for fmt in DATE_FORMATS {
        if let Ok(date) = Date::parse(raw, fmt) {
            return Some(PrimitiveDateTime::new(date, Time::MIDNIGHT));
        }
    }

    None
}

#[cfg(test)]
#[path = "../tests/view/dates_tests.rs"]
mod tests;
