// src/common/dates.rs

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime};

const DATE_TIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
];

const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d", "%b %d, %Y"];

/// Interpreta uma string "tipo data". Timestamps com offset mantêm o dia como
/// foi escrito (não convertemos para UTC).
pub fn parse_date_like(text: &str) -> Option<NaiveDateTime> {
    let s = text.trim();
    if s.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.naive_local());
    }

    for fmt in DATE_TIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(dt);
        }
    }

    for fmt in DATE_FORMATS {
        if let Ok(d) = NaiveDate::parse_from_str(s, fmt) {
            return d.and_hms_opt(0, 0, 0);
        }
    }

    // "2024-01" -> primeiro dia do mês
    NaiveDate::parse_from_str(&format!("{s}-01"), "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
}

/// "Jan 5, 2024". Datas inválidas voltam intactas.
pub fn format_date_label(text: &str) -> String {
    match parse_date_like(text) {
        Some(dt) => format_day(dt.date()),
        None => text.to_string(),
    }
}

pub fn format_day(day: NaiveDate) -> String {
    format!("{} {}, {:04}", day.format("%b"), day.day(), day.year())
}

/// Chave de ordenação de períodos: datas válidas em ordem cronológica
/// primeiro, depois os rótulos que não são datas em ordem lexicográfica.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum PeriodKey {
    Date(NaiveDateTime),
    Label(String),
}

impl PeriodKey {
    pub fn from_text(text: &str) -> Self {
        match parse_date_like(text) {
            Some(dt) => PeriodKey::Date(dt),
            None => PeriodKey::Label(text.to_string()),
        }
    }
}

/// Chave canônica de um balde diário. O rótulo formatado é só para exibição,
/// o agrupamento e a ordenação usam o dia do calendário.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DayKey {
    Day(NaiveDate),
    Raw(String),
}

impl DayKey {
    pub fn from_text(text: &str) -> Self {
        match parse_date_like(text) {
            Some(dt) => DayKey::Day(dt.date()),
            None => DayKey::Raw(text.to_string()),
        }
    }

    pub fn label(&self) -> String {
        match self {
            DayKey::Day(day) => format_day(*day),
            DayKey::Raw(raw) => raw.clone(),
        }
    }
}
