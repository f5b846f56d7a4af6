use chrono::{DateTime, Duration, NaiveDate, NaiveTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;

/// Closed time window sent to the market-data provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateWindow {
    start: DateTime<Utc>,
    end: DateTime<Utc>,
}

impl DateWindow {
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Result<Self, AppError> {
        if start > end {
            return Err(AppError::InvalidRange(format!(
                "period1 ({}) is after period2 ({})",
                start.format("%Y-%m-%d"),
                end.format("%Y-%m-%d")
            )));
        }
        Ok(Self { start, end })
    }

    /// The provider treats `period2` as exclusive, so a single trading day
    /// runs from its midnight to the next midnight.
    pub fn single_day(date: NaiveDate) -> Result<Self, AppError> {
        let start = Utc.from_utc_datetime(&date.and_time(NaiveTime::default()));
        Ok(Self {
            start,
            end: shift(start, Duration::days(1))?,
        })
    }

    /// Widen the window by one day on each side to absorb calendar gaps at the
    /// provider's boundaries.
    pub fn padded(&self) -> Result<Self, AppError> {
        Ok(Self {
            start: shift(self.start, -Duration::days(1))?,
            end: shift(self.end, Duration::days(1))?,
        })
    }

    pub fn start(&self) -> DateTime<Utc> {
        self.start
    }

    pub fn end(&self) -> DateTime<Utc> {
        self.end
    }

    pub fn period1(&self) -> i64 {
        self.start.timestamp()
    }

    pub fn period2(&self) -> i64 {
        self.end.timestamp()
    }
}

fn shift(instant: DateTime<Utc>, by: Duration) -> Result<DateTime<Utc>, AppError> {
    instant.checked_add_signed(by).ok_or_else(|| {
        AppError::InvalidRange(format!(
            "{} is outside the supported date range",
            instant.timestamp()
        ))
    })
}

/// Accepts `YYYY-MM-DD`, RFC 3339, or Unix seconds.
pub fn parse_instant(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    if let Ok(secs) = raw.parse::<i64>() {
        return DateTime::from_timestamp(secs, 0);
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .map(|d| Utc.from_utc_datetime(&d.and_time(NaiveTime::default())))
}

fn required<'a>(value: &'a Option<String>, name: &str) -> Result<&'a str, AppError> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .ok_or_else(|| AppError::InvalidParameters(format!("{name} is required")))
}

fn required_instant(value: &Option<String>, name: &str) -> Result<DateTime<Utc>, AppError> {
    let raw = required(value, name)?;
    parse_instant(raw)
        .ok_or_else(|| AppError::InvalidParameters(format!("{name} is not a valid date: {raw}")))
}

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    pub q: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct HistoricalParams {
    pub ticker: Option<String>,
    pub date: Option<String>,
}

impl HistoricalParams {
    pub fn validated(&self) -> Result<(String, DateTime<Utc>), AppError> {
        let ticker = required(&self.ticker, "ticker")?.to_string();
        let date = required_instant(&self.date, "date")?;
        Ok((ticker, date))
    }
}

#[derive(Debug, Deserialize)]
pub struct BatchHistoricalParams {
    pub tickers: Option<String>,
    pub date: Option<String>,
}

impl BatchHistoricalParams {
    pub fn validated(&self) -> Result<(Vec<String>, DateTime<Utc>), AppError> {
        let tickers: Vec<String> = required(&self.tickers, "tickers")?
            .split(',')
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(str::to_string)
            .collect();
        if tickers.is_empty() {
            return Err(AppError::InvalidParameters("tickers is required".to_string()));
        }
        let date = required_instant(&self.date, "date")?;
        Ok((tickers, date))
    }
}

#[derive(Debug, Deserialize)]
pub struct RangeParams {
    pub symbol: Option<String>,
    pub period1: Option<String>,
    pub period2: Option<String>,
}

impl RangeParams {
    pub fn validated(&self) -> Result<(String, DateTime<Utc>, DateTime<Utc>), AppError> {
        let symbol = required(&self.symbol, "symbol")?.to_string();
        let period1 = required_instant(&self.period1, "period1")?;
        let period2 = required_instant(&self.period2, "period2")?;
        Ok((symbol, period1, period2))
    }
}

/// Closing price for a single day; `close` is absent on non-trading days.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HistoricalClose {
    pub ticker: String,
    pub date: NaiveDate,
    pub close: Option<f64>,
}
