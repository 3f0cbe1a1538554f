//! Output Rendering
//!
//! Plain-text tables for humans, JSON documents for scripts.

use std::fmt::Display;
use std::io::{self, Write};

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;
use unicode_width::UnicodeWidthStr;

use crate::domain::value_objects::Money;

/// Output format for rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable text output
    #[default]
    Text,
    /// JSON output for scripting
    Json,
}

impl OutputFormat {
    pub fn from_json_flag(json: bool) -> Self {
        if json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        }
    }

    pub fn is_json(&self) -> bool {
        *self == OutputFormat::Json
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Align {
    Left,
    Right,
}

/// Column-aligned plain-text table
#[derive(Debug, Clone)]
pub struct Table {
    headers: Vec<String>,
    align: Vec<Align>,
    rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new<I, S>(headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let headers: Vec<String> = headers.into_iter().map(Into::into).collect();
        let align = vec![Align::Left; headers.len()];
        Self {
            headers,
            align,
            rows: Vec::new(),
        }
    }

    /// Right-align a column (amounts, counts)
    pub fn right(mut self, column: usize) -> Self {
        if let Some(slot) = self.align.get_mut(column) {
            *slot = Align::Right;
        }
        self
    }

    pub fn add_row<I, S>(&mut self, cells: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut row: Vec<String> = cells.into_iter().map(Into::into).collect();
        row.resize(self.headers.len(), String::new());
        self.rows.push(row);
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn render(&self) -> String {
        let mut widths: Vec<usize> = self.headers.iter().map(|h| h.width()).collect();
        for row in &self.rows {
            for (i, cell) in row.iter().enumerate() {
                widths[i] = widths[i].max(cell.width());
            }
        }

        let mut out = String::new();
        self.render_line(&mut out, &self.headers, &widths);
        let rule: Vec<String> = widths.iter().map(|w| "─".repeat(*w)).collect();
        out.push_str(rule.join("  ").trim_end());
        out.push('\n');
        for row in &self.rows {
            self.render_line(&mut out, row, &widths);
        }
        out
    }

    fn render_line(&self, out: &mut String, cells: &[String], widths: &[usize]) {
        let padded: Vec<String> = cells
            .iter()
            .zip(widths)
            .zip(&self.align)
            .map(|((cell, width), align)| pad(cell, *width, *align))
            .collect();
        out.push_str(padded.join("  ").trim_end());
        out.push('\n');
    }
}

fn pad(cell: &str, width: usize, align: Align) -> String {
    let fill = " ".repeat(width.saturating_sub(cell.width()));
    match align {
        Align::Left => format!("{}{}", cell, fill),
        Align::Right => format!("{}{}", fill, cell),
    }
}

/// `label: value` lines with the values aligned
pub fn key_values(pairs: &[(&str, String)]) -> String {
    let width = pairs.iter().map(|(k, _)| k.width()).max().unwrap_or(0);
    let mut out = String::new();
    for (key, value) in pairs {
        out.push_str(&format!("{}:{} {}\n", key, " ".repeat(width - key.width()), value));
    }
    out
}

/// Amount in Brazilian reais, e.g. `R$ 1.234,56`
pub fn brl(money: Money) -> String {
    let mut amount = money.amount().abs();
    amount.rescale(Money::SCALE);
    let text = amount.to_string();
    let (int_part, frac_part) = text.split_once('.').unwrap_or((text.as_str(), "00"));

    let digits: Vec<char> = int_part.chars().collect();
    let mut grouped = String::new();
    for (i, digit) in digits.iter().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(*digit);
    }

    let sign = if money.amount().is_sign_negative() && !money.is_zero() {
        "-"
    } else {
        ""
    };
    format!("{}R$ {},{}", sign, grouped, frac_part)
}

/// Percentage with a decimal comma, e.g. `33,33%`
pub fn percent(value: Decimal) -> String {
    let mut value = value.round_dp(2);
    value.rescale(2);
    format!("{}%", value.to_string().replace('.', ","))
}

/// First eight characters of an id, enough to pass back on the command line
pub fn short_id(id: impl Display) -> String {
    id.to_string().chars().take(8).collect()
}

/// Day/month/year, the way the cooperative writes dates
pub fn date(at: DateTime<Utc>) -> String {
    at.format("%d/%m/%Y").to_string()
}

/// Print a value as one pretty JSON document on stdout
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> io::Result<()> {
    let json =
        serde_json::to_string_pretty(value).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    let mut out = io::stdout().lock();
    out.write_all(json.as_bytes())?;
    out.write_all(b"\n")?;
    Ok(())
}
