//! # Receipt Printer
//!
//! Fixed-width rendering of a sealed receipt to a plain string. The host
//! application decides what to do with it (thermal printer, display, log);
//! this module never touches hardware.
//!
//! Layout, at the default 40 columns:
//!
//! ```text
//! Toothbrush                          1.98
//!   0.99 * 2
//! Apples                              4.98
//!   1.99 * 2.500
//! 10% off (Toothbrush)               -0.20
//!
//! Total:                              6.76
//! ```

use std::fmt::Write;

use crate::money::Money;
use crate::quantity::{Quantity, MILLI_PER_UNIT};
use crate::receipt::{Receipt, ReceiptLine};
use crate::types::PricingMode;

/// Default receipt width for 80mm thermal paper.
pub const DEFAULT_COLUMNS: usize = 40;

/// Renders receipts as fixed-width text.
#[derive(Debug, Clone, Copy)]
pub struct ReceiptPrinter {
    columns: usize,
}

impl ReceiptPrinter {
    /// Creates a printer with the given column width.
    pub fn new(columns: usize) -> Self {
        ReceiptPrinter { columns }
    }

    /// Renders a sealed receipt.
    pub fn render(&self, receipt: &Receipt) -> String {
        let mut out = String::new();

        for line in receipt.lines() {
            self.render_line(&mut out, line);
        }
        for line in receipt.lines() {
            if let Some(discount) = &line.discount {
                let label = format!("{} ({})", discount.description, line.name);
                let value = format!("-{}", format_price(discount.amount()));
                self.pad(&mut out, &label, &value);
            }
        }

        out.push('\n');
        self.pad(&mut out, "Total: ", &format_price(receipt.total()));
        out
    }

    fn render_line(&self, out: &mut String, line: &ReceiptLine) {
        self.pad(out, &line.name, &format_price(line.line_total()));
        // show the unit price breakdown unless it is a single item
        if line.quantity != Quantity::from_units(1) {
            let _ = writeln!(
                out,
                "  {} * {}",
                format_price(line.unit_price()),
                format_quantity(line.quantity, line.mode)
            );
        }
    }

    /// One receipt row: label left, value right, at least one space between.
    fn pad(&self, out: &mut String, label: &str, value: &str) {
        let gap = self.columns.saturating_sub(label.len() + value.len()).max(1);
        let _ = writeln!(out, "{}{}{}", label, " ".repeat(gap), value);
    }
}

impl Default for ReceiptPrinter {
    fn default() -> Self {
        ReceiptPrinter::new(DEFAULT_COLUMNS)
    }
}

/// "4.98" - no currency symbol on receipt paper.
fn format_price(amount: Money) -> String {
    let sign = if amount.cents() < 0 { "-" } else { "" };
    format!("{}{}.{:02}", sign, amount.major().abs(), amount.minor())
}

/// Each-priced quantities print as counts, weights with three decimals.
fn format_quantity(quantity: Quantity, mode: PricingMode) -> String {
    match mode {
        PricingMode::Each => format!("{}", quantity.whole_units()),
        PricingMode::Weight => format!(
            "{}.{:03}",
            quantity.whole_units(),
            (quantity.milli() % MILLI_PER_UNIT).abs()
        ),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
