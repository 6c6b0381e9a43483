//! Self-test outcomes and their text/JSON rendering.

use super::config::{ReportFormat, SelfTestConfig};
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::io::Write;

const COLOR_PASS: &str = "\x1b[32m";
const COLOR_FAIL: &str = "\x1b[31m";
const COLOR_RESET: &str = "\x1b[0m";
const RULE: &str = "---------------------------------------";

/// Which predicate family evaluated a case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Family {
    /// `is_true`; expects the case's verdict
    IsTrue,
    /// `is_false`; expects the inverse verdict
    IsFalse,
}

impl Family {
    /// Both families, in the order they are run and rendered.
    pub const ALL: [Family; 2] = [Family::IsTrue, Family::IsFalse];
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Family::IsTrue => write!(f, "is_true"),
            Family::IsFalse => write!(f, "is_false"),
        }
    }
}

/// Result of evaluating one case with one family.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaseOutcome {
    /// Family that evaluated the case
    pub family: Family,
    /// Case name as given in the table
    pub name: String,
    /// Verdict this family should reach
    pub expected: bool,
    /// Verdict this family reached
    pub actual: bool,
    /// Wall time of the single predicate call, in nanoseconds
    pub elapsed_ns: u64,
}

impl CaseOutcome {
    #[inline]
    pub fn passed(&self) -> bool {
        self.expected == self.actual
    }

    fn elapsed_secs(&self) -> f64 {
        self.elapsed_ns as f64 / 1_000_000_000.0
    }
}

/// All outcomes of a self-test run, in evaluation order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelfTestReport {
    pub outcomes: Vec<CaseOutcome>,
}

impl SelfTestReport {
    pub fn passed(&self) -> usize {
        self.outcomes.iter().filter(|o| o.passed()).count()
    }

    pub fn failed(&self) -> usize {
        self.outcomes.len() - self.passed()
    }

    pub fn all_passed(&self) -> bool {
        self.outcomes.iter().all(CaseOutcome::passed)
    }

    /// Outcomes produced by one family.
    pub fn by_family(&self, family: Family) -> impl Iterator<Item = &CaseOutcome> {
        self.outcomes.iter().filter(move |o| o.family == family)
    }
}

/// Render `report` in the format selected by `cfg`.
pub fn render<W: Write>(report: &SelfTestReport, cfg: &SelfTestConfig, out: &mut W) -> Result<()> {
    match cfg.format {
        ReportFormat::Text => render_text(report, cfg, out),
        ReportFormat::Json => render_json(report, out),
    }
}

/// Write one pass/fail line per outcome, grouped by family.
pub fn render_text<W: Write>(
    report: &SelfTestReport,
    cfg: &SelfTestConfig,
    out: &mut W,
) -> Result<()> {
    let (pass, fail, reset) = if cfg.color {
        (COLOR_PASS, COLOR_FAIL, COLOR_RESET)
    } else {
        ("", "", "")
    };
    let width = cfg.name_width;

    for family in Family::ALL {
        let mut outcomes = report.by_family(family).peekable();
        if outcomes.peek().is_none() {
            continue;
        }
        writeln!(out, "{}", RULE)?;
        writeln!(out, "Testing '{}' function:\n", family)?;
        for o in outcomes {
            if o.passed() {
                writeln!(
                    out,
                    "({}) {:<width$}: {}PASS{} (Time: {:.6} s)",
                    u8::from(o.actual),
                    o.name,
                    pass,
                    reset,
                    o.elapsed_secs(),
                )?;
            } else {
                writeln!(
                    out,
                    "(X) {:<width$}: {}FAIL (Expected {}, got {}){} (Time: {:.6} s)",
                    o.name,
                    fail,
                    u8::from(o.expected),
                    u8::from(o.actual),
                    reset,
                    o.elapsed_secs(),
                )?;
            }
        }
        writeln!(out, "{}", RULE)?;
    }
    writeln!(
        out,
        "{} passed, {} failed",
        report.passed(),
        report.failed()
    )?;
    Ok(())
}

/// Write the report as pretty-printed JSON.
pub fn render_json<W: Write>(report: &SelfTestReport, out: &mut W) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, report)?;
    writeln!(out)?;
    Ok(())
}
