//! Bundled self-test for the predicate families.
//!
//! Runs a table of literal cases through both `is_true` and `is_false`,
//! timing each evaluation. Failures are recorded in the report and logged;
//! they never abort the run.

pub mod cases;
pub mod config;
pub mod report;

use crate::predicate::{is_false, is_true};
use std::hint::black_box;
use std::time::Instant;
use tracing::{debug, info_span, warn};

pub use self::cases::{default_cases, SelfTestCase};
pub use self::config::{ReportFormat, SelfTestConfig};
pub use self::report::{render, render_json, render_text, CaseOutcome, Family, SelfTestReport};

/// Evaluate one case with one family, timing the call.
pub fn evaluate(case: &SelfTestCase, family: Family) -> CaseOutcome {
    let region = case.region();
    let expected = match family {
        Family::IsTrue => case.expected,
        Family::IsFalse => !case.expected,
    };
    let start = Instant::now();
    let actual = match family {
        Family::IsTrue => is_true(black_box(region), black_box(case.size)),
        Family::IsFalse => is_false(black_box(region), black_box(case.size)),
    };
    let elapsed = start.elapsed();

    CaseOutcome {
        family,
        name: case.name.clone(),
        expected,
        actual,
        elapsed_ns: u64::try_from(elapsed.as_nanos()).unwrap_or(u64::MAX),
    }
}

/// Run every case through both families, `is_true` first.
pub fn run(cases: &[SelfTestCase]) -> SelfTestReport {
    let span = info_span!("selftest", cases = cases.len());
    let _guard = span.enter();

    let mut outcomes = Vec::with_capacity(cases.len() * Family::ALL.len());
    for family in Family::ALL {
        for case in cases {
            let outcome = evaluate(case, family);
            if outcome.passed() {
                debug!(%family, case = %outcome.name, actual = outcome.actual, "case passed");
            } else {
                warn!(
                    %family,
                    case = %outcome.name,
                    expected = outcome.expected,
                    actual = outcome.actual,
                    "case failed"
                );
            }
            outcomes.push(outcome);
        }
    }
    SelfTestReport { outcomes }
}
