//! `truthcheck`: runs the bundled self-test and prints the report.
//!
//! The exit status is 0 whenever the report could be written, whatever the
//! individual case outcomes were.

use anyhow::Context;
use std::io::{self, Write};
use tracing::info;
use truthiness::logging;
use truthiness::selftest::{self, SelfTestConfig};

fn main() -> anyhow::Result<()> {
    let config = SelfTestConfig::from_env().context("reading truthcheck configuration")?;
    logging::init(config.log_json);

    let report = selftest::run(&selftest::default_cases());

    let stdout = io::stdout();
    let mut out = stdout.lock();
    selftest::render(&report, &config, &mut out).context("writing self-test report")?;
    out.flush().context("flushing stdout")?;

    info!(
        passed = report.passed(),
        failed = report.failed(),
        "self-test finished"
    );
    Ok(())
}
