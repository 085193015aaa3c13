// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Command-line client for Tesy water heaters.

mod cli;

use anyhow::{Context, Result, bail};
use clap::{Parser, crate_version};
use tesytalk::{Device, Outcome, runner};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use crate::cli::{Args, expand_single_dash_longs};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let _ = dotenvy::dotenv();
    init_tracing();
    debug!(version = crate_version!(), "starting…");

    let args = Args::try_parse_from(expand_single_dash_longs(std::env::args_os()))
        .unwrap_or_else(|error| {
            // Usage errors exit with 1 like every other failure; help and
            // version keep clap's own handling.
            if error.use_stderr() {
                let _ = error.print();
                std::process::exit(1);
            }
            error.exit()
        });

    let Some(config) = args.http_config() else {
        bail!("Address is required");
    };
    let action = args
        .action()
        .context("Only values between 1-70 are accepted")?;
    let device = Device::from_config(config).context("Invalid device address")?;

    if let Some(message) = action.progress_message() {
        println!("{message}");
    }

    let outcome = runner::run(&device, action)
        .await
        .with_context(|| action.failure_context())?;

    match outcome {
        Outcome::Done => println!(".. done!"),
        Outcome::Report(report) => print!("{report}"),
    }

    info!("done!");
    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .without_time()
        .compact()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
