// ABOUTME: Re-exports command modules for the fitlog CLI
// ABOUTME: Session, body metrics, meal, and workout commands
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub mod auth;
pub mod body;
pub mod meal;
pub mod workout;

use fitlog::logging::AppLogger;
use fitlog::storage::Collection;
use fitlog_core::errors::AppResult;

/// Pass a write result through, logging when the entry did not reach storage
pub fn report_write<T>(collection: Collection, result: AppResult<T>) -> anyhow::Result<T> {
    result.map_err(|e| {
        AppLogger::log_write_failure(collection.key(), &e);
        anyhow::Error::new(e).context(format!("could not save to {collection}"))
    })
}
