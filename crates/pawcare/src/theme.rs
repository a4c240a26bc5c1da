// SPDX-FileCopyrightText: 2026 Pawcare Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `pawcare theme` command.

use colored::Colorize;

use pawcare_core::{PawcareError, Theme};

use crate::context::AppContext;

/// Show the current theme, or set it when a value is given.
pub async fn run(ctx: &AppContext, value: Option<&str>) -> Result<(), PawcareError> {
    match value {
        None => {
            let theme = ctx.session.theme().await?;
            println!("Current theme: {theme}");
        }
        Some(raw) => {
            let theme: Theme = raw.parse().map_err(|_| {
                PawcareError::Config(format!(
                    "unknown theme '{raw}', expected 'light' or 'dark'"
                ))
            })?;
            ctx.session.set_theme(theme).await?;
            println!("{} Theme set to {theme}", "ok:".green().bold());
        }
    }
    Ok(())
}
