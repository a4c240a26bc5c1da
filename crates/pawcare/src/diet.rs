// SPDX-FileCopyrightText: 2026 Pawcare Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `pawcare diet` subcommands.
//!
//! `generate` composes the full flow: local cooldown gate, budget
//! classification, remote generation, and caching the result. When the
//! gate is closed the API is never called; the remaining wait is printed
//! instead. The server enforces its own weekly cooldown on top, answered
//! with a 429 that surfaces as `CooldownActive`.

use std::sync::Arc;

use chrono::Duration;
use clap::Subcommand;
use colored::Colorize;

use pawcare_core::{KeyValueStore, PawcareError, PetId, SystemClock};
use pawcare_diet::{classify_budget, DietRequestThrottle};

use crate::context::AppContext;

#[derive(Subcommand, Debug)]
pub enum DietCommands {
    /// Request a new diet for a pet.
    Generate {
        pet_id: String,
        /// Weekly budget, 1 to 100.
        #[arg(long)]
        budget: f64,
    },
    /// Print the last cached diet for a pet.
    Show { pet_id: String },
}

pub async fn run(ctx: &AppContext, command: DietCommands) -> Result<(), PawcareError> {
    let throttle = DietRequestThrottle::new(
        Arc::clone(&ctx.store) as Arc<dyn KeyValueStore>,
        Arc::new(SystemClock),
    );
    match command {
        DietCommands::Generate { pet_id, budget } => {
            run_generate(ctx, &throttle, PetId(pet_id), budget).await
        }
        DietCommands::Show { pet_id } => run_show(&throttle, PetId(pet_id)).await,
    }
}

async fn run_generate(
    ctx: &AppContext,
    throttle: &DietRequestThrottle,
    pet: PetId,
    budget: f64,
) -> Result<(), PawcareError> {
    if !throttle.is_request_allowed(&pet).await {
        let remaining = throttle
            .cooldown_remaining(&pet)
            .await
            .unwrap_or_else(Duration::zero);
        println!(
            "{} A diet for {pet} was generated less than a week ago.",
            "cooldown:".yellow().bold()
        );
        println!(
            "Next generation available in {}. See the current diet with `pawcare diet show {pet}`.",
            format_remaining(remaining)
        );
        return Ok(());
    }

    let tier = classify_budget(budget)?;
    let token = ctx.require_token().await?;
    let diet_text = ctx.api.generate_diet(&token, &pet, tier).await?;
    let record = throttle.record_diet(&pet, &diet_text).await?;

    println!(
        "{} Diet generated for {pet} (budget tier: {tier})",
        "ok:".green().bold()
    );
    println!("{}", record.diet_text);
    Ok(())
}

async fn run_show(throttle: &DietRequestThrottle, pet: PetId) -> Result<(), PawcareError> {
    match throttle.cached_diet(&pet).await {
        Some(record) => {
            println!(
                "{} (generated {})",
                format!("Diet for {pet}").bold(),
                record.generated_at.format("%Y-%m-%d %H:%M UTC")
            );
            println!("{}", record.diet_text);
        }
        None => {
            println!(
                "No cached diet for {pet}. Generate one with `pawcare diet generate {pet} --budget <n>`."
            );
        }
    }
    Ok(())
}

/// Render a cooldown remainder as whole days and hours.
fn format_remaining(remaining: Duration) -> String {
    let days = remaining.num_days();
    let hours = (remaining - Duration::days(days)).num_hours();
    if days > 0 {
        format!("{days}d {hours}h")
    } else if hours > 0 {
        format!("{hours}h")
    } else {
        "less than an hour".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn remaining_formats_days_and_hours() {
        assert_eq!(
            format_remaining(Duration::days(6) + Duration::hours(5)),
            "6d 5h"
        );
        assert_eq!(format_remaining(Duration::hours(3)), "3h");
        assert_eq!(format_remaining(Duration::minutes(20)), "less than an hour");
    }
}
