// SPDX-FileCopyrightText: 2026 Pawcare Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `pawcare pets` subcommands.

use clap::Subcommand;
use colored::Colorize;

use pawcare_api::PetForm;
use pawcare_core::{PawcareError, PetId};

use crate::context::AppContext;

#[derive(Subcommand, Debug)]
pub enum PetsCommands {
    /// List your registered pets.
    List,
    /// Register a new pet.
    Add {
        #[arg(long)]
        name: String,
        #[arg(long)]
        breed: String,
        #[arg(long)]
        age: f64,
        #[arg(long)]
        weight: f64,
        #[arg(long)]
        activity: String,
        #[arg(long)]
        conditions: Option<String>,
    },
    /// Update an existing pet.
    Update {
        pet_id: String,
        #[arg(long)]
        name: String,
        #[arg(long)]
        breed: String,
        #[arg(long)]
        age: f64,
        #[arg(long)]
        weight: f64,
        #[arg(long)]
        activity: String,
        #[arg(long)]
        conditions: Option<String>,
    },
    /// Remove a pet.
    Remove { pet_id: String },
}

pub async fn run(ctx: &AppContext, command: PetsCommands) -> Result<(), PawcareError> {
    match command {
        PetsCommands::List => run_list(ctx).await,
        PetsCommands::Add {
            name,
            breed,
            age,
            weight,
            activity,
            conditions,
        } => {
            let token = ctx.require_token().await?;
            let form = PetForm {
                name,
                breed,
                age,
                weight,
                activity,
                conditions,
            };
            ctx.api.create_pet(&token, &form).await?;
            println!("{} Pet {} registered", "ok:".green().bold(), form.name);
            Ok(())
        }
        PetsCommands::Update {
            pet_id,
            name,
            breed,
            age,
            weight,
            activity,
            conditions,
        } => {
            let token = ctx.require_token().await?;
            let pet = PetId(pet_id);
            let form = PetForm {
                name,
                breed,
                age,
                weight,
                activity,
                conditions,
            };
            ctx.api.update_pet(&token, &pet, &form).await?;
            println!("{} Pet {pet} updated", "ok:".green().bold());
            Ok(())
        }
        PetsCommands::Remove { pet_id } => {
            let token = ctx.require_token().await?;
            let pet = PetId(pet_id);
            ctx.api.delete_pet(&token, &pet).await?;
            println!("{} Pet {pet} removed", "ok:".green().bold());
            Ok(())
        }
    }
}

async fn run_list(ctx: &AppContext) -> Result<(), PawcareError> {
    let token = ctx.require_token().await?;
    let pets = ctx.api.list_pets(&token).await?;

    if pets.is_empty() {
        println!("No pets registered yet. Add one with `pawcare pets add`.");
        return Ok(());
    }

    println!("{}", "Pets".bold());
    for pet in &pets {
        let breed = pet.breed.as_deref().unwrap_or("unknown breed");
        print!("  {} {} ({breed}", pet.id.dimmed(), pet.name.bold());
        if let Some(age) = pet.age {
            print!(", {age} y");
        }
        if let Some(weight) = pet.weight {
            print!(", {weight} kg");
        }
        println!(")");
        if let Some(conditions) = &pet.conditions {
            println!("      conditions: {conditions}");
        }
    }
    Ok(())
}
