// SPDX-FileCopyrightText: 2026 Pawcare Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `pawcare products` command.

use colored::Colorize;

use pawcare_core::PawcareError;

use crate::context::AppContext;

/// Print the public product catalog. Needs no session.
pub async fn run_list(ctx: &AppContext) -> Result<(), PawcareError> {
    let products = ctx.api.list_products().await?;

    if products.is_empty() {
        println!("No products available.");
        return Ok(());
    }

    println!("{}", "Products".bold());
    for product in &products {
        print!(
            "  {} {} - ${:.2}",
            product.id.dimmed(),
            product.name.bold(),
            product.price
        );
        if let Some(category) = &product.category {
            print!(" [{category}]");
        }
        println!();
        if let Some(description) = &product.description {
            println!("      {description}");
        }
    }
    Ok(())
}
