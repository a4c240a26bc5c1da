// SPDX-FileCopyrightText: 2026 Pawcare Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `pawcare login`, `logout`, `register`, `recover`, and `profile`.

use colored::Colorize;

use pawcare_api::RegisterRequest;
use pawcare_core::PawcareError;

use crate::context::AppContext;

/// Log in, fetch the profile, and persist the session.
pub async fn run_login(ctx: &AppContext, email: &str, password: &str) -> Result<(), PawcareError> {
    let login = ctx.api.login(email, password).await?;
    let profile = ctx.api.profile(&login.token).await?;
    ctx.session.save_login(&login.token, &profile).await?;

    println!(
        "{} Logged in as {} {} <{}>",
        "ok:".green().bold(),
        profile.first_name,
        profile.last_name,
        profile.email
    );
    Ok(())
}

/// Forget the stored session. The theme preference is kept.
pub async fn run_logout(ctx: &AppContext) -> Result<(), PawcareError> {
    ctx.session.clear().await?;
    println!("{} Session cleared", "ok:".green().bold());
    Ok(())
}

#[allow(clippy::too_many_arguments)]
pub async fn run_register(
    ctx: &AppContext,
    first_name: String,
    last_name: String,
    address: String,
    phone: String,
    email: String,
    password: String,
) -> Result<(), PawcareError> {
    let request = RegisterRequest {
        first_name,
        last_name,
        address,
        phone,
        email,
        password,
    };
    ctx.api.register(&request).await?;
    println!(
        "{} Account created for {}. Run `pawcare login` to start a session.",
        "ok:".green().bold(),
        request.email
    );
    Ok(())
}

pub async fn run_recover(ctx: &AppContext, email: &str) -> Result<(), PawcareError> {
    ctx.api.recover_password(email).await?;
    println!(
        "{} Recovery instructions sent to {email}",
        "ok:".green().bold()
    );
    Ok(())
}

/// Fetch and print the profile, refreshing the local snapshot.
pub async fn run_profile(ctx: &AppContext) -> Result<(), PawcareError> {
    let token = ctx.require_token().await?;
    let profile = ctx.api.profile(&token).await?;
    ctx.session.save_profile(&profile).await?;

    println!("{}", "Profile".bold());
    println!("  name:    {} {}", profile.first_name, profile.last_name);
    println!("  email:   {}", profile.email);
    if let Some(address) = &profile.address {
        println!("  address: {address}");
    }
    if let Some(phone) = &profile.phone {
        println!("  phone:   {phone}");
    }
    if !profile.favorites.is_empty() {
        println!("  favorites: {}", profile.favorites.join(", "));
    }
    Ok(())
}
