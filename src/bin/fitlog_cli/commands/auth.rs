// ABOUTME: Session commands for the fitlog CLI
// ABOUTME: Handles login, register, logout, whoami, and profile updates
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use anyhow::Result;
use fitlog::context::AppContext;
use fitlog_core::models::ProfilePatch;

use crate::helpers::display::display_profile;

/// Log in as `email`
pub async fn login(ctx: &AppContext, email: &str, password: &str) -> Result<()> {
    let profile = ctx.session().login(email, password).await?;
    println!("Logged in as {}", profile.name);
    display_profile(&profile);
    Ok(())
}

/// Register a new profile
pub async fn register(ctx: &AppContext, name: &str, email: &str, password: &str) -> Result<()> {
    let profile = ctx.session().register(name, email, password).await?;
    println!("Welcome, {}!", profile.name);
    display_profile(&profile);
    Ok(())
}

/// Clear the session
pub async fn logout(ctx: &AppContext) -> Result<()> {
    ctx.session().logout().await?;
    println!("Logged out");
    Ok(())
}

/// Show the current profile
pub async fn whoami(ctx: &AppContext) {
    match ctx.session().current().await {
        Some(profile) => display_profile(&profile),
        None => println!("Not logged in. Use `fitlog auth login` or `fitlog auth register`."),
    }
}

/// Apply a profile patch
pub async fn update(ctx: &AppContext, patch: &ProfilePatch) -> Result<()> {
    if patch.is_empty() {
        println!("Nothing to update");
        return Ok(());
    }
    let profile = ctx.session().update(patch).await?;
    println!("Profile updated");
    display_profile(&profile);
    Ok(())
}
