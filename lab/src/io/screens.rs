//! Fixed console screens rendered from embedded templates.

use anyhow::{Context, Result};
use minijinja::{Environment, context};
use serde::Serialize;

use crate::core::menu::{ActivityId, EXIT_TOKEN};

const MENU_TEMPLATE: &str = include_str!("screens/menu.txt");
const SETUP_TEMPLATE: &str = include_str!("screens/setup.txt");
const DEBUGGING_TEMPLATE: &str = include_str!("screens/debugging.txt");

pub const MENU_HEADING: &str = "Lab Console - Programming Fundamentals";

#[derive(Debug, Clone, Serialize)]
struct MenuEntry {
    number: u8,
    title: &'static str,
}

/// Template engine wrapper around minijinja.
pub struct Screens {
    env: Environment<'static>,
}

impl Screens {
    pub fn new() -> Result<Self> {
        let mut env = Environment::new();
        env.add_template("menu", MENU_TEMPLATE)
            .context("load menu template")?;
        env.add_template("setup", SETUP_TEMPLATE)
            .context("load setup template")?;
        env.add_template("debugging", DEBUGGING_TEMPLATE)
            .context("load debugging template")?;
        Ok(Self { env })
    }

    /// Main menu listing every activity followed by the exit entry.
    pub fn menu(&self) -> Result<String> {
        let entries: Vec<MenuEntry> = ActivityId::ALL
            .into_iter()
            .map(|activity| MenuEntry {
                number: activity.number(),
                title: activity.title(),
            })
            .collect();
        self.render(
            "menu",
            context! {
                heading => MENU_HEADING,
                underline => "=".repeat(MENU_HEADING.len()),
                entries => entries,
                exit_token => EXIT_TOKEN,
            },
        )
    }

    pub fn setup_guide(&self) -> Result<String> {
        self.render("setup", context! {})
    }

    pub fn debugging_guide(&self) -> Result<String> {
        self.render("debugging", context! {})
    }

    fn render(&self, name: &str, ctx: minijinja::Value) -> Result<String> {
        let template = self
            .env
            .get_template(name)
            .with_context(|| format!("lookup template {name}"))?;
        template
            .render(ctx)
            .with_context(|| format!("render template {name}"))
    }
}
