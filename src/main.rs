use std::fs;
use std::path::Path;

use clap::Parser;

use menu_fit_rs::cli::{Cli, Command};
use menu_fit_rs::error::Result;
use menu_fit_rs::interface::{compose_message, ingredient_checklist, render_page, whatsapp_link};
use menu_fit_rs::models::MenuBook;
use menu_fit_rs::planner::constants::default_pantry;
use menu_fit_rs::planner::select_plans;
use menu_fit_rs::schedule::DayContext;
use menu_fit_rs::state::{load_state, save_state, RecommendationState};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or_default();

    match command {
        Command::Build { out, phone, date } => {
            cmd_build(&cli.menus, &cli.state, &out, &phone, date.as_deref())
        }
        Command::Preview { date } => cmd_preview(&cli.menus, &cli.state, date.as_deref()),
        Command::Reset => cmd_reset(&cli.state),
    }
}

fn day_context(date: Option<&str>) -> Result<DayContext> {
    match date {
        Some(value) => DayContext::parse_date(value),
        None => Ok(DayContext::today()),
    }
}

/// Build the page for today and record the chosen protein.
fn cmd_build(
    menus_path: &str,
    state_path: &str,
    out: &str,
    phone: &str,
    date: Option<&str>,
) -> Result<()> {
    let ctx = day_context(date)?;
    let menu = MenuBook::load(menus_path)?;
    let options = menu.options_for(ctx.set_key.as_str(), ctx.day_name);
    let mut state = load_state(state_path);

    println!(
        "{} {} (set {}): {} options scheduled",
        ctx.day_name,
        ctx.display_date,
        ctx.set_key.as_str(),
        options.len()
    );

    let plan = select_plans(options, &default_pantry(), state.last_protein.as_deref());

    let checklist = ingredient_checklist(options);
    let (message, link) = match plan.best.as_ref() {
        Some(best) => {
            let message = compose_message(&ctx, best, &plan.alternatives);
            let link = whatsapp_link(phone, &message);
            (message, Some(link))
        }
        None => ("Sin menú programado para hoy.".to_string(), None),
    };

    let html = render_page(&ctx, &checklist, &message, link.as_deref());
    fs::create_dir_all(out)?;
    let out_file = Path::new(out).join("index.html");
    fs::write(&out_file, html)?;
    println!("Wrote {}", out_file.display());

    if let Some(best) = plan.best.as_ref() {
        println!("Plan A: {}", best.title);
        state.record_choice(plan.chosen_protein(), &ctx.iso_date);
        save_state(state_path, &state)?;
        println!("State saved.");
    } else {
        println!("Nothing scheduled for today; state left unchanged.");
    }

    Ok(())
}

/// Print today's message to stdout; touches nothing on disk.
fn cmd_preview(menus_path: &str, state_path: &str, date: Option<&str>) -> Result<()> {
    let ctx = day_context(date)?;
    let menu = MenuBook::load(menus_path)?;
    let options = menu.options_for(ctx.set_key.as_str(), ctx.day_name);
    let state = load_state(state_path);

    let plan = select_plans(options, &default_pantry(), state.last_protein.as_deref());

    match plan.best.as_ref() {
        Some(best) => println!("{}", compose_message(&ctx, best, &plan.alternatives)),
        None => println!("Sin menú programado para hoy."),
    }

    Ok(())
}

/// Clear the remembered protein and date.
fn cmd_reset(state_path: &str) -> Result<()> {
    save_state(state_path, &RecommendationState::default())?;
    println!("State cleared.");
    Ok(())
}
