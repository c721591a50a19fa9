use anyhow::Result;
use remodel_planner::{
    catalog::{load_catalog, CatalogSource},
    cli::{Cli, Commands},
    export::export_snapshot,
    schema::{group_for_type, ui_text},
    state::{AppState, Event},
    store::{FileStorage, Flag, Storage},
    ui::{Browser, BrowserModel},
    view::MaterialTotals,
};
use std::path::PathBuf;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn main() -> Result<()> {
    let cli = Cli::parse_args();

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let storage = FileStorage::new(cli.data_dir.clone())?;
    let source = CatalogSource::from_arg(cli.catalog.as_deref());

    let mut state = AppState::new(storage, cli.lang);
    state.apply(Event::CatalogLoaded(load_catalog(&source)));

    match cli.command.unwrap_or(Commands::Browse) {
        Commands::Browse => {
            let model = BrowserModel::new(state, PathBuf::from("remodel-plan.json"));
            Browser::new(model)?.run()?;
        }

        Commands::Show { incomplete } => {
            if incomplete {
                state.apply(Event::ToggleIncompleteFilter);
            }
            print_groups(&state);
            println!();
            print_totals(&state.totals());
        }

        Commands::Totals => print_totals(&state.totals()),

        Commands::Status { id } => {
            match state.catalog().find(&id) {
                Some(ship) => match group_for_type(&ship.ship_type) {
                    Some(group) => println!("{} ({})", ship.display_name(state.language), group.title),
                    None => println!(
                        "{} (type {} is not in any group)",
                        ship.display_name(state.language),
                        ship.ship_type
                    ),
                },
                None => println!("Note: {} is not in the {}", id, source),
            }
            let entry = state.entry(&id);
            for flag in Flag::ALL {
                println!("  {:<14} {}", flag.key(), entry.get(flag));
            }
        }

        Commands::Toggle { id, flag } => {
            if state.catalog().find(&id).is_none() {
                println!("Note: {} is not in the {}", id, source);
            }
            state.apply(Event::Toggle {
                id: id.clone(),
                flag,
            });
            println!("{} {} = {}", id, flag.key(), state.entry(&id).get(flag));
        }

        Commands::Export { output, incomplete } => {
            if incomplete {
                state.apply(Event::ToggleIncompleteFilter);
            }
            let count = export_snapshot(&state, &output)?;
            println!("Wrote {} ships to {:?}", count, output);
        }

        Commands::Groups => {
            for group in state.groups() {
                println!("  {:<12} {}", group.title, group.types.join(", "));
            }
        }
    }

    Ok(())
}

fn print_groups<S: Storage>(state: &AppState<S>) {
    let text = ui_text(state.language);
    println!("{}", text.title);

    for view in state.grouped() {
        println!("\n{}", view.group.title);
        for card in &view.cards {
            let ship = card.ship;
            let level = if ship.remodel_level > 0 {
                format!("Lv.{}", ship.remodel_level)
            } else {
                String::new()
            };
            let materials: Vec<String> = ship
                .materials
                .required()
                .map(|(m, count)| format!("{}×{}", m.short_label(), count))
                .collect();

            let mut flags = Vec::new();
            if card.flags.not_owned {
                flags.push(text.not_owned);
            }
            if card.flags.leveling_done {
                flags.push(text.leveling_done);
            }
            if card.flags.remodel_done {
                flags.push(text.remodel_done);
            }

            println!(
                "  {} {:<16} {:<7} {:<24} {}",
                card.marker().symbol(),
                ship.display_name(state.language),
                level,
                materials.join(" "),
                flags.join(", ")
            );
        }
    }
}

fn print_totals(totals: &MaterialTotals) {
    println!(
        "Blueprint: {}  Report: {}  Catapult: {}",
        totals.blueprint, totals.report, totals.catapult
    );
}
