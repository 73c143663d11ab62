use std::fs;

use anyhow::{Context, Result};

use talks::controller::{ListController, Screen};
use talks::model::SiteConfig;
use talks::render::{PageModel, render_page};
use talks::source::TalkSource;
use talks::view::{Filter, SortAxis};
use talks::widgets::{Marquee, PhotoSlot, UnsplashSource, load_slots};

use crate::Commands;

pub(crate) fn handle_command(
    command: Commands,
    cfg: &SiteConfig,
    source: Box<dyn TalkSource>,
) -> Result<()> {
    match command {
        Commands::Tui => {
            talks::tui::run_with_options(talks::tui::TuiRunOptions {
                source,
                marquee: Marquee::new(cfg.marquee.labels.clone()),
            })?;
        }

        Commands::Render {
            out,
            filter,
            sort,
            photos,
        } => {
            let slots = if photos {
                fetch_photos(cfg)?
            } else {
                Vec::new()
            };
            let marquee = Marquee::new(cfg.marquee.labels.clone());

            let mut controller = ListController::new(source);
            let state = apply_actions(&mut controller, filter, &sort);
            let screen = controller.render();
            let html = render_page(&PageModel {
                title: "Weekly Nerd",
                state,
                screen: &screen,
                photos: &slots,
                marquee: &marquee,
            });

            match out {
                Some(path) => {
                    fs::write(&path, html)
                        .with_context(|| format!("write {}", path.display()))?;
                    println!("Wrote {}", path.display());
                }
                None => print!("{}", html),
            }
        }

        Commands::List { filter, sort, json } => {
            let mut controller = ListController::new(source);
            apply_actions(&mut controller, filter, &sort);
            let screen = controller.render();
            match screen {
                Screen::Loading | Screen::Failed => anyhow::bail!("failed to load talks"),
                Screen::Empty if !json => println!("No items found"),
                screen => {
                    if json {
                        println!(
                            "{}",
                            serde_json::to_string_pretty(screen.rows())
                                .context("serialize talks json")?
                        );
                    } else {
                        for t in screen.rows() {
                            println!(
                                "{}\t{}\t{}\t{}",
                                t.date,
                                t.kind,
                                t.speaker.display(),
                                t.title
                            );
                        }
                    }
                }
            }
        }

        Commands::Photos { json } => {
            let slots = fetch_photos(cfg)?;
            if json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&slots).context("serialize photos json")?
                );
            } else {
                for s in slots {
                    println!(
                        "{}\t{}\t{}",
                        s.index,
                        s.topic,
                        s.url.as_deref().unwrap_or("(failed)")
                    );
                }
            }
        }

        Commands::Marquee { html } => {
            let marquee = Marquee::new(cfg.marquee.labels.clone());
            if html {
                print!("{}", marquee.render_html());
            } else {
                let labels: Vec<&str> = marquee.track().collect();
                println!("{}", labels.join("  "));
            }
        }
    }

    Ok(())
}

/// Load, then replay the filter selection and sort toggles in order, as a
/// user clicking the controls would.
fn apply_actions<S: TalkSource>(
    controller: &mut ListController<S>,
    filter: Filter,
    sort: &[SortAxis],
) -> talks::view::ViewState {
    controller.load();
    if filter != Filter::All {
        controller.select_filter(filter);
    }
    for axis in sort {
        controller.toggle_sort(*axis);
    }
    controller.view_state()
}

fn fetch_photos(cfg: &SiteConfig) -> Result<Vec<PhotoSlot>> {
    let source = UnsplashSource::from_config(&cfg.photos)?.context(
        "no photo access key configured (set photos.access_key in the config file)",
    )?;
    Ok(load_slots(&source, cfg.photos.slots, &cfg.photos.topics))
}
