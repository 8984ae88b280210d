//! Inspect, convert and render level files
//!
//! Run with: cargo run --bin elma-level -- svg level.lev -o level.svg

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};

use elma_level::{decode, Gravity, Level, ObjectKind, RenderOptions, Svg};

#[derive(Parser)]
#[command(name = "elma-level")]
#[command(about = "Decode Elasto Mania and Across level files")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print a short summary of a level
    Info {
        path: PathBuf,
    },
    /// Print the decoded level as JSON
    Json {
        path: PathBuf,
        #[arg(long)]
        pretty: bool,
    },
    /// Render the level as SVG
    Svg {
        path: PathBuf,
        #[arg(short, long)]
        output: Option<PathBuf>,
        #[arg(long, default_value = elma_level::renderer::GROUND_FILL)]
        fill: String,
        #[arg(long, default_value_t = elma_level::renderer::OBJECT_RADIUS)]
        radius: f64,
        /// Draw placeholder squares for pictures
        #[arg(long)]
        pictures: bool,
    },
}

fn load(path: &Path) -> Result<Level, Box<dyn std::error::Error>> {
    let data = std::fs::read(path)?;
    Ok(decode(&data)?)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Info { path } => {
            let level = load(&path)?;
            println!("name:       {}", level.name);
            println!("format:     {}", level.format().name());
            if let Some(link) = level.link {
                println!("link:       {:#010x}", link);
            }
            if let (Some(lgr), Some(fg), Some(bg)) = (&level.lgr, &level.foreground, &level.background) {
                println!("lgr:        {} (foreground {}, background {})", lgr, fg, bg);
            }
            let grass = level.polygons.iter().filter(|p| p.is_grass).count();
            println!("polygons:   {} ({} grass)", level.polygons.len(), grass);
            println!(
                "objects:    {} apples ({} with gravity), {} killers, {} flowers, {} starts",
                level.count_objects(|k| matches!(k, ObjectKind::Apple { .. })),
                level.count_objects(|k| matches!(k, ObjectKind::Apple { gravity, .. } if *gravity != Gravity::Normal)),
                level.count_objects(|k| matches!(k, ObjectKind::Killer)),
                level.count_objects(|k| matches!(k, ObjectKind::Flower)),
                level.count_objects(|k| matches!(k, ObjectKind::Start)),
            );
            println!("pictures:   {}", level.pictures.len());
        }
        Commands::Json { path, pretty } => {
            let level = load(&path)?;
            let json = if pretty {
                serde_json::to_string_pretty(&level)?
            } else {
                serde_json::to_string(&level)?
            };
            println!("{}", json);
        }
        Commands::Svg { path, output, fill, radius, pictures } => {
            let level = load(&path)?;
            let options = RenderOptions { fill, object_radius: radius, pictures };
            let svg = Svg::new(&level, &options).to_string();
            match output {
                Some(out) => {
                    std::fs::write(&out, svg)?;
                    eprintln!("Wrote {}", out.display());
                }
                None => println!("{}", svg),
            }
        }
    }

    Ok(())
}
