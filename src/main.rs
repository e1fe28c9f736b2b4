use clap::Parser;
use std::io::Read;
use std::str::FromStr;
use trigwords::application::{
    change_token, MergeTagsService, RenderPromptService, RenderRequest,
};
use trigwords::cli::{format_category_list, format_tag_list, Cli, Commands, RenderArgs};
use trigwords::domain::{MergeStrategy, PresetCatalog};
use trigwords::error::TrigwordsError;
use trigwords::infrastructure::load_catalog;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match run(cli) {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

fn run(cli: Cli) -> Result<(), TrigwordsError> {
    let catalog = match &cli.catalog {
        Some(path) => load_catalog(path)?,
        None => PresetCatalog::builtin(),
    };

    match cli.command {
        Commands::Categories => {
            print!("{}", format_category_list(&catalog.category_names()));
            Ok(())
        }
        Commands::Preset {
            category,
            inactive,
            strength,
            json,
        } => {
            if !catalog.is_valid_category(&category) {
                return Err(TrigwordsError::InvalidCategory {
                    value: category,
                    valid: catalog.category_names(),
                });
            }

            let tags = catalog.preset_tags(&category, !inactive, strength);
            if json {
                println!("{}", serde_json::to_string_pretty(&tags)?);
            } else {
                print!("{}", format_tag_list(&tags));
            }
            Ok(())
        }
        Commands::Merge {
            preset,
            incoming,
            strategy,
        } => {
            let strategy = MergeStrategy::from_str(&strategy)?;
            let preset_json = std::fs::read_to_string(&preset)?;
            let incoming_json = std::fs::read_to_string(&incoming)?;
            let merged = MergeTagsService::merge(&preset_json, &incoming_json, strategy)?;
            println!("{}", merged);
            Ok(())
        }
        Commands::Dedup {
            file,
            case_sensitive,
        } => {
            let tags_json = std::fs::read_to_string(&file)?;
            let deduped = MergeTagsService::deduplicate(&tags_json, case_sensitive)?;
            println!("{}", deduped);
            Ok(())
        }
        Commands::Render(args) => {
            let request = build_request(args)?;
            let service = RenderPromptService::new(catalog);
            let outcome = service.execute(&request)?;
            println!("{}", outcome.output);
            Ok(())
        }
        Commands::Fingerprint(args) => {
            let request = build_request(args)?;
            if !catalog.is_valid_category(&request.category) {
                return Err(TrigwordsError::InvalidCategory {
                    value: request.category,
                    valid: catalog.category_names(),
                });
            }
            println!("{}", change_token(&request));
            Ok(())
        }
    }
}

fn build_request(args: RenderArgs) -> Result<RenderRequest, TrigwordsError> {
    let tag_state = match (args.state, args.state_json) {
        (Some(path), _) => Some(read_state(&path)?),
        (None, Some(json)) => Some(json),
        (None, None) => None,
    };

    Ok(RenderRequest {
        category: args.category,
        default_active: !args.inactive,
        allow_strength_adjustment: args.strength_adjustment,
        tag_state,
        prefix: args.prefix,
        lora_syntax: args.lora_syntax,
    })
}

fn read_state(path: &std::path::Path) -> Result<String, TrigwordsError> {
    if path.as_os_str() == "-" {
        let mut buffer = String::new();
        std::io::stdin().read_to_string(&mut buffer)?;
        Ok(buffer)
    } else {
        Ok(std::fs::read_to_string(path)?)
    }
}
