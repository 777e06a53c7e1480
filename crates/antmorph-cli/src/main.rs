//! `antmorph`: edit antecedent morph schemas and generate ZMK output.

mod cli;
mod commands;
mod logging;

use anyhow::Result;
use clap::Parser;

use cli::{CliArgs, Command};

fn main() -> Result<()> {
    let args = CliArgs::parse();
    logging::init(args.verbose);

    match args.command {
        Command::New {
            file,
            name,
            version,
            prefix,
            deep,
        } => {
            let path = commands::new_schema(file.as_deref(), &name, &version, &prefix, deep)?;
            println!("Created {}", path.display());
        }
        Command::Show { file, hand, all } => {
            let schema = antmorph_build::load_schema(&file)?;
            let stdout = std::io::stdout();
            commands::show(&mut stdout.lock(), &schema, hand.map(Into::into), all)?;
        }
        Command::Set {
            file,
            path,
            value,
            mode,
        } => {
            let mode = mode.map(Into::into);
            report(commands::edit_file(&file, |s| {
                commands::set_leaf(s, &path, &value, mode)
            })?);
        }
        Command::Note { file, path, text } => {
            report(commands::edit_file(&file, |s| {
                commands::set_note(s, &path, &text)
            })?);
        }
        Command::Props {
            file,
            name,
            version,
            prefix,
            context,
        } => {
            report(commands::edit_file(&file, |s| {
                Ok(commands::set_props(
                    s,
                    name.as_deref(),
                    version.as_deref(),
                    prefix.as_deref(),
                    context.map(Into::into),
                ))
            })?);
        }
        Command::Verify { file } => {
            commands::verify_file(&file)?;
            println!("OK");
        }
        Command::Generate {
            settings,
            schema,
            output,
        } => {
            let summary = commands::generate(&settings, schema.as_deref(), output.as_deref())?;
            println!(
                "Generated {} bytes ({} macros)",
                summary.bytes, summary.macros
            );
        }
    }

    Ok(())
}

fn report(changed: bool) {
    if changed {
        println!("Saved");
    } else {
        println!("No change");
    }
}
