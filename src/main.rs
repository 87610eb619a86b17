use anyhow::Context;
use clap::Parser;
use std::io;
use std::process::ExitCode;
use webp_conv::cli::Args;
use webp_conv::constants::ERROR_PREFIX;
use webp_conv::utils::create_progress_bar;
use webp_conv::{confirm_removal, convert_all, logger, ConversionOptions, Converter, Cwebp};

fn main() -> ExitCode {
    let args = Args::parse();
    logger::init(args.quiet, args.verbose);

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {:#}", ERROR_PREFIX, e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> anyhow::Result<()> {
    let converter = Cwebp::new(&args.cwebp);
    converter.check_available()?;

    let source = match args.source {
        Some(source) => source,
        None => std::env::current_dir().context("cannot determine current directory")?,
    };

    let options = ConversionOptions::new(Some(args.quality), source, args.remove)?
        .with_extensions(args.extensions);

    if options.remove_original {
        confirm_removal(io::stdin().lock(), io::stdout())?;
    }

    let progress = create_progress_bar(args.quiet);
    let totals = convert_all(&options, &converter, &progress)
        .with_context(|| format!("conversion under {:?} stopped", options.source))?;

    println!("{}", totals);
    Ok(())
}
