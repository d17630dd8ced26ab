use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use log::info;

use wernicke::{
    evaluate, parse_answer_key, Detector, NgramOrder, ProfileStore, Trainer,
};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Build per-language n-gram weight files from a corpus directory
    Train {
        /// N-gram size: 1 for unigrams, any other integer for bigrams
        ngram_size: i64,
        /// Directory of corpus files, one file per language
        train_folder: PathBuf,
        /// Directory the weight files are written to
        #[arg(long, default_value = ".")]
        output_dir: PathBuf,
    },
    /// Classify each line of a query file and score against an answer key
    Detect {
        /// N-gram size: 1 for unigrams, any other integer for bigrams
        ngram_size: i64,
        /// Text file with one query sample per line
        query_file: PathBuf,
        /// Answer key: per line, the second whitespace-separated field is
        /// the expected language
        answer_key_file: PathBuf,
        /// Directory the trained weight files are loaded from
        #[arg(long, default_value = ".")]
        profile_dir: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    wernicke::init_logger();

    // Usage problems are informational: print them to stdout and exit
    // cleanly without doing anything.
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            println!("{}", err);
            return Ok(());
        }
    };

    match cli.command {
        Command::Train {
            ngram_size,
            train_folder,
            output_dir,
        } => run_train(NgramOrder::from_size(ngram_size), &train_folder, &output_dir),
        Command::Detect {
            ngram_size,
            query_file,
            answer_key_file,
            profile_dir,
        } => run_detect(
            NgramOrder::from_size(ngram_size),
            &query_file,
            &answer_key_file,
            &profile_dir,
        ),
    }
}

fn run_train(order: NgramOrder, train_folder: &PathBuf, output_dir: &PathBuf) -> anyhow::Result<()> {
    let store = ProfileStore::new(output_dir)
        .with_context(|| format!("cannot open output directory {:?}", output_dir))?;
    let trainer = Trainer::new(store, order);
    let summary = trainer
        .train_directory(train_folder)
        .with_context(|| format!("training from {:?}", train_folder))?;
    info!(
        "Training complete: {} trained, {} skipped",
        summary.trained, summary.skipped
    );
    println!(
        "Trained {} {} profile(s) ({} skipped)",
        summary.trained, order, summary.skipped
    );
    Ok(())
}

fn run_detect(
    order: NgramOrder,
    query_file: &PathBuf,
    answer_key_file: &PathBuf,
    profile_dir: &PathBuf,
) -> anyhow::Result<()> {
    let detector = Detector::builder()
        .with_order(order)
        .with_profile_dir(profile_dir)
        .build()?;
    info!(
        "Detecting with {} {} profile(s)",
        detector.info().num_languages,
        order
    );

    let query_raw = std::fs::read(query_file)
        .with_context(|| format!("cannot read query file {:?}", query_file))?;
    let predictions = detector.detect_lines(&String::from_utf8_lossy(&query_raw));

    let key_raw = std::fs::read(answer_key_file)
        .with_context(|| format!("cannot read answer key {:?}", answer_key_file))?;
    let expected = parse_answer_key(&String::from_utf8_lossy(&key_raw));

    let evaluation = evaluate(&expected, &predictions)?;
    println!("{}", evaluation);
    Ok(())
}
