//! ferrite-logit: trains a single logistic neuron to tell two image classes apart.
//!
//! Run with:
//!   cargo run --release -- [DATASET_DIR] [--config CONFIG.json] [--iterations N]
//!                          [--learning-rate A] [--print-cost] [--size PX]
//!
//! DATASET_DIR must contain `train/<class>/` and `test/<class>/` folders for
//! exactly two classes. Without it, a seeded synthetic dataset is used.
//! Set RUST_LOG=debug for loader details.

use std::path::PathBuf;

use log::info;

use ferrite_logit::{data, train_model, Error, Result, TrainConfig};

const DEFAULT_IMAGE_SIZE: u32 = 64;

struct Args {
    dataset: Option<PathBuf>,
    config: TrainConfig,
    image_size: u32,
}

fn parse_args() -> Result<Args> {
    let mut dataset = None;
    let mut config = TrainConfig::default();
    let mut image_size = DEFAULT_IMAGE_SIZE;

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--config" => config = TrainConfig::load_json(&value(&mut args, &arg)?)?,
            "--iterations" => config.num_iterations = parse(&value(&mut args, &arg)?, &arg)?,
            "--learning-rate" => config.learning_rate = parse(&value(&mut args, &arg)?, &arg)?,
            "--size" => image_size = parse(&value(&mut args, &arg)?, &arg)?,
            "--print-cost" => config.print_cost = true,
            flag if flag.starts_with("--") => {
                return Err(Error::InvalidConfig(format!("unknown flag {flag}")));
            }
            path => dataset = Some(PathBuf::from(path)),
        }
    }

    config.validate()?;
    Ok(Args { dataset, config, image_size })
}

fn value(args: &mut impl Iterator<Item = String>, flag: &str) -> Result<String> {
    args.next()
        .ok_or_else(|| Error::InvalidConfig(format!("{flag} needs a value")))
}

fn parse<T: std::str::FromStr>(raw: &str, flag: &str) -> Result<T> {
    raw.parse()
        .map_err(|_| Error::InvalidConfig(format!("bad value for {flag}: {raw}")))
}

fn run() -> Result<()> {
    let args = parse_args()?;

    let dataset = match &args.dataset {
        Some(root) => {
            info!("loading {} at {}x{}", root.display(), args.image_size, args.image_size);
            data::load_dataset(root, args.image_size)?
        }
        None => {
            info!("no dataset given; using synthetic separable data");
            data::separable_blobs(50, 20, 12 * 12 * 3, 42)?
        }
    };

    let model = train_model(
        &dataset.train_x,
        &dataset.train_y,
        &dataset.test_x,
        &dataset.test_y,
        &args.config,
    )?;

    println!("Classes:        {:?}", dataset.classes);
    println!("Examples:       {} train / {} test", dataset.m_train(), dataset.m_test());
    println!("Iterations:     {} (lr = {})", model.num_iterations, model.learning_rate);
    if let Some(last) = model.costs.last() {
        println!("Last cost:      {last:.6}");
    }
    println!("Train accuracy: {:.2} %", model.train_accuracy);
    println!("Test accuracy:  {:.2} %", model.test_accuracy);

    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(e) = run() {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
