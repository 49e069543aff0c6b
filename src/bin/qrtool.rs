use clap::{Parser, Subcommand};
use rust_qr_gen::encoder::format::FormatInfoEncoder;
use rust_qr_gen::encoder::mask::MaskSelector;
use rust_qr_gen::encoder::qr_encoder::QrEncoder;
use rust_qr_gen::encoder::tables::{byte_capacity, ec_block_info, raw_data_modules};
use rust_qr_gen::{ECLevel, EncodeOptions, MaskPattern, Version};
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "qrtool", version, about = "RustQR Gen CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the generated module grid as text
    Show {
        text: String,
        /// Force a mask pattern (0-7) instead of scoring all eight
        #[arg(long, value_parser = clap::value_parser!(u8).range(0..8))]
        mask: Option<u8>,
        #[arg(long)]
        min_version: Option<u8>,
    },
    /// Print version, per-mask penalties and the committed format word
    Inspect {
        text: String,
        #[arg(long)]
        min_version: Option<u8>,
    },
    /// Print the capacity table for every supported version
    Capacity,
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    let result = match cli.command {
        Command::Show {
            text,
            mask,
            min_version,
        } => show_cmd(&text, options(mask, min_version)),
        Command::Inspect { text, min_version } => inspect_cmd(&text, options(None, min_version)),
        Command::Capacity => {
            capacity_cmd();
            Ok(())
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("qrtool: {}", err);
            ExitCode::FAILURE
        }
    }
}

fn options(mask: Option<u8>, min_version: Option<u8>) -> EncodeOptions {
    let mut options = EncodeOptions::new(ECLevel::L);
    if let Some(bits) = mask {
        options = options.with_mask(MaskPattern::from_bits(bits));
    }
    if let Some(version) = min_version {
        options = options.with_min_version(version);
    }
    options
}

fn show_cmd(text: &str, options: EncodeOptions) -> rust_qr_gen::Result<()> {
    let qr = rust_qr_gen::generate_with_options(text.as_bytes(), &options)?;
    println!(
        "Version {} ({}x{}), mask {}",
        qr.version().number(),
        qr.module_count(),
        qr.module_count(),
        qr.mask_pattern().id()
    );
    for row in qr.rows() {
        let line: String = row
            .iter()
            .map(|m| if m.is_dark() { "██" } else { "  " })
            .collect();
        println!("{}", line);
    }
    Ok(())
}

fn inspect_cmd(text: &str, options: EncodeOptions) -> rust_qr_gen::Result<()> {
    let prepared = QrEncoder::prepare(text.as_bytes(), &options)?;
    let version = prepared.version;
    let info = ec_block_info(version);

    println!("Payload: {} bytes", text.len());
    println!(
        "Version: {} ({}x{}), capacity {} bytes",
        version.number(),
        version.size(),
        version.size(),
        byte_capacity(version)
    );
    println!(
        "Codewords: {} data + {} ecc in {} block(s), {} data modules",
        info.data_codewords,
        info.num_blocks * info.ecc_per_block,
        info.num_blocks,
        prepared.data_modules.len()
    );

    let candidates = MaskSelector::evaluate(&prepared.grid, &prepared.data_modules);
    println!("Mask penalties:");
    for candidate in &candidates {
        println!("  mask {}: {}", candidate.pattern.id(), candidate.penalty);
    }

    let qr = QrEncoder::finish(prepared, None);
    let (first, second) = FormatInfoEncoder::read(qr.modules());
    println!(
        "Committed mask {}, format word 0b{:015b} (copies match: {})",
        qr.mask_pattern().id(),
        first,
        first == second
    );
    Ok(())
}

fn capacity_cmd() {
    println!("version  size  bytes  data  ecc  modules");
    for version in Version::MIN.up_to_max() {
        let info = ec_block_info(version);
        println!(
            "{:>7}  {:>4}  {:>5}  {:>4}  {:>3}  {:>7}",
            version.number(),
            version.size(),
            byte_capacity(version),
            info.data_codewords,
            info.ecc_per_block,
            raw_data_modules(version)
        );
    }
}
