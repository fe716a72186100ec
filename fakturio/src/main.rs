use clap::{Parser, ValueEnum};
use fakturiolib::{
    datagen,
    error::Result,
    files,
    formats::{
        isdoc::Isdoc,
        pdf::{RenderOptions, TemplateKind},
        qr,
    },
    model::Invoice,
    payment::PaymentDescriptor,
    traits::WriteFormat,
};
use rand::{rngs::StdRng, Rng, SeedableRng};
use std::fs::{self, File};
use std::io::BufReader;
use std::path::PathBuf;

#[derive(Copy, Clone, Debug, ValueEnum)]
enum TemplateArg {
    Classic,
    Modern,
    Minimal,
}

impl From<TemplateArg> for TemplateKind {
    fn from(arg: TemplateArg) -> Self {
        match arg {
            TemplateArg::Classic => TemplateKind::Classic,
            TemplateArg::Modern => TemplateKind::Modern,
            TemplateArg::Minimal => TemplateKind::Minimal,
        }
    }
}

#[derive(Parser, Debug)]
#[command(
    name = "fakturio",
    version,
    about = "Generátor fiktivních českých faktur pro testování"
)]
struct Cli {
    /// Počet faktur k vygenerování
    #[arg(short = 'c', long = "count", default_value_t = 1,
          value_parser = clap::value_parser!(u32).range(1..))]
    count: u32,

    /// Šablona PDF
    #[arg(short = 't', long = "template", value_enum, default_value = "classic")]
    template: TemplateArg,

    /// Přidat QR kód pro platbu
    #[arg(short = 'q', long = "qr")]
    qr: bool,

    /// Vložit ISDOC XML do PDF jako přílohu
    #[arg(short = 'i', long = "isdoc")]
    isdoc: bool,

    /// Uložit ISDOC XML i jako samostatný soubor
    #[arg(long = "xml")]
    xml: bool,

    /// Uložit QR kód i jako samostatné PNG
    #[arg(long = "qr-png")]
    qr_png: bool,

    /// Výstupní adresář
    #[arg(short = 'o', long = "output", default_value = "output")]
    output: PathBuf,

    /// Cesta k JSON konfiguraci dat faktury
    #[arg(short = 'C', long = "config")]
    config: Option<PathBuf>,

    /// Seed generátoru náhodných dat (reprodukovatelný výstup)
    #[arg(long = "seed")]
    seed: Option<u64>,

    /// Demo režim: všechny šablony a režimy
    #[arg(short = 'd', long = "demo")]
    demo: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    fs::create_dir_all(&cli.output)?;

    if cli.demo {
        return demo(&cli, &mut rng);
    }

    if cli.config.is_some() && cli.count > 1 {
        eprintln!("[WARN] Dávkové generování s konfigurací použije stejná data pro všechny faktury.");
    }

    let mut generated = 0;
    for i in 0..cli.count {
        let invoice = match &cli.config {
            Some(path) => datagen::load_from_json(BufReader::new(File::open(path)?))?,
            None => datagen::generate_invoice(&mut rng, None, None)?,
        };

        match write_invoice(&cli, &invoice, &mut rng) {
            Ok(path) => {
                println!("  [{}/{}] Vygenerováno: {}", i + 1, cli.count, path.display());
                generated += 1;
            }
            Err(e) => eprintln!("  [{}/{}] Chyba: {e}", i + 1, cli.count),
        }
    }

    println!(
        "\nVygenerováno {generated}/{} faktur, umístění: {}",
        cli.count,
        cli.output.display()
    );
    Ok(())
}

/// Zapíše jednu fakturu podle voleb; vrací cestu k PDF.
fn write_invoice<R: Rng>(cli: &Cli, invoice: &Invoice, rng: &mut R) -> Result<PathBuf> {
    let mut opts = RenderOptions::default();

    let payload = if cli.qr || cli.qr_png {
        Some(PaymentDescriptor::for_invoice(invoice, rng)?.to_string())
    } else {
        None
    };
    if cli.qr {
        opts.qr_payload = payload.clone();
    }

    if cli.isdoc || cli.xml {
        let mut xml_bytes = Vec::new();
        Isdoc::write(&mut xml_bytes, invoice)?;
        if cli.xml {
            let xml_path = cli
                .output
                .join(files::output_filename("isdoc", &invoice.invoice_number, "xml"));
            fs::write(&xml_path, &xml_bytes)?;
            log::debug!("ISDOC XML: {}", xml_path.display());
        }
        if cli.isdoc {
            opts.isdoc = Some(xml_bytes);
        }
    }

    let mut prefix = String::from("invoice");
    if cli.qr {
        prefix.push_str("_qr");
    }
    if cli.isdoc {
        prefix.push_str("_isdoc");
    }

    let template: TemplateKind = cli.template.into();
    let pdf = template.render(invoice, &opts)?;
    let pdf_path = cli
        .output
        .join(files::output_filename(&prefix, &invoice.invoice_number, "pdf"));
    fs::write(&pdf_path, pdf)?;

    if let (true, Some(payload)) = (cli.qr_png, &payload) {
        let png_path = cli
            .output
            .join(files::output_filename("qr", &invoice.invoice_number, "png"));
        qr::write_png(File::create(&png_path)?, payload)?;
        log::debug!("QR PNG: {}", png_path.display());
    }

    Ok(pdf_path)
}

/// Ukázkové faktury ve všech šablonách a režimech; ISDOC jen s classic.
fn demo<R: Rng>(cli: &Cli, rng: &mut R) -> Result<()> {
    println!("=== DEMO REŽIM ===\n");
    let mut results = 0;

    for kind in TemplateKind::ALL {
        for (with_qr, with_isdoc) in [(false, false), (true, false), (false, true)] {
            if with_isdoc && kind != TemplateKind::Classic {
                continue;
            }

            let invoice = datagen::generate_invoice(rng, None, None)?;
            let mut opts = RenderOptions::default();
            let mut prefix = format!("demo_{}", kind.name());

            if with_qr {
                opts.qr_payload = Some(PaymentDescriptor::for_invoice(&invoice, rng)?.to_string());
                prefix.push_str("_qr");
            }
            if with_isdoc {
                let mut xml_bytes = Vec::new();
                Isdoc::write(&mut xml_bytes, &invoice)?;
                opts.isdoc = Some(xml_bytes);
                prefix.push_str("_isdoc");
            }

            let pdf = kind.render(&invoice, &opts)?;
            let path = cli
                .output
                .join(files::output_filename(&prefix, &invoice.invoice_number, "pdf"));
            fs::write(&path, pdf)?;
            println!("  ✓ {}", path.display());
            results += 1;
        }
    }

    println!("\nVygenerováno {results} ukázek, umístění: {}", cli.output.display());
    Ok(())
}
