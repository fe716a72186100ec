use fakturiolib::{
    datagen,
    formats::{
        isdoc::Isdoc,
        pdf::{RenderOptions, TemplateKind},
    },
    payment::PaymentDescriptor,
    traits::WriteFormat,
};
use rand::{rngs::StdRng, SeedableRng};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Příklad: jedna seedovaná faktura -> invoice.pdf s QR kódem + invoice.xml
    let mut rng = StdRng::seed_from_u64(42);
    let invoice = datagen::generate_invoice(&mut rng, None, None)?;

    let payload = PaymentDescriptor::for_invoice(&invoice, &mut rng)?.to_string();
    let opts = RenderOptions {
        qr_payload: Some(payload),
        isdoc: None,
    };

    std::fs::write("invoice.pdf", TemplateKind::Classic.render(&invoice, &opts)?)?;
    Isdoc::write(std::fs::File::create("invoice.xml")?, &invoice)?;
    Ok(())
}
