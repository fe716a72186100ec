//! Generátor realistických náhodných dat pro české faktury.
//!
//! Veškerá náhoda přichází z parametru `rng`; se seedovaným generátorem
//! jsou výstupy reprodukovatelné.

use chrono::{Duration, Local, NaiveDate};
use rand::Rng;
use rust_decimal::Decimal;
use std::io::Read;

use crate::error::Result;
use crate::model::{Company, Invoice, Item};
use crate::payment;

const COMPANY_TYPES: [&str; 3] = ["s.r.o.", "a.s.", "v.o.s."];

const COMPANY_PREFIXES: [&str; 11] = [
    "Český", "Moravský", "Slezský", "Jiho", "Severo", "Západ", "Východ", "Praha", "Brno",
    "Ostrava", "Plzeň",
];

const COMPANY_NAMES: [&str; 20] = [
    "Obchod", "Trade", "Market", "Group", "Systems", "Tech", "Digital", "Solutions", "Holding",
    "Company", "Partners", "Invest", "Development", "Service", "Center", "House", "Factory",
    "Store", "Shop", "Works",
];

const PRODUCT_ITEMS: [&str; 25] = [
    "Notebook Dell Latitude",
    "Monitor Samsung 27\"",
    "Tiskárna HP LaserJet",
    "Klávesnice Logitech",
    "Myš bezdrátová",
    "Webkamera Full HD",
    "Headset s mikrofonem",
    "USB flash disk 64GB",
    "Extern. disk 2TB",
    "Kancelářská židle",
    "Stůl kancelářský",
    "Regál na dokumenty",
    "Skříň na spisy",
    "Lampa stolní LED",
    "Papír A4 5000 listů",
    "Tonery do tiskárny",
    "Pero kuličkové",
    "Blok linkovaný A4",
    "Obálky C5",
    "Složky zakládací",
    "Diář 2025",
    "Pořadač pákový",
    "Sešívačka kovová",
    "Razítko firemní",
    "Nůžky kancelářské",
];

const SERVICE_ITEMS: [&str; 25] = [
    "Vývoj webové aplikace",
    "Správa IT infrastruktury",
    "Grafické práce",
    "Konzultační služby",
    "Účetní služby",
    "Daňové poradenství",
    "Marketingové služby",
    "SEO optimalizace",
    "Správa sociálních sítí",
    "Tvorba textů",
    "Překlad dokumentace",
    "Školení zaměstnanců",
    "Technická podpora",
    "Údržba softwaru",
    "Hosting služby",
    "Cloud storage",
    "Zálohovací služby",
    "Bezpečnostní audit",
    "Právní poradenství",
    "Architektonické služby",
    "Projektová dokumentace",
    "Stavební dozor",
    "Servis výpočetní techniky",
    "Instalace sítě",
    "Konfigurace serveru",
];

/// Banky v ČR s kódem banky, aby IBAN a název banky seděly k sobě.
const BANKS: [(&str, &str); 8] = [
    ("Komerční banka, a.s.", "0100"),
    ("ČSOB, a.s.", "0300"),
    ("Česká spořitelna, a.s.", "0800"),
    ("Fio banka, a.s.", "2010"),
    ("UniCredit Bank Czech Republic", "2700"),
    ("Air Bank a.s.", "3030"),
    ("Raiffeisenbank a.s.", "5500"),
    ("mBank S.A.", "6210"),
];

const STREETS: [&str; 12] = [
    "Dlouhá",
    "Krátká",
    "Nádražní",
    "Hlavní",
    "Školní",
    "Zahradní",
    "Polní",
    "Lipová",
    "Jiráskova",
    "Masarykova",
    "Husova",
    "Komenského",
];

const CITIES: [(&str, &str); 10] = [
    ("Praha", "110 00"),
    ("Brno", "602 00"),
    ("Ostrava", "702 00"),
    ("Plzeň", "301 00"),
    ("Olomouc", "779 00"),
    ("Liberec", "460 01"),
    ("Hradec Králové", "500 02"),
    ("České Budějovice", "370 01"),
    ("Pardubice", "530 02"),
    ("Zlín", "760 01"),
];

const NOTES: [&str; 5] = [
    "Děkujeme za Vaši důvěru.",
    "Faktura vystavena elektronicky a je platná bez podpisu.",
    "V případě dotazů nás neváhejte kontaktovat.",
    "Platba bankovním převodem na uvedený účet.",
    "",
];

fn pick<'a, R: Rng + ?Sized>(rng: &mut R, list: &[&'a str]) -> &'a str {
    list[rng.gen_range(0..list.len())]
}

/// Náhodné IČO — 8 číslic.
pub fn generate_ico<R: Rng + ?Sized>(rng: &mut R) -> String {
    rng.gen_range(10_000_000u32..=99_999_999).to_string()
}

/// DIČ ve formátu CZ + IČO.
pub fn dic_for(ico: &str) -> String {
    format!("CZ{ico}")
}

/// Náhodná česká firma s koherentními údaji (IBAN sedí ke kódu banky).
pub fn generate_company<R: Rng + ?Sized>(rng: &mut R) -> Result<Company> {
    let ico = generate_ico(rng);

    let mut name = if rng.gen_bool(0.7) {
        format!(
            "{} {}",
            pick(rng, &COMPANY_PREFIXES),
            pick(rng, &COMPANY_NAMES)
        )
    } else {
        pick(rng, &COMPANY_NAMES).to_string()
    };
    name.push(' ');
    name.push_str(pick(rng, &COMPANY_TYPES));

    let (bank_name, bank_code) = BANKS[rng.gen_range(0..BANKS.len())];
    let account = payment::generate_account(rng, &[bank_code])?;

    let street = format!("{} {}", pick(rng, &STREETS), rng.gen_range(1..=199));
    let (city, zip_code) = CITIES[rng.gen_range(0..CITIES.len())];

    let email = format!("info@{}.cz", slug(&name));
    let phone = format!(
        "+420 {} {:03} {:03}",
        rng.gen_range(601..=779),
        rng.gen_range(0..1000),
        rng.gen_range(0..1000)
    );

    Ok(Company {
        name,
        dic: dic_for(&ico),
        ico,
        street,
        city: city.to_string(),
        zip_code: zip_code.to_string(),
        country: "Česká republika".into(),
        iban: Some(account),
        bank_name: Some(bank_name.to_string()),
        email: Some(email),
        phone: Some(phone),
    })
}

/// ASCII slug pro e-mailovou doménu (diakritika ven, jen [a-z0-9]).
fn slug(name: &str) -> String {
    name.chars()
        .filter_map(|ch| match ch {
            'a'..='z' | '0'..='9' => Some(ch),
            'A'..='Z' => Some(ch.to_ascii_lowercase()),
            'á' | 'Á' => Some('a'),
            'č' | 'Č' => Some('c'),
            'ď' | 'Ď' => Some('d'),
            'é' | 'ě' | 'É' | 'Ě' => Some('e'),
            'í' | 'Í' => Some('i'),
            'ň' | 'Ň' => Some('n'),
            'ó' | 'Ó' => Some('o'),
            'ř' | 'Ř' => Some('r'),
            'š' | 'Š' => Some('s'),
            'ť' | 'Ť' => Some('t'),
            'ú' | 'ů' | 'Ú' | 'Ů' => Some('u'),
            'ý' | 'Ý' => Some('y'),
            'ž' | 'Ž' => Some('z'),
            _ => None,
        })
        .collect()
}

/// Číslo faktury ve formátu YYYYMMDDNNN.
pub fn generate_invoice_number<R: Rng + ?Sized>(rng: &mut R) -> String {
    let today = Local::now().date_naive();
    format!("{}{:03}", today.format("%Y%m%d"), rng.gen_range(1..=999))
}

/// Náhodné položky faktury; bez zadaného počtu 1–8.
pub fn generate_items<R: Rng + ?Sized>(rng: &mut R, count: Option<usize>) -> Vec<Item> {
    let count = count.unwrap_or_else(|| rng.gen_range(1..=8));
    let mut items = Vec::with_capacity(count);

    for _ in 0..count {
        let service = rng.gen_bool(0.5);
        let description = if service {
            pick(rng, &SERVICE_ITEMS)
        } else {
            pick(rng, &PRODUCT_ITEMS)
        };

        let unit = if service {
            pick(rng, &["hod", "den", "měsíc", "služba"])
        } else {
            pick(rng, &["ks", "balení", "m²"])
        };

        let quantity = match unit {
            "měsíc" | "služba" => 1,
            "den" | "hod" => rng.gen_range(1..=10),
            _ => rng.gen_range(1..=5),
        };

        // celé desetikoruny; služby bývají dražší
        let unit_price: u32 = if service {
            rng.gen_range(10..=50) * 10
        } else {
            rng.gen_range(5..=30) * 10
        };

        let vat_rate = match rng.gen_range(0..100) {
            0..=79 => 21,
            80..=94 => 15,
            _ => 10,
        };

        items.push(Item {
            description: description.to_string(),
            quantity,
            unit: unit.to_string(),
            unit_price: Decimal::from(unit_price),
            vat_rate,
        });
    }

    items
}

/// Kompletní faktura s náhodnými údaji; dodavatele/odběratele lze dodat.
pub fn generate_invoice<R: Rng + ?Sized>(
    rng: &mut R,
    supplier: Option<Company>,
    customer: Option<Company>,
) -> Result<Invoice> {
    let supplier = match supplier {
        Some(c) => c,
        None => generate_company(rng)?,
    };
    let customer = match customer {
        Some(c) => c,
        None => generate_company(rng)?,
    };

    let issue_date: NaiveDate =
        Local::now().date_naive() - Duration::days(rng.gen_range(0..=30));
    let due_days = [14i64, 21, 30][rng.gen_range(0..3)];
    let due_date = issue_date + Duration::days(due_days);

    let invoice_number = generate_invoice_number(rng);
    let variable_symbol = invoice_number.replace('/', "");

    let invoice = Invoice {
        invoice_number,
        supplier,
        customer,
        items: generate_items(rng, None),
        issue_date,
        due_date,
        variable_symbol,
        payment_method: "bankovní převod".into(),
        note: pick(rng, &NOTES).to_string(),
        currency: "CZK".into(),
    };
    log::debug!(
        "vygenerována faktura {} ({} položek)",
        invoice.invoice_number,
        invoice.items.len()
    );
    Ok(invoice)
}

/// Více faktur najednou.
pub fn generate_invoices<R: Rng + ?Sized>(rng: &mut R, count: usize) -> Result<Vec<Invoice>> {
    (0..count).map(|_| generate_invoice(rng, None, None)).collect()
}

/// Načtení faktury z JSON konfigurace; data projdou validací.
pub fn load_from_json<R: Read>(reader: R) -> Result<Invoice> {
    let invoice: Invoice = serde_json::from_reader(reader)?;
    invoice.validate()?;
    Ok(invoice)
}
