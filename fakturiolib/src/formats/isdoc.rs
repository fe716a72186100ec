//! ISDOC 6.0.1 — český standard elektronické fakturace (isdoc.cz).

use quick_xml::{
    events::{BytesDecl, BytesStart, BytesText, Event},
    Writer,
};
use rust_decimal::Decimal;
use std::io::Write;

use crate::{
    error::{FakturioError, Result},
    model::{Company, Invoice},
    traits::WriteFormat,
};

const NAMESPACE: &str = "http://isdoc.cz/namespace/2013";
const VERSION: &str = "6.0.1";

/// 42 = bankovní převod (číselník ISDOC PaymentMeansCode).
const PAYMENT_MEANS_BANK_TRANSFER: &str = "42";

pub struct Isdoc;

impl WriteFormat for Isdoc {
    fn write<W: Write>(mut w: W, invoice: &Invoice) -> Result<()> {
        let mut wr = Writer::new_with_indent(&mut w, b' ', 2);

        wr.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))
            .map_err(xml)?;

        let mut root = BytesStart::new("Invoice");
        root.push_attribute(("xmlns", NAMESPACE));
        root.push_attribute(("version", VERSION));
        wr.write_event(Event::Start(root)).map_err(xml)?;

        // 1 = faktura
        text_el(&mut wr, "DocumentType", "1").map_err(xml)?;
        text_el(&mut wr, "ID", &invoice.invoice_number).map_err(xml)?;

        // deterministické UUID odvozené z čísla a data vystavení
        let uuid = format!(
            "INV-{}-{}",
            invoice.invoice_number,
            invoice.issue_date.format("%Y%m%d")
        );
        text_el(&mut wr, "UUID", &uuid).map_err(xml)?;

        text_el(
            &mut wr,
            "IssueDate",
            &invoice.issue_date.format("%Y-%m-%d").to_string(),
        )
        .map_err(xml)?;
        text_el(
            &mut wr,
            "DueDate",
            &invoice.due_date.format("%Y-%m-%d").to_string(),
        )
        .map_err(xml)?;
        text_el(&mut wr, "LocalCurrencyCode", &invoice.currency).map_err(xml)?;

        write_party(&mut wr, "AccountingSupplierParty", &invoice.supplier).map_err(xml)?;
        write_party(&mut wr, "AccountingCustomerParty", &invoice.customer).map_err(xml)?;

        write_lines(&mut wr, invoice).map_err(xml)?;
        write_tax_total(&mut wr, invoice).map_err(xml)?;

        text_el(
            &mut wr,
            "TaxExclusiveAmount",
            &amount(invoice.total_without_vat()),
        )
        .map_err(xml)?;
        text_el(
            &mut wr,
            "TaxInclusiveAmount",
            &amount(invoice.total_with_vat()),
        )
        .map_err(xml)?;
        text_el(&mut wr, "PayableAmount", &amount(invoice.total_with_vat())).map_err(xml)?;

        write_payment_means(&mut wr, invoice).map_err(xml)?;

        wr.write_event(Event::End(BytesStart::new("Invoice").to_end()))
            .map_err(xml)?;
        Ok(())
    }
}

type XmlResult = std::result::Result<(), quick_xml::Error>;

fn text_el<W: Write>(wr: &mut Writer<W>, name: &str, value: &str) -> XmlResult {
    wr.write_event(Event::Start(BytesStart::new(name)))?;
    wr.write_event(Event::Text(BytesText::new(value)))?;
    wr.write_event(Event::End(BytesStart::new(name).to_end()))?;
    Ok(())
}

fn amount(value: Decimal) -> String {
    format!("{:.2}", value.round_dp(2))
}

/// AccountingSupplierParty / AccountingCustomerParty.
fn write_party<W: Write>(wr: &mut Writer<W>, party_type: &str, company: &Company) -> XmlResult {
    wr.write_event(Event::Start(BytesStart::new(party_type)))?;
    wr.write_event(Event::Start(BytesStart::new("Party")))?;

    wr.write_event(Event::Start(BytesStart::new("PartyName")))?;
    text_el(wr, "Name", &company.name)?;
    wr.write_event(Event::End(BytesStart::new("PartyName").to_end()))?;

    wr.write_event(Event::Start(BytesStart::new("PostalAddress")))?;
    text_el(wr, "StreetName", &company.street)?;
    text_el(wr, "CityName", &company.city)?;
    text_el(wr, "PostalZone", &company.zip_code)?;
    wr.write_event(Event::Start(BytesStart::new("Country")))?;
    text_el(wr, "IdentificationCode", "CZ")?;
    text_el(wr, "Name", &company.country)?;
    wr.write_event(Event::End(BytesStart::new("Country").to_end()))?;
    wr.write_event(Event::End(BytesStart::new("PostalAddress").to_end()))?;

    wr.write_event(Event::Start(BytesStart::new("PartyIdentification")))?;
    text_el(wr, "ID", &company.ico)?;
    wr.write_event(Event::End(BytesStart::new("PartyIdentification").to_end()))?;

    wr.write_event(Event::Start(BytesStart::new("PartyTaxScheme")))?;
    text_el(wr, "CompanyID", &company.dic)?;
    wr.write_event(Event::Start(BytesStart::new("TaxScheme")))?;
    text_el(wr, "ID", "VAT")?;
    wr.write_event(Event::End(BytesStart::new("TaxScheme").to_end()))?;
    wr.write_event(Event::End(BytesStart::new("PartyTaxScheme").to_end()))?;

    wr.write_event(Event::End(BytesStart::new("Party").to_end()))?;
    wr.write_event(Event::End(BytesStart::new(party_type).to_end()))?;
    Ok(())
}

fn write_lines<W: Write>(wr: &mut Writer<W>, invoice: &Invoice) -> XmlResult {
    wr.write_event(Event::Start(BytesStart::new("InvoiceLines")))?;

    for (idx, item) in invoice.items.iter().enumerate() {
        wr.write_event(Event::Start(BytesStart::new("InvoiceLine")))?;
        text_el(wr, "ID", &(idx + 1).to_string())?;

        let mut qty = BytesStart::new("InvoicedQuantity");
        qty.push_attribute(("unitCode", item.unit.as_str()));
        wr.write_event(Event::Start(qty))?;
        wr.write_event(Event::Text(BytesText::new(&item.quantity.to_string())))?;
        wr.write_event(Event::End(BytesStart::new("InvoicedQuantity").to_end()))?;

        text_el(wr, "LineExtensionAmount", &amount(item.total_without_vat()))?;
        text_el(
            wr,
            "LineExtensionAmountTaxInclusive",
            &amount(item.total_with_vat()),
        )?;
        text_el(wr, "LineExtensionTaxAmount", &amount(item.vat_amount()))?;
        text_el(wr, "UnitPrice", &amount(item.unit_price))?;

        wr.write_event(Event::Start(BytesStart::new("ClassifiedTaxCategory")))?;
        text_el(wr, "Percent", &item.vat_rate.to_string())?;
        // 0 = standardní výpočet
        text_el(wr, "VATCalculationMethod", "0")?;
        wr.write_event(Event::End(BytesStart::new("ClassifiedTaxCategory").to_end()))?;

        wr.write_event(Event::Start(BytesStart::new("Item")))?;
        text_el(wr, "Description", &item.description)?;
        wr.write_event(Event::End(BytesStart::new("Item").to_end()))?;

        wr.write_event(Event::End(BytesStart::new("InvoiceLine").to_end()))?;
    }

    wr.write_event(Event::End(BytesStart::new("InvoiceLines").to_end()))?;
    Ok(())
}

fn write_tax_total<W: Write>(wr: &mut Writer<W>, invoice: &Invoice) -> XmlResult {
    wr.write_event(Event::Start(BytesStart::new("TaxTotal")))?;
    text_el(wr, "TaxAmount", &amount(invoice.total_vat()))?;

    for (rate, line) in invoice.vat_summary() {
        wr.write_event(Event::Start(BytesStart::new("TaxSubTotal")))?;
        text_el(wr, "TaxableAmount", &amount(line.base))?;
        text_el(wr, "TaxAmount", &amount(line.vat))?;
        text_el(wr, "TaxInclusiveAmount", &amount(line.total))?;
        wr.write_event(Event::Start(BytesStart::new("TaxCategory")))?;
        text_el(wr, "Percent", &rate.to_string())?;
        wr.write_event(Event::End(BytesStart::new("TaxCategory").to_end()))?;
        wr.write_event(Event::End(BytesStart::new("TaxSubTotal").to_end()))?;
    }

    wr.write_event(Event::End(BytesStart::new("TaxTotal").to_end()))?;
    Ok(())
}

fn write_payment_means<W: Write>(wr: &mut Writer<W>, invoice: &Invoice) -> XmlResult {
    wr.write_event(Event::Start(BytesStart::new("PaymentMeans")))?;
    text_el(wr, "PaymentMeansCode", PAYMENT_MEANS_BANK_TRANSFER)?;

    wr.write_event(Event::Start(BytesStart::new("Payment")))?;

    if let Some(acc) = &invoice.supplier.iban {
        wr.write_event(Event::Start(BytesStart::new("PaidBy")))?;
        text_el(wr, "IBAN", acc)?;
        wr.write_event(Event::End(BytesStart::new("PaidBy").to_end()))?;
    }

    wr.write_event(Event::Start(BytesStart::new("Details")))?;
    text_el(wr, "ID", &invoice.vs())?;
    wr.write_event(Event::End(BytesStart::new("Details").to_end()))?;

    wr.write_event(Event::End(BytesStart::new("Payment").to_end()))?;
    wr.write_event(Event::End(BytesStart::new("PaymentMeans").to_end()))?;
    Ok(())
}

fn xml<E: std::fmt::Display>(e: E) -> FakturioError {
    FakturioError::Xml(e.to_string())
}
