//! GST invoice walkthrough

use robobooks_core::{
    resolve_mode, CompanyProfile, DiscountMode, Document, DocumentEditor, GstSlab, LineItem,
    TaxBreakdown, TaxConfig, TaxMode, WithholdingKind,
};
use bigdecimal::BigDecimal;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("🧾 RoboBooks - GST Invoice Walkthrough\n");

    // 1. Standard slabs
    println!("📊 Standard GST Slabs:");
    for slab in GstSlab::ALL {
        println!("  {:?}: {}%", slab, slab.rate());
    }
    println!();

    // 2. Place of supply
    let company = CompanyProfile::new("RoboBooks Pvt Ltd".to_string(), "29-Karnataka".to_string());
    for place in ["Karnataka", "Maharashtra", ""] {
        let resolution = resolve_mode(&company.state_label, place);
        println!(
            "🏢 Place of supply {:>12}: {:?}",
            if place.is_empty() { "(unset)" } else { place },
            resolution.mode
        );
    }
    println!();

    // 3. Reverse calculation
    let (base, breakdown) =
        TaxBreakdown::reverse(&BigDecimal::from(11800), TaxMode::Domestic, &BigDecimal::from(18));
    println!("🔄 ₹11800 inclusive of 18% GST:");
    println!("  Base: ₹{}  CGST: ₹{}  SGST: ₹{}", base, breakdown.cgst, breakdown.sgst);
    println!();

    // 4. A full invoice
    let config = TaxConfig::default();
    let mut editor = DocumentEditor::new(
        Document::invoice("Acme Traders".to_string()),
        company,
        config.clone(),
    );

    editor.add_line(LineItem::new(
        "Accounting software licence".to_string(),
        BigDecimal::from(2),
        BigDecimal::from(300),
        TaxMode::Domestic,
        None,
    ));
    editor.add_line(LineItem::new(
        "Printed manuals".to_string(),
        BigDecimal::from(4),
        BigDecimal::from(100),
        TaxMode::Domestic,
        Some(GstSlab::Standard.rate()),
    ));
    editor.add_line(LineItem::new(
        "Export consulting".to_string(),
        BigDecimal::from(1),
        BigDecimal::from(500),
        TaxMode::ZeroRated,
        None,
    ));

    editor.set_discount("10", DiscountMode::Percentage);
    editor.set_place_of_supply(Some("Maharashtra".to_string()));
    editor.set_withholding(Some((WithholdingKind::Tds, "2")));
    editor.set_manual_adjustment("-0.40");

    println!("🧾 Invoice for {}:", editor.document().customer_name);
    for item in &editor.document().line_items {
        println!(
            "  {:<30} ₹{:>10}  taxable ₹{:>10}  IGST ₹{}",
            item.description,
            item.amount,
            item.taxable_amount.with_scale(2),
            item.igst.with_scale(2)
        );
    }

    let totals = editor.totals().rounded(config.currency_scale);
    println!();
    println!("  Subtotal:    ₹{}", totals.subtotal);
    println!("  Discount:    ₹{}", totals.discount_amount);
    println!("  IGST:        ₹{}", totals.total_igst);
    println!("  TDS:         ₹{}", totals.withholding_amount);
    println!("  Adjustment:  ₹{}", totals.manual_adjustment);
    println!("  Grand Total: ₹{}", totals.grand_total);

    Ok(())
}
