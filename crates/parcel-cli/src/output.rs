//! Output formatting module

use parcel_domain::constants::TIER_SPECS;
use parcel_domain::service::unit_normalizer::{length_for_display, weight_for_display};
use parcel_types::{FeeResult, OutputFormat, Result, UnitSystem};
use serde_json::json;

pub fn output_quote(
    output_format: OutputFormat,
    result: &FeeResult,
    unit_system: UnitSystem,
) -> Result<()> {
    if output_format == OutputFormat::Json {
        let content = serde_json::to_string_pretty(result)?;
        println!("{}", content);
    } else {
        print!("{}", render_quote(result, unit_system));
    }
    Ok(())
}

pub fn output_tiers(output_format: OutputFormat, unit_system: UnitSystem) -> Result<()> {
    if output_format == OutputFormat::Json {
        let rows: Vec<_> = TIER_SPECS
            .iter()
            .map(|spec| {
                json!({
                    "tier": spec.tier,
                    "longest": length_for_display(spec.longest, unit_system),
                    "middle": length_for_display(spec.middle, unit_system),
                    "shortest": length_for_display(spec.shortest, unit_system),
                    "weight": weight_for_display(spec.weight, unit_system),
                    "length_unit": unit_system.length_unit(),
                    "weight_unit": unit_system.weight_unit(),
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&rows)?);
    } else {
        print!("{}", render_tiers(unit_system));
    }
    Ok(())
}

fn render_quote(result: &FeeResult, unit_system: UnitSystem) -> String {
    let weight_unit = unit_system.weight_unit().symbol();
    let mut out = String::new();

    out.push_str("\nFee Estimate\n");
    out.push_str("============\n");
    out.push_str(&format!("Size tier:          {}\n", result.tier));
    out.push_str(&format!("Fee:                ${:.2}\n", result.fee));
    out.push_str(&format!(
        "Dimensional weight: {:.2} {}\n",
        weight_for_display(result.dimensional_weight, unit_system),
        weight_unit
    ));
    out.push_str(&format!(
        "Shipping weight:    {:.2} {}\n",
        weight_for_display(result.shipping_weight, unit_system),
        weight_unit
    ));

    out.push_str("\nDetails:\n");
    for note in &result.details {
        out.push_str(&format!("  - {}\n", note));
    }

    if result.savings.is_empty() {
        out.push_str("\nNo cheaper configuration available.\n");
        return out;
    }

    out.push_str("\nSaving Opportunities\n");
    out.push_str(&"-".repeat(60));
    out.push('\n');
    for opportunity in &result.savings {
        out.push_str(&format!(
            "[{}] {}: ${:.2} -> ${:.2} (save ${:.2})\n",
            opportunity.kind.label(),
            opportunity.target_tier,
            opportunity.current_fee,
            opportunity.target_fee,
            opportunity.saving_amount
        ));
        out.push_str(&format!("  Now: {}\n", opportunity.current_status));
        for check in &opportunity.requirements {
            out.push_str(&format!(
                "  {} {:<20} <= {:>8.2} {}\n",
                if check.met { "[x]" } else { "[ ]" },
                check.label,
                check.target,
                check.unit.symbol()
            ));
        }
    }
    out
}

fn render_tiers(unit_system: UnitSystem) -> String {
    let length_unit = unit_system.length_unit().symbol();
    let weight_unit = unit_system.weight_unit().symbol();
    let mut out = String::new();

    out.push_str(&format!(
        "{:<16} {:>10} {:>10} {:>10} {:>10}\n",
        "Tier", "Longest", "Middle", "Shortest", "Weight"
    ));
    out.push_str(&"-".repeat(60));
    out.push('\n');
    for spec in TIER_SPECS.iter() {
        out.push_str(&format!(
            "{:<16} {:>7.2} {} {:>7.2} {} {:>7.2} {} {:>7.2} {}\n",
            spec.tier.label(),
            length_for_display(spec.longest, unit_system),
            length_unit,
            length_for_display(spec.middle, unit_system),
            length_unit,
            length_for_display(spec.shortest, unit_system),
            length_unit,
            weight_for_display(spec.weight, unit_system),
            weight_unit
        ));
    }
    out.push_str("Oversize         anything beyond large standard\n");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use parcel_domain::calculate_fee;
    use parcel_types::Dimensions;

    #[test]
    fn test_render_quote_with_savings() {
        let result = calculate_fee(&Dimensions::metric(20.0, 15.0, 5.0, 0.5), false);
        let text = render_quote(&result, UnitSystem::Metric);
        assert!(text.contains("Size tier:          Large standard"));
        assert!(text.contains("Fee:                $4.54"));
        assert!(text.contains("Shipping weight:    0.50 kg"));
        assert!(text.contains("[Dimension] Small standard: $4.54 -> $3.22 (save $1.32)"));
        assert!(text.contains("[ ] Shortest side"));
        assert!(text.contains("[x] Longest side"));
    }

    #[test]
    fn test_render_quote_without_savings() {
        let result = calculate_fee(&Dimensions::metric(10.0, 8.0, 1.0, 0.3), false);
        let text = render_quote(&result, UnitSystem::Metric);
        assert!(text.contains("Fee:                $3.22"));
        assert!(text.contains("No cheaper configuration available."));
    }

    #[test]
    fn test_render_tiers_imperial() {
        let text = render_tiers(UnitSystem::Imperial);
        assert!(text.contains("Small standard"));
        assert!(text.contains("15.00 in"));
        assert!(text.contains("20.00 lb"));
    }

    #[test]
    fn test_render_tiers_metric() {
        let text = render_tiers(UnitSystem::Metric);
        assert!(text.contains("38.10 cm"));
        assert!(text.contains("9.07 kg"));
    }
}
