use crate::billing::{CostBreakdown, PricingTable};

/// Format a breakdown as the three labeled result lines
///
/// Two-decimal rounding happens here and only here; the breakdown itself
/// carries full-precision values.
pub fn render_breakdown(breakdown: &CostBreakdown) -> String {
    format!(
        "Log Cost: ${:.2}\nUser Cost: ${:.2}\nTotal Monthly Cost: ${:.2}",
        breakdown.log_cost, breakdown.user_cost, breakdown.total_cost
    )
}

/// Format the active rate schedule as a readable table
pub fn render_tier_table(table: &PricingTable, user_price: f64) -> String {
    let mut out = String::from("Log volume tiers (per event):\n");

    for tier in table.tiers() {
        let range = match tier.upper {
            Some(upper) => format!("{:>12} - {:<12}", tier.lower, upper),
            None => format!("{:>12} - {:<12}", tier.lower, "∞"),
        };
        let rate = if tier.rate == 0.0 {
            "free".to_string()
        } else {
            format!("${:.7}", tier.rate)
        };
        out.push_str(&format!("  {} {}\n", range, rate));
    }

    out.push_str(&format!("\nPer user: ${:.2}/month\n", user_price));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::billing::{DEFAULT_TABLE, DEFAULT_USER_PRICE};

    #[test]
    fn test_render_breakdown_two_decimals() {
        let breakdown = CostBreakdown::new(641.576, 740.0);
        let rendered = render_breakdown(&breakdown);
        assert_eq!(
            rendered,
            "Log Cost: $641.58\nUser Cost: $740.00\nTotal Monthly Cost: $1381.58"
        );
    }

    #[test]
    fn test_render_zero_breakdown() {
        let rendered = render_breakdown(&CostBreakdown::default());
        assert!(rendered.contains("Log Cost: $0.00"));
        assert!(rendered.contains("User Cost: $0.00"));
        assert!(rendered.contains("Total Monthly Cost: $0.00"));
    }

    #[test]
    fn test_render_tier_table_lists_all_tiers() {
        let rendered = render_tier_table(&DEFAULT_TABLE, DEFAULT_USER_PRICE);
        assert!(rendered.contains("free"));
        assert!(rendered.contains("∞"));
        assert!(rendered.contains("$0.0003224"));
        assert!(rendered.contains("Per user: $20.00/month"));
        // One line per tier plus header and the user price footer
        assert_eq!(rendered.lines().filter(|l| l.starts_with("  ")).count(), 6);
    }
}
