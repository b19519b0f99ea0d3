use crate::models::MenuOption;
use crate::schedule::DayContext;

/// Presentation labels for the alternative slots.
const ALT_LABELS: [&str; 2] = ["B", "C"];

/// Pre-filled WhatsApp text for today's recommendation.
pub fn compose_message(ctx: &DayContext, best: &MenuOption, alternatives: &[MenuOption]) -> String {
    let mut lines = Vec::new();
    lines.push("☀️ Buen día ❤️".to_string());
    lines.push(format!("📅 {} {}", ctx.day_name, ctx.display_date));
    lines.push(String::new());
    lines.push("🍽️ Almuerzo fit (½ proteína + ½ verduras):".to_string());
    lines.push(format!("✅ Plan A: {}", best.title));
    lines.push(format!("🥩 Proteína: {}", group_list(&best.protein)));
    lines.push(format!("🥦 Verduras: {}", group_list(&best.veg)));

    if !alternatives.is_empty() {
        lines.push(String::new());
        lines.push("🔁 Alternativas:".to_string());
        for (idx, alt) in alternatives.iter().enumerate() {
            let label = ALT_LABELS.get(idx).copied().unwrap_or("C");
            lines.push(format!(
                "• Plan {}: {} (proteína: {})",
                label,
                alt.title,
                group_list(&alt.protein)
            ));
        }
    }

    lines.push(String::new());
    lines.push("Abrazo 😘".to_string());
    lines.join("\n")
}

/// Link that opens WhatsApp with the message pre-filled.
pub fn whatsapp_link(phone: &str, message: &str) -> String {
    format!("https://wa.me/{}?text={}", phone, urlencoding::encode(message))
}

fn group_list(items: &[String]) -> String {
    if items.is_empty() {
        "—".to_string()
    } else {
        items.join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn option(title: &str, protein: &[&str], veg: &[&str]) -> MenuOption {
        MenuOption {
            title: title.to_string(),
            protein: protein.iter().map(|s| s.to_string()).collect(),
            veg: veg.iter().map(|s| s.to_string()).collect(),
            extras: Vec::new(),
        }
    }

    fn monday() -> DayContext {
        DayContext::for_date(NaiveDate::from_ymd_opt(2026, 8, 3).unwrap())
    }

    #[test]
    fn test_message_lists_plans_in_order() {
        let best = option("Pollo salad", &["pollo"], &["lechuga", "tomate"]);
        let alts = vec![
            option("Merluza", &["merluza"], &["zanahoria"]),
            option("Huevos", &["huevo"], &["tomate"]),
        ];

        let msg = compose_message(&monday(), &best, &alts);

        assert!(msg.contains("📅 LUNES 03/08/2026"));
        assert!(msg.contains("✅ Plan A: Pollo salad"));
        assert!(msg.contains("🥩 Proteína: pollo"));
        assert!(msg.contains("🥦 Verduras: lechuga, tomate"));
        assert!(msg.contains("• Plan B: Merluza (proteína: merluza)"));
        assert!(msg.contains("• Plan C: Huevos (proteína: huevo)"));
        assert!(msg.ends_with("Abrazo 😘"));
    }

    #[test]
    fn test_message_without_alternatives_skips_the_block() {
        let best = option("Guiso", &["lenteja"], &[]);
        let msg = compose_message(&monday(), &best, &[]);

        assert!(!msg.contains("Alternativas"));
        assert!(msg.contains("🥦 Verduras: —"));
    }

    #[test]
    fn test_whatsapp_link_encodes_text() {
        let link = whatsapp_link("5491100000000", "Plan A: Pollo salad");

        assert!(link.starts_with("https://wa.me/5491100000000?text="));
        assert!(link.contains("Plan%20A%3A%20Pollo%20salad"));
    }
}
