use std::collections::BTreeSet;

use crate::models::MenuOption;
use crate::planner::constants::STAPLE_INGREDIENTS;
use crate::schedule::DayContext;

/// Every ingredient worth a checkbox: whatever today's dishes call for plus
/// the pantry staples, deduplicated and sorted.
pub fn ingredient_checklist(options: &[MenuOption]) -> Vec<String> {
    let mut all: BTreeSet<String> = options
        .iter()
        .flat_map(|o| o.ingredients())
        .map(str::to_string)
        .collect();
    for staple in STAPLE_INGREDIENTS {
        all.insert((*staple).to_string());
    }
    all.into_iter().collect()
}

/// Render the static page: heading, ingredient checklist, the pre-filled
/// message and, when a plan exists, the WhatsApp link.
pub fn render_page(
    ctx: &DayContext,
    checklist: &[String],
    message: &str,
    wa_link: Option<&str>,
) -> String {
    let boxes = checklist
        .iter()
        .map(|ing| format!("<label><input type=\"checkbox\" value=\"{ing}\"/> {ing}</label>"))
        .collect::<Vec<_>>()
        .join("\n");

    let wa_anchor = match wa_link {
        Some(href) => format!("<a id=\"wa\" href=\"{href}\">Enviar por WhatsApp</a>"),
        None => String::new(),
    };

    format!(
        r#"<!doctype html>
<html lang="es">
<head>
<meta charset="utf-8"/>
<meta name="viewport" content="width=device-width,initial-scale=1"/>
<title>Menú Fit</title>
<style>
body{{font-family:system-ui;margin:0;padding:24px;background:#f6f7fb}}
.card{{max-width:820px;margin:auto;background:#fff;border-radius:16px;padding:18px;box-shadow:0 6px 20px rgba(0,0,0,.08)}}
.box{{background:#f2f3f7;border-radius:14px;padding:12px;margin-top:12px}}
.ing{{display:grid;grid-template-columns:1fr 1fr;gap:8px}}
a{{border-radius:12px;padding:12px 14px;font-size:16px;text-decoration:none;border:0;background:#22c55e;color:#fff}}
pre{{white-space:pre-wrap;background:#fff;border-radius:12px;padding:14px}}
</style>
</head>
<body>
<div class="card">
<h2>{day} {date} — Set {set}</h2>
<div class="box">
<b>Ingredientes</b>
<div class="ing">
{boxes}
</div>
</div>
<div class="box">
<pre id="msg">{message}</pre>
{anchor}
</div>
</div>
</body>
</html>
"#,
        day = ctx.day_name,
        date = ctx.display_date,
        set = ctx.set_key.as_str(),
        boxes = boxes,
        message = message,
        anchor = wa_anchor,
    )
}
