//! Console, JSON and HTML renderings of a [`ColorScale`].

use std::io::Write;
use anyhow::Result;
use color_ramp::{hex, ColorScale, RGBColor};
use serde_json::json;

/// Print the scale as a two-column table, preceded by the seed and, for
/// the symmetric scheme, its grayscale and derived anchor.
pub fn table(fh: &mut impl Write, scale: &ColorScale) -> Result<()> {
    writeln!(fh, "Original: {}", hex::encode(scale.seed()))?;
    let anchor = scale.anchor();
    match anchor.gray {
        Some(gray) => writeln!(fh, "Grayscale: {} (Closest: {})",
                               hex::encode(gray), anchor.level)?,
        None => writeln!(fh, "Anchor: {}", anchor.level)?,
    }
    writeln!(fh, "Generated Color Scale ({}):", scale.scheme())?;
    writeln!(fh, "┌───────┬─────────┐")?;
    writeln!(fh, "│ level │ color   │")?;
    writeln!(fh, "├───────┼─────────┤")?;
    for (level, hex) in scale.hex() {
        let mark = if level == anchor.level { "*" } else { " " };
        writeln!(fh, "│ {:>5} │ {hex} │{mark}", level.to_string())?;
    }
    writeln!(fh, "└───────┴─────────┘")?;
    Ok(())
}

pub fn json(fh: &mut impl Write, scale: &ColorScale) -> Result<()> {
    let value = json!({
        "seed": hex::encode(scale.seed()),
        "scheme": scale.scheme(),
        "anchor": scale.anchor(),
        "scale": scale,
    });
    serde_json::to_writer_pretty(&mut *fh, &value)?;
    writeln!(fh)?;
    Ok(())
}

/// Write a standalone HTML page with one swatch per level.  Clicking a
/// swatch copies its HEX value to the clipboard.
pub fn html(fh: &mut impl Write, scale: &ColorScale) -> Result<()> {
    let seed = hex::encode(scale.seed());
    writeln!(fh, "<!DOCTYPE html>\n\
                  <html>\n\
                  <head>\n\
                  <meta charset=\"utf-8\">\n\
                  <title>Color scale {seed}</title>\n\
                  <style>\n  \
                  body {{ font-family: sans-serif; }}\n  \
                  td.swatch {{ width: 80px; height: 60px; cursor: pointer; }}\n  \
                  td.gray {{ height: 12px; }}\n  \
                  td.label {{ text-align: center; font-size: 12px; \
                  padding: 4px 0; }}\n\
                  </style>\n\
                  </head>\n\
                  <body>")?;
    writeln!(fh, "<h3>{seed} ({}, anchor {})</h3>",
             scale.scheme(), scale.anchor().level)?;
    writeln!(fh, "<table style=\"border: 0px;  border-spacing: 0px\"><tr>")?;
    for (_, c) in scale.iter() {
        let c = hex::encode(c);
        writeln!(fh, "  <td class=\"swatch\" title=\"Copy {c}\" \
                      style=\"background-color: {c}\" \
                      onclick=\"copyHex('{c}')\"></td>")?;
    }
    writeln!(fh, "</tr><tr>")?;
    for (_, c) in scale.iter() {
        writeln!(fh, "  <td class=\"gray\" style=\"background-color: {}\"></td>",
                 hex::encode(c.to_gray()))?;
    }
    writeln!(fh, "</tr><tr>")?;
    for (level, c) in scale.hex() {
        writeln!(fh, "  <td class=\"label\">{level}<br/>{c}</td>")?;
    }
    writeln!(fh, "</tr></table>")?;
    writeln!(fh, "<p id=\"copied\"></p>\n\
                  <script>\n\
                  function copyHex(hex) {{\n  \
                  navigator.clipboard.writeText(hex).then(() => {{\n    \
                  document.getElementById(\"copied\").textContent = \
                  \"Copied \" + hex;\n  \
                  }});\n\
                  }}\n\
                  </script>\n\
                  </body>\n\
                  </html>")?;
    Ok(())
}
