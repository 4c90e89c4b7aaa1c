//! Server-side rendering of the classification form.

use breakpoint::{Classification, RuleTable};

/// Everything needed to render the form page once.
pub struct FormPage<'a> {
    pub table: &'a RuleTable,
    /// Pre-serialized organism → antibiotics JSON for the dropdown script.
    pub antibiotic_index: &'a str,
    pub organism: Option<&'a str>,
    pub antibiotic: Option<&'a str>,
    pub mic: Option<&'a str>,
    pub result: Option<&'a Classification>,
}

impl<'a> FormPage<'a> {
    /// Empty form, as served on first visit.
    pub fn blank(table: &'a RuleTable, antibiotic_index: &'a str) -> Self {
        Self {
            table,
            antibiotic_index,
            organism: None,
            antibiotic: None,
            mic: None,
            result: None,
        }
    }

    /// Render the full HTML document.
    pub fn render(&self) -> String {
        let mut html = String::with_capacity(4096);

        html.push_str(
            r#"<!doctype html>
<html lang="en">
<head>
  <meta charset="UTF-8">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <title>MIC Categorizer</title>
  <link rel="stylesheet" href="/style.css">
</head>
<body>
  <div class="container">
    <h2>MIC Classifier</h2>
    <form method="POST" action="/">
      <label for="organism">Select Organism:</label>
      <select name="organism" id="organism" required>
        <option value="">-- Choose Organism --</option>
"#,
        );

        for organism in self.table.organisms() {
            html.push_str(&option(organism, self.organism == Some(organism)));
        }

        html.push_str(
            r#"      </select>

      <label for="antibiotic">Select Antibiotic:</label>
      <select name="antibiotic" id="antibiotic" required>
"#,
        );

        if let Some(organism) = self.organism {
            for antibiotic in self.table.antibiotics(organism) {
                html.push_str(&option(antibiotic, self.antibiotic == Some(antibiotic)));
            }
        }

        html.push_str(&format!(
            r#"      </select>

      <label for="mic">Enter MIC Value:</label>
      <input type="text" name="mic" id="mic" value="{}" required>

      <input type="submit" value="Categorize">
    </form>
"#,
            escape_html(self.mic.unwrap_or(""))
        ));

        if let Some(result) = self.result {
            html.push_str(&format!(
                "\n    <div class=\"result {}\">\n      Result: {}\n    </div>\n",
                result_class(result),
                escape_html(result.as_str())
            ));
        }

        html.push_str(&format!(
            r#"  </div>
  <script id="antibiotic-index" type="application/json">{}</script>
  <script src="/antibiotics.js"></script>
</body>
</html>
"#,
            escape_script_json(self.antibiotic_index)
        ));

        html
    }
}

/// CSS class for the result banner.
///
/// Only the three standard category names get a color; every other category
/// and both sentinels share the neutral style.
pub fn result_class(result: &Classification) -> &'static str {
    match result.category() {
        Some("Susceptible") => "susceptible",
        Some("Intermediate") => "intermediate",
        Some("Resistant") => "resistant",
        _ => "undefined",
    }
}

fn option(value: &str, selected: bool) -> String {
    let value = escape_html(value);
    format!(
        "        <option value=\"{}\"{}>{}</option>\n",
        value,
        if selected { " selected" } else { "" },
        value
    )
}

/// Escape text for HTML element content and quoted attribute values.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#x27;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Make JSON safe to inline in a `<script>` element.
///
/// `<` only appears inside JSON strings, where the `\u003c` escape decodes
/// to the same character, so `</script>` can never close the element early.
fn escape_script_json(json: &str) -> String {
    json.replace('<', "\\u003c")
}
