use crate::analysis::EchoedParams;
use crate::constants::{FIELD_COLUMN, FIELD_FILE, FIELD_REF_MEAN, FIELD_REF_STD_DEV};

const STYLE: &str = r#"
body { font-family: 'Segoe UI', Tahoma, Geneva, Verdana, sans-serif; background-color: #e9eff1; color: #333; margin: 0; padding: 20px; display: flex; flex-direction: column; align-items: center; }
.main-container { background-color: #fff; padding: 30px; border-radius: 12px; box-shadow: 0 6px 12px rgba(0, 0, 0, 0.15); width: 90%; max-width: 900px; box-sizing: border-box; }
h1, h2 { color: #2c3e50; text-align: center; font-weight: 600; }
.form-section { display: grid; grid-template-columns: 1fr; gap: 20px; margin-bottom: 30px; }
.form-group { display: flex; flex-direction: column; }
label { font-weight: bold; margin-bottom: 8px; color: #555; }
input[type="file"], input[type="text"] { padding: 12px; border: 1px solid #dcdcdc; border-radius: 8px; font-size: 1em; width: 100%; box-sizing: border-box; }
.submit-btn { background-color: #007bff; color: #fff; padding: 12px 25px; border: none; border-radius: 8px; font-size: 1.1em; cursor: pointer; align-self: center; }
.plot-display { text-align: center; margin-top: 30px; background-color: #f8f9fa; padding: 20px; border-radius: 10px; }
.plot-display img { max-width: 100%; height: auto; }
.message-container { margin: 20px 0; padding: 15px; border-radius: 8px; text-align: center; }
.message-container.error { background-color: #ffe0e0; color: #cc0000; border: 1px solid #ff9999; }
.message-container.info { background-color: #e0f0ff; color: #0066cc; border: 1px solid #99ccff; }
@media (min-width: 768px) { .form-section { grid-template-columns: 1fr 1fr; } .submit-btn { grid-column: span 2; } }
"#;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageCategory {
    Info,
    Error,
}

impl MessageCategory {
    fn css_class(self) -> &'static str {
        match self {
            MessageCategory::Info => "info",
            MessageCategory::Error => "error",
        }
    }
}

/// What one render of the form page shows.
#[derive(Debug, Clone, Default)]
pub struct PageView {
    pub plot_url: Option<String>,
    pub messages: Vec<(MessageCategory, String)>,
    pub params: EchoedParams,
}

impl PageView {
    pub fn with_error(message: String, params: EchoedParams) -> Self {
        Self {
            plot_url: None,
            messages: vec![(MessageCategory::Error, message)],
            params,
        }
    }

    pub fn with_plot(plot_url: String, params: EchoedParams) -> Self {
        Self {
            plot_url: Some(plot_url),
            messages: Vec::new(),
            params,
        }
    }

    pub fn render(&self) -> String {
        let messages: String = self
            .messages
            .iter()
            .map(|(category, text)| {
                format!(
                    r#"<div class="message-container {}">{}</div>"#,
                    category.css_class(),
                    escape_html(text)
                )
            })
            .collect();

        let plot = self
            .plot_url
            .as_deref()
            .map(|url| {
                format!(
                    r#"<div class="plot-display"><img src="{}" alt="Normal curve comparison chart"></div>"#,
                    escape_html(url)
                )
            })
            .unwrap_or_default();

        format!(
            r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="UTF-8">
<meta name="viewport" content="width=device-width, initial-scale=1.0">
<title>Normal Curve Analysis and Comparison</title>
<style>{style}</style>
</head>
<body>
<div class="main-container">
<h1>Normal Curve Analysis and Comparison</h1>
<div class="message-container info">Upload an Excel file (.xlsx, .xls) with your data. Enter the name of the numeric column to analyze and the parameters of a reference curve.</div>
{messages}
<form action="/" method="post" enctype="multipart/form-data">
<div class="form-section">
<div class="form-group"><label for="{file}">Excel file:</label><input type="file" name="{file}" id="{file}" accept=".xlsx, .xls" required></div>
<div class="form-group"><label for="{column}">Column to analyze:</label><input type="text" name="{column}" id="{column}" placeholder="e.g. 'Value', 'Age'" required></div>
</div>
<h2>Reference curve parameters</h2>
<div class="form-section">
<div class="form-group"><label for="{mean}">Mean (μ):</label><input type="text" name="{mean}" id="{mean}" placeholder="e.g. 0" value="{mean_value}" required></div>
<div class="form-group"><label for="{std}">Standard deviation (σ):</label><input type="text" name="{std}" id="{std}" placeholder="e.g. 1" value="{std_value}" required></div>
<button type="submit" class="submit-btn">Generate curves</button>
</div>
</form>
{plot}
</div>
</body>
</html>
"#,
            style = STYLE,
            messages = messages,
            file = FIELD_FILE,
            column = FIELD_COLUMN,
            mean = FIELD_REF_MEAN,
            std = FIELD_REF_STD_DEV,
            mean_value = escape_html(&self.params.ref_mean),
            std_value = escape_html(&self.params.ref_std_dev),
            plot = plot,
        )
    }
}

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
