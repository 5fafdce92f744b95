//! HTML views
//!
//! Server-rendered pages built with plain string formatting. Every value that
//! originates from user input or storage goes through `escape`.

pub mod pages;

pub use pages::{dashboard_page, donate_page, donations_page, donors_page, use_page, DonorFilters};

/// Flash message severity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlashLevel {
    Success,
    Danger,
}

impl FlashLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            FlashLevel::Success => "success",
            FlashLevel::Danger => "danger",
        }
    }
}

impl std::str::FromStr for FlashLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "success" => Ok(FlashLevel::Success),
            "danger" => Ok(FlashLevel::Danger),
            _ => Err(format!("Unknown flash level: {}", s)),
        }
    }
}

/// One-shot message shown at the top of a page after a redirect
#[derive(Debug, Clone, PartialEq)]
pub struct Flash {
    pub level: FlashLevel,
    pub message: String,
}

impl Flash {
    /// Build from redirect query parameters; unknown levels render as danger
    pub fn from_query(message: Option<&str>, level: Option<&str>) -> Option<Self> {
        let message = message.filter(|m| !m.is_empty())?;
        Some(Self {
            level: level
                .and_then(|l| l.parse().ok())
                .unwrap_or(FlashLevel::Danger),
            message: message.to_string(),
        })
    }

    /// Query string that carries this flash through a redirect
    pub fn to_query(&self) -> String {
        format!(
            "flash={}&level={}",
            urlencoding::encode(&self.message),
            self.level.as_str()
        )
    }
}

/// Escape text for inclusion in HTML content or attribute values
pub fn escape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Wrap page content in the shared layout
fn layout(title: &str, flash: Option<&Flash>, body: &str) -> String {
    let mut buf = String::new();

    buf.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n");
    buf.push_str(&format!("<title>{} - Blood Bank</title>\n", escape(title)));
    buf.push_str("</head>\n<body>\n<nav>\n");
    buf.push_str("<a href=\"/\">Dashboard</a> | <a href=\"/donors\">Donors</a> | ");
    buf.push_str("<a href=\"/donate\">Donate</a> | <a href=\"/donations\">Donations</a> | ");
    buf.push_str("<a href=\"/use\">Issue</a> | <a href=\"/export/donors.csv\">Export CSV</a> | ");
    buf.push_str("<a href=\"/report/pdf\">PDF Report</a>\n</nav>\n");

    if let Some(flash) = flash {
        buf.push_str(&format!(
            "<div class=\"flash {}\">{}</div>\n",
            flash.level.as_str(),
            escape(&flash.message)
        ));
    }

    buf.push_str(&format!("<h1>{}</h1>\n", escape(title)));
    buf.push_str(body);
    buf.push_str("</body>\n</html>\n");

    buf
}
