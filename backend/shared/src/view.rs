//! Static notice shown while the storefront is closed.
use std::fmt::{self, Display, Write};

use crate::settings::Settings;

pub const HEADLINE: &str = "We'll be back soon";
pub const MESSAGE: &str =
    "The store is undergoing scheduled maintenance. Please check back in a little while.";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MaintenanceFallbackView<'a> {
    pub contact_email: Option<&'a str>,
    pub contact_phone: Option<&'a str>,
}

impl<'a> MaintenanceFallbackView<'a> {
    pub fn from_settings(settings: &'a Settings) -> Self {
        Self {
            contact_email: non_empty(settings.contact_email.as_deref()),
            contact_phone: non_empty(settings.contact_phone.as_deref()),
        }
    }

    pub fn render_html(&self) -> String {
        let mut html = String::new();
        // writing into a String never fails
        self.write_html(&mut html).map(|()| html).unwrap_or_default()
    }

    pub fn write_html(&self, out: &mut impl Write) -> fmt::Result {
        out.write_str("<!doctype html>\n<html lang=\"en\">\n<head>\n")?;
        out.write_str("<meta charset=\"utf-8\">\n<title>Maintenance</title>\n</head>\n<body>\n")?;
        out.write_str("<main class=\"maintenance\">\n")?;

        writeln!(out, "<h1>{HEADLINE}</h1>")?;
        writeln!(out, "<p>{MESSAGE}</p>")?;

        if self.contact_email.is_some() || self.contact_phone.is_some() {
            out.write_str("<ul class=\"contact\">\n")?;

            if let Some(email) = self.contact_email {
                let email = escape(email);
                writeln!(out, "<li>Email: <a href=\"mailto:{email}\">{email}</a></li>")?;
            }

            if let Some(phone) = self.contact_phone {
                let phone = escape(phone);
                writeln!(out, "<li>Phone: <a href=\"tel:{phone}\">{phone}</a></li>")?;
            }

            out.write_str("</ul>\n")?;
        }

        out.write_str("</main>\n</body>\n</html>\n")
    }
}

impl Display for MaintenanceFallbackView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{HEADLINE}")?;
        writeln!(f, "{MESSAGE}")?;

        if let Some(email) = self.contact_email {
            writeln!(f, "Email: {email}")?;
        }
        if let Some(phone) = self.contact_phone {
            writeln!(f, "Phone: {phone}")?;
        }

        Ok(())
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

fn escape(input: &str) -> String {
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_contact_lines_without_contact() {
        let view = MaintenanceFallbackView::default();
        let html = view.render_html();

        assert!(html.contains(HEADLINE));
        assert!(!html.contains("class=\"contact\""));
        assert_eq!(view.to_string(), format!("{HEADLINE}\n{MESSAGE}\n"));
    }

    #[test]
    fn test_contact_from_settings() {
        let settings = Settings {
            maintenance_mode: true,
            contact_email: Some("help@shop.test".to_string()),
            contact_phone: Some("   ".to_string()),
        };
        let view = MaintenanceFallbackView::from_settings(&settings);

        assert_eq!(view.contact_email, Some("help@shop.test"));
        assert_eq!(view.contact_phone, None);
        assert!(view.render_html().contains("mailto:help@shop.test"));
        assert!(view.to_string().contains("Email: help@shop.test"));
    }

    #[test]
    fn test_write_html_matches_render() {
        let view = MaintenanceFallbackView {
            contact_email: None,
            contact_phone: Some("555-0100"),
        };
        let mut out = String::new();

        assert!(view.write_html(&mut out).is_ok());
        assert_eq!(out, view.render_html());
        assert!(out.ends_with("</html>\n"));
        assert!(out.contains("tel:555-0100"));
    }

    #[test]
    fn test_contact_is_escaped() {
        let view = MaintenanceFallbackView {
            contact_email: Some("<script>\"x\"</script>"),
            contact_phone: None,
        };
        let html = view.render_html();

        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;&quot;x&quot;&lt;/script&gt;"));
    }
}
