use log::Level;

pub const BRAND_NAME: &str = "LinguistPro";

pub const WHATSAPP_NUMBER: &str = "6281234567890";
pub const WHATSAPP_GREETING: &str =
    "Halo LinguistPro, saya ingin tanya tentang kursus Bahasa Inggris.";

/// Vertical offset in pixels past which the navbar switches to its solid style.
pub const SCROLL_THRESHOLD: f64 = 50.0;

/// Fraction of a section that has to be visible before its entrance animation plays.
pub const REVEAL_THRESHOLD: f64 = 0.15;
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

/// Builds a wa.me deep link, optionally pre-filling the chat with `greeting`.
pub fn whatsapp_url(greeting: Option<&str>) -> String {
    match greeting {
        Some(text) if !text.is_empty() => format!(
            "https://wa.me/{}?text={}",
            WHATSAPP_NUMBER,
            urlencoding::encode(text)
        ),
        _ => format!("https://wa.me/{}", WHATSAPP_NUMBER),
    }
}

/// Deep link with the default course enquiry greeting.
pub fn whatsapp_enquiry_url() -> String {
    whatsapp_url(Some(WHATSAPP_GREETING))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_link_has_no_query() {
        assert_eq!(whatsapp_url(None), "https://wa.me/6281234567890");
        assert_eq!(whatsapp_url(Some("")), "https://wa.me/6281234567890");
    }

    #[test]
    fn greeting_is_percent_encoded() {
        assert_eq!(
            whatsapp_enquiry_url(),
            "https://wa.me/6281234567890?text=Halo%20LinguistPro%2C%20saya%20ingin%20tanya%20tentang%20kursus%20Bahasa%20Inggris."
        );
    }

    #[test]
    fn ampersands_do_not_leak_into_the_query() {
        let url = whatsapp_url(Some("Q&A"));
        assert!(url.ends_with("?text=Q%26A"));
    }
}
