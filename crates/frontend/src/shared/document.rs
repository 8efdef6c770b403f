pub const APP_TITLE: &str = "Dashboard";

/// `<page> - Dashboard`
pub fn window_title(page: &str) -> String {
    format!("{} - {}", page, APP_TITLE)
}

/// Set the browser window title
pub fn set_title(page: &str) {
    if let Some(document) = web_sys::window().and_then(|w| w.document()) {
        document.set_title(&window_title(page));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_title() {
        assert_eq!(window_title("Create category"), "Create category - Dashboard");
    }
}
